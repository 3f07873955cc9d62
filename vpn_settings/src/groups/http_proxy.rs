//! Settings for the built-in HTTP proxy.

use std::time::Duration;

use serde::Deserialize;

use crate::group::helpers::{
    check_listening_address, check_positive, default_option, merge_option, millis, override_option,
};
use crate::group::{SettingGroup, Validate, ValidationContext};
use crate::render::{obfuscate, yes_no};
use crate::{GroupError, Node};

/// HTTP proxy settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpProxy {
    /// Whether the proxy runs.
    pub enabled: Option<bool>,
    /// Username clients authenticate with.
    pub user: Option<String>,
    /// Password clients authenticate with.
    pub password: Option<String>,
    /// Address the proxy listens on.
    pub listening_address: Option<String>,
    /// Whether proxy headers are stripped from forwarded requests.
    pub stealth: Option<bool>,
    /// Whether each request is logged.
    pub log: Option<bool>,
    /// Time allowed to read request headers.
    #[serde(deserialize_with = "millis::deserialize")]
    pub read_header_timeout: Option<Duration>,
    /// Time allowed to read a whole request.
    #[serde(deserialize_with = "millis::deserialize")]
    pub read_timeout: Option<Duration>,
}

impl Validate for HttpProxy {
    fn validate(&self, _ctx: &ValidationContext<'_>) -> Result<(), GroupError> {
        if let Some(address) = self.listening_address.as_deref() {
            check_listening_address("listening address", address)?;
        }
        if let Some(timeout) = self.read_header_timeout {
            check_positive("read header timeout", timeout)?;
        }
        if let Some(timeout) = self.read_timeout {
            check_positive("read timeout", timeout)?;
        }
        Ok(())
    }
}

impl SettingGroup for HttpProxy {
    const NAME: &'static str = "http proxy";

    fn merge_with(&mut self, other: Self) {
        merge_option(&mut self.enabled, other.enabled);
        merge_option(&mut self.user, other.user);
        merge_option(&mut self.password, other.password);
        merge_option(&mut self.listening_address, other.listening_address);
        merge_option(&mut self.stealth, other.stealth);
        merge_option(&mut self.log, other.log);
        merge_option(&mut self.read_header_timeout, other.read_header_timeout);
        merge_option(&mut self.read_timeout, other.read_timeout);
    }

    fn override_with(&mut self, other: Self) {
        override_option(&mut self.enabled, other.enabled);
        override_option(&mut self.user, other.user);
        override_option(&mut self.password, other.password);
        override_option(&mut self.listening_address, other.listening_address);
        override_option(&mut self.stealth, other.stealth);
        override_option(&mut self.log, other.log);
        override_option(&mut self.read_header_timeout, other.read_header_timeout);
        override_option(&mut self.read_timeout, other.read_timeout);
    }

    fn set_defaults(&mut self) {
        default_option(&mut self.enabled, false);
        default_option(&mut self.user, String::new());
        default_option(&mut self.password, String::new());
        default_option(&mut self.listening_address, String::from(":8888"));
        default_option(&mut self.stealth, false);
        default_option(&mut self.log, false);
        default_option(&mut self.read_header_timeout, Duration::from_secs(1));
        default_option(&mut self.read_timeout, Duration::from_secs(3));
    }

    fn to_node(&self) -> Node {
        let mut node = Node::new("HTTP proxy settings:");
        if !self.enabled.unwrap_or_default() {
            node.line("Enabled: no");
            return node;
        }
        node.line(format!(
            "Listening address: {}",
            self.listening_address.as_deref().unwrap_or_default()
        ))
        .line(format!("User: {}", self.user.as_deref().unwrap_or_default()))
        .line(format!("Password: {}", obfuscate(self.password.as_deref())))
        .line(format!(
            "Stealth mode: {}",
            yes_no(self.stealth.unwrap_or_default())
        ))
        .line(format!("Log: {}", yes_no(self.log.unwrap_or_default())))
        .line(format!(
            "Read header timeout: {:?}",
            self.read_header_timeout.unwrap_or_default()
        ))
        .line(format!(
            "Read timeout: {:?}",
            self.read_timeout.unwrap_or_default()
        ));
        node
    }
}
