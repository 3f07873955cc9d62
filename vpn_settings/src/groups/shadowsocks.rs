//! Settings for the Shadowsocks server.

use serde::Deserialize;

use crate::constants::SHADOWSOCKS_CIPHERS;
use crate::group::helpers::{
    check_listening_address, check_one_of, default_option, merge_option, override_option,
};
use crate::group::{SettingGroup, Validate, ValidationContext};
use crate::render::{obfuscate, yes_no};
use crate::{GroupError, Node};

/// Shadowsocks server settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Shadowsocks {
    /// Whether the server runs.
    pub enabled: Option<bool>,
    /// Address the server listens on, TCP and UDP.
    pub address: Option<String>,
    /// AEAD cipher name.
    pub cipher: Option<String>,
    /// Shared password.
    pub password: Option<String>,
    /// Whether each connection is logged.
    pub log: Option<bool>,
}

impl Validate for Shadowsocks {
    fn validate(&self, _ctx: &ValidationContext<'_>) -> Result<(), GroupError> {
        if !self.enabled.unwrap_or_default() {
            return Ok(());
        }
        if let Some(address) = self.address.as_deref() {
            check_listening_address("listening address", address)?;
        }
        if let Some(cipher) = self.cipher.as_deref() {
            check_one_of("cipher", cipher, SHADOWSOCKS_CIPHERS)?;
        }
        if self.password.as_deref().is_none_or(str::is_empty) {
            return Err(GroupError::Missing { field: "password" });
        }
        Ok(())
    }
}

impl SettingGroup for Shadowsocks {
    const NAME: &'static str = "shadowsocks";

    fn merge_with(&mut self, other: Self) {
        merge_option(&mut self.enabled, other.enabled);
        merge_option(&mut self.address, other.address);
        merge_option(&mut self.cipher, other.cipher);
        merge_option(&mut self.password, other.password);
        merge_option(&mut self.log, other.log);
    }

    fn override_with(&mut self, other: Self) {
        override_option(&mut self.enabled, other.enabled);
        override_option(&mut self.address, other.address);
        override_option(&mut self.cipher, other.cipher);
        override_option(&mut self.password, other.password);
        override_option(&mut self.log, other.log);
    }

    fn set_defaults(&mut self) {
        default_option(&mut self.enabled, false);
        default_option(&mut self.address, String::from(":8388"));
        default_option(&mut self.cipher, String::from("chacha20-ietf-poly1305"));
        default_option(&mut self.log, false);
    }

    fn to_node(&self) -> Node {
        let mut node = Node::new("Shadowsocks server settings:");
        if !self.enabled.unwrap_or_default() {
            node.line("Enabled: no");
            return node;
        }
        node.line(format!(
            "Listening address: {}",
            self.address.as_deref().unwrap_or_default()
        ))
        .line(format!("Cipher: {}", self.cipher.as_deref().unwrap_or_default()))
        .line(format!("Password: {}", obfuscate(self.password.as_deref())))
        .line(format!("Log: {}", yes_no(self.log.unwrap_or_default())));
        node
    }
}
