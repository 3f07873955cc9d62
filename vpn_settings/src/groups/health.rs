//! Settings for the health check server and VPN restart policy.

use std::time::Duration;

use serde::Deserialize;

use crate::group::helpers::{
    check_dial_address, check_listening_address, check_positive, default_option, merge_option,
    millis, override_option,
};
use crate::group::{SettingGroup, Validate, ValidationContext};
use crate::{GroupError, Node};

/// Health check settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Health {
    /// Address the health server listens on.
    pub server_address: Option<String>,
    /// Address dialled through the tunnel to check connectivity.
    pub target_address: Option<String>,
    /// Time allowed to read request headers.
    #[serde(deserialize_with = "millis::deserialize")]
    pub read_header_timeout: Option<Duration>,
    /// Time allowed to read a whole request.
    #[serde(deserialize_with = "millis::deserialize")]
    pub read_timeout: Option<Duration>,
    /// Restart policy applied when the tunnel is unhealthy.
    pub vpn: HealthyWait,
}

/// Waits applied before declaring the tunnel unhealthy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HealthyWait {
    /// Initial wait after the tunnel comes up.
    #[serde(deserialize_with = "millis::deserialize")]
    pub initial: Option<Duration>,
    /// Extra wait added after each failed check.
    #[serde(deserialize_with = "millis::deserialize")]
    pub addition: Option<Duration>,
}

impl HealthyWait {
    fn merge_with(&mut self, other: Self) {
        merge_option(&mut self.initial, other.initial);
        merge_option(&mut self.addition, other.addition);
    }

    fn override_with(&mut self, other: Self) {
        override_option(&mut self.initial, other.initial);
        override_option(&mut self.addition, other.addition);
    }

    fn validate(&self) -> Result<(), GroupError> {
        if let Some(initial) = self.initial {
            check_positive("VPN initial wait", initial)?;
        }
        if let Some(addition) = self.addition {
            check_positive("VPN addition wait", addition)?;
        }
        Ok(())
    }
}

impl Validate for Health {
    fn validate(&self, _ctx: &ValidationContext<'_>) -> Result<(), GroupError> {
        if let Some(address) = self.server_address.as_deref() {
            check_listening_address("server listening address", address)?;
        }
        if let Some(address) = self.target_address.as_deref() {
            check_dial_address("target address", address)?;
        }
        if let Some(timeout) = self.read_header_timeout {
            check_positive("read header timeout", timeout)?;
        }
        if let Some(timeout) = self.read_timeout {
            check_positive("read timeout", timeout)?;
        }
        self.vpn.validate()
    }
}

impl SettingGroup for Health {
    const NAME: &'static str = "health";

    fn merge_with(&mut self, other: Self) {
        merge_option(&mut self.server_address, other.server_address);
        merge_option(&mut self.target_address, other.target_address);
        merge_option(&mut self.read_header_timeout, other.read_header_timeout);
        merge_option(&mut self.read_timeout, other.read_timeout);
        self.vpn.merge_with(other.vpn);
    }

    fn override_with(&mut self, other: Self) {
        override_option(&mut self.server_address, other.server_address);
        override_option(&mut self.target_address, other.target_address);
        override_option(&mut self.read_header_timeout, other.read_header_timeout);
        override_option(&mut self.read_timeout, other.read_timeout);
        self.vpn.override_with(other.vpn);
    }

    fn set_defaults(&mut self) {
        default_option(&mut self.server_address, String::from("127.0.0.1:9999"));
        default_option(&mut self.target_address, String::from("cloudflare.com:443"));
        default_option(&mut self.read_header_timeout, Duration::from_millis(100));
        default_option(&mut self.read_timeout, Duration::from_millis(500));
        default_option(&mut self.vpn.initial, Duration::from_secs(6));
        default_option(&mut self.vpn.addition, Duration::from_secs(5));
    }

    fn to_node(&self) -> Node {
        let mut node = Node::new("Health settings:");
        node.line(format!(
            "Server listening address: {}",
            self.server_address.as_deref().unwrap_or_default()
        ))
        .line(format!(
            "Target address: {}",
            self.target_address.as_deref().unwrap_or_default()
        ))
        .line(format!(
            "Read header timeout: {:?}",
            self.read_header_timeout.unwrap_or_default()
        ))
        .line(format!(
            "Read timeout: {:?}",
            self.read_timeout.unwrap_or_default()
        ));
        node.child("VPN wait durations:", |vpn| {
            vpn.line(format!(
                "Initial duration: {:?}",
                self.vpn.initial.unwrap_or_default()
            ))
            .line(format!(
                "Additional duration: {:?}",
                self.vpn.addition.unwrap_or_default()
            ));
        });
        node
    }
}
