//! Settings for the profiling HTTP server.

use serde::Deserialize;

use crate::group::helpers::{check_listening_address, default_option, merge_option, override_option};
use crate::group::{SettingGroup, Validate, ValidationContext};
use crate::{GroupError, Node};

/// Profiling server settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Pprof {
    /// Whether the profiling server runs.
    pub enabled: Option<bool>,
    /// Block profile sampling rate; zero disables block profiling.
    pub block_profile_rate: Option<u32>,
    /// Mutex profile sampling rate; zero disables mutex profiling.
    pub mutex_profile_rate: Option<u32>,
    /// Address the profiling server listens on.
    pub address: Option<String>,
}

impl Validate for Pprof {
    fn validate(&self, _ctx: &ValidationContext<'_>) -> Result<(), GroupError> {
        if !self.enabled.unwrap_or_default() {
            return Ok(());
        }
        let Some(address) = self.address.as_deref() else {
            return Err(GroupError::Missing {
                field: "server address",
            });
        };
        check_listening_address("server address", address)
    }
}

impl SettingGroup for Pprof {
    const NAME: &'static str = "pprof";

    fn merge_with(&mut self, other: Self) {
        merge_option(&mut self.enabled, other.enabled);
        merge_option(&mut self.block_profile_rate, other.block_profile_rate);
        merge_option(&mut self.mutex_profile_rate, other.mutex_profile_rate);
        merge_option(&mut self.address, other.address);
    }

    fn override_with(&mut self, other: Self) {
        override_option(&mut self.enabled, other.enabled);
        override_option(&mut self.block_profile_rate, other.block_profile_rate);
        override_option(&mut self.mutex_profile_rate, other.mutex_profile_rate);
        override_option(&mut self.address, other.address);
    }

    fn set_defaults(&mut self) {
        default_option(&mut self.enabled, false);
        default_option(&mut self.block_profile_rate, 0);
        default_option(&mut self.mutex_profile_rate, 0);
        default_option(&mut self.address, String::from("localhost:6060"));
    }

    fn to_node(&self) -> Node {
        let mut node = Node::new("Pprof settings:");
        if !self.enabled.unwrap_or_default() {
            node.line("Enabled: no");
            return node;
        }
        node.line(format!(
            "Block profile rate: {}",
            self.block_profile_rate.unwrap_or_default()
        ))
        .line(format!(
            "Mutex profile rate: {}",
            self.mutex_profile_rate.unwrap_or_default()
        ))
        .line(format!(
            "HTTP server address: {}",
            self.address.as_deref().unwrap_or_default()
        ));
        node
    }
}
