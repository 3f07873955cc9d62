//! Settings for the HTTP control server.

use serde::Deserialize;

use crate::group::helpers::{check_listening_address, default_option, merge_option, override_option};
use crate::group::{SettingGroup, Validate, ValidationContext};
use crate::render::yes_no;
use crate::{GroupError, Node};

/// HTTP control server settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControlServer {
    /// Address the server listens on, for example `:8000`.
    pub address: Option<String>,
    /// Whether each request is logged.
    pub log: Option<bool>,
}

impl Validate for ControlServer {
    fn validate(&self, _ctx: &ValidationContext<'_>) -> Result<(), GroupError> {
        self.address
            .as_deref()
            .map_or(Ok(()), |address| check_listening_address("listening address", address))
    }
}

impl SettingGroup for ControlServer {
    const NAME: &'static str = "control server";

    fn merge_with(&mut self, other: Self) {
        merge_option(&mut self.address, other.address);
        merge_option(&mut self.log, other.log);
    }

    fn override_with(&mut self, other: Self) {
        override_option(&mut self.address, other.address);
        override_option(&mut self.log, other.log);
    }

    fn set_defaults(&mut self) {
        default_option(&mut self.address, String::from(":8000"));
        default_option(&mut self.log, true);
    }

    fn to_node(&self) -> Node {
        let mut node = Node::new("Control server settings:");
        node.line(format!(
            "Listening address: {}",
            self.address.as_deref().unwrap_or_default()
        ))
        .line(format!("Logging: {}", yes_no(self.log.unwrap_or_default())));
        node
    }
}
