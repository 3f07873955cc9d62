//! Settings for the release check.

use serde::Deserialize;

use crate::group::helpers::{default_option, merge_option, override_option};
use crate::group::{SettingGroup, Validate, ValidationContext};
use crate::render::yes_no;
use crate::{GroupError, Node};

/// Version check settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Version {
    /// Whether newer releases are looked up at start.
    pub enabled: Option<bool>,
}

impl Validate for Version {
    fn validate(&self, _ctx: &ValidationContext<'_>) -> Result<(), GroupError> {
        Ok(())
    }
}

impl SettingGroup for Version {
    const NAME: &'static str = "version";

    fn merge_with(&mut self, other: Self) {
        merge_option(&mut self.enabled, other.enabled);
    }

    fn override_with(&mut self, other: Self) {
        override_option(&mut self.enabled, other.enabled);
    }

    fn set_defaults(&mut self) {
        default_option(&mut self.enabled, true);
    }

    fn to_node(&self) -> Node {
        let mut node = Node::new("Version settings:");
        node.line(format!(
            "Enabled: {}",
            yes_no(self.enabled.unwrap_or_default())
        ));
        node
    }
}
