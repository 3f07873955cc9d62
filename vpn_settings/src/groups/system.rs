//! Settings for process identity and locale.

use serde::Deserialize;

use crate::group::helpers::{default_option, merge_option, override_option};
use crate::group::{SettingGroup, Validate, ValidationContext};
use crate::{GroupError, Node};

/// System settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct System {
    /// User ID files are written as.
    pub puid: Option<u32>,
    /// Group ID files are written as.
    pub pgid: Option<u32>,
    /// IANA timezone name; empty keeps the host's.
    pub timezone: Option<String>,
}

impl Validate for System {
    fn validate(&self, _ctx: &ValidationContext<'_>) -> Result<(), GroupError> {
        match self.timezone.as_deref() {
            Some(timezone) if timezone.chars().any(char::is_whitespace) => {
                Err(GroupError::Invalid {
                    field: "timezone",
                    value: timezone.to_owned(),
                    reason: String::from("cannot contain whitespace"),
                })
            }
            _ => Ok(()),
        }
    }
}

impl SettingGroup for System {
    const NAME: &'static str = "system";

    fn merge_with(&mut self, other: Self) {
        merge_option(&mut self.puid, other.puid);
        merge_option(&mut self.pgid, other.pgid);
        merge_option(&mut self.timezone, other.timezone);
    }

    fn override_with(&mut self, other: Self) {
        override_option(&mut self.puid, other.puid);
        override_option(&mut self.pgid, other.pgid);
        override_option(&mut self.timezone, other.timezone);
    }

    fn set_defaults(&mut self) {
        default_option(&mut self.puid, 1000);
        default_option(&mut self.pgid, 1000);
        default_option(&mut self.timezone, String::new());
    }

    fn to_node(&self) -> Node {
        let mut node = Node::new("System settings:");
        node.line(format!("Process UID: {}", self.puid.unwrap_or_default()))
            .line(format!("Process GID: {}", self.pgid.unwrap_or_default()));
        if let Some(timezone) = self.timezone.as_deref().filter(|tz| !tz.is_empty()) {
            node.line(format!("Timezone: {timezone}"));
        }
        node
    }
}
