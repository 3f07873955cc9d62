//! OpenVPN client settings.

use serde::Deserialize;

use crate::constants::openvpn;
use crate::group::helpers::{check_one_of, default_option, merge_option, override_option};
use crate::render::obfuscate;
use crate::{GroupError, Node};

/// OpenVPN settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpenVpn {
    /// Client version, `2.4` or `2.5`.
    pub version: Option<String>,
    /// Account username.
    pub user: Option<String>,
    /// Account password.
    pub password: Option<String>,
    /// Transport protocol, `udp` or `tcp`.
    pub protocol: Option<String>,
}

impl OpenVpn {
    pub(crate) fn validate(&self) -> Result<(), GroupError> {
        if let Some(version) = self.version.as_deref() {
            check_one_of("OpenVPN version", version, openvpn::VERSIONS)?;
        }
        if self.user.as_deref().is_none_or(str::is_empty) {
            return Err(GroupError::Missing {
                field: "OpenVPN user",
            });
        }
        if let Some(protocol) = self.protocol.as_deref() {
            check_one_of("OpenVPN protocol", protocol, openvpn::PROTOCOLS)?;
        }
        Ok(())
    }

    pub(crate) fn merge_with(&mut self, other: Self) {
        merge_option(&mut self.version, other.version);
        merge_option(&mut self.user, other.user);
        merge_option(&mut self.password, other.password);
        merge_option(&mut self.protocol, other.protocol);
    }

    pub(crate) fn override_with(&mut self, other: Self) {
        override_option(&mut self.version, other.version);
        override_option(&mut self.user, other.user);
        override_option(&mut self.password, other.password);
        override_option(&mut self.protocol, other.protocol);
    }

    pub(crate) fn set_defaults(&mut self) {
        default_option(&mut self.version, String::from(openvpn::V2_5));
        default_option(&mut self.protocol, String::from("udp"));
    }

    pub(crate) fn to_node(&self) -> Node {
        let mut node = Node::new("OpenVPN settings:");
        node.line(format!(
            "OpenVPN version: {}",
            self.version.as_deref().unwrap_or_default()
        ))
        .line(format!("User: {}", obfuscate(self.user.as_deref())))
        .line(format!("Password: {}", obfuscate(self.password.as_deref())))
        .line(format!(
            "Protocol: {}",
            self.protocol.as_deref().unwrap_or_default()
        ));
        node
    }
}
