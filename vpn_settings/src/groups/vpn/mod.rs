//! Settings for the VPN tunnel itself.
//!
//! This is the only group whose validation reads external inputs: server
//! filters are checked against provider data from [`crate::Storage`], and
//! WireGuard interface addresses against the host's IPv6 support.

mod openvpn;
mod provider;
mod wireguard;

use std::fmt;

use serde::Deserialize;

use crate::group::helpers::{default_option, merge_option, override_option};
use crate::group::{SettingGroup, Validate, ValidationContext};
use crate::{GroupError, Node};

pub use openvpn::OpenVpn;
pub use provider::{Provider, ServerSelection};
pub use wireguard::Wireguard;

/// Tunnel protocol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VpnType {
    /// OpenVPN.
    #[default]
    OpenVpn,
    /// WireGuard.
    Wireguard,
}

impl fmt::Display for VpnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OpenVpn => "openvpn",
            Self::Wireguard => "wireguard",
        })
    }
}

/// VPN settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Vpn {
    /// Tunnel protocol.
    #[serde(rename = "type")]
    pub vpn_type: Option<VpnType>,
    /// Provider and server filters.
    pub provider: Provider,
    /// OpenVPN client settings.
    pub openvpn: OpenVpn,
    /// WireGuard client settings.
    pub wireguard: Wireguard,
}

impl Validate for Vpn {
    fn validate(&self, ctx: &ValidationContext<'_>) -> Result<(), GroupError> {
        let Some(vpn_type) = self.vpn_type else {
            return Err(GroupError::Missing { field: "VPN type" });
        };
        self.provider.validate(vpn_type, ctx)?;
        match vpn_type {
            VpnType::OpenVpn => self.openvpn.validate(),
            VpnType::Wireguard => self.wireguard.validate(ctx.ipv6_supported()),
        }
    }
}

impl SettingGroup for Vpn {
    const NAME: &'static str = "VPN";

    fn merge_with(&mut self, other: Self) {
        merge_option(&mut self.vpn_type, other.vpn_type);
        self.provider.merge_with(other.provider);
        self.openvpn.merge_with(other.openvpn);
        self.wireguard.merge_with(other.wireguard);
    }

    fn override_with(&mut self, other: Self) {
        override_option(&mut self.vpn_type, other.vpn_type);
        self.provider.override_with(other.provider);
        self.openvpn.override_with(other.openvpn);
        self.wireguard.override_with(other.wireguard);
    }

    fn set_defaults(&mut self) {
        default_option(&mut self.vpn_type, VpnType::OpenVpn);
        self.provider.set_defaults();
        self.openvpn.set_defaults();
    }

    fn to_node(&self) -> Node {
        let mut node = Node::new("VPN settings:");
        node.append(self.provider.to_node());
        match self.vpn_type.unwrap_or_default() {
            VpnType::OpenVpn => node.append(self.openvpn.to_node()),
            VpnType::Wireguard => node.append(self.wireguard.to_node()),
        };
        node
    }
}
