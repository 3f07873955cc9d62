//! Settings for the kill-switch firewall.

use serde::Deserialize;

use crate::group::helpers::{
    check_port, default_option, merge_option, merge_vec, override_option, override_vec, parse_cidr,
};
use crate::group::{SettingGroup, Validate, ValidationContext};
use crate::render::{list_or_unset, yes_no};
use crate::{GroupError, Node};

/// Firewall settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Firewall {
    /// Whether the firewall is managed at all.
    pub enabled: Option<bool>,
    /// Ports opened on the VPN interface.
    pub vpn_input_ports: Vec<u16>,
    /// Ports opened on the default interface.
    pub input_ports: Vec<u16>,
    /// Subnets reachable outside the tunnel, in CIDR notation.
    pub outbound_subnets: Vec<String>,
    /// Whether rule changes are logged.
    pub debug: Option<bool>,
}

impl Validate for Firewall {
    fn validate(&self, _ctx: &ValidationContext<'_>) -> Result<(), GroupError> {
        for port in &self.vpn_input_ports {
            check_port("VPN input port", *port)?;
        }
        for port in &self.input_ports {
            check_port("input port", *port)?;
        }
        for subnet in &self.outbound_subnets {
            parse_cidr("outbound subnet", subnet)?;
        }
        Ok(())
    }
}

impl SettingGroup for Firewall {
    const NAME: &'static str = "firewall";

    fn merge_with(&mut self, other: Self) {
        merge_option(&mut self.enabled, other.enabled);
        merge_vec(&mut self.vpn_input_ports, other.vpn_input_ports);
        merge_vec(&mut self.input_ports, other.input_ports);
        merge_vec(&mut self.outbound_subnets, other.outbound_subnets);
        merge_option(&mut self.debug, other.debug);
    }

    fn override_with(&mut self, other: Self) {
        override_option(&mut self.enabled, other.enabled);
        override_vec(&mut self.vpn_input_ports, other.vpn_input_ports);
        override_vec(&mut self.input_ports, other.input_ports);
        override_vec(&mut self.outbound_subnets, other.outbound_subnets);
        override_option(&mut self.debug, other.debug);
    }

    fn set_defaults(&mut self) {
        default_option(&mut self.enabled, true);
        default_option(&mut self.debug, false);
    }

    fn to_node(&self) -> Node {
        let mut node = Node::new("Firewall settings:");
        if !self.enabled.unwrap_or_default() {
            node.line("Enabled: no");
            return node;
        }
        node.line(format!(
            "VPN input ports: {}",
            list_or_unset(&self.vpn_input_ports)
        ))
        .line(format!("Input ports: {}", list_or_unset(&self.input_ports)))
        .line(format!(
            "Outbound subnets: {}",
            list_or_unset(&self.outbound_subnets)
        ))
        .line(format!("Debug mode: {}", yes_no(self.debug.unwrap_or_default())));
        node
    }
}
