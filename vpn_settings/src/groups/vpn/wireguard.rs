//! WireGuard client settings.

use serde::Deserialize;

use crate::group::helpers::{merge_option, merge_vec, override_option, override_vec, parse_cidr};
use crate::render::{list_or_unset, obfuscate};
use crate::{GroupError, Node};

/// WireGuard settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Wireguard {
    /// Base64 private key of the interface.
    pub private_key: Option<String>,
    /// Interface addresses in CIDR notation.
    pub addresses: Vec<String>,
}

impl Wireguard {
    pub(crate) fn validate(&self, ipv6_supported: bool) -> Result<(), GroupError> {
        if self.private_key.as_deref().is_none_or(str::is_empty) {
            return Err(GroupError::Missing {
                field: "WireGuard private key",
            });
        }
        if self.addresses.is_empty() {
            return Err(GroupError::Missing {
                field: "WireGuard interface addresses",
            });
        }
        for address in &self.addresses {
            let (ip, _) = parse_cidr("interface address", address)?;
            if ip.is_ipv6() && !ipv6_supported {
                return Err(GroupError::Ipv6NotSupported {
                    address: address.clone(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn merge_with(&mut self, other: Self) {
        merge_option(&mut self.private_key, other.private_key);
        merge_vec(&mut self.addresses, other.addresses);
    }

    pub(crate) fn override_with(&mut self, other: Self) {
        override_option(&mut self.private_key, other.private_key);
        override_vec(&mut self.addresses, other.addresses);
    }

    pub(crate) fn to_node(&self) -> Node {
        let mut node = Node::new("Wireguard settings:");
        node.line(format!(
            "Private key: {}",
            obfuscate(self.private_key.as_deref())
        ))
        .line(format!("Interface addresses: {}", list_or_unset(&self.addresses)));
        node
    }
}
