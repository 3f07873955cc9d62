//! Settings for the DNS over TLS forwarder.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use serde::Deserialize;

use crate::constants::DNS_PROVIDERS;
use crate::group::helpers::{
    check_one_of, check_period, default_option, default_vec, merge_option, merge_vec, millis,
    override_option, override_vec,
};
use crate::group::{SettingGroup, Validate, ValidationContext};
use crate::render::{list_or_unset, yes_no};
use crate::{GroupError, Node};

const MINIMUM_UPDATE_PERIOD: Duration = Duration::from_secs(60);

/// DNS settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Dns {
    /// Whether the local DNS over TLS server runs.
    pub enabled: Option<bool>,
    /// Upstream DNS over TLS providers, in order of preference.
    pub providers: Vec<String>,
    /// Whether responses are cached.
    pub caching: Option<bool>,
    /// Whether AAAA records are resolved.
    pub ipv6: Option<bool>,
    /// How often block lists are refreshed; zero disables updates.
    #[serde(deserialize_with = "millis::deserialize")]
    pub update_period: Option<Duration>,
    /// Plaintext DNS server used by the system resolver.
    pub server_address: Option<IpAddr>,
    /// Whether the container's original nameserver is left untouched.
    pub keep_nameserver: Option<bool>,
    /// Host and IP blocking.
    pub blacklist: Blacklist,
}

/// Blocking rules applied by the DNS server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Blacklist {
    /// Block hosts known to serve malware.
    pub block_malicious: Option<bool>,
    /// Block advertising hosts.
    pub block_ads: Option<bool>,
    /// Block surveillance hosts.
    pub block_surveillance: Option<bool>,
    /// Hosts never blocked.
    pub allowed_hosts: Vec<String>,
}

impl Blacklist {
    fn merge_with(&mut self, other: Self) {
        merge_option(&mut self.block_malicious, other.block_malicious);
        merge_option(&mut self.block_ads, other.block_ads);
        merge_option(&mut self.block_surveillance, other.block_surveillance);
        merge_vec(&mut self.allowed_hosts, other.allowed_hosts);
    }

    fn override_with(&mut self, other: Self) {
        override_option(&mut self.block_malicious, other.block_malicious);
        override_option(&mut self.block_ads, other.block_ads);
        override_option(&mut self.block_surveillance, other.block_surveillance);
        override_vec(&mut self.allowed_hosts, other.allowed_hosts);
    }

    fn set_defaults(&mut self) {
        default_option(&mut self.block_malicious, true);
        default_option(&mut self.block_ads, false);
        default_option(&mut self.block_surveillance, false);
    }

    fn to_node(&self) -> Node {
        let mut node = Node::new("DNS filtering settings:");
        node.line(format!(
            "Block malicious: {}",
            yes_no(self.block_malicious.unwrap_or_default())
        ))
        .line(format!("Block ads: {}", yes_no(self.block_ads.unwrap_or_default())))
        .line(format!(
            "Block surveillance: {}",
            yes_no(self.block_surveillance.unwrap_or_default())
        ));
        if !self.allowed_hosts.is_empty() {
            node.line(format!("Allowed hosts: {}", self.allowed_hosts.join(", ")));
        }
        node
    }
}

impl Validate for Dns {
    fn validate(&self, _ctx: &ValidationContext<'_>) -> Result<(), GroupError> {
        for provider in &self.providers {
            check_one_of("upstream provider", provider, DNS_PROVIDERS)?;
        }
        if let Some(period) = self.update_period {
            check_period("update period", period, MINIMUM_UPDATE_PERIOD)?;
        }
        Ok(())
    }
}

impl SettingGroup for Dns {
    const NAME: &'static str = "dns";

    fn merge_with(&mut self, other: Self) {
        merge_option(&mut self.enabled, other.enabled);
        merge_vec(&mut self.providers, other.providers);
        merge_option(&mut self.caching, other.caching);
        merge_option(&mut self.ipv6, other.ipv6);
        merge_option(&mut self.update_period, other.update_period);
        merge_option(&mut self.server_address, other.server_address);
        merge_option(&mut self.keep_nameserver, other.keep_nameserver);
        self.blacklist.merge_with(other.blacklist);
    }

    fn override_with(&mut self, other: Self) {
        override_option(&mut self.enabled, other.enabled);
        override_vec(&mut self.providers, other.providers);
        override_option(&mut self.caching, other.caching);
        override_option(&mut self.ipv6, other.ipv6);
        override_option(&mut self.update_period, other.update_period);
        override_option(&mut self.server_address, other.server_address);
        override_option(&mut self.keep_nameserver, other.keep_nameserver);
        self.blacklist.override_with(other.blacklist);
    }

    fn set_defaults(&mut self) {
        default_option(&mut self.enabled, true);
        default_vec(&mut self.providers, vec![String::from("cloudflare")]);
        default_option(&mut self.caching, true);
        default_option(&mut self.ipv6, false);
        default_option(&mut self.update_period, Duration::from_secs(24 * 60 * 60));
        default_option(&mut self.server_address, IpAddr::V4(Ipv4Addr::LOCALHOST));
        default_option(&mut self.keep_nameserver, false);
        self.blacklist.set_defaults();
    }

    fn to_node(&self) -> Node {
        let mut node = Node::new("DNS settings:");
        node.line(format!(
            "Keep existing nameserver(s): {}",
            yes_no(self.keep_nameserver.unwrap_or_default())
        ));
        if let Some(address) = self.server_address {
            node.line(format!("DNS server address to use: {address}"));
        }
        if !self.enabled.unwrap_or_default() {
            return node;
        }
        let mut server = Node::new("DNS over TLS settings:");
        server
            .line(format!("Upstream resolvers: {}", list_or_unset(&self.providers)))
            .line(format!("Caching: {}", yes_no(self.caching.unwrap_or_default())))
            .line(format!("IPv6: {}", yes_no(self.ipv6.unwrap_or_default())));
        match self.update_period {
            Some(period) if !period.is_zero() => {
                server.line(format!("Update period: every {period:?}"));
            }
            _ => {
                server.line("Update period: disabled");
            }
        }
        server.append(self.blacklist.to_node());
        node.append(server);
        node
    }
}
