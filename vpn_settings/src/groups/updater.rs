//! Settings for the periodic server list updater.

use std::time::Duration;

use serde::Deserialize;

use crate::constants::providers;
use crate::group::helpers::{
    check_dial_address, check_one_of, check_period, default_option, default_vec, merge_option,
    merge_vec, millis, override_option, override_vec,
};
use crate::group::{SettingGroup, Validate, ValidationContext};
use crate::render::list_or_unset;
use crate::{GroupError, Node};

const MINIMUM_PERIOD: Duration = Duration::from_secs(60);

/// Server list updater settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Updater {
    /// How often server lists are refreshed; zero disables the updater.
    #[serde(deserialize_with = "millis::deserialize")]
    pub period: Option<Duration>,
    /// Plaintext DNS server used while resolving provider hosts.
    pub dns_address: Option<String>,
    /// Smallest accepted ratio of new to previous server count.
    pub min_ratio: Option<f64>,
    /// Providers whose server lists are refreshed.
    pub providers: Vec<String>,
}

impl Updater {
    /// Populate unset fields, defaulting the refreshed providers to the
    /// selected VPN provider.
    ///
    /// The custom provider has no server list, so it is never added.
    pub fn set_defaults_for_provider(&mut self, vpn_provider: &str) {
        self.set_defaults();
        if !vpn_provider.eq_ignore_ascii_case(providers::CUSTOM) {
            default_vec(&mut self.providers, vec![vpn_provider.to_owned()]);
        }
    }
}

impl Validate for Updater {
    fn validate(&self, _ctx: &ValidationContext<'_>) -> Result<(), GroupError> {
        if let Some(period) = self.period {
            check_period("period", period, MINIMUM_PERIOD)?;
        }
        if let Some(address) = self.dns_address.as_deref() {
            check_dial_address("DNS address", address)?;
        }
        if let Some(ratio) = self.min_ratio
            && !(ratio > 0.0 && ratio <= 1.0)
        {
            return Err(GroupError::RatioOutOfRange {
                field: "minimum ratio",
                value: ratio,
            });
        }
        for provider in &self.providers {
            check_one_of("provider", provider, providers::ALL)?;
        }
        Ok(())
    }
}

impl SettingGroup for Updater {
    const NAME: &'static str = "updater";

    fn merge_with(&mut self, other: Self) {
        merge_option(&mut self.period, other.period);
        merge_option(&mut self.dns_address, other.dns_address);
        merge_option(&mut self.min_ratio, other.min_ratio);
        merge_vec(&mut self.providers, other.providers);
    }

    fn override_with(&mut self, other: Self) {
        override_option(&mut self.period, other.period);
        override_option(&mut self.dns_address, other.dns_address);
        override_option(&mut self.min_ratio, other.min_ratio);
        override_vec(&mut self.providers, other.providers);
    }

    fn set_defaults(&mut self) {
        default_option(&mut self.period, Duration::ZERO);
        default_option(&mut self.dns_address, String::from("1.1.1.1:53"));
        default_option(&mut self.min_ratio, 0.8);
    }

    fn to_node(&self) -> Node {
        let mut node = Node::new("Server data updater settings:");
        let period = self.period.unwrap_or_default();
        if period.is_zero() {
            node.line("Update period: disabled");
            return node;
        }
        node.line(format!("Update period: every {period:?}"))
            .line(format!(
                "DNS address: {}",
                self.dns_address.as_deref().unwrap_or_default()
            ))
            .line(format!(
                "Minimum ratio: {}",
                self.min_ratio.unwrap_or_default()
            ))
            .line(format!("Providers to update: {}", list_or_unset(&self.providers)));
        node
    }
}
