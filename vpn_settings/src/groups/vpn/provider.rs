//! Provider selection and server filters.

use serde::Deserialize;

use crate::constants::providers;
use crate::group::helpers::{
    check_one_of, default_option, is_one_of, merge_option, merge_vec, override_option,
    override_vec,
};
use crate::group::ValidationContext;
use crate::render::yes_no;
use crate::{FilterChoices, GroupError, Node};

use super::VpnType;

/// VPN provider settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Provider {
    /// Provider name, lowercase.
    pub name: Option<String>,
    /// Filters narrowing the provider's servers.
    pub server_selection: ServerSelection,
}

/// Filters narrowing which servers may be connected to.
///
/// Every value must be offered by the selected provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSelection {
    /// Countries to pick servers from.
    pub countries: Vec<String>,
    /// Regions to pick servers from.
    pub regions: Vec<String>,
    /// Cities to pick servers from.
    pub cities: Vec<String>,
    /// Internet service providers hosting the servers.
    pub isps: Vec<String>,
    /// Server names.
    pub names: Vec<String>,
    /// Server hostnames.
    pub hostnames: Vec<String>,
    /// Restrict to servers the provider owns.
    pub owned_only: Option<bool>,
}

impl Provider {
    /// Selected provider name, or an empty string when unset.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub(crate) fn validate(
        &self,
        vpn_type: VpnType,
        ctx: &ValidationContext<'_>,
    ) -> Result<(), GroupError> {
        let Some(name) = self.name.as_deref() else {
            return Err(GroupError::Missing {
                field: "provider name",
            });
        };
        check_one_of("provider name", name, providers::ALL)?;
        if vpn_type == VpnType::Wireguard && !is_one_of(name, providers::WIREGUARD) {
            return Err(GroupError::Invalid {
                field: "provider name",
                value: name.to_owned(),
                reason: String::from("provider does not support WireGuard"),
            });
        }
        if name.eq_ignore_ascii_case(providers::CUSTOM) {
            return Ok(());
        }
        let choices = ctx.storage().filter_choices(name);
        self.server_selection.validate(name, &choices)
    }

    pub(crate) fn merge_with(&mut self, other: Self) {
        merge_option(&mut self.name, other.name);
        self.server_selection.merge_with(other.server_selection);
    }

    pub(crate) fn override_with(&mut self, other: Self) {
        override_option(&mut self.name, other.name);
        self.server_selection.override_with(other.server_selection);
    }

    pub(crate) fn set_defaults(&mut self) {
        default_option(
            &mut self.name,
            String::from(providers::PRIVATE_INTERNET_ACCESS),
        );
        default_option(&mut self.server_selection.owned_only, false);
    }

    pub(crate) fn to_node(&self) -> Node {
        let mut node = Node::new("VPN provider settings:");
        node.line(format!("Name: {}", self.name()));
        node.append(self.server_selection.to_node());
        node
    }
}

impl ServerSelection {
    fn filters<'a>(
        &'a self,
        choices: &'a FilterChoices,
    ) -> [(&'static str, &'a [String], &'a [String]); 6] {
        [
            ("country", self.countries.as_slice(), choices.countries.as_slice()),
            ("region", self.regions.as_slice(), choices.regions.as_slice()),
            ("city", self.cities.as_slice(), choices.cities.as_slice()),
            ("ISP", self.isps.as_slice(), choices.isps.as_slice()),
            ("server name", self.names.as_slice(), choices.names.as_slice()),
            ("hostname", self.hostnames.as_slice(), choices.hostnames.as_slice()),
        ]
    }

    fn validate(&self, provider: &str, choices: &FilterChoices) -> Result<(), GroupError> {
        for (filter, wanted, available) in self.filters(choices) {
            let unavailable = wanted
                .iter()
                .find(|value| !available.iter().any(|choice| choice.eq_ignore_ascii_case(value)));
            if let Some(value) = unavailable {
                return Err(GroupError::FilterUnavailable {
                    filter,
                    value: value.clone(),
                    provider: provider.to_owned(),
                });
            }
        }
        Ok(())
    }

    fn merge_with(&mut self, other: Self) {
        merge_vec(&mut self.countries, other.countries);
        merge_vec(&mut self.regions, other.regions);
        merge_vec(&mut self.cities, other.cities);
        merge_vec(&mut self.isps, other.isps);
        merge_vec(&mut self.names, other.names);
        merge_vec(&mut self.hostnames, other.hostnames);
        merge_option(&mut self.owned_only, other.owned_only);
    }

    fn override_with(&mut self, other: Self) {
        override_vec(&mut self.countries, other.countries);
        override_vec(&mut self.regions, other.regions);
        override_vec(&mut self.cities, other.cities);
        override_vec(&mut self.isps, other.isps);
        override_vec(&mut self.names, other.names);
        override_vec(&mut self.hostnames, other.hostnames);
        override_option(&mut self.owned_only, other.owned_only);
    }

    fn to_node(&self) -> Node {
        let mut node = Node::new("Server selection settings:");
        let empty = FilterChoices::default();
        for (filter, wanted, _) in self.filters(&empty) {
            if !wanted.is_empty() {
                node.line(format!("{filter} filter: {}", wanted.join(", ")));
            }
        }
        if self.owned_only.unwrap_or_default() {
            node.line(format!("Owned servers only: {}", yes_no(true)));
        }
        node
    }
}
