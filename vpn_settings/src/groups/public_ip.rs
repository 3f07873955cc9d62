//! Settings for periodic public IP lookups.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::constants::PUBLIC_IP_APIS;
use crate::group::helpers::{check_one_of, default_option, merge_option, millis, override_option};
use crate::group::{SettingGroup, Validate, ValidationContext};
use crate::render::obfuscate;
use crate::{GroupError, Node};

/// Public IP check settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublicIp {
    /// How often the public IP is fetched; zero disables the check.
    #[serde(deserialize_with = "millis::deserialize")]
    pub period: Option<Duration>,
    /// File the public IP is written to.
    pub ip_file_path: Option<PathBuf>,
    /// Lookup service name.
    pub api: Option<String>,
    /// Token for the lookup service.
    pub token: Option<String>,
}

impl Validate for PublicIp {
    fn validate(&self, _ctx: &ValidationContext<'_>) -> Result<(), GroupError> {
        self.api
            .as_deref()
            .map_or(Ok(()), |api| check_one_of("API name", api, PUBLIC_IP_APIS))
    }
}

impl SettingGroup for PublicIp {
    const NAME: &'static str = "public ip check";

    fn merge_with(&mut self, other: Self) {
        merge_option(&mut self.period, other.period);
        merge_option(&mut self.ip_file_path, other.ip_file_path);
        merge_option(&mut self.api, other.api);
        merge_option(&mut self.token, other.token);
    }

    fn override_with(&mut self, other: Self) {
        override_option(&mut self.period, other.period);
        override_option(&mut self.ip_file_path, other.ip_file_path);
        override_option(&mut self.api, other.api);
        override_option(&mut self.token, other.token);
    }

    fn set_defaults(&mut self) {
        default_option(&mut self.period, Duration::from_secs(12 * 60 * 60));
        default_option(&mut self.ip_file_path, PathBuf::from("/tmp/vpn/ip"));
        default_option(&mut self.api, String::from("ipinfo"));
        default_option(&mut self.token, String::new());
    }

    fn to_node(&self) -> Node {
        let mut node = Node::new("Public IP settings:");
        let period = self.period.unwrap_or_default();
        if period.is_zero() {
            node.line("Enabled: no");
            return node;
        }
        node.line(format!("Fetching: every {period:?}"));
        if let Some(path) = &self.ip_file_path {
            node.line(format!("IP file path: {}", path.display()));
        }
        node.line(format!(
            "Public IP data API: {} (token {})",
            self.api.as_deref().unwrap_or_default(),
            obfuscate(self.token.as_deref())
        ));
        node
    }
}
