//! Ready-made settings and provider data for tests.
//!
//! # Examples
//!
//! ```
//! use vpn_settings_test_helpers::fixtures;
//!
//! let settings = fixtures::valid_settings();
//! settings
//!     .validate(&fixtures::storage(), false)
//!     .expect("fixture settings are valid");
//! ```

use anyhow::Context as _;
use vpn_settings::compose::{LayerProvenance, fragment};
use vpn_settings::constants::providers;
use vpn_settings::{FilterChoices, MemoryStorage, Settings};

/// OpenVPN user set on [`valid_settings`].
pub const USER: &str = "p1234567";

/// OpenVPN password set on [`valid_settings`].
pub const PASSWORD: &str = "hunter2";

/// Provider data for Private Internet Access and Mullvad.
#[must_use]
pub fn storage() -> MemoryStorage {
    let mut storage = MemoryStorage::default();
    storage
        .insert(
            providers::PRIVATE_INTERNET_ACCESS,
            FilterChoices {
                regions: vec!["Netherlands".into(), "CA Toronto".into(), "DE Berlin".into()],
                hostnames: vec!["nl-amsterdam.privacy.network".into()],
                ..FilterChoices::default()
            },
        )
        .insert(
            providers::MULLVAD,
            FilterChoices {
                countries: vec!["Sweden".into(), "Switzerland".into()],
                cities: vec!["Gothenburg".into(), "Zurich".into()],
                isps: vec!["31173".into(), "M247".into()],
                ..FilterChoices::default()
            },
        );
    storage
}

/// Defaulted settings with OpenVPN credentials, valid against [`storage`].
#[must_use]
pub fn valid_settings() -> Settings {
    let mut settings = Settings::default();
    settings.vpn.openvpn.user = Some(USER.into());
    settings.vpn.openvpn.password = Some(PASSWORD.into());
    settings.set_defaults();
    settings
}

/// Parse a JSON settings fragment as if it came from a configuration file.
///
/// # Errors
///
/// Returns an error when `json` is not valid JSON or does not describe a
/// settings fragment.
pub fn file_fragment(json: &str) -> anyhow::Result<Settings> {
    let value = serde_json::from_str(json).context("parse fragment JSON")?;
    fragment(LayerProvenance::File, value).context("decode settings fragment")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_settings_pass_validation() {
        assert!(valid_settings().validate(&storage(), false).is_ok());
    }

    #[test]
    fn file_fragment_reads_nested_groups() -> anyhow::Result<()> {
        let settings = file_fragment(r#"{"dns": {"caching": false}}"#)?;
        assert_eq!(settings.dns.caching, Some(false));
        assert!(settings.firewall.enabled.is_none());
        Ok(())
    }
}
