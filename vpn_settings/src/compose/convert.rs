//! JSON conversion helpers for settings fragments.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Settings, SettingsError, SettingsResult};

use super::LayerProvenance;

/// Deserialise a JSON [`Value`] into a settings fragment or a single group.
///
/// Absent keys stay unset and unknown keys are rejected. Durations are
/// whole milliseconds.
///
/// # Errors
///
/// Returns the [`serde_json::Error`] describing the first mismatch.
///
/// # Examples
///
/// ```rust
/// use vpn_settings::compose::from_value;
/// use vpn_settings::Dns;
/// use serde_json::json;
/// use std::time::Duration;
///
/// let dns: Dns = from_value(json!({"update_period": 60000})).expect("valid fragment");
/// assert_eq!(dns.update_period, Some(Duration::from_secs(60)));
/// assert_eq!(dns.caching, None);
/// ```
pub fn from_value<T: DeserializeOwned>(value: Value) -> serde_json::Result<T> {
    serde_json::from_value(value)
}

/// Deserialise a whole-settings fragment attributed to `provenance`.
///
/// # Errors
///
/// Returns [`SettingsError::Fragment`] when the value does not describe
/// settings.
pub fn fragment(provenance: LayerProvenance, value: Value) -> SettingsResult<Settings> {
    from_value(value).map_err(|source| SettingsError::Fragment { provenance, source })
}
