//! Settings aggregate for a VPN client.
//!
//! [`Settings`] owns one value of every setting group (VPN, DNS, firewall,
//! health checks, proxies, logging, updater and so on) and provides a single
//! consistent way to:
//!
//! - populate defaults with [`Settings::set_defaults`];
//! - fold partial fragments together with [`Settings::merge_with`] or a
//!   [`compose::SettingsComposer`];
//! - apply an override atomically with [`Settings::override_with`], which
//!   either commits a fully valid result or changes nothing;
//! - validate with [`Settings::validate`], summarise with `Display`, and
//!   derive operator advisories with [`Settings::warnings`].
//!
//! ```
//! use vpn_settings::{MemoryStorage, Settings};
//!
//! let mut settings = Settings::default();
//! settings.vpn.openvpn.user = Some("p1234567".into());
//! settings.set_defaults();
//! settings.validate(&MemoryStorage::default(), false)?;
//! assert!(settings.warnings().is_empty());
//! # Ok::<_, vpn_settings::SettingsError>(())
//! ```

pub mod compose;
pub mod constants;
mod error;
pub mod group;
mod groups;
mod render;
mod settings;
mod storage;

pub use error::{AggregatedErrors, GroupError, SettingsError, SettingsResult};
pub use group::{SettingGroup, Validate, ValidationContext};
pub use groups::{
    Blacklist, ControlServer, Dns, Firewall, Health, HealthyWait, HttpProxy, Log, LogLevel,
    OpenVpn, Pprof, Provider, PublicIp, ServerSelection, Shadowsocks, System, Updater, Version,
    Vpn, VpnType, Wireguard,
};
pub use render::{Node, list_or_unset, obfuscate, yes_no};
pub use settings::Settings;
pub use storage::{FilterChoices, MemoryStorage, Storage};
