//! Layering of settings fragments gathered from several sources.
//!
//! Each source contributes a partial [`crate::Settings`] tagged with its
//! [`LayerProvenance`]. Composition folds the layers together with
//! [`crate::Settings::merge_with`], highest precedence first, so values from
//! higher-precedence sources are kept, and finally fills the gaps with
//! defaults. Reading the sources themselves is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use vpn_settings::compose::{LayerProvenance, SettingsComposer};
//! use serde_json::json;
//!
//! let mut composer = SettingsComposer::new();
//! composer.push_value(LayerProvenance::File, json!({"dns": {"caching": false}}))?;
//! composer.push_value(LayerProvenance::Environment, json!({"dns": {"caching": true}}))?;
//!
//! let settings = composer.compose();
//! assert_eq!(settings.dns.caching, Some(true));
//! assert_eq!(settings.dns.ipv6, Some(false));
//! # Ok::<_, vpn_settings::SettingsError>(())
//! ```

mod composer;
mod convert;
mod layer;

pub use composer::SettingsComposer;
pub use convert::{fragment, from_value};
pub use layer::{LayerProvenance, SettingsLayer};
