//! Error enums for group validation and whole-settings operations.

use std::time::Duration;

use thiserror::Error;

use super::aggregate::AggregatedErrors;
use crate::compose::LayerProvenance;

/// Reasons a single setting group reports its values as invalid.
///
/// Group validators return these bare; the orchestrator attaches the group
/// name through [`SettingsError::Validation`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GroupError {
    /// A field that must be set was left empty.
    #[error("{field} is required")]
    Missing {
        /// Human-readable field path.
        field: &'static str,
    },

    /// A field holds a value that cannot be interpreted.
    #[error("{field} {value:?} is invalid: {reason}")]
    Invalid {
        /// Human-readable field path.
        field: &'static str,
        /// Offending value as supplied.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A field is restricted to a fixed set of choices.
    #[error("{field} {value:?} is not one of: {}", .choices.join(", "))]
    NotOneOf {
        /// Human-readable field path.
        field: &'static str,
        /// Offending value as supplied.
        value: String,
        /// Accepted values.
        choices: Vec<String>,
    },

    /// A port number lies outside the usable range.
    #[error("{field} {port} is out of range [1, 65535]")]
    PortOutOfRange {
        /// Human-readable field path.
        field: &'static str,
        /// Offending port.
        port: u16,
    },

    /// A period is non-zero but below the allowed minimum.
    #[error("{field} {value:?} cannot be smaller than {minimum:?}")]
    DurationTooShort {
        /// Human-readable field path.
        field: &'static str,
        /// Offending duration.
        value: Duration,
        /// Smallest accepted non-zero duration.
        minimum: Duration,
    },

    /// A ratio lies outside `(0, 1]`.
    #[error("{field} {value} must be greater than 0 and at most 1")]
    RatioOutOfRange {
        /// Human-readable field path.
        field: &'static str,
        /// Offending ratio.
        value: f64,
    },

    /// A server filter names a value the provider does not offer.
    #[error("{filter} {value:?} is not available for provider {provider}")]
    FilterUnavailable {
        /// Filter category, for example `country`.
        filter: &'static str,
        /// Requested filter value.
        value: String,
        /// Provider the filter was checked against.
        provider: String,
    },

    /// An IPv6 address was configured on a host without IPv6 support.
    #[error("interface address {address} is IPv6 but IPv6 is not supported")]
    Ipv6NotSupported {
        /// Offending address in CIDR notation.
        address: String,
    },
}

/// Errors surfaced by operations on the whole settings aggregate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// A setting group reported invalid values.
    #[error("{group} settings: {source}")]
    Validation {
        /// Stable name of the failing group.
        group: &'static str,
        /// Underlying reason reported by the group.
        #[source]
        source: GroupError,
    },

    /// An override was staged, failed validation and was discarded.
    ///
    /// The settings the override was applied to are unchanged.
    #[error("override rejected, settings left unchanged: {0}")]
    OverrideRejected(#[source] Box<SettingsError>),

    /// A settings fragment could not be deserialised.
    #[error("invalid {provenance} settings fragment: {source}")]
    Fragment {
        /// Source the fragment was attributed to.
        provenance: LayerProvenance,
        /// Deserialisation failure.
        #[source]
        source: serde_json::Error,
    },

    /// Several groups failed validation at once.
    #[error("multiple settings errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}
