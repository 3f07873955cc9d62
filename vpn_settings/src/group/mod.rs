//! The capability set every setting group implements.
//!
//! A setting group is an independent value owning one subsystem's settings.
//! Groups do not share a base type; they expose the same operations through
//! [`SettingGroup`] so the aggregate can drive them uniformly:
//!
//! - `merge_with` folds in a fragment, keeping values the receiver already has;
//! - `override_with` lets set values of a fragment replace the receiver's;
//! - `set_defaults` fills whatever is still unset;
//! - `validate` checks the group's values;
//! - `to_node` renders the group for the settings summary.
//!
//! Deep copies come from [`Clone`].

pub mod helpers;

use std::fmt;

use crate::{GroupError, Node, Storage};

/// External inputs available to group validation.
#[derive(Clone, Copy)]
pub struct ValidationContext<'a> {
    storage: &'a dyn Storage,
    ipv6_supported: bool,
}

impl<'a> ValidationContext<'a> {
    /// Bundle the provider data source and host network capability.
    #[must_use]
    pub const fn new(storage: &'a dyn Storage, ipv6_supported: bool) -> Self {
        Self {
            storage,
            ipv6_supported,
        }
    }

    /// Provider data source.
    #[must_use]
    pub const fn storage(&self) -> &'a dyn Storage {
        self.storage
    }

    /// Whether the host network stack supports IPv6.
    #[must_use]
    pub const fn ipv6_supported(&self) -> bool {
        self.ipv6_supported
    }
}

impl fmt::Debug for ValidationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationContext")
            .field("ipv6_supported", &self.ipv6_supported)
            .finish_non_exhaustive()
    }
}

/// Object-safe validation half of [`SettingGroup`].
pub trait Validate {
    /// Check the group's current values.
    ///
    /// # Errors
    ///
    /// Returns a [`GroupError`] describing the first inconsistent or
    /// out-of-range value.
    fn validate(&self, ctx: &ValidationContext<'_>) -> Result<(), GroupError>;
}

/// Operations shared by every setting group.
pub trait SettingGroup: Validate + Clone + Default + PartialEq + fmt::Debug {
    /// Stable, human-readable name used to label validation errors.
    const NAME: &'static str;

    /// Fill unset fields from `other`; fields already set are kept.
    fn merge_with(&mut self, other: Self);

    /// Replace fields with the ones set in `other`; unset fields in `other`
    /// leave the receiver's values in place.
    fn override_with(&mut self, other: Self);

    /// Populate every unset field with its default value.
    fn set_defaults(&mut self);

    /// Render the group as a summary node.
    fn to_node(&self) -> Node;
}
