//! Constructors and inspection helpers for `SettingsError`.

use super::{AggregatedErrors, GroupError, SettingsError};

impl SettingsError {
    /// Attach a group name to a group validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpn_settings::{GroupError, SettingsError};
    /// let e = SettingsError::validation("dns", GroupError::Missing { field: "providers" });
    /// assert_eq!(e.to_string(), "dns settings: providers is required");
    /// ```
    #[must_use]
    pub const fn validation(group: &'static str, source: GroupError) -> Self {
        Self::Validation { group, source }
    }

    /// Mark a validation failure as the reason an override was discarded.
    #[must_use]
    pub fn override_rejected(cause: Self) -> Self {
        Self::OverrideRejected(Box::new(cause))
    }

    /// Tries to build a [`SettingsError`] from an iterator of errors.
    ///
    /// Returns `None` when no errors are supplied, the error itself when
    /// exactly one is supplied, and [`Self::Aggregate`] otherwise.
    #[must_use]
    pub fn try_aggregate<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut errors: Vec<Self> = errors.into_iter().collect();
        if errors.len() > 1 {
            return Some(Self::Aggregate(Box::new(AggregatedErrors::new(errors))));
        }
        errors.pop()
    }

    /// Name of the group that failed, looking through override wrappers.
    ///
    /// Returns `None` for fragment and aggregate errors, which do not
    /// identify a single group.
    #[must_use]
    pub fn group(&self) -> Option<&'static str> {
        match self {
            Self::Validation { group, .. } => Some(*group),
            Self::OverrideRejected(cause) => cause.group(),
            Self::Fragment { .. } | Self::Aggregate(_) => None,
        }
    }

    /// The group-level reason behind a validation failure, if any.
    #[must_use]
    pub fn group_error(&self) -> Option<&GroupError> {
        match self {
            Self::Validation { source, .. } => Some(source),
            Self::OverrideRejected(cause) => cause.group_error(),
            Self::Fragment { .. } | Self::Aggregate(_) => None,
        }
    }
}
