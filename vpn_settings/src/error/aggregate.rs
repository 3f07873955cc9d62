//! Aggregation container and iteration support for multiple `SettingsError` values.

use std::{error::Error, fmt};

use super::SettingsError;

/// Collection of [`SettingsError`]s produced by a single validation report.
///
/// # Examples
///
/// ```
/// use vpn_settings::{GroupError, SettingsError};
/// let e = SettingsError::try_aggregate(vec![
///     SettingsError::validation("dns", GroupError::Missing { field: "providers" }),
///     SettingsError::validation(
///         "firewall",
///         GroupError::PortOutOfRange { field: "input port", port: 0 },
///     ),
/// ]);
/// if let Some(SettingsError::Aggregate(agg)) = e {
///     assert_eq!(agg.len(), 2);
/// }
/// ```
#[derive(Debug, Default)]
pub struct AggregatedErrors(Vec<SettingsError>);

impl AggregatedErrors {
    /// Create a new aggregation from a vector of errors.
    #[must_use]
    pub const fn new(errors: Vec<SettingsError>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &SettingsError> {
        self.0.iter()
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the aggregation holds no errors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names of the failing groups, in report order.
    #[must_use]
    pub fn groups(&self) -> Vec<&'static str> {
        self.0.iter().filter_map(SettingsError::group).collect()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl<'a> IntoIterator for &'a AggregatedErrors {
    type Item = &'a SettingsError;
    type IntoIter = std::slice::Iter<'a, SettingsError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for AggregatedErrors {
    type Item = SettingsError;
    type IntoIter = std::vec::IntoIter<SettingsError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
