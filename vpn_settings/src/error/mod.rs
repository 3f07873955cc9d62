//! Error types produced by settings validation and composition.

mod aggregate;
mod constructors;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::{GroupError, SettingsError};

/// Result alias for operations over the whole settings aggregate.
pub type SettingsResult<T> = Result<T, SettingsError>;
