//! Provider data lookups consumed during VPN validation.

use std::collections::HashMap;

/// Server filter values a provider offers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChoices {
    /// Country names.
    pub countries: Vec<String>,
    /// Region names.
    pub regions: Vec<String>,
    /// City names.
    pub cities: Vec<String>,
    /// Internet service provider names.
    pub isps: Vec<String>,
    /// Server names.
    pub names: Vec<String>,
    /// Server hostnames.
    pub hostnames: Vec<String>,
}

/// Source of provider-specific data.
///
/// Implementations are passed in for the duration of a single validation or
/// override call; settings never cache or retain them.
pub trait Storage {
    /// Filter values available for `provider`.
    fn filter_choices(&self, provider: &str) -> FilterChoices;
}

/// In-memory [`Storage`] keyed by case-insensitive provider name.
///
/// Providers without an entry report empty choices.
///
/// ```
/// use vpn_settings::{FilterChoices, MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::default();
/// storage.insert(
///     "Mullvad",
///     FilterChoices { countries: vec!["Sweden".into()], ..FilterChoices::default() },
/// );
/// assert_eq!(storage.filter_choices("mullvad").countries, ["Sweden"]);
/// assert!(storage.filter_choices("ivpn").countries.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    providers: HashMap<String, FilterChoices>,
}

impl MemoryStorage {
    /// Register the choices offered by `provider`, replacing earlier ones.
    pub fn insert(&mut self, provider: &str, choices: FilterChoices) -> &mut Self {
        self.providers.insert(provider.to_lowercase(), choices);
        self
    }
}

impl Storage for MemoryStorage {
    fn filter_choices(&self, provider: &str) -> FilterChoices {
        self.providers
            .get(&provider.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }
}
