//! Builder folding settings layers together.

use std::cmp::Reverse;

use camino::Utf8PathBuf;
use serde_json::Value;

use crate::{Settings, SettingsResult};

use super::{LayerProvenance, SettingsLayer, fragment};

/// Builder that accumulates [`SettingsLayer`] instances.
///
/// Layers may be pushed in any order. When composed, a layer with higher
/// [`LayerProvenance::precedence`] wins over lower ones, and among layers of
/// the same provenance the one pushed last wins.
#[derive(Debug, Default)]
pub struct SettingsComposer {
    layers: Vec<SettingsLayer>,
}

impl SettingsComposer {
    /// Create an empty composer.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Create a composer with preallocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layers: Vec::with_capacity(capacity),
        }
    }

    /// Push a configuration file layer.
    pub fn push_file(&mut self, settings: Settings, path: Option<Utf8PathBuf>) {
        self.push_layer(SettingsLayer::file(settings, path));
    }

    /// Push a secret files layer.
    pub fn push_secrets(&mut self, settings: Settings) {
        self.push_layer(SettingsLayer::new(LayerProvenance::Secrets, settings));
    }

    /// Push an environment layer.
    pub fn push_environment(&mut self, settings: Settings) {
        self.push_layer(SettingsLayer::new(LayerProvenance::Environment, settings));
    }

    /// Push a CLI layer.
    pub fn push_cli(&mut self, settings: Settings) {
        self.push_layer(SettingsLayer::new(LayerProvenance::Cli, settings));
    }

    /// Push an arbitrary layer.
    pub fn push_layer(&mut self, layer: SettingsLayer) {
        self.layers.push(layer);
    }

    /// Deserialise `value` and push it as a layer from `provenance`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SettingsError::Fragment`] when `value` does not
    /// describe settings; nothing is pushed in that case.
    pub fn push_value(&mut self, provenance: LayerProvenance, value: Value) -> SettingsResult<()> {
        let settings = fragment(provenance, value)?;
        self.push_layer(SettingsLayer::new(provenance, settings));
        Ok(())
    }

    /// Layers accumulated so far, in push order.
    #[must_use]
    pub fn layers(&self) -> &[SettingsLayer] {
        &self.layers
    }

    /// Fold every layer into one aggregate and fill the rest with defaults.
    ///
    /// The result is not validated.
    #[must_use]
    pub fn compose(self) -> Settings {
        let mut layers = self.layers;
        layers.reverse();
        layers.sort_by_key(|layer| Reverse(layer.provenance().precedence()));

        let mut settings = Settings::default();
        for layer in layers {
            tracing::debug!(provenance = %layer.provenance(), "merging settings layer");
            settings.merge_with(layer.into_settings());
        }
        settings.set_defaults();
        settings
    }
}
