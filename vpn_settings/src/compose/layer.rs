//! Layer metadata for settings composition.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};

use crate::Settings;

/// Source a settings fragment was gathered from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum LayerProvenance {
    /// Values loaded from a configuration file.
    File,
    /// Values read from secret files.
    Secrets,
    /// Values collected from environment variables.
    Environment,
    /// Values supplied on the command line.
    Cli,
}

impl LayerProvenance {
    /// Rank of the source; higher ranks win over lower ones.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::File => 0,
            Self::Secrets => 1,
            Self::Environment => 2,
            Self::Cli => 3,
        }
    }
}

impl fmt::Display for LayerProvenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::File => "file",
            Self::Secrets => "secrets",
            Self::Environment => "environment",
            Self::Cli => "command line",
        })
    }
}

/// A settings fragment and where it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct SettingsLayer {
    provenance: LayerProvenance,
    settings: Settings,
    path: Option<Utf8PathBuf>,
}

impl SettingsLayer {
    /// Construct a layer from `settings` attributed to `provenance`.
    #[must_use]
    pub const fn new(provenance: LayerProvenance, settings: Settings) -> Self {
        Self {
            provenance,
            settings,
            path: None,
        }
    }

    /// Construct a layer originating from a configuration file.
    #[must_use]
    pub const fn file(settings: Settings, path: Option<Utf8PathBuf>) -> Self {
        Self {
            provenance: LayerProvenance::File,
            settings,
            path,
        }
    }

    /// Returns the provenance of the layer.
    #[must_use]
    pub const fn provenance(&self) -> LayerProvenance {
        self.provenance
    }

    /// Returns the associated path if this layer was sourced from a file.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    /// Borrow the fragment.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Consume the layer, returning its fragment.
    #[must_use]
    pub fn into_settings(self) -> Settings {
        self.settings
    }
}
