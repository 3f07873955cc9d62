//! Settings for the program's own logging.

use std::fmt;

use serde::Deserialize;

use crate::group::helpers::{default_option, merge_option, override_option};
use crate::group::{SettingGroup, Validate, ValidationContext};
use crate::{GroupError, Node};

/// Minimum severity of emitted log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose diagnostics.
    Debug,
    /// Normal operation.
    #[default]
    Info,
    /// Recoverable problems.
    Warn,
    /// Failures.
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        })
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

/// Log settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Log {
    /// Minimum level logged.
    pub level: Option<LogLevel>,
}

impl Validate for Log {
    fn validate(&self, _ctx: &ValidationContext<'_>) -> Result<(), GroupError> {
        Ok(())
    }
}

impl SettingGroup for Log {
    const NAME: &'static str = "log";

    fn merge_with(&mut self, other: Self) {
        merge_option(&mut self.level, other.level);
    }

    fn override_with(&mut self, other: Self) {
        override_option(&mut self.level, other.level);
    }

    fn set_defaults(&mut self) {
        default_option(&mut self.level, LogLevel::Info);
    }

    fn to_node(&self) -> Node {
        let mut node = Node::new("Log settings:");
        node.line(format!("Log level: {}", self.level.unwrap_or_default()));
        node
    }
}
