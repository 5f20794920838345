//! Front end configuration.
//!
//! Loaded via the `config` crate from an optional TOML file, overridden by
//! `URBANEASE__*` environment variables (`__` separates nesting levels, so
//! `URBANEASE__SCRIPT__PROMPTS__NAME` replaces the name prompt).

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use urbanease_conversation::Script;

/// How messages are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `bot> text` lines for people.
    #[default]
    Plain,
    /// One JSON-encoded message per line for other programs.
    Json,
}

/// Front end configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WidgetConfig {
    /// Assistant lines and keyword table.
    #[serde(default)]
    pub script: Script,

    #[serde(default)]
    pub output: OutputFormat,
}

fn environment() -> Environment {
    Environment::with_prefix("URBANEASE")
        .prefix_separator("__")
        .separator("__")
}

impl WidgetConfig {
    /// Loads configuration from `file` (if given) and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or a value has the wrong
    /// shape.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(file, environment())
    }

    fn load_with(file: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        builder.add_source(env).build()?.try_deserialize()
    }
}
