//! Host configuration

use std::path::PathBuf;

use config::builder::{ConfigBuilder, DefaultState};
use serde::Deserialize;

use domain_rules::PLUGIN_NAME;

use crate::error::CliError;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

/// Host configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level or `EnvFilter` directive
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Ledger to check when none is given on the command line
    pub ledger_path: Option<PathBuf>,
    /// Comma-separated plugin names, run in order
    pub plugins: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Plain,
            ledger_path: None,
            plugins: PLUGIN_NAME.to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from `LEAFONLY_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` when a variable cannot be deserialized, for
    /// example an unknown `LEAFONLY_LOG_FORMAT`.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_builder(
            config::Config::builder().add_source(config::Environment::with_prefix("LEAFONLY")),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, CliError> {
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Plugin names in run order, skipping blanks
    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Picks the ledger path: the command-line argument wins over configuration
    pub fn resolve_ledger_path(&self, arg: Option<PathBuf>) -> Result<PathBuf, CliError> {
        arg.or_else(|| self.ledger_path.clone())
            .ok_or(CliError::MissingLedgerPath)
    }
}
