//! Command-line Host
//!
//! A minimal host for the validation plugins: it reads a ledger that was
//! already parsed and serialized as a JSON array of directives, runs the
//! configured plugins, and reports every error as `file:line: message`.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{check_ledger, config::CliConfig, report::format_errors};
//!
//! let result = check_ledger(&CliConfig::default(), "ledger.json".as_ref())?;
//! print!("{}", format_errors(&result.errors));
//! ```

pub mod config;
pub mod error;
pub mod report;

use std::path::Path;

use tracing::info;

use domain_ledger::Directive;
use domain_rules::{LoadResult, OptionsMap, PluginPipeline};

use crate::config::CliConfig;
use crate::error::CliError;

/// Reads a JSON-serialized directive list
///
/// # Errors
///
/// Returns `CliError::Read` if the file cannot be read and
/// `CliError::Decode` if it is not a valid directive list.
pub fn load_entries(path: &Path) -> Result<Vec<Directive>, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the ledger at `path` and runs the configured plugins over it
pub fn check_ledger(config: &CliConfig, path: &Path) -> Result<LoadResult, CliError> {
    let names = config.plugin_names();
    let pipeline = PluginPipeline::from_names(names.as_slice())?;
    let entries = load_entries(path)?;
    info!(path = %path.display(), entries = entries.len(), "Loaded ledger");

    Ok(pipeline.run(entries, &OptionsMap::new()))
}
