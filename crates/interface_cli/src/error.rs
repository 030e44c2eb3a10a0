//! Host error handling

use std::path::PathBuf;

use thiserror::Error;

use domain_rules::RulesError;

/// Errors that stop the host before or while loading a ledger
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("No ledger given: pass a path or set LEAFONLY_LEDGER_PATH")]
    MissingLedgerPath,

    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Rules(#[from] RulesError),
}
