//! Leaf-only ledger checker
//!
//! Runs the validation plugins over a ledger serialized as a JSON array of
//! directives and exits non-zero when any error is found.
//!
//! # Usage
//!
//! ```bash
//! leafonly ledger.json
//!
//! # Or configure through the environment
//! LEAFONLY_LEDGER_PATH=ledger.json LEAFONLY_LOG_FORMAT=json leafonly
//! ```
//!
//! # Environment Variables
//!
//! * `LEAFONLY_LEDGER_PATH` - Ledger to check when no argument is given
//! * `LEAFONLY_PLUGINS` - Comma-separated plugins to run (default: the non-leaf rule)
//! * `LEAFONLY_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `LEAFONLY_LOG_FORMAT` - `plain` or `json` (default: plain)

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interface_cli::config::{CliConfig, LogFormat};
use interface_cli::report::{format_errors, summary};
use interface_cli::check_ledger;

fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env().context("loading LEAFONLY_* configuration")?;
    init_tracing(&config.log_level, config.log_format);

    let path = config.resolve_ledger_path(std::env::args_os().nth(1).map(PathBuf::from))?;
    let result = check_ledger(&config, &path)?;

    eprint!("{}", format_errors(&result.errors));
    println!("{}", summary(&result));

    if result.is_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Initializes the tracing subscriber, writing to stderr
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Plain => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(true))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}
