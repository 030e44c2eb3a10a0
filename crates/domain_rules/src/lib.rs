//! Validation Rules Domain
//!
//! This crate implements ledger validation rules in the style of host-ledger
//! plugins: each rule receives the full, already-parsed entry list plus an
//! options map, and returns the entries together with any errors it found.
//!
//! # Rules
//!
//! - **no_transactions**: rejects postings and pad directives on any account
//!   that has child accounts, so monetary activity only happens on leaves.
//!   Balance assertions, notes, documents, and open/close directives on
//!   parent accounts stay allowed.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_rules::{PluginPipeline, OptionsMap};
//!
//! let result = PluginPipeline::with_builtins().run(entries, &OptionsMap::new());
//! for error in &result.errors {
//!     eprintln!("{error}");
//! }
//! ```

pub mod error;
pub mod plugin;
pub mod no_transactions;
pub mod pipeline;

pub use error::{NonLeafTransactionError, RulesError, ValidationError};
pub use plugin::{OptionsMap, Plugin};
pub use no_transactions::{no_transactions, NoTransactions, DEFAULT_SOURCE_FILENAME, PLUGIN_NAME};
pub use pipeline::{LoadResult, PluginPipeline};
