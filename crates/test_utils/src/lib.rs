//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! ledger rule test suite.
//!
//! # Modules
//!
//! - `builders`: Fluent construction of directive lists with line numbers
//! - `fixtures`: Ready-made ledgers for the common leaf/non-leaf scenarios
//! - `assertions`: Assertion helpers for rule errors
//! - `generators`: Property-based generators for account hierarchies

pub mod builders;
pub mod fixtures;
pub mod assertions;
pub mod generators;

pub use builders::*;
pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
