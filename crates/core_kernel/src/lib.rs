//! Core Kernel - Foundational value types for the ledger
//!
//! This crate provides the building blocks shared by every other crate:
//! - Hierarchical account paths (`Assets:MyBank:Rent`)
//! - Amounts with precise decimal arithmetic
//! - Source-location metadata attached to directives

pub mod account;
pub mod amount;
pub mod metadata;
pub mod error;

pub use account::{Account, ACCOUNT_SEPARATOR};
pub use amount::{Amount, AmountError, Commodity};
pub use metadata::Meta;
pub use error::CoreError;
