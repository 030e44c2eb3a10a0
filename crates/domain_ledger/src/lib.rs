//! Ledger Domain - Directives and Account Realization
//!
//! This crate holds the already-parsed form of a plain-text double-entry
//! ledger and the derived views that validation rules work against.
//!
//! # Key Concepts
//!
//! - **Directive**: a dated ledger instruction (open, close, transaction, pad,
//!   balance, note, document) carrying source metadata
//! - **Posting**: a single account/amount line within a transaction
//! - **Realization**: the account hierarchy built from a flat directive list,
//!   with every directive attached to the exact account it names
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_ledger::realization::realize;
//!
//! let real_root = realize(&entries);
//! for real_account in real_root.iter() {
//!     println!("{:?} has {} children", real_account.account(), real_account.len());
//! }
//! ```

pub mod directive;
pub mod realization;
pub mod getters;

pub use directive::{
    Balance, Close, Directive, DirectiveKind, Document, Note, Open, Pad, Posting, Transaction,
};
pub use realization::{realize, NodeId, RealAccount, RealPosting, Realization};
pub use getters::{account_open_close, get_accounts, OpenClose};
