//! Directive and posting types
//!
//! This module defines the already-parsed ledger entries that every rule
//! consumes. Entries are produced upstream and never mutated here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{Account, Amount, Commodity, Meta};

/// Flag of a completed transaction
pub const FLAG_OKAY: char = '*';

fn default_flag() -> char {
    FLAG_OKAY
}

/// A single dated ledger instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    /// Date the directive applies on
    pub date: NaiveDate,
    /// Source location
    pub meta: Meta,
    /// What the directive does
    #[serde(flatten)]
    pub kind: DirectiveKind,
}

/// The closed set of directive kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DirectiveKind {
    Open(Open),
    Close(Close),
    Transaction(Transaction),
    Pad(Pad),
    Balance(Balance),
    Note(Note),
    Document(Document),
}

/// Opens an account, optionally constrained to a set of commodities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Open {
    pub account: Account,
    #[serde(default)]
    pub currencies: Vec<Commodity>,
}

/// Closes an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Close {
    pub account: Account,
}

/// One account/amount line of a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub account: Account,
    /// Units may be elided and inferred by the host's booking step
    #[serde(default)]
    pub units: Option<Amount>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl Posting {
    /// Creates a posting with explicit units
    pub fn new(account: Account, units: Amount) -> Self {
        Self {
            account,
            units: Some(units),
            meta: None,
        }
    }

    /// Creates a posting whose amount is left for the host to infer
    pub fn elided(account: Account) -> Self {
        Self {
            account,
            units: None,
            meta: None,
        }
    }

    /// Attaches source metadata to the posting
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// A balanced set of postings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default = "default_flag")]
    pub flag: char,
    #[serde(default)]
    pub payee: Option<String>,
    pub narration: String,
    pub postings: Vec<Posting>,
}

impl Transaction {
    /// Creates a completed transaction with no postings
    pub fn new(narration: impl Into<String>) -> Self {
        Self {
            flag: FLAG_OKAY,
            payee: None,
            narration: narration.into(),
            postings: Vec::new(),
        }
    }

    /// Adds a posting
    pub fn posting(mut self, posting: Posting) -> Self {
        self.postings.push(posting);
        self
    }
}

/// Inserts a balancing transaction from `source_account` into `account`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pad {
    pub account: Account,
    pub source_account: Account,
}

/// Asserts the aggregate balance of an account and its sub-accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub account: Account,
    pub amount: Amount,
}

/// A free-form comment attached to an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub account: Account,
    pub comment: String,
}

/// Links an external document to an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub account: Account,
    pub filename: String,
}

impl Directive {
    /// Creates a directive
    pub fn new(date: NaiveDate, meta: Meta, kind: impl Into<DirectiveKind>) -> Self {
        Self {
            date,
            meta,
            kind: kind.into(),
        }
    }

    /// Lower-case name of the directive kind, as written in ledger files
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            DirectiveKind::Open(_) => "open",
            DirectiveKind::Close(_) => "close",
            DirectiveKind::Transaction(_) => "transaction",
            DirectiveKind::Pad(_) => "pad",
            DirectiveKind::Balance(_) => "balance",
            DirectiveKind::Note(_) => "note",
            DirectiveKind::Document(_) => "document",
        }
    }

    /// Every account the directive refers to, in declaration order
    ///
    /// A transaction lists each posting's account (duplicates included); a
    /// pad lists its target account then its source account.
    pub fn accounts(&self) -> Vec<&Account> {
        match &self.kind {
            DirectiveKind::Open(open) => vec![&open.account],
            DirectiveKind::Close(close) => vec![&close.account],
            DirectiveKind::Transaction(txn) => txn.postings.iter().map(|p| &p.account).collect(),
            DirectiveKind::Pad(pad) => vec![&pad.account, &pad.source_account],
            DirectiveKind::Balance(balance) => vec![&balance.account],
            DirectiveKind::Note(note) => vec![&note.account],
            DirectiveKind::Document(document) => vec![&document.account],
        }
    }
}

macro_rules! impl_into_kind {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for DirectiveKind {
                fn from(value: $variant) -> Self {
                    DirectiveKind::$variant(value)
                }
            }
        )*
    };
}

impl_into_kind!(Open, Close, Transaction, Pad, Balance, Note, Document);
