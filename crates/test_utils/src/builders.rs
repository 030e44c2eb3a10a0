//! Test Data Builders
//!
//! `LedgerBuilder` assembles a directive list the way a parsed ledger file
//! would look: every directive (and every posting line) gets the next line
//! number in a single synthetic file.

use chrono::NaiveDate;
use core_kernel::{Account, Amount, Commodity, Meta};
use domain_ledger::{
    Balance, Close, Directive, DirectiveKind, Document, Note, Open, Pad, Posting, Transaction,
};
use rust_decimal::Decimal;

/// File name given to built directives
pub const TEST_FILENAME: &str = "<test>";

/// Parses an account name, panicking on invalid input
pub fn account(name: &str) -> Account {
    Account::new(name).unwrap_or_else(|e| panic!("invalid test account {name:?}: {e}"))
}

/// Parses an ISO date, panicking on invalid input
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .unwrap_or_else(|e| panic!("invalid test date {value:?}: {e}"))
}

/// Creates an amount from a number and commodity symbol
pub fn amount(number: Decimal, currency: &str) -> Amount {
    let currency = Commodity::new(currency)
        .unwrap_or_else(|e| panic!("invalid test commodity {currency:?}: {e}"));
    Amount::new(number, currency)
}

/// Builder for a list of directives
pub struct LedgerBuilder {
    filename: String,
    next_line: u32,
    entries: Vec<Directive>,
}

impl Default for LedgerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerBuilder {
    /// Creates an empty ledger starting at line 1
    pub fn new() -> Self {
        Self {
            filename: TEST_FILENAME.to_string(),
            next_line: 1,
            entries: Vec::new(),
        }
    }

    /// Sets the file name used in metadata
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    fn meta(&mut self) -> Meta {
        let meta = Meta::new(self.filename.clone(), self.next_line);
        self.next_line += 1;
        meta
    }

    fn directive(mut self, on: &str, kind: impl Into<DirectiveKind>) -> Self {
        let meta = self.meta();
        self.entries.push(Directive::new(date(on), meta, kind));
        self
    }

    /// Adds `open <account> <currencies>`
    pub fn open(self, on: &str, name: &str, currencies: &[&str]) -> Self {
        let currencies = currencies
            .iter()
            .map(|c| Commodity::new(*c).unwrap_or_else(|e| panic!("invalid commodity: {e}")))
            .collect();
        self.directive(on, Open { account: account(name), currencies })
    }

    /// Adds `close <account>`
    pub fn close(self, on: &str, name: &str) -> Self {
        self.directive(on, Close { account: account(name) })
    }

    /// Adds a completed transaction with one posting per `(account, number, currency)`
    pub fn transaction(mut self, on: &str, narration: &str, postings: &[(&str, Decimal, &str)]) -> Self {
        let meta = self.meta();
        let mut txn = Transaction::new(narration);
        for (name, number, currency) in postings {
            let posting_meta = self.meta();
            txn = txn.posting(Posting::new(account(name), amount(*number, currency)).with_meta(posting_meta));
        }
        self.entries.push(Directive::new(date(on), meta, txn));
        self
    }

    /// Adds `pad <account> <source_account>`
    pub fn pad(self, on: &str, name: &str, source: &str) -> Self {
        self.directive(on, Pad { account: account(name), source_account: account(source) })
    }

    /// Adds `balance <account> <number> <currency>`
    pub fn balance(self, on: &str, name: &str, number: Decimal, currency: &str) -> Self {
        self.directive(on, Balance { account: account(name), amount: amount(number, currency) })
    }

    /// Adds `note <account> "<comment>"`
    pub fn note(self, on: &str, name: &str, comment: &str) -> Self {
        self.directive(on, Note { account: account(name), comment: comment.to_string() })
    }

    /// Adds `document <account> "<filename>"`
    pub fn document(self, on: &str, name: &str, filename: &str) -> Self {
        self.directive(on, Document { account: account(name), filename: filename.to_string() })
    }

    /// Appends a prepared directive as-is
    pub fn push(mut self, directive: Directive) -> Self {
        self.next_line = self.next_line.max(directive.meta.lineno + 1);
        self.entries.push(directive);
        self
    }

    /// Returns the directives in insertion order
    pub fn build(self) -> Vec<Directive> {
        self.entries
    }
}
