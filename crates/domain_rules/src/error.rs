//! Validation errors

use std::fmt;

use thiserror::Error;

use core_kernel::Meta;
use domain_ledger::Directive;

/// A non-leaf account has postings or pads attached directly to it
///
/// `source` is the location of the account's open directive, or a
/// synthetic `<leafonly>:0` location when the account was never opened.
#[derive(Debug, Clone, PartialEq)]
pub struct NonLeafTransactionError {
    pub source: Meta,
    pub message: String,
    pub entry: Option<Directive>,
}

impl NonLeafTransactionError {
    pub fn new(source: Meta, message: impl Into<String>, entry: Option<Directive>) -> Self {
        Self {
            source,
            message: message.into(),
            entry,
        }
    }
}

// Written by hand: thiserror would treat a field named `source` as the cause.
impl fmt::Display for NonLeafTransactionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.message)
    }
}

impl std::error::Error for NonLeafTransactionError {}

/// Any error a validation plugin can report against a ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    NonLeafTransaction(#[from] NonLeafTransactionError),
}

impl ValidationError {
    /// Location the error points at
    pub fn source_meta(&self) -> &Meta {
        match self {
            ValidationError::NonLeafTransaction(e) => &e.source,
        }
    }

    /// Human-readable description
    pub fn message(&self) -> &str {
        match self {
            ValidationError::NonLeafTransaction(e) => &e.message,
        }
    }

    /// The directive the error relates to, if resolved
    pub fn entry(&self) -> Option<&Directive> {
        match self {
            ValidationError::NonLeafTransaction(e) => e.entry.as_ref(),
        }
    }
}

/// Errors configuring the rules pipeline
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("Unknown plugin: {0}")]
    UnknownPlugin(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_file_and_line() {
        let error = NonLeafTransactionError::new(
            Meta::new("main.beancount", 3),
            "Non-leaf account 'Assets:MyBank' has transactions on it",
            None,
        );
        assert_eq!(
            error.to_string(),
            "main.beancount:3: Non-leaf account 'Assets:MyBank' has transactions on it"
        );
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let inner = NonLeafTransactionError::new(Meta::new("<leafonly>", 0), "message", None);
        let error = ValidationError::from(inner.clone());

        assert_eq!(error.to_string(), inner.to_string());
        assert_eq!(error.message(), "message");
        assert!(error.source_meta().is_synthetic());
        assert!(error.entry().is_none());
    }
}
