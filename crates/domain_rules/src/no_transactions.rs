//! Non-leaf account restriction
//!
//! Money may only move through leaf accounts. Any account that has a child
//! account anywhere in the ledger is a non-leaf account, and a posting or pad
//! attached directly to it is an error. The hierarchy is evaluated once over
//! the whole ledger, so opening a sub-account later retroactively turns
//! earlier postings on its parent into errors.
//!
//! Balance assertions are allowed on non-leaf accounts because they only
//! assert an aggregate; notes, documents, and open/close directives move no
//! value either.

use std::collections::HashMap;

use tracing::{debug, info, instrument};

use core_kernel::{Account, Meta};
use domain_ledger::{
    account_open_close, realize, Directive, DirectiveKind, OpenClose, RealAccount, RealPosting,
};

use crate::error::{NonLeafTransactionError, ValidationError};
use crate::plugin::{OptionsMap, Plugin};

/// Name the rule is registered under
pub const PLUGIN_NAME: &str = "non_leaf_account_restrictions.no_transactions";

/// File name used for errors on accounts that were never opened
pub const DEFAULT_SOURCE_FILENAME: &str = "<leafonly>";

/// Checks the entries and passes them through unchanged
///
/// Returns one error per non-leaf account that has a posting or pad attached
/// directly to it. The options map is accepted for host compatibility and
/// ignored.
///
/// # Example
///
/// ```rust,ignore
/// let (entries, errors) = no_transactions(entries, &OptionsMap::new());
/// assert!(errors.is_empty());
/// ```
pub fn no_transactions(
    entries: Vec<Directive>,
    _options: &OptionsMap,
) -> (Vec<Directive>, Vec<NonLeafTransactionError>) {
    let errors = check(&entries);
    (entries, errors)
}

/// Returns the violations found in the entries, in account order
#[instrument(skip_all, fields(entries = entries.len()))]
pub fn check(entries: &[Directive]) -> Vec<NonLeafTransactionError> {
    let real_root = realize(entries);
    let open_close = account_open_close(entries);

    let errors: Vec<_> = real_root
        .iter()
        .filter(|real_account| is_non_leaf_with_postings(real_account))
        .filter(|real_account| has_disallowed_directives(real_account))
        .filter_map(|real_account| real_account.account())
        .map(|account| non_leaf_transaction_error_for(account, &open_close))
        .collect();

    info!(
        accounts = real_root.len(),
        violations = errors.len(),
        "Checked non-leaf accounts"
    );
    errors
}

fn is_non_leaf_with_postings(real_account: &RealAccount<'_>) -> bool {
    !real_account.is_leaf() && !real_account.postings().is_empty()
}

fn has_disallowed_directives(real_account: &RealAccount<'_>) -> bool {
    real_account.postings().iter().any(is_disallowed)
}

fn is_disallowed(posting: &RealPosting<'_>) -> bool {
    match posting {
        RealPosting::Posting { .. } => true,
        RealPosting::Entry(entry) => match &entry.kind {
            DirectiveKind::Pad(_) => true,
            DirectiveKind::Open(_)
            | DirectiveKind::Close(_)
            | DirectiveKind::Transaction(_)
            | DirectiveKind::Balance(_)
            | DirectiveKind::Note(_)
            | DirectiveKind::Document(_) => false,
        },
    }
}

fn non_leaf_transaction_error_for(
    account: &Account,
    open_close: &HashMap<Account, OpenClose<'_>>,
) -> NonLeafTransactionError {
    let open_entry = open_close.get(account).and_then(|oc| oc.open);
    debug!(%account, opened = open_entry.is_some(), "Non-leaf account has transactions");

    NonLeafTransactionError::new(
        open_entry.map_or_else(|| Meta::new(DEFAULT_SOURCE_FILENAME, 0), |e| e.meta.clone()),
        format!("Non-leaf account '{account}' has transactions on it"),
        open_entry.cloned(),
    )
}

/// The rule as a pipeline plugin
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTransactions;

impl Plugin for NoTransactions {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn run(
        &self,
        entries: Vec<Directive>,
        options: &OptionsMap,
    ) -> (Vec<Directive>, Vec<ValidationError>) {
        let (entries, errors) = no_transactions(entries, options);
        (entries, errors.into_iter().map(ValidationError::from).collect())
    }
}
