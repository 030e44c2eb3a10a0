//! Custom Test Assertions
//!
//! Assertion helpers for rule errors that print the offending messages on
//! failure instead of a bare length mismatch.

use domain_rules::{LoadResult, NonLeafTransactionError};

fn messages(errors: &[NonLeafTransactionError]) -> Vec<&str> {
    errors.iter().map(|e| e.message.as_str()).collect()
}

/// Extracts the quoted account name from a non-leaf error message
pub fn violation_account(error: &NonLeafTransactionError) -> Option<&str> {
    let (_, rest) = error.message.split_once('\'')?;
    let (account, _) = rest.split_once('\'')?;
    Some(account)
}

/// Asserts that the rule found nothing
///
/// # Panics
///
/// Panics listing every message if any error is present
pub fn assert_no_violations(errors: &[NonLeafTransactionError]) {
    assert!(
        errors.is_empty(),
        "Expected no violations, got {:?}",
        messages(errors)
    );
}

/// Asserts exactly one error whose message names `account`
///
/// # Returns
///
/// The single error, for further checks
pub fn assert_single_violation_for<'e>(
    errors: &'e [NonLeafTransactionError],
    account: &str,
) -> &'e NonLeafTransactionError {
    assert_eq!(
        errors.len(),
        1,
        "Expected exactly one violation for {account}, got {:?}",
        messages(errors)
    );
    let error = &errors[0];
    assert_eq!(
        violation_account(error),
        Some(account),
        "Violation names the wrong account: {}",
        error.message
    );
    error
}

/// Asserts that the errors name exactly `accounts`, in order
pub fn assert_violation_accounts(errors: &[NonLeafTransactionError], accounts: &[&str]) {
    let actual: Vec<_> = errors.iter().filter_map(violation_account).collect();
    assert_eq!(actual, accounts, "Violations: {:?}", messages(errors));
}

/// Asserts that the pipeline rejected the ledger
pub fn assert_ledger_invalid(result: &LoadResult) {
    assert!(
        !result.is_valid(),
        "Expected the ledger to be rejected, but no plugin reported an error"
    );
}
