//! Property-Based Test Generators
//!
//! Provides proptest strategies for random account hierarchies. Components
//! are drawn from a small pool so that generated paths often share prefixes
//! and some generated accounts end up as parents of others.

use std::collections::BTreeSet;

use core_kernel::Account;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for a top-level account type
pub fn root_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["Assets", "Liabilities", "Equity", "Income", "Expenses"])
}

/// Strategy for a single account component
pub fn component_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["Bank", "Cash", "Rent", "Food", "Savings"])
}

/// Strategy for one account path of depth 2 to 4
pub fn account_strategy() -> impl Strategy<Value = Account> {
    (root_strategy(), prop::collection::vec(component_strategy(), 1..4)).prop_map(
        |(root, components)| {
            let name = std::iter::once(root)
                .chain(components)
                .collect::<Vec<_>>()
                .join(":");
            Account::new(name).unwrap_or_else(|e| panic!("generated invalid account: {e}"))
        },
    )
}

/// Strategy for a non-empty set of distinct accounts
pub fn account_set_strategy() -> impl Strategy<Value = BTreeSet<Account>> {
    prop::collection::btree_set(account_strategy(), 1..12)
}

/// Strategy for positive amounts with two decimal places
pub fn positive_number_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Accounts in the set that have no other account of the set below them
pub fn leaf_accounts(accounts: &BTreeSet<Account>) -> Vec<Account> {
    accounts
        .iter()
        .filter(|a| !accounts.iter().any(|other| a.is_ancestor_of(other)))
        .cloned()
        .collect()
}

/// Accounts in the set that are parents of another account of the set
pub fn non_leaf_accounts(accounts: &BTreeSet<Account>) -> Vec<Account> {
    accounts
        .iter()
        .filter(|a| accounts.iter().any(|other| a.is_ancestor_of(other)))
        .cloned()
        .collect()
}
