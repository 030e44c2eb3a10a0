//! Pre-built Test Fixtures
//!
//! Ready-made ledgers covering the leaf/non-leaf scenarios. Each fixture is
//! the directive list a host would hand the rule after loading the ledger.

use domain_ledger::Directive;
use rust_decimal_macros::dec;

use crate::builders::LedgerBuilder;

/// Fixture ledgers for the non-leaf restriction
pub struct LedgerFixtures;

impl LedgerFixtures {
    /// A parent and one child, both only opened
    pub fn opening_non_leaf_account() -> Vec<Directive> {
        LedgerBuilder::new()
            .open("1990-01-01", "Assets:MyBank", &["GBP"])
            .open("1990-01-01", "Assets:MyBank:Rent", &["GBP"])
            .build()
    }

    /// The parent is closed while its child stays open
    pub fn closing_non_leaf_account() -> Vec<Directive> {
        LedgerBuilder::new()
            .open("1990-01-01", "Assets:MyBank", &["GBP"])
            .open("1990-01-01", "Assets:MyBank:Rent", &["GBP"])
            .close("1990-01-02", "Assets:MyBank")
            .build()
    }

    /// A transaction touching only the leaf `Assets:MyBank:Rent`
    pub fn transaction_on_leaf_account() -> Vec<Directive> {
        LedgerBuilder::new()
            .open("1990-01-01", "Assets:MyBank", &["GBP"])
            .open("1990-01-01", "Assets:MyBank:Rent", &["GBP"])
            .open("1990-01-01", "Equity:OpeningBalances", &["GBP"])
            .transaction(
                "1990-01-02",
                "Opening balance",
                &[
                    ("Assets:MyBank:Rent", dec!(10.00), "GBP"),
                    ("Equity:OpeningBalances", dec!(-10.00), "GBP"),
                ],
            )
            .build()
    }

    /// A leaf transaction followed by a balance assertion on the parent
    pub fn balance_assertion_on_non_leaf_account() -> Vec<Directive> {
        LedgerBuilder::new()
            .open("1990-01-01", "Assets:MyBank", &["GBP"])
            .open("1990-01-01", "Assets:MyBank:Rent", &["GBP"])
            .open("1990-01-01", "Assets:MyBank:Food", &["GBP"])
            .open("1990-01-01", "Equity:OpeningBalances", &["GBP"])
            .transaction(
                "1990-01-02",
                "Opening balance",
                &[
                    ("Assets:MyBank:Rent", dec!(10.00), "GBP"),
                    ("Equity:OpeningBalances", dec!(-10.00), "GBP"),
                ],
            )
            .balance("1990-01-03", "Assets:MyBank", dec!(10.00), "GBP")
            .build()
    }

    /// A transaction posting directly to `Assets:MyBank`, which has two children
    pub fn transaction_on_non_leaf_account() -> Vec<Directive> {
        LedgerBuilder::new()
            .open("1990-01-01", "Assets:MyBank", &["GBP"])
            .open("1990-01-01", "Assets:MyBank:Rent", &["GBP"])
            .open("1990-01-01", "Assets:MyBank:Food", &["GBP"])
            .open("1990-01-01", "Equity:OpeningBalances", &["GBP"])
            .transaction(
                "1990-01-02",
                "Opening balance",
                &[
                    ("Assets:MyBank", dec!(10.00), "GBP"),
                    ("Equity:OpeningBalances", dec!(-10.00), "GBP"),
                ],
            )
            .build()
    }

    /// A transaction on `Assets:MyBank:MyAccount`, which is never opened but has children
    pub fn transaction_on_nested_non_leaf_account() -> Vec<Directive> {
        LedgerBuilder::new()
            .open("1990-01-01", "Assets:MyBank", &["GBP"])
            .open("1990-01-01", "Assets:MyBank:MyAccount:Rent", &["GBP"])
            .open("1990-01-01", "Assets:MyBank:MyAccount:Food", &["GBP"])
            .open("1990-01-01", "Equity:OpeningBalances", &["GBP"])
            .transaction(
                "1990-01-02",
                "Opening balance",
                &[
                    ("Assets:MyBank:MyAccount", dec!(10.00), "GBP"),
                    ("Equity:OpeningBalances", dec!(-10.00), "GBP"),
                ],
            )
            .build()
    }

    /// `Assets:MyBank` is a leaf when posted to and gains a child afterwards
    pub fn transaction_on_previously_leaf_account() -> Vec<Directive> {
        LedgerBuilder::new()
            .open("1990-01-01", "Assets:MyBank", &["GBP"])
            .open("1990-01-01", "Equity:OpeningBalances", &["GBP"])
            .transaction(
                "1990-01-02",
                "Opening balance",
                &[
                    ("Assets:MyBank", dec!(10.00), "GBP"),
                    ("Equity:OpeningBalances", dec!(-10.00), "GBP"),
                ],
            )
            .open("1990-01-03", "Assets:MyBank:MyAccount", &["GBP"])
            .build()
    }

    /// A pad into the non-leaf `Assets:MyBank`
    pub fn padding_on_non_leaf_account() -> Vec<Directive> {
        LedgerBuilder::new()
            .open("1990-01-01", "Assets:MyBank", &["GBP"])
            .open("1990-01-01", "Assets:MyBank:Rent", &["GBP"])
            .open("1990-01-01", "Equity:OpeningBalances", &["GBP"])
            .pad("1990-01-01", "Assets:MyBank", "Equity:OpeningBalances")
            .balance("1990-01-01", "Assets:MyBank", dec!(10.00), "GBP")
            .build()
    }

    /// A pad into the leaf `Assets:MyBank:Rent`
    pub fn padding_on_leaf_account() -> Vec<Directive> {
        LedgerBuilder::new()
            .open("1990-01-01", "Assets:MyBank", &["GBP"])
            .open("1990-01-01", "Assets:MyBank:Rent", &["GBP"])
            .open("1990-01-01", "Equity:OpeningBalances", &["GBP"])
            .pad("1990-01-01", "Assets:MyBank:Rent", "Equity:OpeningBalances")
            .balance("1990-01-02", "Assets:MyBank:Rent", dec!(10.00), "GBP")
            .build()
    }

    /// A note on the non-leaf `Assets:MyBank`
    pub fn note_on_non_leaf_account() -> Vec<Directive> {
        LedgerBuilder::new()
            .open("1990-01-01", "Assets:MyBank", &["GBP"])
            .open("1990-01-01", "Assets:MyBank:Rent", &["GBP"])
            .note("1990-01-02", "Assets:MyBank", "This is just a placeholder account")
            .build()
    }
}
