//! Scenario tests for the non-leaf account restriction

use domain_rules::{no_transactions, OptionsMap, DEFAULT_SOURCE_FILENAME};
use rust_decimal_macros::dec;
use test_utils::{
    assert_no_violations, assert_single_violation_for, assert_violation_accounts, LedgerBuilder,
    LedgerFixtures, TEST_FILENAME,
};

// ============================================================================
// Allowed directives
// ============================================================================

mod allowed_tests {
    use super::*;

    #[test]
    fn test_should_allow_opening_non_leaf_account() {
        let (_, errors) = no_transactions(LedgerFixtures::opening_non_leaf_account(), &OptionsMap::new());
        assert_no_violations(&errors);
    }

    #[test]
    fn test_should_allow_closing_non_leaf_account() {
        let (_, errors) = no_transactions(LedgerFixtures::closing_non_leaf_account(), &OptionsMap::new());
        assert_no_violations(&errors);
    }

    #[test]
    fn test_should_allow_transaction_on_leaf_account() {
        let (_, errors) = no_transactions(LedgerFixtures::transaction_on_leaf_account(), &OptionsMap::new());
        assert_no_violations(&errors);
    }

    #[test]
    fn test_should_allow_balance_assertion_on_non_leaf_account() {
        let (_, errors) = no_transactions(
            LedgerFixtures::balance_assertion_on_non_leaf_account(),
            &OptionsMap::new(),
        );
        assert_no_violations(&errors);
    }

    #[test]
    fn test_should_allow_padding_on_leaf_accounts() {
        let (_, errors) = no_transactions(LedgerFixtures::padding_on_leaf_account(), &OptionsMap::new());
        assert_no_violations(&errors);
    }

    #[test]
    fn test_should_allow_notes_on_non_leaf_accounts() {
        let (_, errors) = no_transactions(LedgerFixtures::note_on_non_leaf_account(), &OptionsMap::new());
        assert_no_violations(&errors);
    }

    #[test]
    fn test_should_allow_documents_on_non_leaf_accounts() {
        let entries = LedgerBuilder::new()
            .open("1990-01-01", "Assets:MyBank", &["GBP"])
            .open("1990-01-01", "Assets:MyBank:Rent", &["GBP"])
            .document("1990-01-02", "Assets:MyBank", "statements/1990-01.pdf")
            .build();

        let (_, errors) = no_transactions(entries, &OptionsMap::new());
        assert_no_violations(&errors);
    }

    #[test]
    fn test_grouping_account_without_directives_is_ignored() {
        // `Assets` and `Assets:MyBank:MyAccount` exist only as grouping points.
        let entries = LedgerBuilder::new()
            .open("1990-01-01", "Assets:MyBank:MyAccount:Rent", &["GBP"])
            .open("1990-01-01", "Equity:OpeningBalances", &["GBP"])
            .transaction(
                "1990-01-02",
                "Opening balance",
                &[
                    ("Assets:MyBank:MyAccount:Rent", dec!(10.00), "GBP"),
                    ("Equity:OpeningBalances", dec!(-10.00), "GBP"),
                ],
            )
            .build();

        let (_, errors) = no_transactions(entries, &OptionsMap::new());
        assert_no_violations(&errors);
    }
}

// ============================================================================
// Disallowed directives
// ============================================================================

mod disallowed_tests {
    use super::*;

    #[test]
    fn test_should_not_allow_transaction_on_non_leaf_account() {
        let (_, errors) = no_transactions(LedgerFixtures::transaction_on_non_leaf_account(), &OptionsMap::new());
        let error = assert_single_violation_for(&errors, "Assets:MyBank");

        assert_eq!(error.message, "Non-leaf account 'Assets:MyBank' has transactions on it");
        assert_eq!(error.source.filename, TEST_FILENAME);
        assert_eq!(error.source.lineno, 1);
    }

    #[test]
    fn test_should_not_allow_transaction_on_nested_non_leaf_account() {
        let (_, errors) = no_transactions(
            LedgerFixtures::transaction_on_nested_non_leaf_account(),
            &OptionsMap::new(),
        );
        let error = assert_single_violation_for(&errors, "Assets:MyBank:MyAccount");

        // Never opened, so the location falls back to the marker file.
        assert_eq!(error.source.filename, DEFAULT_SOURCE_FILENAME);
        assert_eq!(error.source.lineno, 0);
        assert!(error.entry.is_none());
    }

    #[test]
    fn test_should_not_allow_transaction_on_previously_leaf_account() {
        let (_, errors) = no_transactions(
            LedgerFixtures::transaction_on_previously_leaf_account(),
            &OptionsMap::new(),
        );
        assert_single_violation_for(&errors, "Assets:MyBank");
    }

    #[test]
    fn test_should_not_allow_padding_on_non_leaf_account() {
        let (_, errors) = no_transactions(LedgerFixtures::padding_on_non_leaf_account(), &OptionsMap::new());
        assert_single_violation_for(&errors, "Assets:MyBank");
    }

    #[test]
    fn test_one_violation_per_account_not_per_posting() {
        let entries = LedgerBuilder::new()
            .open("1990-01-01", "Assets:MyBank", &["GBP"])
            .open("1990-01-01", "Assets:MyBank:Rent", &["GBP"])
            .open("1990-01-01", "Equity:OpeningBalances", &["GBP"])
            .transaction(
                "1990-01-02",
                "First",
                &[("Assets:MyBank", dec!(10.00), "GBP"), ("Equity:OpeningBalances", dec!(-10.00), "GBP")],
            )
            .transaction(
                "1990-01-03",
                "Second",
                &[("Assets:MyBank", dec!(5.00), "GBP"), ("Equity:OpeningBalances", dec!(-5.00), "GBP")],
            )
            .pad("1990-01-04", "Assets:MyBank", "Equity:OpeningBalances")
            .build();

        let (_, errors) = no_transactions(entries, &OptionsMap::new());
        assert_single_violation_for(&errors, "Assets:MyBank");
    }

    #[test]
    fn test_all_violations_collected_in_account_order() {
        let entries = LedgerBuilder::new()
            .open("1990-01-01", "Expenses:Food", &["GBP"])
            .open("1990-01-01", "Expenses:Food:Groceries", &["GBP"])
            .open("1990-01-01", "Assets:MyBank", &["GBP"])
            .open("1990-01-01", "Assets:MyBank:Rent", &["GBP"])
            .transaction(
                "1990-01-02",
                "Shopping",
                &[("Expenses:Food", dec!(10.00), "GBP"), ("Assets:MyBank", dec!(-10.00), "GBP")],
            )
            .build();

        let (_, errors) = no_transactions(entries, &OptionsMap::new());
        assert_violation_accounts(&errors, &["Assets:MyBank", "Expenses:Food"]);
    }

    #[test]
    fn test_closed_child_still_makes_parent_non_leaf() {
        let entries = LedgerBuilder::new()
            .open("1990-01-01", "Assets:MyBank", &["GBP"])
            .open("1990-01-01", "Equity:OpeningBalances", &["GBP"])
            .open("1990-01-01", "Assets:MyBank:Temp", &["GBP"])
            .close("1990-01-02", "Assets:MyBank:Temp")
            .transaction(
                "1990-01-03",
                "Opening balance",
                &[("Assets:MyBank", dec!(10.00), "GBP"), ("Equity:OpeningBalances", dec!(-10.00), "GBP")],
            )
            .build();

        let (_, errors) = no_transactions(entries, &OptionsMap::new());
        assert_single_violation_for(&errors, "Assets:MyBank");
    }

    #[test]
    fn test_first_open_directive_is_reported() {
        let entries = LedgerBuilder::new()
            .open("1990-01-01", "Assets:MyBank", &["GBP"])
            .open("1990-01-01", "Assets:MyBank:Rent", &["GBP"])
            .open("1990-02-01", "Assets:MyBank", &["GBP"])
            .transaction(
                "1990-02-02",
                "Rent",
                &[("Assets:MyBank", dec!(10.00), "GBP"), ("Assets:MyBank:Rent", dec!(-10.00), "GBP")],
            )
            .build();

        let (returned, errors) = no_transactions(entries, &OptionsMap::new());
        let error = assert_single_violation_for(&errors, "Assets:MyBank");
        assert_eq!(error.entry.as_ref(), Some(&returned[0]));
    }
}

// ============================================================================
// Pass-through
// ============================================================================

mod pass_through_tests {
    use super::*;

    #[test]
    fn test_entries_are_returned_unchanged_even_when_invalid() {
        let entries = LedgerFixtures::transaction_on_non_leaf_account();
        let (returned, errors) = no_transactions(entries.clone(), &OptionsMap::new());

        assert_eq!(returned, entries);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_options_are_ignored() {
        let mut options = OptionsMap::new();
        options.insert("operating_currency".into(), serde_json::json!(["GBP"]));

        let (_, with_options) = no_transactions(LedgerFixtures::transaction_on_non_leaf_account(), &options);
        let (_, without) = no_transactions(LedgerFixtures::transaction_on_non_leaf_account(), &OptionsMap::new());
        assert_eq!(with_options, without);
    }

    #[test]
    fn test_empty_ledger() {
        let (returned, errors) = no_transactions(Vec::new(), &OptionsMap::new());
        assert!(returned.is_empty());
        assert_no_violations(&errors);
    }
}
