//! Lookups derived from a flat list of entries

use std::collections::{BTreeSet, HashMap};

use core_kernel::Account;
use crate::directive::{Directive, DirectiveKind};

/// The open and close directives of one account
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenClose<'a> {
    pub open: Option<&'a Directive>,
    pub close: Option<&'a Directive>,
}

/// Maps each account to its first open and first close directive
///
/// Accounts that are only ever closed still get an entry, with `open` unset.
/// Repeated open or close directives after the first are ignored.
pub fn account_open_close(entries: &[Directive]) -> HashMap<Account, OpenClose<'_>> {
    let mut open_close: HashMap<Account, OpenClose<'_>> = HashMap::new();

    for entry in entries {
        match &entry.kind {
            DirectiveKind::Open(open) => {
                let slot = open_close.entry(open.account.clone()).or_default();
                if slot.open.is_none() {
                    slot.open = Some(entry);
                }
            }
            DirectiveKind::Close(close) => {
                let slot = open_close.entry(close.account.clone()).or_default();
                if slot.close.is_none() {
                    slot.close = Some(entry);
                }
            }
            _ => {}
        }
    }

    open_close
}

/// Every account referenced anywhere in the entries, sorted
pub fn get_accounts(entries: &[Directive]) -> BTreeSet<Account> {
    entries
        .iter()
        .flat_map(Directive::accounts)
        .cloned()
        .collect()
}
