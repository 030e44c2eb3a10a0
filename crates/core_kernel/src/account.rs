//! Hierarchical account names
//!
//! An account name is a colon-separated list of components such as
//! `Assets:MyBank:Rent`. Only the parent/child containment of names matters
//! to the rest of the system; ordering is plain lexicographic string order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Separator between account components
pub const ACCOUNT_SEPARATOR: char = ':';

/// A validated account path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Account(String);

impl Account {
    /// Parses and validates an account name
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidAccount` if the name is empty, has an empty
    /// component, or contains whitespace.
    ///
    /// # Example
    ///
    /// ```rust
    /// use core_kernel::Account;
    ///
    /// let account = Account::new("Assets:MyBank:Rent").unwrap();
    /// assert_eq!(account.leaf_name(), "Rent");
    /// assert_eq!(account.parent().unwrap().as_str(), "Assets:MyBank");
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::invalid_account(name, "name is empty"));
        }
        if name.split(ACCOUNT_SEPARATOR).any(str::is_empty) {
            return Err(CoreError::invalid_account(name, "empty component"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(CoreError::invalid_account(name, "contains whitespace"));
        }
        Ok(Self(name))
    }

    /// Returns the full name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the components, root first
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split(ACCOUNT_SEPARATOR)
    }

    /// Number of components
    pub fn depth(&self) -> usize {
        self.components().count()
    }

    /// Last component
    pub fn leaf_name(&self) -> &str {
        self.0
            .rsplit_once(ACCOUNT_SEPARATOR)
            .map_or(self.0.as_str(), |(_, leaf)| leaf)
    }

    /// The enclosing account, or None for a top-level account
    pub fn parent(&self) -> Option<Account> {
        self.0
            .rsplit_once(ACCOUNT_SEPARATOR)
            .map(|(parent, _)| Account(parent.to_string()))
    }

    /// All enclosing accounts, nearest first
    pub fn ancestors(&self) -> Vec<Account> {
        let mut ancestors = Vec::new();
        let mut current = self.parent();
        while let Some(account) = current {
            current = account.parent();
            ancestors.push(account);
        }
        ancestors
    }

    /// Returns true if `other` lies strictly below this account
    pub fn is_ancestor_of(&self, other: &Account) -> bool {
        other
            .0
            .strip_prefix(self.0.as_str())
            .is_some_and(|rest| rest.starts_with(ACCOUNT_SEPARATOR))
    }

    /// Appends a component
    pub fn join(&self, component: &str) -> Result<Account, CoreError> {
        Account::new(format!("{}{}{}", self.0, ACCOUNT_SEPARATOR, component))
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Account {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Account::new(s)
    }
}

impl TryFrom<String> for Account {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Account::new(value)
    }
}

impl From<Account> for String {
    fn from(account: Account) -> String {
        account.0
    }
}

impl AsRef<str> for Account {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(name: &str) -> Account {
        Account::new(name).unwrap()
    }

    #[test]
    fn test_components() {
        let a = account("Assets:MyBank:Rent");
        assert_eq!(a.components().collect::<Vec<_>>(), vec!["Assets", "MyBank", "Rent"]);
        assert_eq!(a.depth(), 3);
    }

    #[test]
    fn test_top_level_has_no_parent() {
        assert_eq!(account("Assets").parent(), None);
        assert_eq!(account("Assets").leaf_name(), "Assets");
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let ancestors = account("Assets:MyBank:MyAccount:Rent").ancestors();
        let names: Vec<_> = ancestors.iter().map(Account::as_str).collect();
        assert_eq!(names, vec!["Assets:MyBank:MyAccount", "Assets:MyBank", "Assets"]);
    }

    #[test]
    fn test_is_ancestor_of_requires_component_boundary() {
        assert!(account("Assets:MyBank").is_ancestor_of(&account("Assets:MyBank:Rent")));
        assert!(!account("Assets:MyBank").is_ancestor_of(&account("Assets:MyBankExtra")));
        assert!(!account("Assets:MyBank").is_ancestor_of(&account("Assets:MyBank")));
    }

    #[test]
    fn test_invalid_names() {
        assert!(Account::new("").is_err());
        assert!(Account::new("Assets::Rent").is_err());
        assert!(Account::new("Assets:").is_err());
        assert!(Account::new("Assets:My Bank").is_err());
    }

    #[test]
    fn test_serde_validates() {
        let parsed: Account = serde_json::from_str("\"Assets:MyBank\"").unwrap();
        assert_eq!(parsed, account("Assets:MyBank"));
        assert!(serde_json::from_str::<Account>("\"Assets::\"").is_err());
    }
}
