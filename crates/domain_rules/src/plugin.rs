//! The plugin interface rules implement

use std::collections::BTreeMap;

use domain_ledger::Directive;

use crate::error::{RulesError, ValidationError};
use crate::no_transactions::{NoTransactions, PLUGIN_NAME};

/// Host options passed to every plugin
pub type OptionsMap = BTreeMap<String, serde_json::Value>;

/// A validation or transformation step run by the host after parsing
///
/// A plugin receives the complete entry list and returns the entries the
/// next plugin should see, plus any errors it found. Plugins that only
/// validate return their input unchanged.
pub trait Plugin: Send + Sync {
    /// Name the plugin is registered under
    fn name(&self) -> &str;

    /// Runs the plugin over the entries
    fn run(
        &self,
        entries: Vec<Directive>,
        options: &OptionsMap,
    ) -> (Vec<Directive>, Vec<ValidationError>);
}

/// Names of the plugins this crate ships
pub fn builtin_names() -> &'static [&'static str] {
    &[PLUGIN_NAME]
}

/// Resolves a built-in plugin by its registered name
pub fn builtin(name: &str) -> Result<Box<dyn Plugin>, RulesError> {
    match name {
        PLUGIN_NAME => Ok(Box::new(NoTransactions)),
        other => Err(RulesError::UnknownPlugin(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let plugin = builtin("non_leaf_account_restrictions.no_transactions").unwrap();
        assert_eq!(plugin.name(), PLUGIN_NAME);
        assert_eq!(builtin_names(), &[PLUGIN_NAME]);
    }

    #[test]
    fn test_unknown_plugin() {
        assert!(matches!(
            builtin("beancount.plugins.auto"),
            Err(RulesError::UnknownPlugin(name)) if name == "beancount.plugins.auto"
        ));
    }
}
