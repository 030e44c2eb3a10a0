//! Host validation pipeline
//!
//! Runs plugins in registration order. Each plugin sees the entries returned
//! by the previous one; errors from every plugin are collected, and any error
//! makes the ledger as a whole invalid.

use tracing::{info, instrument};

use domain_ledger::Directive;

use crate::error::{RulesError, ValidationError};
use crate::plugin::{builtin, builtin_names, OptionsMap, Plugin};

/// Entries and errors after all plugins ran
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub entries: Vec<Directive>,
    pub errors: Vec<ValidationError>,
}

impl LoadResult {
    /// A ledger is valid only when no plugin reported an error
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// An ordered list of plugins
#[derive(Default)]
pub struct PluginPipeline {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginPipeline {
    /// Creates an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pipeline with every built-in plugin
    pub fn with_builtins() -> Self {
        let plugins = builtin_names()
            .iter()
            .filter_map(|name| builtin(name).ok())
            .collect();
        Self { plugins }
    }

    /// Creates a pipeline from plugin names, in order
    ///
    /// # Errors
    ///
    /// Returns `RulesError::UnknownPlugin` for the first name that is not a
    /// built-in plugin.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, RulesError> {
        let plugins = names
            .iter()
            .map(|name| builtin(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { plugins })
    }

    /// Appends a plugin
    pub fn with_plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Registered plugin names, in run order
    pub fn names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Number of registered plugins
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns true if no plugin is registered
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Runs every plugin over the entries
    #[instrument(skip_all, fields(plugins = self.plugins.len(), entries = entries.len()))]
    pub fn run(&self, entries: Vec<Directive>, options: &OptionsMap) -> LoadResult {
        let mut entries = entries;
        let mut errors = Vec::new();

        for plugin in &self.plugins {
            let (returned, plugin_errors) = plugin.run(entries, options);
            info!(
                plugin = plugin.name(),
                errors = plugin_errors.len(),
                "Plugin finished"
            );
            entries = returned;
            errors.extend(plugin_errors);
        }

        LoadResult { entries, errors }
    }
}

impl std::fmt::Debug for PluginPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginPipeline")
            .field("plugins", &self.names())
            .finish()
    }
}
