//! Source-location metadata attached to directives

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Where a directive came from, plus any free-form key/value metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Source file name (or a synthetic marker such as `<leafonly>`)
    pub filename: String,
    /// 1-based line number; 0 for synthetic locations
    pub lineno: u32,
    /// Additional metadata keys
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Meta {
    /// Creates metadata for a file location
    pub fn new(filename: impl Into<String>, lineno: u32) -> Self {
        Self {
            filename: filename.into(),
            lineno,
            extra: BTreeMap::new(),
        }
    }

    /// Adds a free-form metadata entry
    pub fn with_entry(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Returns true for locations that do not point into a real file
    pub fn is_synthetic(&self) -> bool {
        self.lineno == 0
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.filename, self.lineno)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_display() {
        assert_eq!(Meta::new("main.beancount", 12).to_string(), "main.beancount:12");
    }

    #[test]
    fn test_synthetic_meta() {
        assert!(Meta::new("<leafonly>", 0).is_synthetic());
        assert!(!Meta::new("main.beancount", 1).is_synthetic());
    }

    #[test]
    fn test_extra_entries_skipped_when_empty() {
        let json = serde_json::to_value(Meta::new("a", 1)).unwrap();
        assert!(json.get("extra").is_none());

        let json = serde_json::to_value(Meta::new("a", 1).with_entry("k", "v".into())).unwrap();
        assert_eq!(json["extra"]["k"], "v");
    }
}
