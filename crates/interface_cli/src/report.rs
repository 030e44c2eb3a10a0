//! Error reporting

use std::fmt::Write;

use domain_rules::{LoadResult, ValidationError};

/// Renders one `file:line: message` line per error
pub fn format_errors(errors: &[ValidationError]) -> String {
    let mut out = String::new();
    for error in errors {
        let _ = writeln!(out, "{error}");
    }
    out
}

/// One-line outcome of a check
pub fn summary(result: &LoadResult) -> String {
    if result.is_valid() {
        format!("OK: {} entries, no errors", result.entries.len())
    } else {
        format!(
            "FAILED: {} entries, {} error(s)",
            result.entries.len(),
            result.errors.len()
        )
    }
}
