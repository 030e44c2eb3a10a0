//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid account name '{name}': {reason}")]
    InvalidAccount { name: String, reason: String },
}

impl CoreError {
    pub fn invalid_account(name: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidAccount {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
