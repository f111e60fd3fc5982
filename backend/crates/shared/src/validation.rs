//! Cross-cutting validation helpers
//!
//! Value objects report one message per field as an [`AppError`]; a request
//! is validated field by field and every message is returned together.

use crate::error::app_error::{AppError, AppResult};

/// Collects field messages while a request is being validated
#[derive(Debug, Default)]
pub struct Violations {
    messages: Vec<String>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the error message of a failed check, passing a success through
    pub fn check<T>(&mut self, result: AppResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                if err.details().is_empty() {
                    self.messages.push(err.message().to_string());
                } else {
                    self.messages.extend(err.details().iter().cloned());
                }
                None
            }
        }
    }

    /// Record a message directly
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// `Ok(())` if nothing was recorded, otherwise a 400 with every message
    pub fn finish(self) -> AppResult<()> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(self.messages))
        }
    }
}

/// `{field} should not be empty`
pub fn not_empty(field: &str) -> String {
    format!("{field} should not be empty")
}

/// `{field} must be shorter than or equal to {max} characters`
pub fn max_length(field: &str, max: usize) -> String {
    format!("{field} must be shorter than or equal to {max} characters")
}
