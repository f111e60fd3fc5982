//! User Name Value Object
//!
//! ユーザーの表示名。一意性は要求しない。
//!
//! ## 不変条件
//! - 空文字列ではない
//! - 長さ: 最大40文字（Unicode スカラー値で数える）

use kernel::error::app_error::{AppError, AppResult};
use kernel::validation::{max_length, not_empty};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 40;

const FIELD: &str = "name";

/// User name value object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(AppError::bad_request(not_empty(FIELD)));
        }

        if name.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(max_length(FIELD, USER_NAME_MAX_LENGTH)));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(UserName::new("Jane Doe").is_ok());
        assert!(UserName::new("山田 太郎").is_ok());
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_invalid_names() {
        assert_eq!(
            UserName::new("").unwrap_err().message(),
            "name should not be empty"
        );
        assert_eq!(
            UserName::new("a".repeat(USER_NAME_MAX_LENGTH + 1))
                .unwrap_err()
                .message(),
            "name must be shorter than or equal to 40 characters"
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // 40 multi-byte characters
        assert!(UserName::new("あ".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }
}
