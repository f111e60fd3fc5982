//! User Password Value Object
//!
//! Domain value object for user passwords.
//! Delegates to `platform::password` for cryptographic operations.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("secret123".to_string()).unwrap();
//! let hashed = UserPassword::from_raw(&raw, platform::password::MIN_COST).unwrap();
//! assert!(hashed.verify(&raw).unwrap());
//! ```

use kernel::error::app_error::{AppError, AppResult};
use kernel::validation::{max_length, not_empty};
use platform::password::{ClearTextPassword, HashedPassword};
use std::fmt;

use crate::error::{AuthError, AuthResult};

/// Maximum password length (in characters)
pub const PASSWORD_MAX_LENGTH: usize = 10;

const FIELD: &str = "password";

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password with validation
    ///
    /// ## Validation Rules
    /// - Not empty
    /// - At most [`PASSWORD_MAX_LENGTH`] characters
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw);

        if clear_text.is_empty() {
            return Err(AppError::bad_request(not_empty(FIELD)));
        }

        if clear_text.char_count() > PASSWORD_MAX_LENGTH {
            return Err(AppError::bad_request(max_length(FIELD, PASSWORD_MAX_LENGTH)));
        }

        Ok(Self(clear_text))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password for database storage
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a validated raw password with the given bcrypt cost
    pub fn from_raw(raw: &RawPassword, cost: u32) -> AuthResult<Self> {
        Ok(Self(raw.inner().hash(cost)?))
    }

    /// Create from a stored hash string (from database)
    pub fn from_hash_string(hash: impl Into<String>) -> AuthResult<Self> {
        let hashed = HashedPassword::from_hash_string(hash)
            .map_err(|_| AuthError::Internal("Invalid password hash in database".to_string()))?;
        Ok(Self(hashed))
    }

    /// Get the hash string for database storage
    pub fn as_hash_string(&self) -> &str {
        self.0.as_hash_string()
    }

    /// Verify a raw password against this hash
    pub fn verify(&self, raw: &RawPassword) -> AuthResult<bool> {
        Ok(self.0.verify(raw.inner())?)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
