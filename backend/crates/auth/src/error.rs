//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::classify_sqlx, kind::ErrorKind};
use kernel::i18n::MessageKey;
use platform::password::PasswordHashError;
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request fields failed validation
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Email already registered
    #[error("Email already exists")]
    DuplicateEmail,

    /// No user with the given email
    #[error("Invalid email")]
    InvalidEmail,

    /// Password does not match the stored hash
    #[error("Invalid password")]
    InvalidPassword,

    /// Missing, invalid, expired or revoked bearer token
    #[error("User is not signed in")]
    NotSignedIn,

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Password hashing failed
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] PasswordHashError),

    /// Token signing failed
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::DuplicateEmail => ErrorKind::Conflict,
            AuthError::InvalidEmail | AuthError::InvalidPassword | AuthError::NotSignedIn => {
                ErrorKind::Unauthorized
            }
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Database(e) => classify_sqlx(e).0,
            AuthError::PasswordHash(_) | AuthError::Token(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Catalog key for the user-facing message, if this error has one
    pub fn message_key(&self) -> Option<MessageKey> {
        match self {
            AuthError::DuplicateEmail => Some(MessageKey::DuplicateEmail),
            AuthError::InvalidEmail => Some(MessageKey::InvalidEmail),
            AuthError::InvalidPassword => Some(MessageKey::InvalidPassword),
            AuthError::NotSignedIn => Some(MessageKey::NotSignedIn),
            AuthError::UserNotFound => Some(MessageKey::UserNotFound),
            _ => None,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Validation(details) => AppError::validation(details.clone()),
            AuthError::Database(e) => {
                let (kind, message) = classify_sqlx(e);
                AppError::new(kind, message)
            }
            _ => match self.message_key() {
                Some(key) => AppError::new(self.kind(), key.text()),
                None => AppError::new(self.kind(), MessageKey::InternalError.text()),
            },
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::PasswordHash(e) => {
                tracing::error!(error = %e, "Password hashing failed");
            }
            AuthError::Token(e) => {
                tracing::error!(error = %e, "Token signing failed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidEmail | AuthError::InvalidPassword => {
                tracing::warn!(error = %self, "Rejected sign in attempt");
            }
            AuthError::NotSignedIn => {
                tracing::warn!("Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest if err.details().is_empty() => {
                AuthError::Validation(vec![err.message().to_string()])
            }
            ErrorKind::BadRequest => AuthError::Validation(err.details().to_vec()),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}
