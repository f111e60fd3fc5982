//! Posts Error Types
//!
//! Post-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::classify_sqlx, kind::ErrorKind};
use kernel::i18n::MessageKey;
use thiserror::Error;

/// Posts-specific result type alias
pub type PostResult<T> = Result<T, PostError>;

/// Posts-specific error variants
#[derive(Debug, Error)]
pub enum PostError {
    /// Request fields failed validation
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// No post with this id belongs to the caller
    #[error("Post not found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PostError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::Validation(_) => ErrorKind::BadRequest,
            PostError::NotFound => ErrorKind::NotFound,
            PostError::Database(e) => classify_sqlx(e).0,
            PostError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            PostError::Validation(details) => AppError::validation(details.clone()),
            PostError::NotFound => AppError::not_found(MessageKey::PostNotFound.text()),
            PostError::Database(e) => {
                let (kind, message) = classify_sqlx(e);
                AppError::new(kind, message)
            }
            PostError::Internal(_) => AppError::internal(MessageKey::InternalError.text()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            PostError::Database(e) => {
                tracing::error!(error = %e, "Posts database error");
            }
            PostError::Internal(msg) => {
                tracing::error!(message = %msg, "Posts internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Posts error");
            }
        }
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for PostError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest if err.details().is_empty() => {
                PostError::Validation(vec![err.message().to_string()])
            }
            ErrorKind::BadRequest => PostError::Validation(err.details().to_vec()),
            _ => PostError::Internal(err.to_string()),
        }
    }
}
