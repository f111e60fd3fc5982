//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Common primitive value objects (ID types, etc.)
//! - The response envelope and message catalog shared by every route
//! - Cross-cutting validation helpers
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod i18n;
pub mod id;
pub mod response;
pub mod validation;

#[cfg(feature = "axum")]
pub mod context;
#[cfg(feature = "axum")]
pub mod extract;
