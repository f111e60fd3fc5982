//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, bearer guard
//!
//! ## Features
//! - User sign up / sign in with email + password
//! - Sign out, which revokes the current token
//! - Bearer token guard for other crates' routes
//!
//! ## Security Model
//! - Passwords hashed with bcrypt (cost 10)
//! - HS256 tokens bound to user id and email, 2-day expiry
//! - The stored token is the only server-side session marker: a token is
//!   accepted only while it equals the user's stored token

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryUserRepository, postgres::PgUserRepository};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
