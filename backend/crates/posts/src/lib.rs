//! Posts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post entity, value objects, repository trait
//! - `application/` - List, create, update, delete and get use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Ownership
//! Every operation takes the caller's user id and only ever sees posts that
//! user owns. The router does not authenticate; callers mount it behind the
//! bearer guard from the `auth` crate.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{PostError, PostResult};
pub use infra::{memory::InMemoryPostRepository, postgres::PgPostRepository};
pub use presentation::handlers::PostsAppState;
pub use presentation::router::{posts_router, posts_router_generic};

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

#[cfg(test)]
mod tests;
