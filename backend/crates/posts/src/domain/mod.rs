//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Post, PostChanges)
//! - Domain value objects (Title, Content, SortOrder, Pagination)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::{Post, PostChanges};
pub use repository::PostRepository;
