//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Every query is scoped to the owning user.

use kernel::id::{PostId, UserId};

use crate::domain::entities::Post;
use crate::domain::value_objects::{Pagination, SortOrder};
use crate::error::PostResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Number of posts owned by the user
    async fn count_by_user(&self, user_id: &UserId) -> PostResult<u64>;

    /// One page of the user's posts ordered by creation time
    ///
    /// Posts created at the same instant keep their insertion order.
    async fn list_by_user(
        &self,
        user_id: &UserId,
        pagination: Pagination,
        sort: SortOrder,
    ) -> PostResult<Vec<Post>>;

    /// Create a new post
    async fn create(&self, post: &Post) -> PostResult<()>;

    /// Find a post by ID, only if it belongs to the user
    async fn find_by_id_and_user(
        &self,
        post_id: &PostId,
        user_id: &UserId,
    ) -> PostResult<Option<Post>>;

    /// Persist the mutable fields of an existing post
    ///
    /// Returns `false` if the post no longer exists for its owner.
    async fn update(&self, post: &Post) -> PostResult<bool>;

    /// Delete a post owned by the user
    ///
    /// Returns `false` if nothing was deleted.
    async fn delete(&self, post_id: &PostId, user_id: &UserId) -> PostResult<bool>;
}
