//! Get Post Use Case
//!
//! A missing post is not an error here: the caller gets `None`.

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

/// Get post use case
pub struct GetPostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> GetPostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId, post_id: &PostId) -> PostResult<Option<Post>> {
        self.repo.find_by_id_and_user(post_id, user_id).await
    }
}
