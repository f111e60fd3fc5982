//! Delete Post Use Case

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Delete post use case
pub struct DeletePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> DeletePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId, post_id: &PostId) -> PostResult<()> {
        // Ownership check before the write
        self.repo
            .find_by_id_and_user(post_id, user_id)
            .await?
            .ok_or(PostError::NotFound)?;

        if !self.repo.delete(post_id, user_id).await? {
            return Err(PostError::NotFound);
        }

        tracing::info!(post_id = %post_id, user_id = %user_id, "Post deleted");

        Ok(())
    }
}
