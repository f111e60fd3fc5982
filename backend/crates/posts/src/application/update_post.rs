//! Update Post Use Case
//!
//! Loads the post by `(post_id, user_id)` first, so a post owned by someone
//! else is indistinguishable from a missing one.

use std::sync::Arc;

use kernel::id::{PostId, UserId};
use kernel::validation::Violations;
use serde_json::Value;

use crate::domain::entities::{Post, PostChanges};
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::{Content, Title, published_flag};
use crate::error::{PostError, PostResult};

/// Update post input; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdatePostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_published: Option<Value>,
}

impl UpdatePostInput {
    fn into_changes(self) -> PostResult<PostChanges> {
        let mut violations = Violations::new();
        let mut changes = PostChanges::default();

        if let Some(title) = self.title {
            changes.title = violations.check(Title::new(title));
        }
        if let Some(content) = self.content {
            changes.content = violations.check(Content::new(content));
        }
        if let Some(value) = &self.is_published {
            changes.is_published = violations.check(published_flag(value));
        }

        if violations.is_empty() {
            Ok(changes)
        } else {
            Err(PostError::Validation(violations.into_messages()))
        }
    }
}

/// Update post use case
pub struct UpdatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> UpdatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        post_id: &PostId,
        input: UpdatePostInput,
    ) -> PostResult<Post> {
        let changes = input.into_changes()?;

        let mut post = self
            .repo
            .find_by_id_and_user(post_id, user_id)
            .await?
            .ok_or(PostError::NotFound)?;

        if changes.is_empty() {
            return Ok(post);
        }

        post.apply(changes);

        if !self.repo.update(&post).await? {
            return Err(PostError::NotFound);
        }

        tracing::info!(
            post_id = %post.post_id,
            user_id = %post.user_id,
            "Post updated"
        );

        Ok(post)
    }
}
