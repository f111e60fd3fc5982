//! Create Post Use Case

use std::sync::Arc;

use kernel::id::UserId;
use kernel::validation::Violations;
use serde_json::Value;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::{Content, Title, published_flag};
use crate::error::{PostError, PostResult};

/// Create post input
#[derive(Debug, Clone, Default)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    /// Boolean or `"true"`/`"false"`; absent means unpublished
    pub is_published: Option<Value>,
}

/// Create post use case
pub struct CreatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> CreatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId, input: CreatePostInput) -> PostResult<Post> {
        let mut violations = Violations::new();
        let title = violations.check(Title::new(input.title));
        let content = violations.check(Content::new(input.content));
        let is_published = match &input.is_published {
            Some(value) => violations.check(published_flag(value)),
            None => Some(false),
        };

        let (Some(title), Some(content), Some(is_published)) = (title, content, is_published) else {
            return Err(PostError::Validation(violations.into_messages()));
        };

        let post = Post::new(*user_id, title, content, is_published);
        self.repo.create(&post).await?;

        tracing::info!(
            post_id = %post.post_id,
            user_id = %post.user_id,
            "Post created"
        );

        Ok(post)
    }
}
