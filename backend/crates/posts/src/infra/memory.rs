//! In-Memory Repository Implementation
//!
//! Posts are kept in insertion order, which doubles as the tie-break on
//! equal creation times. Used by tests and by the API's router tests.

use std::sync::Arc;

use kernel::id::{PostId, UserId};
use tokio::sync::RwLock;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::{Pagination, SortOrder};
use crate::error::PostResult;

/// In-memory post repository
#[derive(Clone, Default)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts across all users
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

impl PostRepository for InMemoryPostRepository {
    async fn count_by_user(&self, user_id: &UserId) -> PostResult<u64> {
        let posts = self.posts.read().await;
        Ok(posts.iter().filter(|p| p.is_owned_by(user_id)).count() as u64)
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        pagination: Pagination,
        sort: SortOrder,
    ) -> PostResult<Vec<Post>> {
        let posts = self.posts.read().await;

        let mut owned: Vec<Post> = posts
            .iter()
            .filter(|p| p.is_owned_by(user_id))
            .cloned()
            .collect();

        // Stable, so equal timestamps stay in insertion order
        owned.sort_by_key(|p| p.created_at);
        if sort == SortOrder::Desc {
            owned.reverse();
        }

        Ok(owned
            .into_iter()
            .skip(usize::try_from(pagination.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(pagination.limit()).unwrap_or(usize::MAX))
            .collect())
    }

    async fn create(&self, post: &Post) -> PostResult<()> {
        self.posts.write().await.push(post.clone());
        Ok(())
    }

    async fn find_by_id_and_user(
        &self,
        post_id: &PostId,
        user_id: &UserId,
    ) -> PostResult<Option<Post>> {
        Ok(self
            .posts
            .read()
            .await
            .iter()
            .find(|p| &p.post_id == post_id && p.is_owned_by(user_id))
            .cloned())
    }

    async fn update(&self, post: &Post) -> PostResult<bool> {
        let mut posts = self.posts.write().await;
        match posts
            .iter_mut()
            .find(|p| p.post_id == post.post_id && p.is_owned_by(&post.user_id))
        {
            Some(stored) => {
                stored.title = post.title.clone();
                stored.content = post.content.clone();
                stored.is_published = post.is_published;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, post_id: &PostId, user_id: &UserId) -> PostResult<bool> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| !(&p.post_id == post_id && p.is_owned_by(user_id)));
        Ok(posts.len() < before)
    }
}
