//! Domain Entities
//!
//! Core business entities for the posts domain.

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

use crate::domain::value_objects::{Content, Title};

/// Post entity - a record owned by exactly one user
#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    pub user_id: UserId,
    pub title: Title,
    pub content: Content,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `user_id`
    pub fn new(user_id: UserId, title: Title, content: Content, is_published: bool) -> Self {
        Self {
            post_id: PostId::new(),
            user_id,
            title,
            content,
            is_published,
            created_at: Utc::now(),
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Overwrite the fields present in `changes`
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(is_published) = changes.is_published {
            self.is_published = is_published;
        }
    }
}

/// Partial update of a post; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<Title>,
    pub content: Option<Content>,
    pub is_published: Option<bool>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.is_published.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(owner: UserId) -> Post {
        Post::new(
            owner,
            Title::new("Hello").unwrap(),
            Content::new("World").unwrap(),
            false,
        )
    }

    #[test]
    fn test_new_post() {
        let owner = UserId::new();
        let post = post(owner);
        assert!(post.is_owned_by(&owner));
        assert!(!post.is_owned_by(&UserId::new()));
        assert!(!post.is_published);
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut post = post(UserId::new());
        let created_at = post.created_at;

        post.apply(PostChanges {
            is_published: Some(true),
            ..Default::default()
        });
        assert!(post.is_published);
        assert_eq!(post.title.as_str(), "Hello");
        assert_eq!(post.content.as_str(), "World");

        post.apply(PostChanges {
            title: Some(Title::new("Renamed").unwrap()),
            ..Default::default()
        });
        assert_eq!(post.title.as_str(), "Renamed");
        assert!(post.is_published);
        assert_eq!(post.created_at, created_at);
    }

    #[test]
    fn test_empty_changes() {
        assert!(PostChanges::default().is_empty());
        assert!(
            !PostChanges {
                is_published: Some(false),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
