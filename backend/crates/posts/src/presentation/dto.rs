//! API DTOs (Data Transfer Objects)

use kernel::id::{PostId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::{CreatePostInput, ListPostsInput, PostPage, UpdatePostInput};
use crate::domain::entities::Post;

// ============================================================================
// Requests
// ============================================================================

/// Create post request
///
/// `isPublished` is kept as raw JSON so that `"true"`/`"false"` strings can
/// be accepted and anything else reported as a field message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_published: Option<Value>,
}

impl From<CreatePostRequest> for CreatePostInput {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            title: req.title.unwrap_or_default(),
            content: req.content.unwrap_or_default(),
            is_published: req.is_published,
        }
    }
}

/// Update post request; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_published: Option<Value>,
}

impl From<UpdatePostRequest> for UpdatePostInput {
    fn from(req: UpdatePostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            is_published: req.is_published,
        }
    }
}

/// `GET /api/posts` query; values stay strings until the use case parses them
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListPostsQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub sort: Option<String>,
}

impl From<ListPostsQuery> for ListPostsInput {
    fn from(query: ListPostsQuery) -> Self {
        Self {
            page: query.page,
            per_page: query.per_page,
            sort: query.sort,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Full post record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    pub is_published: bool,
    /// Epoch milliseconds
    pub created_at: i64,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.post_id,
            user_id: post.user_id,
            title: post.title.to_string(),
            content: post.content.to_string(),
            is_published: post.is_published,
            created_at: post.created_at.timestamp_millis(),
        }
    }
}

/// List entry; the owner is implied by the request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListItem {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub is_published: bool,
    pub created_at: i64,
}

impl From<&Post> for PostListItem {
    fn from(post: &Post) -> Self {
        Self {
            id: post.post_id,
            title: post.title.to_string(),
            content: post.content.to_string(),
            is_published: post.is_published,
            created_at: post.created_at.timestamp_millis(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostListItem>,
    pub count: u64,
}

impl From<&PostPage> for PostListResponse {
    fn from(page: &PostPage) -> Self {
        Self {
            posts: page.posts.iter().map(PostListItem::from).collect(),
            count: page.count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Content, Title};

    fn post() -> Post {
        Post::new(
            UserId::new(),
            Title::new("Hello").unwrap(),
            Content::new("World").unwrap(),
            true,
        )
    }

    #[test]
    fn test_missing_create_fields() {
        let req: CreatePostRequest = serde_json::from_str(r#"{"title":"Hello"}"#).unwrap();
        let input = CreatePostInput::from(req);
        assert_eq!(input.title, "Hello");
        assert_eq!(input.content, "");
        assert!(input.is_published.is_none());
    }

    #[test]
    fn test_list_query_uses_camel_case() {
        let query: ListPostsQuery =
            serde_json::from_str(r#"{"page":"2","perPage":"5"}"#).unwrap();
        assert_eq!(query.page.as_deref(), Some("2"));
        assert_eq!(query.per_page.as_deref(), Some("5"));
        assert!(query.sort.is_none());
    }

    #[test]
    fn test_post_response_fields() {
        let post = post();
        let json = serde_json::to_value(PostResponse::from(&post)).unwrap();
        assert_eq!(json["id"], post.post_id.to_string());
        assert_eq!(json["userId"], post.user_id.to_string());
        assert_eq!(json["isPublished"], true);
        assert_eq!(json["createdAt"], post.created_at.timestamp_millis());
    }

    #[test]
    fn test_list_item_omits_owner() {
        let json = serde_json::to_value(PostListItem::from(&post())).unwrap();
        assert!(!json.as_object().unwrap().contains_key("userId"));
    }
}
