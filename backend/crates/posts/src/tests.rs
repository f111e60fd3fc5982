//! Use case and router tests for the posts crate, run against the in-memory
//! repository

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsInput,
    ListPostsUseCase, UpdatePostInput, UpdatePostUseCase,
};
use crate::domain::entities::Post;
use crate::error::PostError;
use crate::infra::memory::InMemoryPostRepository;

fn create_input(title: &str) -> CreatePostInput {
    CreatePostInput {
        title: title.to_string(),
        content: format!("{title} body"),
        is_published: None,
    }
}

async fn create(repo: &Arc<InMemoryPostRepository>, user_id: &UserId, title: &str) -> Post {
    CreatePostUseCase::new(repo.clone())
        .execute(user_id, create_input(title))
        .await
        .unwrap()
}

#[cfg(test)]
mod create_post_tests {
    use super::*;
    use crate::domain::repository::PostRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_omitted_flag_persists_unpublished() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let user_id = UserId::new();

        let post = create(&repo, &user_id, "Hello").await;
        assert!(!post.is_published);
        assert_eq!(post.user_id, user_id);

        let stored = repo
            .find_by_id_and_user(&post.post_id, &user_id)
            .await
            .unwrap()
            .unwrap();
        assert!(!stored.is_published);
        assert_eq!(stored.title.as_str(), "Hello");
    }

    #[tokio::test]
    async fn test_string_flag_is_accepted() {
        let repo = Arc::new(InMemoryPostRepository::new());

        let post = CreatePostUseCase::new(repo.clone())
            .execute(
                &UserId::new(),
                CreatePostInput {
                    is_published: Some(json!("true")),
                    ..create_input("Hello")
                },
            )
            .await
            .unwrap();
        assert!(post.is_published);
    }

    #[tokio::test]
    async fn test_validation_collects_every_field() {
        let repo = Arc::new(InMemoryPostRepository::new());

        let err = CreatePostUseCase::new(repo.clone())
            .execute(
                &UserId::new(),
                CreatePostInput {
                    title: "a".repeat(256),
                    content: String::new(),
                    is_published: Some(json!("maybe")),
                },
            )
            .await
            .unwrap_err();

        match err {
            PostError::Validation(messages) => assert_eq!(
                messages,
                vec![
                    "title must be shorter than or equal to 255 characters".to_string(),
                    "content should not be empty".to_string(),
                    "isPublished must be a boolean value".to_string(),
                ]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(repo.is_empty().await);
    }
}

#[cfg(test)]
mod list_posts_tests {
    use super::*;

    fn query(page: &str, per_page: &str, sort: &str) -> ListPostsInput {
        ListPostsInput {
            page: Some(page.to_string()),
            per_page: Some(per_page.to_string()),
            sort: Some(sort.to_string()),
        }
    }

    #[tokio::test]
    async fn test_empty_list() {
        let repo = Arc::new(InMemoryPostRepository::new());

        let page = ListPostsUseCase::new(repo)
            .execute(&UserId::new(), ListPostsInput::default())
            .await
            .unwrap();
        assert!(page.posts.is_empty());
        assert_eq!(page.count, 0);
    }

    #[tokio::test]
    async fn test_second_page_newest_first() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let user_id = UserId::new();
        for i in 0..15 {
            create(&repo, &user_id, &format!("post {i}")).await;
        }

        let page = ListPostsUseCase::new(repo.clone())
            .execute(&user_id, query("2", "10", "desc"))
            .await
            .unwrap();

        assert_eq!(page.count, 15);
        let titles: Vec<_> = page.posts.iter().map(|p| p.title.to_string()).collect();
        assert_eq!(
            titles,
            vec!["post 4", "post 3", "post 2", "post 1", "post 0"]
        );
    }

    #[tokio::test]
    async fn test_defaults_and_ascending() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let user_id = UserId::new();
        for i in 0..12 {
            create(&repo, &user_id, &format!("post {i}")).await;
        }

        let use_case = ListPostsUseCase::new(repo.clone());

        let page = use_case
            .execute(&user_id, ListPostsInput::default())
            .await
            .unwrap();
        assert_eq!(page.posts.len(), 10);
        assert_eq!(page.posts[0].title.as_str(), "post 11");

        let page = use_case
            .execute(&user_id, query("1", "3", "asc"))
            .await
            .unwrap();
        let titles: Vec<_> = page.posts.iter().map(|p| p.title.to_string()).collect();
        assert_eq!(titles, vec!["post 0", "post 1", "post 2"]);
    }

    #[tokio::test]
    async fn test_only_own_posts_are_listed() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let alice = UserId::new();
        let bob = UserId::new();
        create(&repo, &alice, "alice").await;
        create(&repo, &bob, "bob").await;

        let page = ListPostsUseCase::new(repo.clone())
            .execute(&alice, ListPostsInput::default())
            .await
            .unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.posts[0].title.as_str(), "alice");
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let user_id = UserId::new();
        create(&repo, &user_id, "only").await;

        let page = ListPostsUseCase::new(repo.clone())
            .execute(&user_id, query("4294967295", "4294967295", "desc"))
            .await
            .unwrap();
        assert_eq!(page.count, 1);
        assert!(page.posts.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_query_is_rejected() {
        let repo = Arc::new(InMemoryPostRepository::new());

        let err = ListPostsUseCase::new(repo)
            .execute(&UserId::new(), query("0", "x", "newest"))
            .await
            .unwrap_err();

        match err {
            PostError::Validation(messages) => assert_eq!(
                messages,
                vec![
                    "page must be a positive integer".to_string(),
                    "perPage must be a positive integer".to_string(),
                    "sort must be one of the following values: asc, desc".to_string(),
                ]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[cfg(test)]
mod update_post_tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_partial_update() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let user_id = UserId::new();
        let post = create(&repo, &user_id, "Hello").await;

        let updated = UpdatePostUseCase::new(repo.clone())
            .execute(
                &user_id,
                &post.post_id,
                UpdatePostInput {
                    is_published: Some(json!(true)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.is_published);
        assert_eq!(updated.title.as_str(), "Hello");
        assert_eq!(updated.created_at, post.created_at);

        let stored = GetPostUseCase::new(repo.clone())
            .execute(&user_id, &post.post_id)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.is_published);
    }

    #[tokio::test]
    async fn test_foreign_post_is_not_found_and_unchanged() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let owner = UserId::new();
        let post = create(&repo, &owner, "Hello").await;

        let err = UpdatePostUseCase::new(repo.clone())
            .execute(
                &UserId::new(),
                &post.post_id,
                UpdatePostInput {
                    title: Some("Stolen".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, PostError::NotFound));

        let stored = GetPostUseCase::new(repo.clone())
            .execute(&owner, &post.post_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.title.as_str(), "Hello");
    }

    #[tokio::test]
    async fn test_empty_title_is_rejected() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let user_id = UserId::new();
        let post = create(&repo, &user_id, "Hello").await;

        let err = UpdatePostUseCase::new(repo.clone())
            .execute(
                &user_id,
                &post.post_id,
                UpdatePostInput {
                    title: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, PostError::Validation(ref m) if m == &["title should not be empty"]));
    }
}

#[cfg(test)]
mod delete_post_tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_own_post() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let user_id = UserId::new();
        let post = create(&repo, &user_id, "Hello").await;

        let use_case = DeletePostUseCase::new(repo.clone());
        tokio_test::assert_ok!(use_case.execute(&user_id, &post.post_id).await);
        assert!(repo.is_empty().await);

        let again = use_case.execute(&user_id, &post.post_id).await;
        assert!(matches!(again, Err(PostError::NotFound)));
    }

    #[tokio::test]
    async fn test_foreign_post_is_kept() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let post = create(&repo, &UserId::new(), "Hello").await;

        let result = DeletePostUseCase::new(repo.clone())
            .execute(&UserId::new(), &post.post_id)
            .await;
        assert!(matches!(result, Err(PostError::NotFound)));
        assert_eq!(repo.len().await, 1);
    }
}

#[cfg(test)]
mod get_post_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_is_scoped_to_owner() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let owner = UserId::new();
        let post = create(&repo, &owner, "Hello").await;
        let use_case = GetPostUseCase::new(repo.clone());

        let found = use_case.execute(&owner, &post.post_id).await.unwrap();
        assert_eq!(found.map(|p| p.post_id), Some(post.post_id));

        let foreign = use_case.execute(&UserId::new(), &post.post_id).await.unwrap();
        assert!(foreign.is_none());

        let missing = use_case.execute(&owner, &PostId::new()).await.unwrap();
        assert!(missing.is_none());
    }
}

#[cfg(test)]
mod router_tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::{Extension, Router};
    use kernel::context::CurrentUser;
    use tower::ServiceExt;

    use crate::presentation::handlers::PostsAppState;
    use crate::presentation::router::posts_router_generic;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Router with the caller already authenticated
    fn app(repo: InMemoryPostRepository, user_id: UserId) -> Router {
        posts_router_generic(PostsAppState::new(repo)).layer(Extension(CurrentUser {
            user_id,
            email: "jane@example.com".to_string(),
        }))
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let app = app(InMemoryPostRepository::new(), UserId::new());

        let response = app
            .clone()
            .oneshot(
                Request::post("/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"title":"Hello","content":"World"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["statusCode"], 201);
        assert_eq!(body["data"]["isPublished"], false);
        assert_eq!(body["message"], "Post created successfully");
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(Request::get(format!("/{id}")).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["title"], "Hello");
        assert_eq!(body["message"], "Post retrieved successfully");
    }

    #[tokio::test]
    async fn test_missing_post_is_null() {
        let app = app(InMemoryPostRepository::new(), UserId::new());

        let response = app
            .oneshot(
                Request::get(format!("/{}", PostId::new()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["data"].is_null());
        assert_eq!(body["message"], "Post not found");
    }

    #[tokio::test]
    async fn test_bad_id_is_rejected() {
        let app = app(InMemoryPostRepository::new(), UserId::new());

        let response = app
            .oneshot(Request::delete("/not-a-uuid").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], serde_json::json!(["id must be a UUID"]));
    }

    #[tokio::test]
    async fn test_delete_returns_empty_object() {
        let repo = InMemoryPostRepository::new();
        let user_id = UserId::new();
        let post = create(&Arc::new(repo.clone()), &user_id, "Hello").await;
        let app = app(repo, user_id);

        let response = app
            .clone()
            .oneshot(
                Request::delete(format!("/{}", post.post_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"], serde_json::json!({}));

        let response = app
            .oneshot(
                Request::delete(format!("/{}", post.post_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "Post not found");
    }

    #[tokio::test]
    async fn test_list_query_validation() {
        let app = app(InMemoryPostRepository::new(), UserId::new());

        let response = app
            .oneshot(
                Request::get("/?sort=sideways")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body["message"][0],
            "sort must be one of the following values: asc, desc"
        );
    }

    #[tokio::test]
    async fn test_missing_caller_is_unauthorized() {
        let app = posts_router_generic(PostsAppState::new(InMemoryPostRepository::new()));

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
