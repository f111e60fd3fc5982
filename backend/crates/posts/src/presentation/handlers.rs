//! HTTP Handlers
//!
//! Every route sits behind the bearer guard; the caller arrives as
//! `CurrentUser`.

use axum::extract::State;
use kernel::context::CurrentUser;
use kernel::extract::{AppJson, AppPath, AppQuery};
use kernel::i18n::MessageKey;
use kernel::id::PostId;
use kernel::response::ApiResponse;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::application::{
    CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase, UpdatePostUseCase,
};
use crate::domain::repository::PostRepository;
use crate::error::PostResult;
use crate::presentation::dto::{
    CreatePostRequest, ListPostsQuery, PostListResponse, PostResponse, UpdatePostRequest,
};

/// Shared state for post handlers
pub struct PostsAppState<R>
where
    R: PostRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> PostsAppState<R>
where
    R: PostRepository + Send + Sync + 'static,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

impl<R> Clone for PostsAppState<R>
where
    R: PostRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

/// GET /api/posts
pub async fn list_posts<R>(
    State(state): State<PostsAppState<R>>,
    current: CurrentUser,
    AppQuery(query): AppQuery<ListPostsQuery>,
) -> PostResult<ApiResponse<PostListResponse>>
where
    R: PostRepository + Send + Sync + 'static,
{
    let use_case = ListPostsUseCase::new(state.repo.clone());
    let page = use_case.execute(&current.user_id, query.into()).await?;

    Ok(ApiResponse::ok(
        PostListResponse::from(&page),
        MessageKey::ListRetrieved,
    ))
}

/// POST /api/posts
pub async fn create_post<R>(
    State(state): State<PostsAppState<R>>,
    current: CurrentUser,
    AppJson(req): AppJson<CreatePostRequest>,
) -> PostResult<ApiResponse<PostResponse>>
where
    R: PostRepository + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.repo.clone());
    let post = use_case.execute(&current.user_id, req.into()).await?;

    Ok(ApiResponse::created(
        PostResponse::from(&post),
        MessageKey::CreateSuccessful,
    ))
}

/// PATCH /api/posts/{id}
pub async fn update_post<R>(
    State(state): State<PostsAppState<R>>,
    current: CurrentUser,
    AppPath(post_id): AppPath<PostId>,
    AppJson(req): AppJson<UpdatePostRequest>,
) -> PostResult<ApiResponse<PostResponse>>
where
    R: PostRepository + Send + Sync + 'static,
{
    let use_case = UpdatePostUseCase::new(state.repo.clone());
    let post = use_case
        .execute(&current.user_id, &post_id, req.into())
        .await?;

    Ok(ApiResponse::ok(
        PostResponse::from(&post),
        MessageKey::UpdateSuccessful,
    ))
}

/// DELETE /api/posts/{id}
pub async fn delete_post<R>(
    State(state): State<PostsAppState<R>>,
    current: CurrentUser,
    AppPath(post_id): AppPath<PostId>,
) -> PostResult<ApiResponse<Value>>
where
    R: PostRepository + Send + Sync + 'static,
{
    let use_case = DeletePostUseCase::new(state.repo.clone());
    use_case.execute(&current.user_id, &post_id).await?;

    Ok(ApiResponse::ok(
        Value::Object(Map::new()),
        MessageKey::DeleteSuccessful,
    ))
}

/// GET /api/posts/{id}
///
/// A post that does not exist, or belongs to someone else, is answered with
/// `200` and `data: null`.
pub async fn get_post<R>(
    State(state): State<PostsAppState<R>>,
    current: CurrentUser,
    AppPath(post_id): AppPath<PostId>,
) -> PostResult<ApiResponse<Option<PostResponse>>>
where
    R: PostRepository + Send + Sync + 'static,
{
    let use_case = GetPostUseCase::new(state.repo.clone());
    let post = use_case.execute(&current.user_id, &post_id).await?;

    let key = if post.is_some() {
        MessageKey::InfoRetrieved
    } else {
        MessageKey::PostNotFound
    };

    Ok(ApiResponse::ok(post.as_ref().map(PostResponse::from), key))
}
