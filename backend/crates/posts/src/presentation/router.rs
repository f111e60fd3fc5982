//! Posts Router

use axum::{Router, routing::get};

use crate::domain::repository::PostRepository;
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{self, PostsAppState};

/// Create the posts router with PostgreSQL repository
pub fn posts_router(repo: PgPostRepository) -> Router {
    posts_router_generic(PostsAppState::new(repo))
}

/// Create a generic posts router for any repository implementation
///
/// The returned router expects a `CurrentUser` in request extensions; mount
/// it behind the bearer guard.
pub fn posts_router_generic<R>(state: PostsAppState<R>) -> Router
where
    R: PostRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/",
            get(handlers::list_posts::<R>).post(handlers::create_post::<R>),
        )
        .route(
            "/{id}",
            get(handlers::get_post::<R>)
                .patch(handlers::update_post::<R>)
                .delete(handlers::delete_post::<R>),
        )
        .with_state(state)
}
