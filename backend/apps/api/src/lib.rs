//! API application
//!
//! Composes the user and post routers under `/api`, puts the post routes
//! behind the bearer guard, and wraps everything in the failure logger,
//! security headers, request tracing and CORS.

pub mod boundary;
pub mod config;
pub mod health;

use auth::domain::repository::UserRepository;
use auth::handlers::AuthAppState;
use axum::Router;
use axum::middleware;
use axum::routing::get;
use posts::PostsAppState;
use posts::domain::repository::PostRepository;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::AppConfig;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Build the full application router
///
/// Routes:
/// - `GET /api/health`
/// - `POST /api/users/{signup,signin,signout}`
/// - `GET|POST /api/posts`, `GET|PATCH|DELETE /api/posts/{id}` (bearer)
pub fn build_app<U, P>(
    user_state: AuthAppState<U>,
    post_state: PostsAppState<P>,
    cors: CorsLayer,
) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    P: PostRepository + Send + Sync + 'static,
{
    let post_routes = auth::middleware::protect(
        posts::posts_router_generic(post_state),
        user_state.clone(),
    );

    let api = Router::new()
        .route("/health", get(health::health))
        .nest("/users", auth::auth_router_generic(user_state))
        .nest("/posts", post_routes);

    let app = Router::new()
        .nest("/api", api)
        .fallback(boundary::route_not_found)
        .method_not_allowed_fallback(boundary::method_not_allowed)
        .layer(middleware::from_fn(boundary::log_failures));

    boundary::with_security_headers(app)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
