//! Auth Router

use axum::{Router, routing::post};

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::protect;

/// Create the user router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    auth_router_generic(AuthAppState::new(repo, config))
}

/// Create a generic user router for any repository implementation
///
/// Routes: `POST /signup`, `POST /signin`, and `POST /signout` (bearer).
pub fn auth_router_generic<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let protected = protect(
        Router::new().route("/signout", post(handlers::sign_out::<R>)),
        state.clone(),
    );

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/signin", post(handlers::sign_in::<R>))
        .merge(protected)
        .with_state(state)
}
