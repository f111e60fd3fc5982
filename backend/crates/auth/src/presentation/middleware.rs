//! Auth Middleware
//!
//! Bearer token guard for protected routes.

use axum::Router;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use platform::bearer::extract_bearer;

use crate::application::AuthenticateUseCase;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::handlers::AuthAppState;

/// Middleware that requires a valid bearer token
///
/// On success the caller is inserted into request extensions as
/// `kernel::context::CurrentUser`; otherwise the request is answered with 401
/// before the handler runs.
pub async fn require_bearer<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request,
    next: Next,
) -> AuthResult<Response>
where
    R: UserRepository + Send + Sync + 'static,
{
    let token = extract_bearer(req.headers())
        .ok_or(AuthError::NotSignedIn)?
        .to_string();

    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());
    let current = use_case.execute(&token).await?;

    req.extensions_mut().insert(current);

    Ok(next.run(req).await)
}

/// Put every route of `router` behind [`require_bearer`]
pub fn protect<S, R>(router: Router<S>, state: AuthAppState<R>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    R: UserRepository + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(state, require_bearer::<R>))
}
