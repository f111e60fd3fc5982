//! Authenticate Use Case
//!
//! Resolves a bearer token to the signed-in caller.

use std::sync::Arc;

use kernel::context::CurrentUser;
use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Bearer token authentication
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Accepts the token only if it verifies, names an existing user, and is
    /// that user's currently stored token.
    pub async fn execute(&self, token: &str) -> AuthResult<CurrentUser> {
        let claims = self.config.token_signer().verify(token).map_err(|e| {
            tracing::debug!(error = %e, "Token verification failed");
            AuthError::NotSignedIn
        })?;

        let user_id: UserId = claims.sub.parse().map_err(|_| AuthError::NotSignedIn)?;

        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::NotSignedIn)?;

        if !user.holds_token(token) {
            return Err(AuthError::NotSignedIn);
        }

        Ok(CurrentUser {
            user_id: user.user_id,
            email: user.email.into_db(),
        })
    }
}
