//! Sign Out Use Case
//!
//! Clears the stored token so it is no longer accepted.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Sign out use case
pub struct SignOutUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> SignOutUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Idempotent: signing out twice leaves the token empty.
    pub async fn execute(&self, user_id: &UserId) -> AuthResult<User> {
        let user = self
            .user_repo
            .update_auth_token(user_id, "")
            .await?
            .ok_or(AuthError::UserNotFound)?;

        tracing::info!(user_id = %user.user_id, "User signed out");
        Ok(user)
    }
}
