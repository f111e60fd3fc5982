//! Sign In Use Case
//!
//! Verifies credentials and rotates the user's token.

use std::sync::Arc;

use kernel::error::{app_error::ResultExt, kind::ErrorKind};
use kernel::validation::Violations;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Neither failure path writes to the repository.
    pub async fn execute(&self, input: SignInInput) -> AuthResult<User> {
        let mut violations = Violations::new();
        let email = violations.check(Email::new(input.email));
        let password = violations.check(RawPassword::new(input.password));

        let (Some(email), Some(password)) = (email, password) else {
            return Err(AuthError::Validation(violations.into_messages()));
        };

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidEmail)?;

        let stored = user.password.clone();
        let password_valid = tokio::task::spawn_blocking(move || stored.verify(&password))
            .await
            .map_app_err(ErrorKind::InternalServerError, "Password verification task failed")??;

        if !password_valid {
            return Err(AuthError::InvalidPassword);
        }

        let auth_token = self
            .config
            .token_signer()
            .issue(&user.user_id.to_string(), user.email.as_str())?;

        let user = self
            .user_repo
            .update_auth_token(&user.user_id, &auth_token)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(user)
    }
}
