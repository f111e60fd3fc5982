//! Sign Up Use Case
//!
//! Creates a new user account and issues its first token.

use std::sync::Arc;

use kernel::error::{app_error::ResultExt, kind::ErrorKind};
use kernel::validation::Violations;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_id::UserId,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<User> {
        let mut violations = Violations::new();
        let name = violations.check(UserName::new(input.name));
        let email = violations.check(Email::new(input.email));
        let password = violations.check(RawPassword::new(input.password));

        let (Some(name), Some(email), Some(password)) = (name, email, password) else {
            return Err(AuthError::Validation(violations.into_messages()));
        };

        // Check if email is taken
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::DuplicateEmail);
        }

        let cost = self.config.password_cost;
        let password_hash = tokio::task::spawn_blocking(move || UserPassword::from_raw(&password, cost))
            .await
            .map_app_err(ErrorKind::InternalServerError, "Password hashing task failed")??;

        let user_id = UserId::new();
        let auth_token = self
            .config
            .token_signer()
            .issue(&user_id.to_string(), email.as_str())?;

        let user = User::new(user_id, name, email, password_hash, auth_token);

        // Persist
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User signed up"
        );

        Ok(user)
    }
}
