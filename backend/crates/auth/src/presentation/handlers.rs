//! HTTP Handlers

use axum::extract::State;
use kernel::context::CurrentUser;
use kernel::extract::AppJson;
use kernel::i18n::MessageKey;
use kernel::response::ApiResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{SignInRequest, SignUpRequest, UserResponse};

/// Shared state for auth handlers and the bearer guard
pub struct AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }
}

impl<R> Clone for AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/users/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    AppJson(req): AppJson<SignUpRequest>,
) -> AuthResult<ApiResponse<UserResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        name: req.name.unwrap_or_default(),
        email: req.email.unwrap_or_default(),
        password: req.password.unwrap_or_default(),
    };

    let user = use_case.execute(input).await?;

    Ok(ApiResponse::created(
        UserResponse::from(&user),
        MessageKey::SignUpSuccessful,
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/users/signin
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    AppJson(req): AppJson<SignInRequest>,
) -> AuthResult<ApiResponse<UserResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignInInput {
        email: req.email.unwrap_or_default(),
        password: req.password.unwrap_or_default(),
    };

    let user = use_case.execute(input).await?;

    Ok(ApiResponse::ok(
        UserResponse::from(&user),
        MessageKey::SignInSuccessful,
    ))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /api/users/signout
pub async fn sign_out<R>(
    State(state): State<AuthAppState<R>>,
    current: CurrentUser,
) -> AuthResult<ApiResponse<UserResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = SignOutUseCase::new(state.repo.clone());

    let user = use_case.execute(&current.user_id).await?;

    Ok(ApiResponse::ok(
        UserResponse::from(&user),
        MessageKey::SignOutSuccessful,
    ))
}
