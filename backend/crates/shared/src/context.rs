//! Request Context
//!
//! The authenticated caller, inserted into request extensions by the bearer
//! guard and handed to handlers as an explicit extractor argument.

use axum::extract::FromRequestParts;
use http::request::Parts;

use crate::error::app_error::AppError;
use crate::i18n::MessageKey;
use crate::id::UserId;

/// 認証済みの呼び出し元
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub email: String,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized(MessageKey::NotSignedIn.text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Id;

    #[tokio::test]
    async fn test_missing_context_is_unauthorized() {
        let (mut parts, _) = http::Request::new(()).into_parts();
        let err = CurrentUser::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 401);
    }

    #[tokio::test]
    async fn test_context_from_extensions() {
        let user = CurrentUser {
            user_id: Id::new(),
            email: "jane@example.com".to_string(),
        };
        let mut req = http::Request::new(());
        req.extensions_mut().insert(user.clone());
        let (mut parts, _) = req.into_parts();

        let extracted = CurrentUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(extracted, user);
    }
}
