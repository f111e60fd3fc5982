//! API DTOs (Data Transfer Objects)

use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Requests
// ============================================================================

// Missing fields deserialize as `None` so that validation can report them
// alongside every other field message.

/// Sign up request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignUpRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Sign in request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignInRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// User as returned by every user route. Has no password field.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub auth_token: String,
    /// Epoch milliseconds
    pub created_at: i64,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id,
            name: user.name.to_string(),
            email: user.email.to_string(),
            auth_token: user.auth_token.clone(),
            created_at: user.created_at.timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_none() {
        let req: SignUpRequest = serde_json::from_str(r#"{"name":"Jane"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("Jane"));
        assert!(req.email.is_none());
        assert!(req.password.is_none());
    }

    #[test]
    fn test_user_response_has_no_password() {
        use crate::domain::value_object::{
            email::Email, user_name::UserName, user_password::{RawPassword, UserPassword},
        };

        let raw = RawPassword::new("secret".to_string()).unwrap();
        let user = User::new(
            UserId::new(),
            UserName::new("Jane").unwrap(),
            Email::new("jane@example.com").unwrap(),
            UserPassword::from_raw(&raw, platform::password::MIN_COST).unwrap(),
            "token".to_string(),
        );

        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("password"));
        assert_eq!(obj["authToken"], "token");
        assert_eq!(obj["createdAt"], user.created_at.timestamp_millis());
    }
}
