//! User Entity
//!
//! A registered account. The bcrypt hash never leaves the domain layer;
//! response DTOs are built from the other fields only.

use chrono::{DateTime, Utc};
use platform::token::tokens_match;

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub name: UserName,
    /// Email (unique, lower-cased)
    pub email: Email,
    /// bcrypt hash
    pub password: UserPassword,
    /// Currently active token; empty when signed out
    pub auth_token: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    ///
    /// The id is chosen by the caller because the first token is bound to it.
    pub fn new(
        user_id: UserId,
        name: UserName,
        email: Email,
        password: UserPassword,
        auth_token: String,
    ) -> Self {
        Self {
            user_id,
            name,
            email,
            password,
            auth_token,
            created_at: Utc::now(),
        }
    }

    /// Whether a token is currently active
    pub fn is_signed_in(&self) -> bool {
        !self.auth_token.is_empty()
    }

    /// Whether `token` is the currently active token
    pub fn holds_token(&self, token: &str) -> bool {
        self.is_signed_in() && tokens_match(token, &self.auth_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;
    use platform::password::MIN_COST;

    fn user(token: &str) -> User {
        let raw = RawPassword::new("secret".to_string()).unwrap();
        User::new(
            UserId::new(),
            UserName::new("Jane").unwrap(),
            Email::new("jane@example.com").unwrap(),
            UserPassword::from_raw(&raw, MIN_COST).unwrap(),
            token.to_string(),
        )
    }

    #[test]
    fn test_holds_token() {
        let u = user("abc");
        assert!(u.is_signed_in());
        assert!(u.holds_token("abc"));
        assert!(!u.holds_token("abd"));
        assert!(!u.holds_token("ab"));
        assert!(!u.holds_token("abcd"));
    }

    #[test]
    fn test_signed_out_holds_nothing() {
        let u = user("");
        assert!(!u.is_signed_in());
        assert!(!u.holds_token(""));
    }
}
