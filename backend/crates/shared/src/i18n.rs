//! Message Catalog
//!
//! Maps message keys (`user.SignUpSuccessful`, `post.ListRetrieved`, ...) to
//! their user-facing text. Use cases never produce message text; the HTTP
//! boundary picks the key for the outcome and resolves it here.

use std::fmt;

/// Locale of a message catalog. Only English is bundled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
}

/// Message keys understood by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    // user.*
    SignUpSuccessful,
    SignInSuccessful,
    SignOutSuccessful,
    DuplicateEmail,
    InvalidEmail,
    InvalidPassword,
    NotSignedIn,
    UserNotFound,

    // post.*
    ListRetrieved,
    CreateSuccessful,
    UpdateSuccessful,
    DeleteSuccessful,
    InfoRetrieved,
    PostNotFound,

    // common.*
    ValidationFailed,
    RouteNotFound,
    MethodNotAllowed,
    InternalError,
    HealthOk,
}

impl MessageKey {
    /// Dotted catalog key, e.g. `user.SignUpSuccessful`
    pub const fn key(&self) -> &'static str {
        match self {
            MessageKey::SignUpSuccessful => "user.SignUpSuccessful",
            MessageKey::SignInSuccessful => "user.SignInSuccessful",
            MessageKey::SignOutSuccessful => "user.SignOutSuccessful",
            MessageKey::DuplicateEmail => "user.DuplicateEmail",
            MessageKey::InvalidEmail => "user.InvalidEmail",
            MessageKey::InvalidPassword => "user.InvalidPassword",
            MessageKey::NotSignedIn => "user.NotSignedIn",
            MessageKey::UserNotFound => "user.NotFound",
            MessageKey::ListRetrieved => "post.ListRetrieved",
            MessageKey::CreateSuccessful => "post.CreateSuccessful",
            MessageKey::UpdateSuccessful => "post.UpdateSuccessful",
            MessageKey::DeleteSuccessful => "post.DeleteSuccessful",
            MessageKey::InfoRetrieved => "post.InfoRetrieved",
            MessageKey::PostNotFound => "post.NotFound",
            MessageKey::ValidationFailed => "common.ValidationFailed",
            MessageKey::RouteNotFound => "common.RouteNotFound",
            MessageKey::MethodNotAllowed => "common.MethodNotAllowed",
            MessageKey::InternalError => "common.InternalError",
            MessageKey::HealthOk => "common.HealthOk",
        }
    }

    /// Resolve the message text for a locale
    pub const fn translate(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en(),
        }
    }

    /// Resolve the message text in the fallback locale
    pub const fn text(&self) -> &'static str {
        self.translate(Locale::En)
    }

    const fn en(&self) -> &'static str {
        match self {
            MessageKey::SignUpSuccessful => "User signed up successfully",
            MessageKey::SignInSuccessful => "User signed in successfully",
            MessageKey::SignOutSuccessful => "User signed out successfully",
            MessageKey::DuplicateEmail => "Email already exists",
            MessageKey::InvalidEmail => "Invalid email",
            MessageKey::InvalidPassword => "Invalid password",
            MessageKey::NotSignedIn => "User is not signed in",
            MessageKey::UserNotFound => "User not found",
            MessageKey::ListRetrieved => "Posts retrieved successfully",
            MessageKey::CreateSuccessful => "Post created successfully",
            MessageKey::UpdateSuccessful => "Post updated successfully",
            MessageKey::DeleteSuccessful => "Post deleted successfully",
            MessageKey::InfoRetrieved => "Post retrieved successfully",
            MessageKey::PostNotFound => "Post not found",
            MessageKey::ValidationFailed => "Validation failed",
            MessageKey::RouteNotFound => "Route not found",
            MessageKey::MethodNotAllowed => "Method not allowed",
            MessageKey::InternalError => "Something went wrong",
            MessageKey::HealthOk => "Service is healthy",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
