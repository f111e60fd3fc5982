//! Domain Value Objects
//!
//! Immutable value types for the posts domain. Constructors report one
//! message per field so a request can be validated field by field.

use std::fmt;

use kernel::error::app_error::{AppError, AppResult};
use kernel::validation::{max_length, not_empty};
use serde_json::Value;

/// Maximum title length in characters
pub const TITLE_MAX_LENGTH: usize = 255;

/// Post title: non-empty, at most [`TITLE_MAX_LENGTH`] characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(AppError::bad_request(not_empty("title")));
        }
        if raw.chars().count() > TITLE_MAX_LENGTH {
            return Err(AppError::bad_request(max_length("title", TITLE_MAX_LENGTH)));
        }
        Ok(Self(raw))
    }

    /// Restore from a stored value without validation
    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Post body: non-empty text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content(String);

impl Content {
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(AppError::bad_request(not_empty("content")));
        }
        Ok(Self(raw))
    }

    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read the `isPublished` flag: a JSON boolean, or the strings `"true"` / `"false"`
pub fn published_flag(value: &Value) -> AppResult<bool> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        Value::String(s) if s == "true" => Ok(true),
        Value::String(s) if s == "false" => Ok(false),
        _ => Err(AppError::bad_request("isPublished must be a boolean value")),
    }
}

/// Sort order on creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    /// Newest first
    #[default]
    Desc,
}

impl SortOrder {
    /// Parse an optional query value; absent means [`SortOrder::Desc`]
    pub fn parse(raw: Option<&str>) -> AppResult<Self> {
        match raw {
            None => Ok(Self::default()),
            Some("asc") => Ok(Self::Asc),
            Some("desc") => Ok(Self::Desc),
            Some(_) => Err(AppError::bad_request(
                "sort must be one of the following values: asc, desc",
            )),
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Page window over a user's posts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    per_page: u32,
}

impl Pagination {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_PER_PAGE: u32 = 10;

    /// Both values must be at least 1
    pub fn new(page: u32, per_page: u32) -> Option<Self> {
        if page == 0 || per_page == 0 {
            None
        } else {
            Some(Self { page, per_page })
        }
    }

    /// Rows to skip: `(page - 1) * per_page`, clamped to `i64::MAX`
    pub fn offset(&self) -> i64 {
        let rows = u64::from(self.page - 1) * u64::from(self.per_page);
        i64::try_from(rows).unwrap_or(i64::MAX)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            per_page: Self::DEFAULT_PER_PAGE,
        }
    }
}

/// Parse an optional query value as an integer >= 1, falling back to `default`
pub fn positive_integer(field: &str, raw: Option<&str>, default: u32) -> AppResult<u32> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(AppError::bad_request(format!(
            "{field} must be a positive integer"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_rules() {
        assert!(Title::new("Hello").is_ok());
        assert_eq!(
            Title::new("").unwrap_err().message(),
            "title should not be empty"
        );

        let longest = "a".repeat(TITLE_MAX_LENGTH);
        assert!(Title::new(longest).is_ok());

        let too_long = "a".repeat(TITLE_MAX_LENGTH + 1);
        assert_eq!(
            Title::new(too_long).unwrap_err().message(),
            "title must be shorter than or equal to 255 characters"
        );
    }

    #[test]
    fn test_content_must_not_be_empty() {
        assert!(Content::new("body").is_ok());
        assert_eq!(
            Content::new("").unwrap_err().message(),
            "content should not be empty"
        );
    }

    #[test]
    fn test_published_flag() {
        assert!(published_flag(&json!(true)).unwrap());
        assert!(!published_flag(&json!(false)).unwrap());
        assert!(published_flag(&json!("true")).unwrap());
        assert!(!published_flag(&json!("false")).unwrap());
        assert!(published_flag(&json!("yes")).is_err());
        assert!(published_flag(&json!(1)).is_err());
    }

    #[test]
    fn test_sort_order() {
        assert_eq!(SortOrder::parse(None).unwrap(), SortOrder::Desc);
        assert_eq!(SortOrder::parse(Some("asc")).unwrap(), SortOrder::Asc);
        assert_eq!(SortOrder::parse(Some("desc")).unwrap(), SortOrder::Desc);
        assert!(SortOrder::parse(Some("DESC")).is_err());
    }

    #[test]
    fn test_pagination_window() {
        let p = Pagination::new(2, 10).unwrap();
        assert_eq!(p.offset(), 10);
        assert_eq!(p.limit(), 10);

        assert_eq!(Pagination::default().offset(), 0);
        assert_eq!(Pagination::default().limit(), 10);
        assert!(Pagination::new(0, 10).is_none());
        assert!(Pagination::new(1, 0).is_none());
    }

    #[test]
    fn test_largest_window_stays_positive() {
        let page = positive_integer("page", Some("4294967295"), 1).unwrap();
        let per_page = positive_integer("perPage", Some("4294967295"), 10).unwrap();
        let p = Pagination::new(page, per_page).unwrap();

        assert_eq!(p.offset(), i64::MAX);
        assert_eq!(p.limit(), i64::from(u32::MAX));

        let p = Pagination::new(2, u32::MAX).unwrap();
        assert_eq!(p.offset(), i64::from(u32::MAX));
    }

    #[test]
    fn test_positive_integer() {
        assert_eq!(positive_integer("page", None, 1).unwrap(), 1);
        assert_eq!(positive_integer("page", Some("3"), 1).unwrap(), 3);
        assert_eq!(
            positive_integer("perPage", Some("0"), 10)
                .unwrap_err()
                .message(),
            "perPage must be a positive integer"
        );
        assert!(positive_integer("page", Some("abc"), 1).is_err());
        assert!(positive_integer("page", Some("-1"), 1).is_err());
    }
}
