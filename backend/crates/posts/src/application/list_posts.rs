//! List Posts Use Case
//!
//! Counts the caller's posts, then reads one page of them.

use std::sync::Arc;

use kernel::error::{app_error::OptionExt, kind::ErrorKind};
use kernel::id::UserId;
use kernel::validation::Violations;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::{Pagination, SortOrder, positive_integer};
use crate::error::{PostError, PostResult};

/// Raw query values; `None` falls back to the defaults
#[derive(Debug, Clone, Default)]
pub struct ListPostsInput {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub sort: Option<String>,
}

/// One page of posts plus the total owned by the user
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub count: u64,
}

/// List posts use case
pub struct ListPostsUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> ListPostsUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId, input: ListPostsInput) -> PostResult<PostPage> {
        let mut violations = Violations::new();
        let page = violations.check(positive_integer(
            "page",
            input.page.as_deref(),
            Pagination::DEFAULT_PAGE,
        ));
        let per_page = violations.check(positive_integer(
            "perPage",
            input.per_page.as_deref(),
            Pagination::DEFAULT_PER_PAGE,
        ));
        let sort = violations.check(SortOrder::parse(input.sort.as_deref()));

        let (Some(page), Some(per_page), Some(sort)) = (page, per_page, sort) else {
            return Err(PostError::Validation(violations.into_messages()));
        };
        let pagination = Pagination::new(page, per_page)
            .ok_or_app_err(ErrorKind::InternalServerError, "Empty page window")?;

        let count = self.repo.count_by_user(user_id).await?;
        if count == 0 {
            return Ok(PostPage {
                posts: Vec::new(),
                count,
            });
        }

        let posts = self.repo.list_by_user(user_id, pagination, sort).await?;

        Ok(PostPage { posts, count })
    }
}
