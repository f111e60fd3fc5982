//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::{Content, Pagination, SortOrder, Title};
use crate::error::PostResult;

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgPostRepository {
    async fn count_by_user(&self, user_id: &UserId) -> PostResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        pagination: Pagination,
        sort: SortOrder,
    ) -> PostResult<Vec<Post>> {
        // `seq` follows insertion order and breaks ties on created_at
        let order = sort.as_sql();
        let sql = format!(
            r#"
            SELECT
                post_id,
                user_id,
                title,
                content,
                is_published,
                created_at
            FROM posts
            WHERE user_id = $1
            ORDER BY created_at {order}, seq {order}
            OFFSET $2
            LIMIT $3
            "#
        );

        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(user_id.as_uuid())
            .bind(pagination.offset())
            .bind(pagination.limit())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn create(&self, post: &Post) -> PostResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                user_id,
                title,
                content,
                is_published,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.user_id.as_uuid())
        .bind(post.title.as_str())
        .bind(post.content.as_str())
        .bind(post.is_published)
        .bind(post.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id_and_user(
        &self,
        post_id: &PostId,
        user_id: &UserId,
    ) -> PostResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                post_id,
                user_id,
                title,
                content,
                is_published,
                created_at
            FROM posts
            WHERE post_id = $1 AND user_id = $2
            "#,
        )
        .bind(post_id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn update(&self, post: &Post) -> PostResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE posts SET
                title = $3,
                content = $4,
                is_published = $5
            WHERE post_id = $1 AND user_id = $2
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.user_id.as_uuid())
        .bind(post.title.as_str())
        .bind(post.content.as_str())
        .bind(post.is_published)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, post_id: &PostId, user_id: &UserId) -> PostResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE post_id = $1 AND user_id = $2")
            .bind(post_id.as_uuid())
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    user_id: Uuid,
    title: String,
    content: String,
    is_published: bool,
    created_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            user_id: UserId::from_uuid(self.user_id),
            title: Title::from_db(self.title),
            content: Content::from_db(self.content),
            is_published: self.is_published,
            created_at: self.created_at,
        }
    }
}
