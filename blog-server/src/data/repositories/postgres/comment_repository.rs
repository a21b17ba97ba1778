use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::map_db_error;
use crate::data::Pagination;
use crate::data::comment_repository::CommentRepository;
use crate::domain::comment::{CommentAdminRow, CommentView};
use crate::domain::error::DomainError;

#[derive(Debug, Clone)]
pub(crate) struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    text: String,
    author: String,
    published_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct CommentAdminDbRow {
    text: String,
    post_title: String,
    post_slug: String,
    author: String,
    published_at: DateTime<Utc>,
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn counts_for_posts(&self, post_ids: &[i64]) -> Result<HashMap<i64, i64>, DomainError> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT post_id, COUNT(*) AS comments_count
            FROM comments
            WHERE post_id = ANY($1)
            GROUP BY post_id
            "#,
        )
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().collect())
    }

    async fn list_for_post(&self, post_id: i64) -> Result<Vec<CommentView>, DomainError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT
                c.text,
                a.username AS author,
                c.published_at
            FROM comments c
            JOIN authors a ON a.id = c.author_id
            WHERE c.post_id = $1
            ORDER BY c.published_at ASC, c.id ASC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|row| CommentView {
                text: row.text,
                author: row.author,
                published_at: row.published_at,
            })
            .collect())
    }

    async fn admin_rows(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<CommentAdminRow>, DomainError> {
        let rows = sqlx::query_as::<_, CommentAdminDbRow>(
            r#"
            SELECT
                c.text,
                p.title AS post_title,
                p.slug AS post_slug,
                a.username AS author,
                c.published_at
            FROM comments c
            JOIN posts p ON p.id = c.post_id
            JOIN authors a ON a.id = c.author_id
            ORDER BY c.published_at DESC, c.id DESC
            LIMIT $1
            OFFSET $2
            "#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|row| CommentAdminRow {
                text: row.text,
                post_title: row.post_title,
                post_slug: row.post_slug,
                author: row.author,
                published_at: row.published_at,
            })
            .collect())
    }

    async fn total_comments(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
