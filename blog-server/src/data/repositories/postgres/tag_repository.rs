use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use super::map_db_error;
use crate::data::Pagination;
use crate::data::tag_repository::TagRepository;
use crate::domain::error::DomainError;
use crate::domain::tag::{Tag, TagStats};

#[derive(Debug, Clone)]
pub(crate) struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TagRow {
    id: i64,
    title: String,
}

#[derive(sqlx::FromRow)]
struct TagStatsRow {
    id: i64,
    title: String,
    posts_count: i64,
}

#[derive(sqlx::FromRow)]
struct PostTagRow {
    post_id: i64,
    id: i64,
    title: String,
    posts_count: i64,
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn popular(&self, limit: i64) -> Result<Vec<TagStats>, DomainError> {
        let rows = sqlx::query_as::<_, TagStatsRow>(
            r#"
            SELECT
                t.id,
                t.title,
                COUNT(pt.post_id) AS posts_count
            FROM tags t
            LEFT JOIN post_tags pt ON pt.tag_id = t.id
            GROUP BY t.id, t.title
            ORDER BY posts_count DESC, t.id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(map_stats_row).collect())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Tag>, DomainError> {
        let row = sqlx::query_as::<_, TagRow>(
            r#"
            SELECT id, title
            FROM tags
            WHERE title = $1
            "#,
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(|row| Tag {
            id: row.id,
            title: row.title,
        }))
    }

    async fn tags_for_posts(
        &self,
        post_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<TagStats>>, DomainError> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, PostTagRow>(
            r#"
            SELECT
                pt.post_id,
                t.id,
                t.title,
                (SELECT COUNT(*) FROM post_tags c WHERE c.tag_id = t.id) AS posts_count
            FROM post_tags pt
            JOIN tags t ON t.id = pt.tag_id
            WHERE pt.post_id = ANY($1)
            ORDER BY pt.post_id, t.title
            "#,
        )
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut by_post: HashMap<i64, Vec<TagStats>> = HashMap::new();
        for row in rows {
            let stats = map_stats_row(TagStatsRow {
                id: row.id,
                title: row.title,
                posts_count: row.posts_count,
            });
            by_post.entry(row.post_id).or_default().push(stats);
        }
        Ok(by_post)
    }

    async fn admin_rows(&self, pagination: Pagination) -> Result<Vec<TagStats>, DomainError> {
        let rows = sqlx::query_as::<_, TagStatsRow>(
            r#"
            SELECT
                t.id,
                t.title,
                COUNT(pt.post_id) AS posts_count
            FROM tags t
            LEFT JOIN post_tags pt ON pt.tag_id = t.id
            GROUP BY t.id, t.title
            ORDER BY t.title ASC
            LIMIT $1
            OFFSET $2
            "#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(map_stats_row).collect())
    }

    async fn total_tags(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tags")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

fn map_stats_row(row: TagStatsRow) -> TagStats {
    TagStats {
        tag: Tag {
            id: row.id,
            title: row.title,
        },
        posts_count: row.posts_count,
    }
}
