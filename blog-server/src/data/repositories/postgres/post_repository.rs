use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::map_db_error;
use crate::data::Pagination;
use crate::data::post_repository::PostRepository;
use crate::domain::author::Author;
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostAdminRow, PostSummary};

const POST_SUMMARY_SELECT: &str = r#"
    SELECT
        p.id,
        p.title,
        p.text,
        p.slug,
        p.image,
        p.author_id,
        p.published_at,
        a.username AS author_username,
        (SELECT COUNT(*) FROM post_likes l WHERE l.post_id = p.id) AS likes_count
    FROM posts p
    JOIN authors a ON a.id = p.author_id
"#;

#[derive(Debug, Clone)]
pub(crate) struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_summaries(
        &self,
        sql: &str,
        binds: &[i64],
    ) -> Result<Vec<PostSummary>, DomainError> {
        let mut query = sqlx::query_as::<_, PostRow>(sql);
        for value in binds {
            query = query.bind(*value);
        }

        let rows = query.fetch_all(&self.pool).await.map_err(map_db_error)?;
        Ok(rows.into_iter().map(map_row_to_summary).collect())
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    text: String,
    slug: String,
    image: Option<String>,
    author_id: i64,
    published_at: DateTime<Utc>,
    author_username: String,
    likes_count: i64,
}

#[derive(sqlx::FromRow)]
struct PostAdminDbRow {
    title: String,
    author: String,
    published_at: DateTime<Utc>,
    likes_count: i64,
    comments_count: i64,
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn most_liked(&self, limit: i64) -> Result<Vec<PostSummary>, DomainError> {
        let sql = format!(
            "{POST_SUMMARY_SELECT}
            ORDER BY likes_count DESC, p.id ASC
            LIMIT $1"
        );
        self.fetch_summaries(&sql, &[limit]).await
    }

    async fn most_recent(&self, limit: i64) -> Result<Vec<PostSummary>, DomainError> {
        let sql = format!(
            "{POST_SUMMARY_SELECT}
            ORDER BY p.published_at DESC, p.id DESC
            LIMIT $1"
        );
        self.fetch_summaries(&sql, &[limit]).await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostSummary>, DomainError> {
        let sql = format!("{POST_SUMMARY_SELECT} WHERE p.slug = $1");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(row.map(map_row_to_summary))
    }

    async fn list_by_tag(&self, tag_id: i64, limit: i64) -> Result<Vec<PostSummary>, DomainError> {
        let sql = format!(
            "{POST_SUMMARY_SELECT}
            JOIN post_tags pt ON pt.post_id = p.id
            WHERE pt.tag_id = $1
            ORDER BY p.published_at DESC, p.id DESC
            LIMIT $2"
        );
        self.fetch_summaries(&sql, &[tag_id, limit]).await
    }

    async fn admin_rows(&self, pagination: Pagination) -> Result<Vec<PostAdminRow>, DomainError> {
        let rows = sqlx::query_as::<_, PostAdminDbRow>(
            r#"
            SELECT
                p.title,
                a.username AS author,
                p.published_at,
                (SELECT COUNT(*) FROM post_likes l WHERE l.post_id = p.id) AS likes_count,
                (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comments_count
            FROM posts p
            JOIN authors a ON a.id = p.author_id
            ORDER BY p.published_at DESC, p.id DESC
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
            .map(|row| PostAdminRow {
                title: row.title,
                author: row.author,
                published_at: row.published_at,
                likes_count: row.likes_count,
                comments_count: row.comments_count,
            })
            .collect())
    }

    async fn total_posts(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

// Строки из БД уже прошли ограничения схемы, поэтому значения не перепроверяются.
fn map_row_to_summary(row: PostRow) -> PostSummary {
    PostSummary {
        author: Author {
            id: row.author_id,
            username: row.author_username,
        },
        post: Post {
            id: row.id,
            title: row.title,
            text: row.text,
            slug: row.slug,
            image: row.image,
            author_id: row.author_id,
            published_at: row.published_at,
        },
        likes_count: row.likes_count,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{PostRow, map_row_to_summary};

    #[test]
    fn stored_row_is_mapped_without_normalization() {
        let row = PostRow {
            id: 7,
            title: " Spaced title ".to_string(),
            text: "  Indented body".to_string(),
            slug: "Hello-World".to_string(),
            image: None,
            author_id: 3,
            published_at: Utc::now(),
            author_username: "alice".to_string(),
            likes_count: 2,
        };

        let summary = map_row_to_summary(row);
        assert_eq!(summary.post.slug, "Hello-World");
        assert_eq!(summary.post.text, "  Indented body");
        assert_eq!(summary.post.title, " Spaced title ");
        assert_eq!(summary.post.teaser(), "  Indented body");
        assert_eq!(summary.author.username, "alice");
        assert_eq!(summary.likes_count, 2);
    }
}
