use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::admin_service::AdminList;
use crate::domain::comment::CommentAdminRow;
use crate::domain::post::PostAdminRow;
use crate::domain::tag::TagStats;
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;

const DEFAULT_LIMIT: u32 = 20;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct PaginationQuery {
    #[validate(range(min = 1, max = 100))]
    pub(crate) limit: Option<u32>,
    pub(crate) offset: Option<u32>,
}

impl PaginationQuery {
    /// limit/offset с подставленными значениями по умолчанию.
    fn window(&self) -> (u32, u32) {
        (self.limit.unwrap_or(DEFAULT_LIMIT), self.offset.unwrap_or(0))
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AdminPostDto {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) published_at: DateTime<Utc>,
    pub(crate) likes_count: i64,
    pub(crate) comments_count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AdminTagDto {
    pub(crate) title: String,
    pub(crate) posts_count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AdminCommentDto {
    pub(crate) text: String,
    pub(crate) post: String,
    pub(crate) post_slug: String,
    pub(crate) author: String,
    pub(crate) published_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AdminPostsResponseDto {
    pub(crate) items: Vec<AdminPostDto>,
    pub(crate) limit: u32,
    pub(crate) offset: u32,
    pub(crate) total: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AdminTagsResponseDto {
    pub(crate) items: Vec<AdminTagDto>,
    pub(crate) limit: u32,
    pub(crate) offset: u32,
    pub(crate) total: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AdminCommentsResponseDto {
    pub(crate) items: Vec<AdminCommentDto>,
    pub(crate) limit: u32,
    pub(crate) offset: u32,
    pub(crate) total: i64,
}

impl From<PostAdminRow> for AdminPostDto {
    fn from(row: PostAdminRow) -> Self {
        Self {
            title: row.title,
            author: row.author,
            published_at: row.published_at,
            likes_count: row.likes_count,
            comments_count: row.comments_count,
        }
    }
}

impl From<TagStats> for AdminTagDto {
    fn from(stats: TagStats) -> Self {
        Self {
            title: stats.tag.title,
            posts_count: stats.posts_count,
        }
    }
}

impl From<CommentAdminRow> for AdminCommentDto {
    fn from(row: CommentAdminRow) -> Self {
        Self {
            text: row.text,
            post: row.post_title,
            post_slug: row.post_slug,
            author: row.author,
            published_at: row.published_at,
        }
    }
}

impl From<AdminList<PostAdminRow>> for AdminPostsResponseDto {
    fn from(list: AdminList<PostAdminRow>) -> Self {
        Self {
            offset: list.offset,
            limit: list.limit,
            total: list.total,
            items: list.items.into_iter().map(AdminPostDto::from).collect(),
        }
    }
}

impl From<AdminList<TagStats>> for AdminTagsResponseDto {
    fn from(list: AdminList<TagStats>) -> Self {
        Self {
            offset: list.offset,
            limit: list.limit,
            total: list.total,
            items: list.items.into_iter().map(AdminTagDto::from).collect(),
        }
    }
}

impl From<AdminList<CommentAdminRow>> for AdminCommentsResponseDto {
    fn from(list: AdminList<CommentAdminRow>) -> Self {
        Self {
            offset: list.offset,
            limit: list.limit,
            total: list.total,
            items: list.items.into_iter().map(AdminCommentDto::from).collect(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/admin/posts/",
    tag = "admin",
    params(
        ("limit" = Option<u32>, Query, description = "Items per page (1..=100)"),
        ("offset" = Option<u32>, Query, description = "Offset from the beginning (>= 0)")
    ),
    responses(
        (status = 200, description = "Posts with like and comment counts", body = AdminPostsResponseDto),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<(StatusCode, Json<AdminPostsResponseDto>)> {
    query.validate()?;
    let (limit, offset) = query.window();

    let result = state.admin_service.list_posts(limit, offset).await?;

    Ok((StatusCode::OK, Json(AdminPostsResponseDto::from(result))))
}

#[utoipa::path(
    get,
    path = "/admin/tags/",
    tag = "admin",
    params(
        ("limit" = Option<u32>, Query, description = "Items per page (1..=100)"),
        ("offset" = Option<u32>, Query, description = "Offset from the beginning (>= 0)")
    ),
    responses(
        (status = 200, description = "Tags with post counts", body = AdminTagsResponseDto),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_tags(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<(StatusCode, Json<AdminTagsResponseDto>)> {
    query.validate()?;
    let (limit, offset) = query.window();

    let result = state.admin_service.list_tags(limit, offset).await?;

    Ok((StatusCode::OK, Json(AdminTagsResponseDto::from(result))))
}

#[utoipa::path(
    get,
    path = "/admin/comments/",
    tag = "admin",
    params(
        ("limit" = Option<u32>, Query, description = "Items per page (1..=100)"),
        ("offset" = Option<u32>, Query, description = "Offset from the beginning (>= 0)")
    ),
    responses(
        (status = 200, description = "Comments with post and author", body = AdminCommentsResponseDto),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_comments(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> AppResult<(StatusCode, Json<AdminCommentsResponseDto>)> {
    query.validate()?;
    let (limit, offset) = query.window();

    let result = state.admin_service.list_comments(limit, offset).await?;

    Ok((StatusCode::OK, Json(AdminCommentsResponseDto::from(result))))
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::PaginationQuery;

    #[test]
    fn pagination_query_defaults_to_start_of_list() {
        let query = PaginationQuery {
            limit: None,
            offset: None,
        };
        assert_eq!(query.window(), (20, 0));
    }

    #[test]
    fn pagination_query_keeps_requested_offset() {
        let query = PaginationQuery {
            limit: Some(10),
            offset: Some(25),
        };
        assert_eq!(query.window(), (10, 25));
    }

    #[test]
    fn pagination_query_rejects_zero_limit() {
        let query = PaginationQuery {
            limit: Some(0),
            offset: None,
        };
        assert!(query.validate().is_err());
    }
}
