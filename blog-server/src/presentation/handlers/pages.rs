use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::blog_service::{IndexPage, PostCard, PostDetailPage, TagFilterPage};
use crate::domain::comment::CommentView;
use crate::domain::tag::TagStats;
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct TagDto {
    pub(crate) title: String,
    /// Сколько постов помечено этим тегом.
    pub(crate) posts_with_tag: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostCardDto {
    pub(crate) title: String,
    pub(crate) teaser_text: String,
    pub(crate) author: String,
    pub(crate) comments_amount: i64,
    pub(crate) image_url: Option<String>,
    pub(crate) published_at: DateTime<Utc>,
    pub(crate) slug: String,
    pub(crate) tags: Vec<TagDto>,
    pub(crate) first_tag_title: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct CommentDto {
    pub(crate) text: String,
    pub(crate) published_at: DateTime<Utc>,
    pub(crate) author: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostDetailDto {
    pub(crate) title: String,
    pub(crate) text: String,
    pub(crate) author: String,
    pub(crate) comments: Vec<CommentDto>,
    pub(crate) likes_amount: i64,
    pub(crate) image_url: Option<String>,
    pub(crate) published_at: DateTime<Utc>,
    pub(crate) slug: String,
    pub(crate) tags: Vec<TagDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct IndexContextDto {
    pub(crate) most_popular_posts: Vec<PostCardDto>,
    pub(crate) page_posts: Vec<PostCardDto>,
    pub(crate) popular_tags: Vec<TagDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostDetailContextDto {
    pub(crate) post: PostDetailDto,
    pub(crate) popular_tags: Vec<TagDto>,
    pub(crate) most_popular_posts: Vec<PostCardDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct TagFilterContextDto {
    pub(crate) tag: String,
    pub(crate) popular_tags: Vec<TagDto>,
    pub(crate) posts: Vec<PostCardDto>,
    pub(crate) most_popular_posts: Vec<PostCardDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ContactsContextDto {}

impl From<TagStats> for TagDto {
    fn from(stats: TagStats) -> Self {
        Self {
            title: stats.tag.title,
            posts_with_tag: stats.posts_count,
        }
    }
}

impl From<CommentView> for CommentDto {
    fn from(comment: CommentView) -> Self {
        Self {
            text: comment.text,
            published_at: comment.published_at,
            author: comment.author,
        }
    }
}

impl PostCardDto {
    fn from_card(card: PostCard, media_url: &str) -> Self {
        let PostCard {
            summary,
            comments_count,
            tags,
        } = card;
        let first_tag_title = tags.first().map(|stats| stats.tag.title.clone());

        Self {
            teaser_text: summary.post.teaser(),
            image_url: image_url(media_url, summary.post.image.as_deref()),
            title: summary.post.title,
            author: summary.author.username,
            comments_amount: comments_count,
            published_at: summary.post.published_at,
            slug: summary.post.slug,
            tags: tags.into_iter().map(TagDto::from).collect(),
            first_tag_title,
        }
    }
}

fn cards(cards: Vec<PostCard>, media_url: &str) -> Vec<PostCardDto> {
    cards
        .into_iter()
        .map(|card| PostCardDto::from_card(card, media_url))
        .collect()
}

fn tags(stats: Vec<TagStats>) -> Vec<TagDto> {
    stats.into_iter().map(TagDto::from).collect()
}

impl IndexContextDto {
    fn from_page(page: IndexPage, media_url: &str) -> Self {
        Self {
            most_popular_posts: cards(page.most_popular_posts, media_url),
            page_posts: cards(page.page_posts, media_url),
            popular_tags: tags(page.popular_tags),
        }
    }
}

impl PostDetailContextDto {
    fn from_page(page: PostDetailPage, media_url: &str) -> Self {
        let summary = page.post;
        let post = PostDetailDto {
            image_url: image_url(media_url, summary.post.image.as_deref()),
            title: summary.post.title,
            text: summary.post.text,
            author: summary.author.username,
            comments: page.comments.into_iter().map(CommentDto::from).collect(),
            likes_amount: summary.likes_count,
            published_at: summary.post.published_at,
            slug: summary.post.slug,
            tags: tags(page.tags),
        };

        Self {
            post,
            popular_tags: tags(page.popular_tags),
            most_popular_posts: cards(page.most_popular_posts, media_url),
        }
    }
}

impl TagFilterContextDto {
    fn from_page(page: TagFilterPage, media_url: &str) -> Self {
        Self {
            tag: page.tag.title,
            popular_tags: tags(page.popular_tags),
            posts: cards(page.posts, media_url),
            most_popular_posts: cards(page.most_popular_posts, media_url),
        }
    }
}

/// Абсолютные URL отдаются как есть, относительные пути дописываются к MEDIA_URL.
/// Пустой путь в БД означает, что картинки нет.
pub(crate) fn image_url(media_url: &str, image: Option<&str>) -> Option<String> {
    let image = image.map(str::trim).filter(|path| !path.is_empty())?;
    if image.starts_with("http://") || image.starts_with("https://") {
        return Some(image.to_string());
    }
    Some(format!(
        "{}/{}",
        media_url.trim_end_matches('/'),
        image.trim_start_matches('/')
    ))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "pages",
    responses(
        (status = 200, description = "Index page context", body = IndexContextDto),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn index(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<IndexContextDto>)> {
    let page = state.blog_service.index().await?;

    Ok((
        StatusCode::OK,
        Json(IndexContextDto::from_page(page, &state.media_url)),
    ))
}

#[utoipa::path(
    get,
    path = "/posts/{slug}/",
    tag = "pages",
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    responses(
        (status = 200, description = "Post detail context", body = PostDetailContextDto),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn post_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<(StatusCode, Json<PostDetailContextDto>)> {
    let page = state.blog_service.post_detail(&slug).await?;

    Ok((
        StatusCode::OK,
        Json(PostDetailContextDto::from_page(page, &state.media_url)),
    ))
}

#[utoipa::path(
    get,
    path = "/tags/{tag_title}/",
    tag = "pages",
    params(
        ("tag_title" = String, Path, description = "Tag title")
    ),
    responses(
        (status = 200, description = "Posts filtered by tag", body = TagFilterContextDto),
        (status = 404, description = "Tag not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn tag_filter(
    State(state): State<AppState>,
    Path(tag_title): Path<String>,
) -> AppResult<(StatusCode, Json<TagFilterContextDto>)> {
    let page = state.blog_service.tag_filter(&tag_title).await?;

    Ok((
        StatusCode::OK,
        Json(TagFilterContextDto::from_page(page, &state.media_url)),
    ))
}

#[utoipa::path(
    get,
    path = "/contacts/",
    tag = "pages",
    responses(
        (status = 200, description = "Contacts page context", body = ContactsContextDto)
    )
)]
pub(crate) async fn contacts() -> (StatusCode, Json<ContactsContextDto>) {
    (StatusCode::OK, Json(ContactsContextDto {}))
}
