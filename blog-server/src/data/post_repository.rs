use std::sync::Arc;

use async_trait::async_trait;

use super::Pagination;
use crate::domain::error::DomainError;
use crate::domain::post::{PostAdminRow, PostSummary};

#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    /// Посты по убыванию числа лайков, при равенстве по id.
    async fn most_liked(&self, limit: i64) -> Result<Vec<PostSummary>, DomainError>;
    /// Самые свежие посты.
    async fn most_recent(&self, limit: i64) -> Result<Vec<PostSummary>, DomainError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostSummary>, DomainError>;
    /// Свежие посты, помеченные тегом.
    async fn list_by_tag(&self, tag_id: i64, limit: i64) -> Result<Vec<PostSummary>, DomainError>;
    async fn admin_rows(&self, pagination: Pagination) -> Result<Vec<PostAdminRow>, DomainError>;
    async fn total_posts(&self) -> Result<i64, DomainError>;
}

#[async_trait]
impl<T: PostRepository + ?Sized> PostRepository for Arc<T> {
    async fn most_liked(&self, limit: i64) -> Result<Vec<PostSummary>, DomainError> {
        (**self).most_liked(limit).await
    }

    async fn most_recent(&self, limit: i64) -> Result<Vec<PostSummary>, DomainError> {
        (**self).most_recent(limit).await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostSummary>, DomainError> {
        (**self).find_by_slug(slug).await
    }

    async fn list_by_tag(&self, tag_id: i64, limit: i64) -> Result<Vec<PostSummary>, DomainError> {
        (**self).list_by_tag(tag_id, limit).await
    }

    async fn admin_rows(&self, pagination: Pagination) -> Result<Vec<PostAdminRow>, DomainError> {
        (**self).admin_rows(pagination).await
    }

    async fn total_posts(&self) -> Result<i64, DomainError> {
        (**self).total_posts().await
    }
}
