use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::Pagination;
use crate::domain::error::DomainError;
use crate::domain::tag::{Tag, TagStats};

#[async_trait]
pub(crate) trait TagRepository: Send + Sync {
    /// Теги по убыванию числа постов, при равенстве по id.
    async fn popular(&self, limit: i64) -> Result<Vec<TagStats>, DomainError>;
    async fn find_by_title(&self, title: &str) -> Result<Option<Tag>, DomainError>;
    /// Теги для пачки постов одним запросом: post_id -> теги, упорядоченные по названию.
    async fn tags_for_posts(
        &self,
        post_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<TagStats>>, DomainError>;
    async fn admin_rows(&self, pagination: Pagination) -> Result<Vec<TagStats>, DomainError>;
    async fn total_tags(&self) -> Result<i64, DomainError>;
}

#[async_trait]
impl<T: TagRepository + ?Sized> TagRepository for Arc<T> {
    async fn popular(&self, limit: i64) -> Result<Vec<TagStats>, DomainError> {
        (**self).popular(limit).await
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Tag>, DomainError> {
        (**self).find_by_title(title).await
    }

    async fn tags_for_posts(
        &self,
        post_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<TagStats>>, DomainError> {
        (**self).tags_for_posts(post_ids).await
    }

    async fn admin_rows(&self, pagination: Pagination) -> Result<Vec<TagStats>, DomainError> {
        (**self).admin_rows(pagination).await
    }

    async fn total_tags(&self) -> Result<i64, DomainError> {
        (**self).total_tags().await
    }
}
