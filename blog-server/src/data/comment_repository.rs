use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::Pagination;
use crate::domain::comment::{CommentAdminRow, CommentView};
use crate::domain::error::DomainError;

#[async_trait]
pub(crate) trait CommentRepository: Send + Sync {
    /// Число комментариев для пачки постов одним сгруппированным запросом.
    /// Посты без комментариев в результат не попадают.
    async fn counts_for_posts(&self, post_ids: &[i64]) -> Result<HashMap<i64, i64>, DomainError>;
    async fn list_for_post(&self, post_id: i64) -> Result<Vec<CommentView>, DomainError>;
    async fn admin_rows(&self, pagination: Pagination)
    -> Result<Vec<CommentAdminRow>, DomainError>;
    async fn total_comments(&self) -> Result<i64, DomainError>;
}

#[async_trait]
impl<T: CommentRepository + ?Sized> CommentRepository for Arc<T> {
    async fn counts_for_posts(&self, post_ids: &[i64]) -> Result<HashMap<i64, i64>, DomainError> {
        (**self).counts_for_posts(post_ids).await
    }

    async fn list_for_post(&self, post_id: i64) -> Result<Vec<CommentView>, DomainError> {
        (**self).list_for_post(post_id).await
    }

    async fn admin_rows(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<CommentAdminRow>, DomainError> {
        (**self).admin_rows(pagination).await
    }

    async fn total_comments(&self) -> Result<i64, DomainError> {
        (**self).total_comments().await
    }
}
