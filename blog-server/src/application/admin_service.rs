use crate::data::Pagination;
use crate::data::comment_repository::CommentRepository;
use crate::data::post_repository::PostRepository;
use crate::data::tag_repository::TagRepository;
use crate::domain::comment::CommentAdminRow;
use crate::domain::error::DomainError;
use crate::domain::post::PostAdminRow;
use crate::domain::tag::TagStats;

#[derive(Debug, Clone)]
pub(crate) struct AdminList<T> {
    pub(crate) items: Vec<T>,
    pub(crate) limit: u32,
    pub(crate) offset: u32,
    pub(crate) total: i64,
}

pub(crate) struct AdminService<P, T, C>
where
    P: PostRepository,
    T: TagRepository,
    C: CommentRepository,
{
    posts: P,
    tags: T,
    comments: C,
}

impl<P, T, C> AdminService<P, T, C>
where
    P: PostRepository,
    T: TagRepository,
    C: CommentRepository,
{
    pub(crate) fn new(posts: P, tags: T, comments: C) -> Self {
        Self {
            posts,
            tags,
            comments,
        }
    }

    pub(crate) async fn list_posts(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<AdminList<PostAdminRow>, DomainError> {
        let pagination = Pagination { limit, offset };
        let items = self.posts.admin_rows(pagination).await?;
        let total = self.posts.total_posts().await?;

        Ok(AdminList {
            items,
            limit,
            offset,
            total,
        })
    }

    pub(crate) async fn list_tags(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<AdminList<TagStats>, DomainError> {
        let pagination = Pagination { limit, offset };
        let items = self.tags.admin_rows(pagination).await?;
        let total = self.tags.total_tags().await?;

        Ok(AdminList {
            items,
            limit,
            offset,
            total,
        })
    }

    pub(crate) async fn list_comments(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<AdminList<CommentAdminRow>, DomainError> {
        let pagination = Pagination { limit, offset };
        let items = self.comments.admin_rows(pagination).await?;
        let total = self.comments.total_comments().await?;

        Ok(AdminList {
            items,
            limit,
            offset,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, Utc};

    use super::AdminService;
    use crate::data::repositories::in_memory::InMemoryBlog;

    fn store() -> Arc<InMemoryBlog> {
        let now = Utc::now();
        let mut store = InMemoryBlog::new();
        let alice = store.add_author("alice");
        let bob = store.add_author("bob");
        let older = store.add_post(alice, "older", now - Duration::hours(2));
        let newer = store.add_post(bob, "newer", now - Duration::hours(1));
        store.like(older, alice);
        store.like(older, bob);
        store.add_comment(newer, alice, "hi", now);
        store.add_comment(newer, bob, "hello", now + Duration::minutes(1));
        let zeta = store.add_tag("zeta");
        store.add_tag("alpha");
        store.tag_post(older, zeta);
        store.tag_post(newer, zeta);
        Arc::new(store)
    }

    #[tokio::test]
    async fn list_posts_includes_derived_counts() {
        let store = store();
        let service = AdminService::new(store.clone(), store.clone(), store.clone());

        let list = service.list_posts(20, 0).await.expect("must succeed");
        assert_eq!(list.total, 2);
        assert_eq!(list.items[0].title, "Post newer");
        assert_eq!(list.items[0].author, "bob");
        assert_eq!(list.items[0].comments_count, 2);
        assert_eq!(list.items[1].likes_count, 2);
        assert_eq!(list.items[1].comments_count, 0);
    }

    #[tokio::test]
    async fn list_tags_orders_by_title_with_post_counts() {
        let store = store();
        let service = AdminService::new(store.clone(), store.clone(), store.clone());

        let list = service.list_tags(20, 0).await.expect("must succeed");
        let rows: Vec<(&str, i64)> = list
            .items
            .iter()
            .map(|stats| (stats.tag.title.as_str(), stats.posts_count))
            .collect();
        assert_eq!(rows, vec![("alpha", 0), ("zeta", 2)]);
    }

    #[tokio::test]
    async fn list_tags_applies_offset_that_is_not_page_aligned() {
        let store = store();
        let service = AdminService::new(store.clone(), store.clone(), store.clone());

        let list = service.list_tags(2, 1).await.expect("must succeed");
        assert_eq!(list.limit, 2);
        assert_eq!(list.offset, 1);
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].tag.title, "zeta");
    }

    #[tokio::test]
    async fn list_comments_is_paginated() {
        let store = store();
        let service = AdminService::new(store.clone(), store.clone(), store.clone());

        let list = service.list_comments(1, 1).await.expect("must succeed");
        assert_eq!(list.total, 2);
        assert_eq!(list.offset, 1);
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].text, "hi");
        assert_eq!(list.items[0].post_slug, "newer");
    }
}
