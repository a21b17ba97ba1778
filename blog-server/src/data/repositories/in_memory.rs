//! Хранилище в памяти для тестов сервисов и HTTP-слоя.
//! Повторяет порядок сортировки и подсчёты PostgreSQL-репозиториев.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::data::Pagination;
use crate::data::comment_repository::CommentRepository;
use crate::data::post_repository::PostRepository;
use crate::data::tag_repository::TagRepository;
use crate::domain::author::Author;
use crate::domain::comment::{CommentAdminRow, CommentView};
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostAdminRow, PostSummary};
use crate::domain::tag::{Tag, TagStats};

struct StoredComment {
    id: i64,
    post_id: i64,
    author_id: i64,
    text: String,
    published_at: DateTime<Utc>,
}

#[derive(Default)]
pub(crate) struct InMemoryBlog {
    authors: Vec<Author>,
    posts: Vec<Post>,
    tags: Vec<Tag>,
    post_tags: Vec<(i64, i64)>,
    likes: Vec<(i64, i64)>,
    comments: Vec<StoredComment>,
    calls: Mutex<HashMap<&'static str, usize>>,
}

impl InMemoryBlog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_author(&mut self, username: &str) -> i64 {
        let id = self.authors.len() as i64 + 1;
        self.authors.push(Author {
            id,
            username: username.to_string(),
        });
        id
    }

    pub(crate) fn add_post(&mut self, author_id: i64, slug: &str, published_at: DateTime<Utc>) -> i64 {
        let id = self.posts.len() as i64 + 1;
        self.posts.push(Post {
            id,
            title: format!("Post {slug}"),
            text: format!("Body of {slug}"),
            slug: slug.to_string(),
            image: None,
            author_id,
            published_at,
        });
        id
    }

    pub(crate) fn set_post_body(&mut self, post_id: i64, text: &str, image: Option<&str>) {
        let post = self
            .posts
            .iter_mut()
            .find(|post| post.id == post_id)
            .expect("post must exist");
        post.text = text.to_string();
        post.image = image.map(str::to_string);
    }

    pub(crate) fn add_tag(&mut self, title: &str) -> i64 {
        let id = self.tags.len() as i64 + 1;
        self.tags.push(Tag {
            id,
            title: title.to_string(),
        });
        id
    }

    pub(crate) fn tag_post(&mut self, post_id: i64, tag_id: i64) {
        self.post_tags.push((post_id, tag_id));
    }

    pub(crate) fn like(&mut self, post_id: i64, author_id: i64) {
        self.likes.push((post_id, author_id));
    }

    pub(crate) fn add_comment(
        &mut self,
        post_id: i64,
        author_id: i64,
        text: &str,
        published_at: DateTime<Utc>,
    ) {
        let id = self.comments.len() as i64 + 1;
        self.comments.push(StoredComment {
            id,
            post_id,
            author_id,
            text: text.to_string(),
            published_at,
        });
    }

    /// Сколько раз вызывался метод репозитория.
    pub(crate) fn calls(&self, method: &'static str) -> usize {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .get(method)
            .copied()
            .unwrap_or(0)
    }

    fn record(&self, method: &'static str) {
        *self
            .calls
            .lock()
            .expect("calls mutex poisoned")
            .entry(method)
            .or_insert(0) += 1;
    }

    fn author(&self, id: i64) -> Author {
        self.authors
            .iter()
            .find(|author| author.id == id)
            .cloned()
            .expect("author must exist")
    }

    fn likes_count(&self, post_id: i64) -> i64 {
        self.likes.iter().filter(|(post, _)| *post == post_id).count() as i64
    }

    fn comments_count(&self, post_id: i64) -> i64 {
        self.comments
            .iter()
            .filter(|comment| comment.post_id == post_id)
            .count() as i64
    }

    fn tag_posts_count(&self, tag_id: i64) -> i64 {
        self.post_tags.iter().filter(|(_, tag)| *tag == tag_id).count() as i64
    }

    fn summary(&self, post: &Post) -> PostSummary {
        PostSummary {
            post: post.clone(),
            author: self.author(post.author_id),
            likes_count: self.likes_count(post.id),
        }
    }

    fn stats(&self, tag: &Tag) -> TagStats {
        TagStats {
            tag: tag.clone(),
            posts_count: self.tag_posts_count(tag.id),
        }
    }

    fn recent_first(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        posts.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        posts
    }
}

fn page<T>(items: Vec<T>, pagination: Pagination) -> Vec<T> {
    items
        .into_iter()
        .skip(pagination.offset() as usize)
        .take(pagination.limit() as usize)
        .collect()
}

#[async_trait]
impl PostRepository for InMemoryBlog {
    async fn most_liked(&self, limit: i64) -> Result<Vec<PostSummary>, DomainError> {
        self.record("most_liked");
        let mut summaries: Vec<PostSummary> =
            self.posts.iter().map(|post| self.summary(post)).collect();
        summaries.sort_by(|a, b| {
            b.likes_count
                .cmp(&a.likes_count)
                .then_with(|| a.post.id.cmp(&b.post.id))
        });
        summaries.truncate(limit as usize);
        Ok(summaries)
    }

    async fn most_recent(&self, limit: i64) -> Result<Vec<PostSummary>, DomainError> {
        self.record("most_recent");
        Ok(self
            .recent_first()
            .into_iter()
            .take(limit as usize)
            .map(|post| self.summary(post))
            .collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostSummary>, DomainError> {
        self.record("find_by_slug");
        Ok(self
            .posts
            .iter()
            .find(|post| post.slug == slug)
            .map(|post| self.summary(post)))
    }

    async fn list_by_tag(&self, tag_id: i64, limit: i64) -> Result<Vec<PostSummary>, DomainError> {
        self.record("list_by_tag");
        Ok(self
            .recent_first()
            .into_iter()
            .filter(|post| self.post_tags.contains(&(post.id, tag_id)))
            .take(limit as usize)
            .map(|post| self.summary(post))
            .collect())
    }

    async fn admin_rows(&self, pagination: Pagination) -> Result<Vec<PostAdminRow>, DomainError> {
        self.record("post_admin_rows");
        let rows = self
            .recent_first()
            .into_iter()
            .map(|post| PostAdminRow {
                title: post.title.clone(),
                author: self.author(post.author_id).username,
                published_at: post.published_at,
                likes_count: self.likes_count(post.id),
                comments_count: self.comments_count(post.id),
            })
            .collect();
        Ok(page(rows, pagination))
    }

    async fn total_posts(&self) -> Result<i64, DomainError> {
        Ok(self.posts.len() as i64)
    }
}

#[async_trait]
impl TagRepository for InMemoryBlog {
    async fn popular(&self, limit: i64) -> Result<Vec<TagStats>, DomainError> {
        self.record("popular_tags");
        let mut stats: Vec<TagStats> = self.tags.iter().map(|tag| self.stats(tag)).collect();
        stats.sort_by(|a, b| {
            b.posts_count
                .cmp(&a.posts_count)
                .then_with(|| a.tag.id.cmp(&b.tag.id))
        });
        stats.truncate(limit as usize);
        Ok(stats)
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Tag>, DomainError> {
        self.record("find_by_title");
        Ok(self.tags.iter().find(|tag| tag.title == title).cloned())
    }

    async fn tags_for_posts(
        &self,
        post_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<TagStats>>, DomainError> {
        self.record("tags_for_posts");
        let mut by_post: HashMap<i64, Vec<TagStats>> = HashMap::new();
        for (post_id, tag_id) in &self.post_tags {
            if !post_ids.contains(post_id) {
                continue;
            }
            if let Some(tag) = self.tags.iter().find(|tag| tag.id == *tag_id) {
                by_post.entry(*post_id).or_default().push(self.stats(tag));
            }
        }
        for tags in by_post.values_mut() {
            tags.sort_by(|a, b| a.tag.title.cmp(&b.tag.title));
        }
        Ok(by_post)
    }

    async fn admin_rows(&self, pagination: Pagination) -> Result<Vec<TagStats>, DomainError> {
        self.record("tag_admin_rows");
        let mut stats: Vec<TagStats> = self.tags.iter().map(|tag| self.stats(tag)).collect();
        stats.sort_by(|a, b| a.tag.title.cmp(&b.tag.title));
        Ok(page(stats, pagination))
    }

    async fn total_tags(&self) -> Result<i64, DomainError> {
        Ok(self.tags.len() as i64)
    }
}

#[async_trait]
impl CommentRepository for InMemoryBlog {
    async fn counts_for_posts(&self, post_ids: &[i64]) -> Result<HashMap<i64, i64>, DomainError> {
        self.record("counts_for_posts");
        let mut counts = HashMap::new();
        for comment in &self.comments {
            if post_ids.contains(&comment.post_id) {
                *counts.entry(comment.post_id).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }

    async fn list_for_post(&self, post_id: i64) -> Result<Vec<CommentView>, DomainError> {
        self.record("list_for_post");
        let mut comments: Vec<&StoredComment> = self
            .comments
            .iter()
            .filter(|comment| comment.post_id == post_id)
            .collect();
        comments.sort_by(|a, b| {
            a.published_at
                .cmp(&b.published_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(comments
            .into_iter()
            .map(|comment| CommentView {
                text: comment.text.clone(),
                author: self.author(comment.author_id).username,
                published_at: comment.published_at,
            })
            .collect())
    }

    async fn admin_rows(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<CommentAdminRow>, DomainError> {
        self.record("comment_admin_rows");
        let mut comments: Vec<&StoredComment> = self.comments.iter().collect();
        comments.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let rows = comments
            .into_iter()
            .map(|comment| {
                let post = self
                    .posts
                    .iter()
                    .find(|post| post.id == comment.post_id)
                    .expect("comment post must exist");
                CommentAdminRow {
                    text: comment.text.clone(),
                    post_title: post.title.clone(),
                    post_slug: post.slug.clone(),
                    author: self.author(comment.author_id).username,
                    published_at: comment.published_at,
                }
            })
            .collect();
        Ok(page(rows, pagination))
    }

    async fn total_comments(&self) -> Result<i64, DomainError> {
        Ok(self.comments.len() as i64)
    }
}
