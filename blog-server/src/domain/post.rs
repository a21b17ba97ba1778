use chrono::{DateTime, Utc};

use super::author::Author;

pub(crate) const TEASER_CHARS: usize = 200;

/// Пост в том виде, в каком он хранится: текст и slug не нормализуются.
#[derive(Debug, Clone)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) text: String,
    pub(crate) slug: String,
    pub(crate) image: Option<String>,
    pub(crate) author_id: i64,
    pub(crate) published_at: DateTime<Utc>,
}

/// Пост вместе с автором и числом лайков, как его отдают запросы выборки.
#[derive(Debug, Clone)]
pub(crate) struct PostSummary {
    pub(crate) post: Post,
    pub(crate) author: Author,
    pub(crate) likes_count: i64,
}

/// Строка админского списка постов.
#[derive(Debug, Clone)]
pub(crate) struct PostAdminRow {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) published_at: DateTime<Utc>,
    pub(crate) likes_count: i64,
    pub(crate) comments_count: i64,
}

impl Post {
    /// Первые `TEASER_CHARS` символов текста, без обрезки пробелов.
    pub(crate) fn teaser(&self) -> String {
        self.text.chars().take(TEASER_CHARS).collect()
    }
}
