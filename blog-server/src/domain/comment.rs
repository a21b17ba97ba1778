use chrono::{DateTime, Utc};

/// Комментарий с именем автора, в порядке публикации.
#[derive(Debug, Clone)]
pub(crate) struct CommentView {
    pub(crate) text: String,
    pub(crate) author: String,
    pub(crate) published_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub(crate) struct CommentAdminRow {
    pub(crate) text: String,
    pub(crate) post_title: String,
    pub(crate) post_slug: String,
    pub(crate) author: String,
    pub(crate) published_at: DateTime<Utc>,
}
