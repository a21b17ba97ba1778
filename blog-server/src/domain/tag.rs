#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Tag {
    pub(crate) id: i64,
    pub(crate) title: String,
}

/// Тег и число постов, к которым он привязан.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TagStats {
    pub(crate) tag: Tag,
    pub(crate) posts_count: i64,
}
