pub(crate) mod comment_repository;
pub(crate) mod post_repository;
pub(crate) mod repositories;
pub(crate) mod tag_repository;

/// Окно выборки для админских списков: limit/offset как их прислал клиент.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Pagination {
    pub(crate) limit: u32,
    pub(crate) offset: u32,
}

impl Pagination {
    pub(crate) fn limit(&self) -> i64 {
        i64::from(self.limit)
    }

    pub(crate) fn offset(&self) -> i64 {
        i64::from(self.offset)
    }
}
