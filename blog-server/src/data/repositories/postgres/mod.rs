use crate::domain::error::DomainError;

pub(crate) mod comment_repository;
pub(crate) mod post_repository;
pub(crate) mod tag_repository;

pub(crate) fn map_db_error(err: sqlx::Error) -> DomainError {
    DomainError::Unexpected(err.to_string())
}
