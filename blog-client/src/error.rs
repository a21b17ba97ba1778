use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `blog-client`.
pub enum BlogClientError {
    /// Ошибка HTTP-транспорта (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Запрошенный пост, тег или маршрут не найден.
    #[error("not found")]
    NotFound,

    /// Некорректный запрос или адрес сервера.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Сервер не смог обработать запрос.
    #[error("server error: {0}")]
    Server(String),
}

/// Результат операций `blog-client`.
pub type BlogClientResult<T> = Result<T, BlogClientError>;

impl BlogClientError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| format!("http status {status}"));
        match status {
            reqwest::StatusCode::NOT_FOUND => Self::NotFound,
            status if status.is_server_error() => Self::Server(message),
            _ => Self::InvalidRequest(message),
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        Self::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::BlogClientError;

    #[test]
    fn not_found_status_maps_to_not_found() {
        let err = BlogClientError::from_http_status(reqwest::StatusCode::NOT_FOUND, None);
        assert!(matches!(err, BlogClientError::NotFound));
    }

    #[test]
    fn server_errors_keep_message() {
        let err = BlogClientError::from_http_status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            Some("internal error".to_string()),
        );
        match err {
            BlogClientError::Server(message) => assert_eq!(message, "internal error"),
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn bad_request_maps_to_invalid_request() {
        let err = BlogClientError::from_http_status(reqwest::StatusCode::BAD_REQUEST, None);
        assert!(matches!(err, BlogClientError::InvalidRequest(_)));
    }
}
