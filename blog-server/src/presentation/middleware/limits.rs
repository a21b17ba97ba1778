use std::time::Duration;

use axum::Router;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

use crate::infrastructure::settings::Settings;

pub(crate) fn apply_limits(router: Router, settings: &Settings) -> Router {
    // timeout оборачивает маршруты напрямую: ему нужно тело ответа с Default
    router
        .layer(TimeoutLayer::new(Duration::from_secs(
            settings.http_request_timeout_secs,
        )))
        .layer(RequestBodyLimitLayer::new(
            settings.http_request_body_limit_bytes,
        ))
        .layer(GlobalConcurrencyLimitLayer::new(
            settings.http_concurrency_limit,
        ))
}
