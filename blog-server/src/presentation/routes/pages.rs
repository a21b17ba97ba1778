use axum::Router;
use axum::routing::get;

use crate::presentation::AppState;
use crate::presentation::handlers::pages::{contacts, index, post_detail, tag_filter};

// Страницы доступны и без завершающего слэша.
pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/posts/{slug}/", get(post_detail))
        .route("/posts/{slug}", get(post_detail))
        .route("/tags/{tag_title}/", get(tag_filter))
        .route("/tags/{tag_title}", get(tag_filter))
        .route("/contacts/", get(contacts))
        .route("/contacts", get(contacts))
}
