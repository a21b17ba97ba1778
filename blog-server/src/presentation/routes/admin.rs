use axum::Router;
use axum::routing::get;

use crate::presentation::AppState;
use crate::presentation::handlers::admin::{list_comments, list_posts, list_tags};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/posts/", get(list_posts))
        .route("/tags/", get(list_tags))
        .route("/comments/", get(list_comments))
}
