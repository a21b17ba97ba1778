use axum::Router;

use super::AppState;

pub(crate) mod admin;
pub(crate) mod pages;

pub(crate) fn router(admin_enabled: bool) -> Router<AppState> {
    let router = pages::router();
    if admin_enabled {
        router.nest("/admin", admin::router())
    } else {
        router
    }
}
