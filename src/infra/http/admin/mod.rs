mod health;
mod posts;
mod state;

pub use state::{AdminSettings, AdminState};

use axum::{
    Router, middleware,
    response::Redirect,
    routing::get,
};

use super::middleware::request_context;

pub(crate) const POSTS_INDEX_PATH: &str = "/posts/admin";

pub fn build_admin_router(state: AdminState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to(POSTS_INDEX_PATH) }))
        .route(POSTS_INDEX_PATH, get(posts::admin_posts))
        .route(
            "/posts/admin/new",
            get(posts::admin_post_new).post(posts::admin_post_create),
        )
        .route(
            "/posts/admin/{slug}",
            get(posts::admin_post_edit).post(posts::admin_post_update),
        )
        .route(
            "/posts/admin/{slug}/{filename}",
            get(posts::admin_post_export),
        )
        .route("/_health/db", get(health::admin_health))
        .with_state(state)
        .layer(middleware::from_fn(request_context))
}
