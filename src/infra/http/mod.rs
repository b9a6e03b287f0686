//! HTTP surface: router assembly, flash sessions and the post handlers.

mod health;
mod middleware;
mod posts;
pub mod routes;
mod session;
mod state;

pub use routes::Route;
pub use session::{FlashSession, FlashSessions};
pub use state::AppState;

use axum::{
    Router,
    http::Uri,
    middleware::from_fn,
    response::Response,
    routing::get,
};

use crate::presentation::views::render_not_found_response;

use self::{
    health::db_health,
    middleware::{log_responses, set_request_context},
    posts::{
        post_create, post_delete, post_delete_confirm, post_edit, post_list, post_new,
        post_update, root_redirect,
    },
    routes::{POST_CREATE_PATTERN, POST_DELETE_PATTERN, POST_LIST_PATTERN, POST_UPDATE_PATTERN},
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route(POST_LIST_PATTERN, get(post_list))
        .route(POST_CREATE_PATTERN, get(post_new).post(post_create))
        .route(POST_UPDATE_PATTERN, get(post_edit).post(post_update))
        .route(
            POST_DELETE_PATTERN,
            get(post_delete_confirm).post(post_delete),
        )
        .route("/_health/db", get(db_health))
        .fallback(not_found)
        .with_state(state)
        .layer(from_fn(log_responses))
        .layer(from_fn(set_request_context))
}

async fn not_found(uri: Uri) -> Response {
    render_not_found_response(
        "infra::http::not_found",
        format!("no route for `{}`", uri.path()),
    )
}
