use axum::{
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::{
    application::{flash::FlashMessage, posts::PostMutation},
    infra::http::{routes::Route, session::FlashSession},
    presentation::views::{LayoutContext, PostFormTemplate, render_template_response},
};

use super::editor::{PostEditorMode, build_post_form_view};

/// Every successful write lands back on the list.
const SUCCESS_ROUTE: Route = Route::PostList;

/// Queue the mutation's notice for this session and redirect with `302 Found`.
pub(super) fn redirect_with_notice(flash: &FlashSession, mutation: &PostMutation) -> Response {
    let jar = flash.push(FlashMessage::info(mutation.message()));
    let location = SUCCESS_ROUTE.path();

    debug!(
        target = "bacheca::posts",
        post_id = mutation.post.id,
        route = SUCCESS_ROUTE.name(),
        location = %location,
        "redirecting after post write"
    );

    (StatusCode::FOUND, jar, [(LOCATION, location)]).into_response()
}

/// Render the create or edit form. Rendering the page drains the session's
/// pending messages like any other full page.
pub(super) fn respond_with_post_form(
    flash: &FlashSession,
    mode: PostEditorMode,
    title_value: String,
    title_error: Option<String>,
) -> Response {
    let content = build_post_form_view(mode, title_value, title_error);
    let view = LayoutContext::new(mode.page_title(), flash.take_messages(), content);
    render_template_response(PostFormTemplate { view }, StatusCode::OK)
}
