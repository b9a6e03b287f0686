use axum::{
    extract::{Form, Path, State, rejection::FormRejection},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

use crate::{
    application::posts::{CreatePostCommand, PostServiceError, UpdatePostCommand},
    domain::error::DomainError,
    infra::http::{
        routes::{Route, parse_post_id},
        session::FlashSession,
        state::AppState,
    },
    presentation::views::{
        LayoutContext, PostConfirmDeleteTemplate, PostListTemplate, render_template_response,
    },
};

use super::{
    editor::{PostEditorMode, build_post_delete_view},
    errors::{post_error_response, unknown_post_response},
    forms::PostForm,
    panel::build_post_list_view,
    response::{redirect_with_notice, respond_with_post_form},
};

pub(crate) async fn root_redirect() -> Response {
    (StatusCode::FOUND, [(LOCATION, Route::PostList.path())]).into_response()
}

pub(crate) async fn post_list(State(state): State<AppState>, flash: FlashSession) -> Response {
    let posts = match state.posts.list_posts().await {
        Ok(posts) => posts,
        Err(err) => return post_error_response("infra::http::posts::post_list", err),
    };

    let view = LayoutContext::new("Posts", flash.take_messages(), build_post_list_view(posts));
    render_template_response(PostListTemplate { view }, StatusCode::OK)
}

pub(crate) async fn post_new(flash: FlashSession) -> Response {
    respond_with_post_form(&flash, PostEditorMode::Create, String::new(), None)
}

pub(crate) async fn post_create(
    State(state): State<AppState>,
    flash: FlashSession,
    Form(form): Form<PostForm>,
) -> Response {
    let command = CreatePostCommand {
        title: form.title.clone(),
    };

    match state.posts.create_post(command).await {
        Ok(mutation) => redirect_with_notice(&flash, &mutation),
        Err(err) => match title_error(err) {
            Ok(message) => {
                respond_with_post_form(&flash, PostEditorMode::Create, form.title, Some(message))
            }
            Err(err) => post_error_response("infra::http::posts::post_create", err),
        },
    }
}

pub(crate) async fn post_edit(
    State(state): State<AppState>,
    flash: FlashSession,
    Path(raw_id): Path<String>,
) -> Response {
    const SOURCE: &str = "infra::http::posts::post_edit";

    let Some(id) = parse_post_id(&raw_id) else {
        return unknown_post_response(SOURCE, &raw_id);
    };

    match state.posts.load_post(id).await {
        Ok(post) => respond_with_post_form(&flash, PostEditorMode::Update { id }, post.title, None),
        Err(err) => post_error_response(SOURCE, err),
    }
}

pub(crate) async fn post_update(
    State(state): State<AppState>,
    flash: FlashSession,
    Path(raw_id): Path<String>,
    form: Result<Form<PostForm>, FormRejection>,
) -> Response {
    const SOURCE: &str = "infra::http::posts::post_update";

    let Some(id) = parse_post_id(&raw_id) else {
        return unknown_post_response(SOURCE, &raw_id);
    };

    // An unknown id answers 404 even when the body is unreadable.
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            return match state.posts.load_post(id).await {
                Ok(_) => rejection.into_response(),
                Err(err) => post_error_response(SOURCE, err),
            };
        }
    };

    let command = UpdatePostCommand {
        id,
        title: form.title.clone(),
    };

    match state.posts.update_post(command).await {
        Ok(mutation) => redirect_with_notice(&flash, &mutation),
        Err(err) => match title_error(err) {
            Ok(message) => respond_with_post_form(
                &flash,
                PostEditorMode::Update { id },
                form.title,
                Some(message),
            ),
            Err(err) => post_error_response(SOURCE, err),
        },
    }
}

pub(crate) async fn post_delete_confirm(
    State(state): State<AppState>,
    flash: FlashSession,
    Path(raw_id): Path<String>,
) -> Response {
    const SOURCE: &str = "infra::http::posts::post_delete_confirm";

    let Some(id) = parse_post_id(&raw_id) else {
        return unknown_post_response(SOURCE, &raw_id);
    };

    match state.posts.load_post(id).await {
        Ok(post) => {
            let view = LayoutContext::new(
                "Delete post",
                flash.take_messages(),
                build_post_delete_view(post),
            );
            render_template_response(PostConfirmDeleteTemplate { view }, StatusCode::OK)
        }
        Err(err) => post_error_response(SOURCE, err),
    }
}

pub(crate) async fn post_delete(
    State(state): State<AppState>,
    flash: FlashSession,
    Path(raw_id): Path<String>,
) -> Response {
    const SOURCE: &str = "infra::http::posts::post_delete";

    let Some(id) = parse_post_id(&raw_id) else {
        return unknown_post_response(SOURCE, &raw_id);
    };

    match state.posts.delete_post(id).await {
        Ok(mutation) => redirect_with_notice(&flash, &mutation),
        Err(err) => post_error_response(SOURCE, err),
    }
}

/// Split title validation failures, which re-render the form, from errors
/// that end the request.
fn title_error(err: PostServiceError) -> Result<String, PostServiceError> {
    match err {
        PostServiceError::Domain(DomainError::Validation {
            field: "title",
            message,
        }) => Ok(message),
        other => Err(other),
    }
}
