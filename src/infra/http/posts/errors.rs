use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    application::{error::HttpError, posts::PostServiceError, repos::RepoError},
    domain::error::DomainError,
    presentation::views::render_not_found_response,
};

pub(super) fn post_error_response(source: &'static str, err: PostServiceError) -> Response {
    if err.is_not_found() {
        return render_not_found_response(source, err.to_string());
    }

    match err {
        PostServiceError::Domain(DomainError::Validation { field, message }) => HttpError::new(
            source,
            StatusCode::BAD_REQUEST,
            "Post request could not be processed",
            format!("Invalid field `{field}`: {message}"),
        )
        .into_response(),
        PostServiceError::Repo(RepoError::Timeout) => HttpError::new(
            source,
            StatusCode::SERVICE_UNAVAILABLE,
            "Service temporarily unavailable",
            "Database timeout",
        )
        .into_response(),
        other => HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            &other,
        )
        .into_response(),
    }
}

/// The `{id}` segment did not parse, so no post can match it.
pub(super) fn unknown_post_response(source: &'static str, raw_id: &str) -> Response {
    render_not_found_response(source, format!("Post `{raw_id}` could not be found"))
}
