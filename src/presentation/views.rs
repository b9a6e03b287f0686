use askama::{Error as AskamaError, Template};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::application::{
    error::{ErrorReport, HttpError},
    flash::FlashMessage,
};

mod posts;

pub use posts::*;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }
}

impl From<TemplateRenderError> for HttpError {
    fn from(err: TemplateRenderError) -> Self {
        let TemplateRenderError {
            source,
            public_message,
            error,
        } = err;

        HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            public_message,
            &error,
        )
    }
}

pub fn render_template<T: Template>(template: T) -> Result<Html<String>, HttpError> {
    template.render().map(Html).map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
        .into()
    })
}

pub fn render_template_response<T: Template>(template: T, status: StatusCode) -> Response {
    match render_template(template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Render the not-found page, keeping `detail` for the response log.
pub fn render_not_found_response(source: &'static str, detail: impl Into<String>) -> Response {
    let view = LayoutContext::new("Not found", Vec::new(), ErrorPageView::not_found());
    let mut response = render_template_response(ErrorTemplate { view }, StatusCode::NOT_FOUND);
    ErrorReport::from_message(source, StatusCode::NOT_FOUND, detail).attach(&mut response);
    response
}

#[derive(Clone)]
pub struct FlashMessageView {
    pub text: String,
}

impl From<FlashMessage> for FlashMessageView {
    fn from(message: FlashMessage) -> Self {
        Self { text: message.text }
    }
}

pub struct LayoutContext<T> {
    pub page_title: String,
    pub messages: Vec<FlashMessageView>,
    pub home_href: String,
    pub content: T,
}

impl<T> LayoutContext<T> {
    pub fn new(page_title: impl Into<String>, messages: Vec<FlashMessage>, content: T) -> Self {
        Self {
            page_title: page_title.into(),
            messages: messages.into_iter().map(FlashMessageView::from).collect(),
            home_href: "/".to_string(),
            content,
        }
    }
}

pub struct ErrorPageView {
    pub title: String,
    pub message: String,
    pub action_href: String,
    pub action_label: String,
}

impl ErrorPageView {
    pub fn not_found() -> Self {
        Self {
            title: "Page Not Found".to_string(),
            message: "The page you requested does not exist.".to_string(),
            action_href: "/".to_string(),
            action_label: "Back to posts".to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub view: LayoutContext<ErrorPageView>,
}
