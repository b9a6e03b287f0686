//! Handlers for the post list, create, edit and delete pages.

mod editor;
mod errors;
mod forms;
mod handlers;
mod panel;
mod response;

pub(super) use handlers::*;
