use crate::{
    domain::{entities::PostRecord, posts::TITLE_MAX_CHARS},
    infra::http::routes::Route,
    presentation::views::{PostDeleteView, PostFormView},
};

/// Which form is being rendered and where it posts to.
#[derive(Debug, Clone, Copy)]
pub(super) enum PostEditorMode {
    Create,
    Update { id: i64 },
}

impl PostEditorMode {
    pub(super) fn page_title(self) -> &'static str {
        match self {
            PostEditorMode::Create => "New post",
            PostEditorMode::Update { .. } => "Edit post",
        }
    }

    fn action(self) -> Route {
        match self {
            PostEditorMode::Create => Route::PostCreate,
            PostEditorMode::Update { id } => Route::PostUpdate { id },
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            PostEditorMode::Create => "Create",
            PostEditorMode::Update { .. } => "Save",
        }
    }
}

pub(super) fn build_post_form_view(
    mode: PostEditorMode,
    title_value: String,
    title_error: Option<String>,
) -> PostFormView {
    let heading = match mode {
        PostEditorMode::Create => "New post".to_string(),
        PostEditorMode::Update { id } => format!("Edit post pk:{id}"),
    };

    PostFormView {
        heading,
        action: mode.action().path(),
        submit_label: mode.submit_label(),
        cancel_href: Route::PostList.path(),
        title_value,
        title_error,
        title_max_length: TITLE_MAX_CHARS,
    }
}

pub(super) fn build_post_delete_view(post: PostRecord) -> PostDeleteView {
    PostDeleteView {
        action: Route::PostDelete { id: post.id }.path(),
        cancel_href: Route::PostList.path(),
        id: post.id,
        title: post.title,
    }
}
