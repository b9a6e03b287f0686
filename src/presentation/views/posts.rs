use askama::Template;

use super::LayoutContext;

#[derive(Clone)]
pub struct PostRowView {
    pub id: i64,
    pub title: String,
    pub edit_href: String,
    pub delete_href: String,
}

pub struct PostListView {
    pub posts: Vec<PostRowView>,
    pub new_post_href: String,
}

/// Shared by the create and edit pages.
pub struct PostFormView {
    pub heading: String,
    pub action: String,
    pub submit_label: &'static str,
    pub cancel_href: String,
    pub title_value: String,
    pub title_error: Option<String>,
    pub title_max_length: usize,
}

impl PostFormView {
    pub fn has_errors(&self) -> bool {
        self.title_error.is_some()
    }
}

pub struct PostDeleteView {
    pub id: i64,
    pub title: String,
    pub action: String,
    pub cancel_href: String,
}

#[derive(Template)]
#[template(path = "posts/list.html")]
pub struct PostListTemplate {
    pub view: LayoutContext<PostListView>,
}

#[derive(Template)]
#[template(path = "posts/form.html")]
pub struct PostFormTemplate {
    pub view: LayoutContext<PostFormView>,
}

#[derive(Template)]
#[template(path = "posts/confirm_delete.html")]
pub struct PostConfirmDeleteTemplate {
    pub view: LayoutContext<PostDeleteView>,
}
