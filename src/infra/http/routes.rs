//! Named routes and their paths.
//!
//! Handlers never hard-code locations; they ask a [`Route`] for its path at
//! the moment a link or redirect is built.

pub(crate) const POST_LIST_PATTERN: &str = "/posts/";
pub(crate) const POST_CREATE_PATTERN: &str = "/posts/new";
pub(crate) const POST_UPDATE_PATTERN: &str = "/posts/{id}/edit";
pub(crate) const POST_DELETE_PATTERN: &str = "/posts/{id}/delete";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    PostList,
    PostCreate,
    PostUpdate { id: i64 },
    PostDelete { id: i64 },
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::PostList => "post_list",
            Route::PostCreate => "post_create",
            Route::PostUpdate { .. } => "post_update",
            Route::PostDelete { .. } => "post_delete",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            Route::PostList => POST_LIST_PATTERN,
            Route::PostCreate => POST_CREATE_PATTERN,
            Route::PostUpdate { .. } => POST_UPDATE_PATTERN,
            Route::PostDelete { .. } => POST_DELETE_PATTERN,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::PostUpdate { id } | Route::PostDelete { id } => {
                self.pattern().replace("{id}", &id.to_string())
            }
            Route::PostList | Route::PostCreate => self.pattern().to_string(),
        }
    }
}

/// Parse a path segment the way the router's `{id}` captures are meant to be
/// read: one or more ASCII digits that fit an `i64`.
pub(crate) fn parse_post_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
