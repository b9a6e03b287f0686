use serde::Deserialize;

/// Submitted by both the create and the edit form. A missing field is read
/// as an empty title so it fails validation like a blank one.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PostForm {
    #[serde(default)]
    pub(crate) title: String,
}
