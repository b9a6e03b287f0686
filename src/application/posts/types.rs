use thiserror::Error;

use crate::{
    application::repos::RepoError,
    domain::{entities::PostRecord, error::DomainError},
};

#[derive(Debug, Error)]
pub enum PostServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl PostServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PostServiceError::Domain(DomainError::NotFound { .. })
                | PostServiceError::Repo(RepoError::NotFound)
        )
    }
}

#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: String,
}

/// Which mutation a [`PostMutation`] reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostNotice {
    Created,
    Edited,
    Deleted,
}

impl PostNotice {
    fn headline(self) -> &'static str {
        match self {
            PostNotice::Created => "New post was created!",
            PostNotice::Edited => "Successfully edited!",
            PostNotice::Deleted => "Successfully deleted!",
        }
    }
}

/// Outcome of a successful write: the affected post and the notice to show.
///
/// For deletions `post` is the state the record had right before removal.
#[derive(Debug, Clone)]
pub struct PostMutation {
    pub notice: PostNotice,
    pub post: PostRecord,
}

impl PostMutation {
    pub fn message(&self) -> String {
        format!(
            "{} Title:{} pk:{}",
            self.notice.headline(),
            self.post.title,
            self.post.id
        )
    }
}
