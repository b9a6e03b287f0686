use crate::domain::entities::PostRecord;
use crate::domain::error::DomainError;

use super::service::PostService;
use super::types::PostServiceError;

impl PostService {
    pub async fn list_posts(&self) -> Result<Vec<PostRecord>, PostServiceError> {
        self.reader.list_posts().await.map_err(Into::into)
    }

    /// Load a post, treating an unknown id as a domain-level not-found.
    pub async fn load_post(&self, id: i64) -> Result<PostRecord, PostServiceError> {
        self.reader
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("post").into())
    }
}
