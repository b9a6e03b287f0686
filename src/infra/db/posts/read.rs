use async_trait::async_trait;

use crate::application::repos::{PostsRepo, RepoError};
use crate::domain::entities::PostRecord;

use super::PostgresRepositories;
use super::types::PostRow;
use crate::infra::db::map_sqlx_error;

#[async_trait]
impl PostsRepo for PostgresRepositories {
    async fn list_posts(&self) -> Result<Vec<PostRecord>, RepoError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title
            FROM posts
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(PostRecord::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PostRecord>, RepoError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(PostRecord::from))
    }
}
