use metrics::counter;
use tracing::info;

use crate::application::repos::{CreatePostParams, UpdatePostParams};
use crate::domain::posts::PostTitle;

use super::service::PostService;
use super::types::{
    CreatePostCommand, PostMutation, PostNotice, PostServiceError, UpdatePostCommand,
};

impl PostService {
    pub async fn create_post(
        &self,
        command: CreatePostCommand,
    ) -> Result<PostMutation, PostServiceError> {
        let title = PostTitle::parse(&command.title)?;

        let post = self
            .writer
            .create_post(CreatePostParams {
                title: title.into_inner(),
            })
            .await?;

        counter!("bacheca_posts_created_total").increment(1);
        info!(target = "bacheca::posts", post_id = post.id, "post created");

        Ok(PostMutation {
            notice: PostNotice::Created,
            post,
        })
    }

    /// Existence is checked before the title so an unknown id is reported as
    /// not-found even when the submitted title is also invalid.
    pub async fn update_post(
        &self,
        command: UpdatePostCommand,
    ) -> Result<PostMutation, PostServiceError> {
        let existing = self.load_post(command.id).await?;
        let title = PostTitle::parse(&command.title)?;

        let post = self
            .writer
            .update_post(UpdatePostParams {
                id: existing.id,
                title: title.into_inner(),
            })
            .await?;

        counter!("bacheca_posts_updated_total").increment(1);
        info!(target = "bacheca::posts", post_id = post.id, "post updated");

        Ok(PostMutation {
            notice: PostNotice::Edited,
            post,
        })
    }

    pub async fn delete_post(&self, id: i64) -> Result<PostMutation, PostServiceError> {
        let snapshot = self.load_post(id).await?;

        self.writer.delete_post(snapshot.id).await?;

        counter!("bacheca_posts_deleted_total").increment(1);
        info!(target = "bacheca::posts", post_id = snapshot.id, "post deleted");

        Ok(PostMutation {
            notice: PostNotice::Deleted,
            post: snapshot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use insta::assert_snapshot;

    use crate::application::repos::{PostsRepo, PostsWriteRepo, RepoError};
    use crate::domain::entities::PostRecord;
    use crate::domain::error::DomainError;

    #[derive(Default)]
    struct MemoryPosts {
        rows: Mutex<BTreeMap<i64, String>>,
        next_id: Mutex<i64>,
    }

    impl MemoryPosts {
        fn snapshot(&self) -> Vec<(i64, String)> {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .map(|(id, title)| (*id, title.clone()))
                .collect()
        }
    }

    #[async_trait]
    impl PostsRepo for MemoryPosts {
        async fn list_posts(&self) -> Result<Vec<PostRecord>, RepoError> {
            Ok(self
                .snapshot()
                .into_iter()
                .map(|(id, title)| PostRecord { id, title })
                .collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<PostRecord>, RepoError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.get(&id).map(|title| PostRecord {
                id,
                title: title.clone(),
            }))
        }
    }

    #[async_trait]
    impl PostsWriteRepo for MemoryPosts {
        async fn create_post(&self, params: CreatePostParams) -> Result<PostRecord, RepoError> {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let id = *next_id;
            self.rows.lock().unwrap().insert(id, params.title.clone());
            Ok(PostRecord {
                id,
                title: params.title,
            })
        }

        async fn update_post(&self, params: UpdatePostParams) -> Result<PostRecord, RepoError> {
            let mut rows = self.rows.lock().unwrap();
            let title = rows.get_mut(&params.id).ok_or(RepoError::NotFound)?;
            *title = params.title.clone();
            Ok(PostRecord {
                id: params.id,
                title: params.title,
            })
        }

        async fn delete_post(&self, id: i64) -> Result<(), RepoError> {
            self.rows
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or(RepoError::NotFound)
        }
    }

    fn service() -> (PostService, Arc<MemoryPosts>) {
        let store = Arc::new(MemoryPosts::default());
        let service = PostService::new(store.clone(), store.clone());
        (service, store)
    }

    fn create(title: &str) -> CreatePostCommand {
        CreatePostCommand {
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn create_update_delete_scenario_produces_expected_notices() {
        let (service, store) = service();

        let created = service.create_post(create("Hello")).await.expect("create");
        assert_eq!(store.snapshot(), vec![(1, "Hello".to_string())]);
        assert_snapshot!(created.message(), @"New post was created! Title:Hello pk:1");

        let edited = service
            .update_post(UpdatePostCommand {
                id: 1,
                title: "Hello World".into(),
            })
            .await
            .expect("update");
        assert_eq!(store.snapshot(), vec![(1, "Hello World".to_string())]);
        assert_snapshot!(edited.message(), @"Successfully edited! Title:Hello World pk:1");

        let deleted = service.delete_post(1).await.expect("delete");
        assert!(store.snapshot().is_empty());
        assert_snapshot!(deleted.message(), @"Successfully deleted! Title:Hello World pk:1");
    }

    #[tokio::test]
    async fn invalid_titles_are_not_persisted() {
        let (service, store) = service();
        service.create_post(create("Keep")).await.expect("create");

        for raw in [String::new(), "   ".to_string(), "x".repeat(256)] {
            let err = service
                .create_post(create(&raw))
                .await
                .expect_err("invalid title rejected");
            assert!(matches!(
                err,
                PostServiceError::Domain(DomainError::Validation { field: "title", .. })
            ));
        }

        assert_eq!(store.snapshot(), vec![(1, "Keep".to_string())]);
    }

    #[tokio::test]
    async fn create_stores_trimmed_title() {
        let (service, _store) = service();
        let created = service.create_post(create("  Spaced  ")).await.expect("create");
        assert_eq!(created.post.title, "Spaced");
    }

    #[tokio::test]
    async fn update_keeps_id_and_creates_nothing() {
        let (service, store) = service();
        service.create_post(create("First")).await.expect("create");
        service.create_post(create("Second")).await.expect("create");

        let edited = service
            .update_post(UpdatePostCommand {
                id: 2,
                title: "Second, revised".into(),
            })
            .await
            .expect("update");

        assert_eq!(edited.post.id, 2);
        assert_eq!(
            store.snapshot(),
            vec![(1, "First".to_string()), (2, "Second, revised".to_string())]
        );
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found_and_leave_store_unchanged() {
        let (service, store) = service();
        service.create_post(create("Only")).await.expect("create");

        let update = service
            .update_post(UpdatePostCommand {
                id: 42,
                title: "Whatever".into(),
            })
            .await
            .expect_err("update of unknown id");
        assert!(update.is_not_found());

        let invalid_update = service
            .update_post(UpdatePostCommand {
                id: 42,
                title: String::new(),
            })
            .await
            .expect_err("update of unknown id with invalid title");
        assert!(invalid_update.is_not_found());

        let delete = service.delete_post(42).await.expect_err("delete unknown id");
        assert!(delete.is_not_found());

        assert_eq!(store.snapshot(), vec![(1, "Only".to_string())]);
    }

    #[tokio::test]
    async fn invalid_update_leaves_record_unmodified() {
        let (service, store) = service();
        service.create_post(create("Original")).await.expect("create");

        let err = service
            .update_post(UpdatePostCommand {
                id: 1,
                title: "y".repeat(300),
            })
            .await
            .expect_err("long title rejected");
        assert!(matches!(err, PostServiceError::Domain(DomainError::Validation { .. })));
        assert_eq!(store.snapshot(), vec![(1, "Original".to_string())]);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let (service, store) = service();
        for title in ["a", "b", "c"] {
            service.create_post(create(title)).await.expect("create");
        }

        let deleted = service.delete_post(2).await.expect("delete");
        assert_eq!(deleted.post.title, "b");
        assert_eq!(
            store.snapshot(),
            vec![(1, "a".to_string()), (3, "c".to_string())]
        );
    }
}
