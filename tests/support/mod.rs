//! In-memory repositories and request helpers shared by the router tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{
        Method, Request, Response, StatusCode,
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
    },
};
use bacheca::{
    application::{
        flash::FlashStore,
        posts::PostService,
        repos::{
            CreatePostParams, HealthRepo, PostsRepo, PostsWriteRepo, RepoError, UpdatePostParams,
        },
    },
    domain::entities::PostRecord,
    infra::http::{AppState, FlashSessions, build_router},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const COOKIE_NAME: &str = "test_board";

#[derive(Default)]
pub struct MemoryPosts {
    rows: Mutex<BTreeMap<i64, String>>,
    next_id: Mutex<i64>,
    unhealthy: AtomicBool,
}

impl MemoryPosts {
    pub fn rows(&self) -> Vec<(i64, String)> {
        self.rows
            .lock()
            .expect("rows lock")
            .iter()
            .map(|(id, title)| (*id, title.clone()))
            .collect()
    }

    pub fn set_unhealthy(&self) {
        self.unhealthy.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl PostsRepo for MemoryPosts {
    async fn list_posts(&self) -> Result<Vec<PostRecord>, RepoError> {
        Ok(self
            .rows()
            .into_iter()
            .map(|(id, title)| PostRecord { id, title })
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PostRecord>, RepoError> {
        let rows = self.rows.lock().expect("rows lock");
        Ok(rows.get(&id).map(|title| PostRecord {
            id,
            title: title.clone(),
        }))
    }
}

#[async_trait]
impl PostsWriteRepo for MemoryPosts {
    async fn create_post(&self, params: CreatePostParams) -> Result<PostRecord, RepoError> {
        let mut next_id = self.next_id.lock().expect("id lock");
        *next_id += 1;
        let id = *next_id;
        self.rows
            .lock()
            .expect("rows lock")
            .insert(id, params.title.clone());
        Ok(PostRecord {
            id,
            title: params.title,
        })
    }

    async fn update_post(&self, params: UpdatePostParams) -> Result<PostRecord, RepoError> {
        let mut rows = self.rows.lock().expect("rows lock");
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
            .expect("rows lock")
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl HealthRepo for MemoryPosts {
    async fn health_check(&self) -> Result<(), RepoError> {
        if self.unhealthy.load(Ordering::SeqCst) {
            Err(RepoError::Timeout)
        } else {
            Ok(())
        }
    }
}

pub fn test_app() -> (Router, Arc<MemoryPosts>) {
    test_app_with_session_cap(64)
}

pub fn test_app_with_session_cap(max_sessions: usize) -> (Router, Arc<MemoryPosts>) {
    let repo = Arc::new(MemoryPosts::default());
    let store = FlashStore::new(
        NonZeroUsize::new(8).expect("non-zero"),
        NonZeroUsize::new(max_sessions).expect("non-zero session cap"),
    );

    let state = AppState {
        posts: Arc::new(PostService::new(repo.clone(), repo.clone())),
        health: repo.clone(),
        sessions: FlashSessions::new(store, COOKIE_NAME),
    };

    (build_router(state), repo)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone()
        .oneshot(request)
        .await
        .expect("router should respond")
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::empty()).expect("request should build")
}

/// `body` must already be form-urlencoded.
pub fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("location header")
        .to_str()
        .expect("ascii location")
}

/// The `name=value` pair of the session cookie set on `response`, if any.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .find(|pair| pair.starts_with(&format!("{COOKIE_NAME}=")))
        .map(str::to_string)
}

pub fn assert_redirects_to_list(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(response), "/posts/");
}
