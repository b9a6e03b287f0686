use std::sync::Arc;

use crate::application::{posts::PostService, repos::HealthRepo};

use super::session::FlashSessions;

#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    pub health: Arc<dyn HealthRepo>,
    pub sessions: FlashSessions,
}
