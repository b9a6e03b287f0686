//! Cookie-backed flash sessions.
//!
//! The cookie only carries an opaque [`SessionId`]; queued messages stay in
//! the in-process [`FlashStore`]. A cookie is issued the first time a message
//! is queued for a client that does not have one yet.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::application::flash::{FlashMessage, FlashStore, SessionId};

use super::state::AppState;

#[derive(Clone)]
pub struct FlashSessions {
    store: FlashStore,
    cookie_name: Arc<str>,
}

impl FlashSessions {
    pub fn new(store: FlashStore, cookie_name: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn store(&self) -> &FlashStore {
        &self.store
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    fn resolve(&self, jar: &CookieJar) -> FlashSession {
        let existing = jar
            .get(&self.cookie_name)
            .and_then(|cookie| SessionId::parse(cookie.value()));

        match existing {
            Some(id) => FlashSession {
                id,
                issued: false,
                sessions: self.clone(),
            },
            None => FlashSession {
                id: SessionId::generate(),
                issued: true,
                sessions: self.clone(),
            },
        }
    }
}

/// The flash queue belonging to the requesting client.
pub struct FlashSession {
    id: SessionId,
    issued: bool,
    sessions: FlashSessions,
}

impl FlashSession {
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Drain everything queued for this session. A session issued during
    /// this request cannot have anything queued yet.
    pub fn take_messages(&self) -> Vec<FlashMessage> {
        if self.issued {
            return Vec::new();
        }
        self.sessions.store.drain(self.id)
    }

    /// Queue `message` and return the cookies the response must carry so the
    /// next request lands in the same session.
    pub fn push(&self, message: FlashMessage) -> CookieJar {
        self.sessions.store.push(self.id, message);

        let jar = CookieJar::new();
        if self.issued {
            jar.add(self.cookie())
        } else {
            jar
        }
    }

    fn cookie(&self) -> Cookie<'static> {
        Cookie::build((self.sessions.cookie_name.to_string(), self.id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build()
    }
}

impl FromRequestParts<AppState> for FlashSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(state.sessions.resolve(&jar))
    }
}
