//! Session-scoped flash messages.
//!
//! A message pushed while handling one request is shown on the next page the
//! same session renders, then discarded. Sessions are identified by an opaque
//! [`SessionId`]; the store never outlives the process and holds a bounded
//! number of sessions.

use std::collections::VecDeque;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use dashmap::DashMap;
use metrics::{counter, gauge};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub text: String,
}

impl FlashMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

struct SessionQueue {
    opened: u64,
    messages: VecDeque<FlashMessage>,
}

/// Pending messages for every live session.
///
/// Both dimensions are bounded: each session keeps at most `max_messages`,
/// and once `max_sessions` sessions hold messages, opening another evicts
/// the one that has been waiting longest.
#[derive(Clone)]
pub struct FlashStore {
    sessions: Arc<DashMap<SessionId, SessionQueue>>,
    opened: Arc<AtomicU64>,
    max_messages: NonZeroUsize,
    max_sessions: NonZeroUsize,
}

impl FlashStore {
    pub fn new(max_messages: NonZeroUsize, max_sessions: NonZeroUsize) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            opened: Arc::new(AtomicU64::new(0)),
            max_messages,
            max_sessions,
        }
    }

    /// Append a message, dropping the oldest one once the session is full.
    pub fn push(&self, session: SessionId, message: FlashMessage) {
        if !self.sessions.contains_key(&session) {
            self.evict_oldest_sessions();
        }

        let mut queue = self.sessions.entry(session).or_insert_with(|| SessionQueue {
            opened: self.opened.fetch_add(1, Ordering::Relaxed),
            messages: VecDeque::new(),
        });
        if queue.messages.len() >= self.max_messages.get() {
            queue.messages.pop_front();
        }
        queue.messages.push_back(message);
        drop(queue);

        self.record_sessions();
    }

    /// Remove and return every queued message for `session` in push order.
    pub fn drain(&self, session: SessionId) -> Vec<FlashMessage> {
        let drained = self
            .sessions
            .remove(&session)
            .map(|(_, queue)| queue.messages.into_iter().collect())
            .unwrap_or_default();

        self.record_sessions();
        drained
    }

    pub fn pending(&self, session: SessionId) -> usize {
        self.sessions
            .get(&session)
            .map(|queue| queue.messages.len())
            .unwrap_or(0)
    }

    /// Number of sessions currently holding messages.
    pub fn sessions(&self) -> usize {
        self.sessions.len()
    }

    /// Make room for one more session.
    fn evict_oldest_sessions(&self) {
        while self.sessions.len() >= self.max_sessions.get() {
            let oldest = self
                .sessions
                .iter()
                .min_by_key(|entry| entry.value().opened)
                .map(|entry| *entry.key());

            let Some(oldest) = oldest else {
                break;
            };
            if self.sessions.remove(&oldest).is_some() {
                counter!("bacheca_flash_sessions_evicted_total").increment(1);
            }
        }
    }

    fn record_sessions(&self) {
        gauge!("bacheca_flash_sessions").set(self.sessions.len() as f64);
    }
}
