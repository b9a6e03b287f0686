//! Bacheca: a server-rendered board for creating, editing and deleting
//! titled posts, with one-shot flash notices after every write.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
