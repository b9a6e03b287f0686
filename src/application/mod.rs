//! Application services layer scaffolding.

pub mod error;
pub mod flash;
pub mod posts;
pub mod repos;
