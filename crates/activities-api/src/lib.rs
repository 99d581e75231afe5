//! Activities API client library
//!
//! This crate provides a Rust client for the activities API, covering the
//! per-day activity records kept for each user: list the activities of a
//! selected day, create one, remove one.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod types;


// Re-exports
pub use client::ActivitiesClient;
pub use config::Config;
pub use error::ActivitiesError;
pub use types::Activity;

pub type Result<T> = std::result::Result<T, ActivitiesError>;
