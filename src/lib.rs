//! Sheet Relay - a small gateway in front of a Google Sheets range
//!
//! Serves a fixed cell range as JSON with an in-memory TTL cache and a
//! retry-with-backoff wrapper around the remote call.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod retry;
pub mod sheets;
pub mod status;

pub use api::AppState;
pub use config::Config;
