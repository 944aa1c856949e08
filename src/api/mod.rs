//! API Module
//!
//! HTTP handlers and routing for the gateway REST API.
//!
//! # Endpoints
//! - `GET /` - Fetch the configured sheet range (cache, then retried live call)
//! - `GET /health` - Health check endpoint
//! - `GET /cache/clear` - Clear the cache
//! - `GET /stats` - Cache statistics

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
