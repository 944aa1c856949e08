//! Response models for the gateway API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing HTTP response bodies. All endpoints are GET with no
//! request bodies.

pub mod responses;

// Re-export commonly used types
pub use responses::{
    ClearResponse, ErrorResponse, FetchResponse, HealthResponse, StatsResponse,
};
