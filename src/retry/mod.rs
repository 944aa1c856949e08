//! Retry Module
//!
//! Wraps a single fallible async operation with bounded retries, exponential
//! backoff and optional randomized jitter between attempts.

mod executor;
mod policy;

// Re-export public types
pub use executor::{execute, Retried};
pub use policy::RetryPolicy;
