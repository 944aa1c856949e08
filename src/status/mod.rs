//! Status Module
//!
//! Diagnostic side channel: after every fetch request a snapshot of the
//! outcome is written to a well-known file, with a temp-directory fallback.
//! Sink failures never abort the request.

mod sink;
mod snapshot;

// Re-export public types
pub use sink::StatusSink;
pub use snapshot::StatusSnapshot;
