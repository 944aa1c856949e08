//! Status Sink Module
//!
//! Writes status snapshots to the first writable candidate path.

use std::env;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::status::StatusSnapshot;

/// File name used for the temp-directory fallback.
const FALLBACK_FILE_NAME: &str = "sheet_relay_status.json";

// == Status Sink ==
/// Ordered list of candidate paths for the status snapshot.
///
/// The primary path comes from configuration; the fallback lives in the
/// OS temp directory. If no candidate is writable the write is dropped
/// silently, the request is never affected.
pub struct StatusSink {
    candidates: Vec<PathBuf>,
}

impl StatusSink {
    // == Constructor ==
    /// Creates a sink with the given primary path plus the temp fallback.
    pub fn new(primary: PathBuf) -> Self {
        Self {
            candidates: vec![primary, env::temp_dir().join(FALLBACK_FILE_NAME)],
        }
    }

    /// Creates a sink with an explicit candidate list.
    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    // == Write ==
    /// Writes the snapshot to the first candidate that accepts it.
    ///
    /// Returns the path written to, or None if every candidate failed.
    pub fn write(&self, snapshot: &StatusSnapshot) -> Option<PathBuf> {
        let payload = match serde_json::to_vec_pretty(snapshot) {
            Ok(payload) => payload,
            Err(_) => return None,
        };

        for path in &self.candidates {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            match fs::write(path, &payload) {
                Ok(()) => {
                    debug!("Status snapshot written to {}", path.display());
                    return Some(path.clone());
                }
                Err(e) => {
                    debug!("Status path {} not writable: {}", path.display(), e);
                }
            }
        }

        None
    }
}
