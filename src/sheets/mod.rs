//! Sheets Module
//!
//! Client for the Google Sheets v4 values API: service account credentials,
//! bearer token minting, and the REST read of a cell range. The pipeline
//! talks to the API through the [`SheetSource`] trait so tests can substitute
//! a scripted source.

mod client;
mod credentials;
mod token;

use async_trait::async_trait;

use crate::error::Result;

// Re-export public types
pub use client::RestSheetsClient;
pub use credentials::ServiceAccountKey;
pub use token::TokenProvider;

/// An ordered grid of cell values, outer vector = rows.
pub type SheetRows = Vec<Vec<String>>;

// == Sheet Source ==
/// Read access to a spreadsheet range.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Fetches the cell values of `range` from `spreadsheet_id`.
    async fn fetch_values(&self, spreadsheet_id: &str, range: &str) -> Result<SheetRows>;
}
