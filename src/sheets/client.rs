//! REST Sheets Client Module
//!
//! Reads a cell range through the Google Sheets v4 values endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{FetchError, Result};
use crate::sheets::{ServiceAccountKey, SheetRows, SheetSource, TokenProvider};

/// Production base URL of the Sheets API.
const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com";

/// Response body of `spreadsheets.values.get`. A range with no data comes
/// back without a `values` field, which decodes as an empty grid.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: SheetRows,
}

// == Rest Sheets Client ==
/// [`SheetSource`] implementation backed by the real Sheets REST API.
pub struct RestSheetsClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenProvider,
}

impl RestSheetsClient {
    // == Constructor ==
    /// Builds a client from a parsed service account key.
    pub fn new(key: ServiceAccountKey) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: SHEETS_BASE_URL.to_string(),
            tokens: TokenProvider::new(key)?,
        })
    }
}

#[async_trait]
impl SheetSource for RestSheetsClient {
    async fn fetch_values(&self, spreadsheet_id: &str, range: &str) -> Result<SheetRows> {
        let token = self.tokens.token().await?;
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url, spreadsheet_id, range
        );

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| FetchError::Remote(format!("sheets API unreachable: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Remote(format!(
                "sheets API returned {}: {}",
                status, body
            )));
        }

        let value_range: ValueRange = response
            .json()
            .await
            .map_err(|e| FetchError::Remote(format!("malformed sheets response: {}", e)))?;

        debug!(
            "Fetched {} rows from {} {}",
            value_range.values.len(),
            spreadsheet_id,
            range
        );

        Ok(value_range.values)
    }
}
