use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::types::{ActivityEntry, ApiPosition};

#[derive(Debug, Error)]
pub enum DataClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Data API returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Client for the public Data API (activity feed and positions).
#[derive(Debug, Clone)]
pub struct DataClient {
    http: Client,
    base_url: String,
}

impl DataClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Fetch the most recent activity for a wallet, newest first.
    pub async fn get_activity(
        &self,
        user: &str,
        limit: u32,
    ) -> Result<Vec<ActivityEntry>, DataClientError> {
        let url = format!("{}/activity", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("user", user), ("limit", &limit.to_string())])
            .send()
            .await?;

        let resp = check_status(resp).await?;
        let entries: Vec<ActivityEntry> = resp.json().await?;
        Ok(entries)
    }

    /// Fetch all open positions for a wallet, dust included.
    pub async fn get_positions(&self, user: &str) -> Result<Vec<ApiPosition>, DataClientError> {
        let url = format!("{}/positions", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("user", user), ("sizeThreshold", "0")])
            .send()
            .await?;

        let resp = check_status(resp).await?;
        let positions: Vec<ApiPosition> = resp.json().await?;
        Ok(positions)
    }
}

/// Surface non-success responses with their body so the top-level report
/// carries what the API actually said.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, DataClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(DataClientError::Status { status, body })
}
