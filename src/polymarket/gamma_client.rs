use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GammaClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gamma API returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Public profile attached to a wallet address.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublicProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub pseudonym: Option<String>,
}

impl PublicProfile {
    /// Human-readable handle for the wallet: `name`, else `pseudonym`, else
    /// the truncated address. Empty strings count as absent.
    pub fn display_name(&self, address: &str) -> String {
        self.name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.pseudonym.as_deref().filter(|s| !s.is_empty()))
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}...", &address[..10.min(address.len())]))
    }
}

/// Client for the Gamma API (profile lookups).
#[derive(Debug, Clone)]
pub struct GammaClient {
    http: Client,
    base_url: String,
}

impl GammaClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    pub async fn get_public_profile(
        &self,
        address: &str,
    ) -> Result<PublicProfile, GammaClientError> {
        let url = format!("{}/public-profile", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("address", address)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GammaClientError::Status { status, body });
        }

        let profile: PublicProfile = resp.json().await?;
        Ok(profile)
    }
}
