use reqwest::Client;
use std::time::Duration;

use crate::models::Bootstrap;

/// Thin client over the public Fantasy Premier League API.
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct FplClient {
    http: Client,
    base_url: String,
}

impl FplClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(FplClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // GET {base}/bootstrap-static/ - players, gameweeks and teams in one document
    pub async fn bootstrap(&self) -> Result<Bootstrap, reqwest::Error> {
        let url = format!("{}/bootstrap-static/", self.base_url);
        tracing::debug!("Fetching {}", url);

        self.http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Bootstrap>()
            .await
    }
}
