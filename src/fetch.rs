use crate::error::{Result, ScraperError};
use std::time::Duration;
use tracing::info;

/// Thin wrapper around a `reqwest::Client` for the single page fetch.
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches one page and returns its body. A non-2xx status is an error;
    /// there is no retry.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        info!("HTTP GET request to: {}", url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = resp.text().await?;
        info!(
            "HTTP response: status={}, size={} bytes",
            status.as_u16(),
            body.len()
        );
        Ok(body)
    }
}
