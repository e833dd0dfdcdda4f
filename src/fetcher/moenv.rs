use crate::fetcher::traits::RecordFetcher;
use crate::model::{FetchError, FetchRequest};
use crate::utils::truncate_chars;

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Characters of an error body kept for the diagnostic.
const ERROR_BODY_LIMIT: usize = 200;

pub struct MoenvFetcher {
    pub client: Client,
}

impl MoenvFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("moenv-aqi/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    fn map_send_error(url: &str, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout { url: url.to_string() }
        } else {
            // reqwest errors embed the full URL, which includes the key
            FetchError::Transport(e.without_url().to_string())
        }
    }
}

#[async_trait::async_trait]
impl RecordFetcher for MoenvFetcher {
    async fn fetch(&self, req: &FetchRequest) -> Result<String, FetchError> {
        debug!("GET {} offset={} limit={}", req.url, req.offset, req.limit);

        let response = self
            .client
            .get(&req.url)
            .query(&[
                ("offset", req.offset.to_string()),
                ("limit", req.limit.to_string()),
                ("api_key", req.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| Self::map_send_error(&req.url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                warn!("Failed to read error body: {}", e.without_url());
                String::new()
            });
            warn!("❌ Upstream responded [{}]", status);
            return Err(FetchError::Status {
                status,
                url: req.url.clone(),
                body: truncate_chars(&body, ERROR_BODY_LIMIT).to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| Self::map_send_error(&req.url, e))
    }
}
