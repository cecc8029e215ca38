//! HTTP fetching of site pages
//!
//! One shared `reqwest::Client`; every request is same-origin and bounded by
//! the configured timeout.

use reqwest::Client;
use url::Url;

use super::content_validator::validate_response;
use super::page_timeout::with_fetch_timeout;
use crate::search::errors::{IndexingError, SearchResult};
use crate::utils::USER_AGENT;

/// Thin wrapper over a shared HTTP client
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    timeout_secs: u64,
}

impl PageFetcher {
    pub fn new(timeout_secs: u64) -> SearchResult<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            timeout_secs,
        })
    }

    /// GET a URL and return its body as text
    ///
    /// Network errors, non-2xx statuses and timeouts all become an
    /// `IndexingError` for the caller to log and skip.
    pub async fn fetch_text(&self, url: &Url) -> Result<String, IndexingError> {
        let url_str = url.as_str();
        let request = async {
            let response = self
                .client
                .get(url.clone())
                .header(reqwest::header::ACCEPT, "text/html,application/xml;q=0.9,*/*;q=0.8")
                .send()
                .await
                .map_err(|e| IndexingError::Fetch {
                    url: url_str.to_string(),
                    reason: e.to_string(),
                })?;

            validate_response(url_str, response.status().as_u16())?;

            response.text().await.map_err(|e| IndexingError::Fetch {
                url: url_str.to_string(),
                reason: format!("failed to read body: {e}"),
            })
        };
        with_fetch_timeout(request, self.timeout_secs, url_str).await
    }
}
