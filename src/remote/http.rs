//! Plain HTTP GET fetcher.

use super::{FetchError, Fetcher};
use tracing::{debug, instrument};

/// Fetches `{base_url}/{subject}` and parses the body as JSON.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    /// Creates a fetcher rooted at `base_url`.
    #[instrument(skip(base_url))]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Returns the URL requested for `subject`.
    pub fn url_for(&self, subject: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), subject.trim())
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    type Output = serde_json::Value;

    #[instrument(skip(self))]
    async fn fetch(&self, subject: &str) -> Result<Self::Output, FetchError> {
        let url = self.url_for(subject);
        debug!(url = %url, "Sending request");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.json::<serde_json::Value>().await?;

        debug!("Response parsed");
        Ok(body)
    }
}
