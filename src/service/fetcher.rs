use reqwest::Client;

use crate::error::{AppError, Result};
use crate::service::http::{create_client, ClientType};

/// Single GET of the listing page. No retries.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: create_client(ClientType::Page)?,
        })
    }

    /// Fetch raw HTML. Any transport failure or non-2xx status is an error.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching listing page: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::network(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::http_status(status, url));
        }

        let body = response.text().await?;
        tracing::debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
