use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;
use tracing::instrument;

use crate::domain::{common::entities::app_errors::CoreError, scraper::ports::ImageDownloader};

pub const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct HttpImageDownloader {
    client: Client,
}

impl HttpImageDownloader {
    pub fn new() -> Result<Self, CoreError> {
        let client = Client::builder()
            .user_agent(DESKTOP_USER_AGENT)
            .timeout(DOWNLOAD_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build download HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self { client })
    }
}

impl ImageDownloader for HttpImageDownloader {
    #[instrument(skip(self), level = "debug")]
    async fn download(&self, url: String) -> Result<Option<Bytes>, CoreError> {
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CoreError::ExternalServiceError(format!("Download failed: {}", e)))?;

        if !response.status().is_success() {
            tracing::debug!("Skipping {}: status {}", url, response.status());
            return Ok(None);
        }

        response
            .bytes()
            .await
            .map(Some)
            .map_err(|e| CoreError::ExternalServiceError(format!("Download interrupted: {}", e)))
    }
}
