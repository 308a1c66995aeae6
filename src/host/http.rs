//! HTTP history source
//!
//! The host process serves its history as a JSON array of entries
//! (`id, content, content_type, create_time, tags`).

use async_trait::async_trait;
use reqwest::Client;

use super::HistorySource;
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::HostSettings;
use crate::shared::types::ClipboardEntry;

pub struct HttpHistorySource {
    client: Client,
    url: String,
}

impl HttpHistorySource {
    pub fn new(settings: &HostSettings) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(settings.timeout())
            // Host is a local process
            .no_proxy()
            .build()
            .map_err(|e| AppError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: settings.history_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl HistorySource for HttpHistorySource {
    async fn fetch_history(&self) -> AppResult<Vec<ClipboardEntry>> {
        let entries = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<ClipboardEntry>>()
            .await?;

        tracing::debug!("[HttpHistorySource] Fetched {} entries", entries.len());
        Ok(entries)
    }
}
