use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::ports::{ConfigProvider, RatingSource};
use crate::utils::error::Result;

/// Parental-guide lookups against the fallback site. Unlike the cache
/// downloaders, a non-success answer here is reported as `Ok(None)` so the
/// caller can degrade a single film instead of aborting the batch.
pub struct HttpRatingSource {
    client: Client,
    endpoint: String,
    pace: Duration,
}

impl HttpRatingSource {
    pub fn new<C: ConfigProvider>(config: &C) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.guide_url().trim_end_matches('/').to_string(),
            pace: config.pace(),
        }
    }
}

#[async_trait]
impl RatingSource for HttpRatingSource {
    async fn parental_guide(&self, imdb_id: &str) -> Result<Option<String>> {
        let url = format!("{}/title/{imdb_id}/parentalguide", self.endpoint);
        debug!(url, "fallback rating lookup");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = if status.is_success() {
            Some(response.text().await?)
        } else {
            debug!(url, status = status.as_u16(), "fallback answered non-success");
            None
        };

        // Pace after every request, hit or miss.
        tokio::time::sleep(self.pace).await;
        Ok(body)
    }
}
