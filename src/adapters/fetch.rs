//! Downloaders that populate the page caches. Requests run one at a time
//! with a fixed wait after each; the source expects polite traffic.

use reqwest::Client;
use tracing::{debug, info};

use crate::domain::model::FilmRecord;
use crate::domain::ports::{ConfigProvider, DocumentStore};
use crate::utils::error::{CatalogError, Result};

/// The chart serves 200 rows per page.
const WINDOW_SIZE: u32 = 200;
/// Five windows cover the whole published chart.
const WINDOW_COUNT: u32 = 5;

pub struct PageFetcher<'a, C: ConfigProvider> {
    client: Client,
    config: &'a C,
}

impl<'a, C: ConfigProvider> PageFetcher<'a, C> {
    pub fn new(config: &'a C) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Downloads every chart window into the listing cache. A non-success
    /// response aborts the run; a partial listing cache would silently
    /// truncate the catalog.
    pub async fn fetch_listing_windows<S: DocumentStore>(&self, store: &S) -> Result<usize> {
        let mut fetched = 0;
        for window in 0..WINDOW_COUNT {
            let offset = window * WINDOW_SIZE;
            let url = if offset == 0 {
                self.config.chart_url().to_string()
            } else {
                format!("{}?offset={offset}", self.config.chart_url())
            };
            let body = self.get_ok(&url).await?;
            store.write_listing(&format!("offset-{offset}.html"), body.as_bytes())?;
            info!(url, "listing window cached");
            fetched += 1;
            self.pace().await;
        }
        Ok(fetched)
    }

    /// Downloads the detail page of every film that is not cached yet.
    /// Returns the number of pages actually fetched.
    pub async fn fetch_detail_pages<S: DocumentStore>(
        &self,
        store: &S,
        records: &[FilmRecord],
    ) -> Result<usize> {
        let mut fetched = 0;
        for record in records {
            if store.has_detail(&record.title) {
                debug!(title = %record.title, "detail page already cached");
                continue;
            }
            let url = format!("{}{}", self.config.base_url(), record.detail_ref);
            let body = self.get_ok(&url).await?;
            store.write_detail(&record.title, body.as_bytes())?;
            info!(title = %record.title, "detail page cached");
            fetched += 1;
            self.pace().await;
        }
        Ok(fetched)
    }

    async fn get_ok(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Fetch {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }

    async fn pace(&self) {
        tokio::time::sleep(self.config.pace()).await;
    }
}
