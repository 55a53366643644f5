use std::time::Duration;

use async_trait::async_trait;

use crate::domain::model::{CatalogRow, FilmRecord};
use crate::utils::error::Result;

/// Read/write access to the two page caches: listing windows and per-film
/// detail documents. Detail lookups go through the store's stable
/// title-to-filename mapping.
pub trait DocumentStore: Send + Sync {
    /// Names of the cached listing pages, in traversal order.
    fn listing_pages(&self) -> Result<Vec<String>>;
    fn read_listing(&self, name: &str) -> Result<String>;
    /// Fails with `MissingDetailDocument` when the film has no cached page.
    fn read_detail(&self, title: &str) -> Result<String>;
    fn has_detail(&self, title: &str) -> bool;
    fn write_listing(&self, name: &str, body: &[u8]) -> Result<()>;
    fn write_detail(&self, title: &str, body: &[u8]) -> Result<()>;
}

/// Fallback rating source, keyed by IMDb title id.
#[async_trait]
pub trait RatingSource: Send + Sync {
    /// Raw parental-guide body, or `None` when the source answered with a
    /// non-success status. Transport errors surface as `Err`.
    async fn parental_guide(&self, imdb_id: &str) -> Result<Option<String>>;
}

/// Ordered output sink for assembled catalog rows.
pub trait CatalogSink {
    fn write_header(&mut self) -> Result<()>;
    fn write_row(&mut self, row: &CatalogRow) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn chart_url(&self) -> &str;
    fn base_url(&self) -> &str;
    fn guide_url(&self) -> &str;
    /// Fixed wait applied after every outbound request.
    fn pace(&self) -> Duration;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<Vec<FilmRecord>>;
    async fn resolve(&self, record: FilmRecord) -> Result<CatalogRow>;
}
