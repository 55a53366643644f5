use tracing::info;

use crate::domain::ports::{CatalogSink, Pipeline};
use crate::utils::error::Result;

/// Drives the pipeline strictly in chart order: every film's detail read and
/// rating resolution completes, and its row is written, before the next film
/// starts.
pub struct EtlEngine<P: Pipeline, K: CatalogSink> {
    pipeline: P,
    sink: K,
}

impl<P: Pipeline, K: CatalogSink> EtlEngine<P, K> {
    pub fn new(pipeline: P, sink: K) -> Self {
        Self { pipeline, sink }
    }

    pub async fn run(mut self) -> Result<usize> {
        info!("reading listing pages");
        let records = self.pipeline.extract()?;
        info!(records = records.len(), "listing records parsed");

        self.sink.write_header()?;
        let mut written = 0usize;
        for record in records {
            let row = self.pipeline.resolve(record).await?;
            self.sink.write_row(&row)?;
            written += 1;
        }
        self.sink.finish()?;

        info!(rows = written, "catalog assembled");
        Ok(written)
    }
}
