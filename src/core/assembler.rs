//! Composition point: listing records in, fully rated catalog rows out.

use async_trait::async_trait;

use crate::core::detail::DetailParser;
use crate::core::listing::ListingParser;
use crate::core::rating::RatingResolver;
use crate::domain::model::{CatalogRow, FilmRecord};
use crate::domain::ports::{DocumentStore, Pipeline, RatingSource};
use crate::utils::error::Result;

pub struct CatalogPipeline<'a, S: DocumentStore, R: RatingSource> {
    store: &'a S,
    listing: ListingParser,
    detail: DetailParser,
    resolver: RatingResolver<R>,
}

impl<'a, S: DocumentStore, R: RatingSource> CatalogPipeline<'a, S, R> {
    pub fn new(store: &'a S, source: R) -> Result<Self> {
        Ok(Self {
            store,
            listing: ListingParser::new()?,
            detail: DetailParser::new()?,
            resolver: RatingResolver::new(source),
        })
    }
}

#[async_trait]
impl<S: DocumentStore, R: RatingSource> Pipeline for CatalogPipeline<'_, S, R> {
    fn extract(&self) -> Result<Vec<FilmRecord>> {
        self.listing.read_all(self.store)
    }

    /// One film, start to finish: detail attributes, then the rating. A
    /// missing detail document propagates; an unresolved rating does not.
    async fn resolve(&self, record: FilmRecord) -> Result<CatalogRow> {
        let attrs = self.detail.read(self.store, &record)?;
        let rating = self.resolver.resolve(&record.title, &attrs).await;
        Ok(CatalogRow {
            record,
            imdb_id: attrs.imdb_id,
            rating,
        })
    }
}
