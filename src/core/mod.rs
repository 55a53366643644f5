pub mod assembler;
pub mod detail;
pub mod etl;
pub mod fields;
pub mod listing;
pub mod rating;

pub use crate::domain::model::{CatalogRow, DetailAttributes, FilmRecord, Rating};
pub use crate::domain::ports::{CatalogSink, ConfigProvider, DocumentStore, Pipeline, RatingSource};
pub use crate::utils::error::Result;

use scraper::{ElementRef, Selector};

use crate::utils::error::CatalogError;

pub(crate) fn compile_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| CatalogError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Concatenated descendant text of an element, trimmed.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
