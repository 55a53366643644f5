pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{CsvSink, HttpRatingSource, LocalDocumentStore, PageFetcher};
pub use crate::config::{Cli, Command, Options, Settings};
pub use crate::core::{assembler::CatalogPipeline, etl::EtlEngine, listing::ListingParser};
pub use crate::utils::error::{CatalogError, Result};
