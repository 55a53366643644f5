// Adapters layer: concrete implementations of the ports (filesystem cache,
// HTTP sources, CSV output).

pub mod fetch;
pub mod guide;
pub mod sink;
pub mod store;

pub use fetch::PageFetcher;
pub use guide::HttpRatingSource;
pub use sink::CsvSink;
pub use store::LocalDocumentStore;
