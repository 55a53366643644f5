use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("unparseable {field} value: {value:?}")]
    Format { field: &'static str, value: String },

    #[error("malformed listing row: {reason}")]
    MalformedRow { reason: String },

    #[error("missing detail document for {title:?} (expected {})", .path.display())]
    MissingDetailDocument { title: String, path: PathBuf },

    #[error("{url} answered {status}")]
    Fetch { url: String, status: u16 },

    #[error("invalid selector {selector:?}: {message}")]
    Selector { selector: String, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
