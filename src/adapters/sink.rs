use std::fs;
use std::io::Write;
use std::path::Path;

use crate::domain::model::CatalogRow;
use crate::domain::ports::CatalogSink;
use crate::utils::error::Result;

pub const HEADER: [&str; 11] = [
    "RANK",
    "TITLE",
    "IMDB_ID",
    "WORLDWIDE_LIFETIME_GROSS",
    "DOMESTIC_LIFETIME_GROSS",
    "DOMESTIC_PERCENTAGE",
    "FOREIGN_LIFETIME_GROSS",
    "FOREIGN_PERCENTAGE",
    "YEAR",
    "MPAA",
    "MDA",
];

/// CSV catalog writer. Missing figures and unresolved ratings come out as
/// empty cells.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<fs::File> {
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self {
            writer: csv::Writer::from_path(path)?,
        })
    }
}

impl<W: Write> CsvSink<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }
}

impl<W: Write> CatalogSink for CsvSink<W> {
    fn write_header(&mut self) -> Result<()> {
        self.writer.write_record(HEADER)?;
        Ok(())
    }

    fn write_row(&mut self, row: &CatalogRow) -> Result<()> {
        let record = &row.record;
        self.writer.write_record([
            record.rank.to_string(),
            record.title.clone(),
            row.imdb_id.clone().unwrap_or_default(),
            optional_integer(record.worldwide_gross),
            optional_integer(record.domestic_gross),
            optional_share(record.domestic_share),
            optional_integer(record.foreign_gross),
            optional_share(record.foreign_share),
            record.year.to_string(),
            row.rating.domestic().unwrap_or_default().to_string(),
            row.rating.foreign().unwrap_or_default().to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn optional_integer(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn optional_share(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
