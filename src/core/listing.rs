//! Reader for the cached chart pages. Each page holds one 200-row window of
//! the single global ranked table; pages are visited in lexicographic
//! file-name order so ranks stay strictly increasing across the traversal.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::core::fields;
use crate::core::{compile_selector, element_text};
use crate::domain::model::FilmRecord;
use crate::domain::ports::DocumentStore;
use crate::utils::error::{CatalogError, Result};

pub struct ListingParser {
    row: Selector,
    header_cell: Selector,
    cell: Selector,
    link: Selector,
}

impl ListingParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            row: compile_selector("table tr")?,
            header_cell: compile_selector("th")?,
            cell: compile_selector("td")?,
            link: compile_selector("a")?,
        })
    }

    /// Parses every cached listing page into chart records, in page order.
    /// A single malformed row aborts the traversal: the table layout is
    /// fixed, so one bad row means the source format changed and the whole
    /// run is suspect.
    pub fn read_all<S: DocumentStore>(&self, store: &S) -> Result<Vec<FilmRecord>> {
        let mut records = Vec::new();
        for name in store.listing_pages()? {
            let html = store.read_listing(&name)?;
            self.parse_document(&name, &html, &mut records)?;
        }
        Ok(records)
    }

    fn parse_document(&self, name: &str, html: &str, out: &mut Vec<FilmRecord>) -> Result<()> {
        let document = Html::parse_document(html);
        let mut rows = document.select(&self.row);

        let header = rows.next().ok_or_else(|| CatalogError::MalformedRow {
            reason: format!("{name}: page holds no table rows"),
        })?;
        let columns: Vec<String> = header
            .select(&self.header_cell)
            .map(element_text)
            .collect();
        debug!(page = %name, columns = columns.len(), labels = ?columns, "listing header");

        for row in rows {
            out.push(self.parse_row(row)?);
        }
        Ok(())
    }

    /// One chart row. The table carries no per-cell labels, so cells are
    /// consumed strictly left to right: rank, title(+link), worldwide gross,
    /// domestic gross, domestic share, foreign gross, foreign share, year.
    fn parse_row(&self, row: ElementRef<'_>) -> Result<FilmRecord> {
        let cells: Vec<ElementRef<'_>> = row.select(&self.cell).collect();
        let [rank, title, worldwide, domestic, domestic_pct, foreign, foreign_pct, year] =
            cells.as_slice()
        else {
            return Err(CatalogError::MalformedRow {
                reason: format!("expected 8 cells, found {}", cells.len()),
            });
        };

        let rank = fields::decode_integer("rank", &element_text(*rank))?
            .ok_or_else(|| malformed("rank cell holds no value"))?;
        let rank = u32::try_from(rank).map_err(|_| malformed("rank out of range"))?;

        let title_text = element_text(*title);
        if title_text.is_empty() {
            return Err(malformed("empty title cell"));
        }
        let detail_ref = title
            .select(&self.link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .ok_or_else(|| malformed(&format!("title cell for {title_text:?} has no link")))?
            .to_string();

        let worldwide_gross = fields::decode_integer("worldwide gross", &element_text(*worldwide))?;
        let domestic_gross = fields::decode_integer("domestic gross", &element_text(*domestic))?;
        let domestic_share =
            fields::decode_percentage("domestic share", &element_text(*domestic_pct))?;
        let foreign_gross = fields::decode_integer("foreign gross", &element_text(*foreign))?;
        let foreign_share =
            fields::decode_percentage("foreign share", &element_text(*foreign_pct))?;

        let year = fields::decode_integer("year", &element_text(*year))?
            .ok_or_else(|| malformed("year cell holds no value"))?;
        let year = u16::try_from(year).map_err(|_| malformed("year out of range"))?;

        Ok(FilmRecord {
            rank,
            title: title_text,
            detail_ref,
            worldwide_gross,
            domestic_gross,
            domestic_share,
            foreign_gross,
            foreign_share,
            year,
        })
    }
}

fn malformed(reason: &str) -> CatalogError {
    CatalogError::MalformedRow {
        reason: reason.to_string(),
    }
}
