//! Reader for the cached per-film detail pages.

use std::sync::OnceLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::core::{compile_selector, element_text};
use crate::domain::model::{DetailAttributes, FilmRecord};
use crate::domain::ports::DocumentStore;
use crate::utils::error::Result;

/// Label preceding the declared rating on the detail page.
const RATING_LABEL: &str = "MPAA";

fn imdb_id_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"title/(tt\d+)").unwrap())
}

pub struct DetailParser {
    element: Selector,
}

impl DetailParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            element: compile_selector("*")?,
        })
    }

    /// Loads the record's cached detail page and extracts the declared
    /// rating and the IMDb id. Both attributes are optional; a missing
    /// document is not.
    pub fn read<S: DocumentStore>(&self, store: &S, record: &FilmRecord) -> Result<DetailAttributes> {
        let html = store.read_detail(&record.title)?;
        let document = Html::parse_document(&html);
        Ok(DetailAttributes {
            mpaa: self.labeled_value(&document, RATING_LABEL),
            imdb_id: imdb_id(&html),
        })
    }

    /// Text of the element immediately following the one whose text is
    /// exactly `label`. Detail pages render attributes as label/value
    /// sibling pairs without any more specific markup to hook into.
    fn labeled_value(&self, document: &Html, label: &str) -> Option<String> {
        document
            .select(&self.element)
            .filter(|el| element_text(*el) == label)
            .find_map(next_element_text)
            .filter(|text| !text.is_empty())
    }
}

fn next_element_text(element: ElementRef<'_>) -> Option<String> {
    let mut node = element.next_sibling();
    while let Some(n) = node {
        if let Some(sibling) = ElementRef::wrap(n) {
            return Some(element_text(sibling));
        }
        node = n.next_sibling();
    }
    None
}

/// First IMDb title token on the page, e.g. `tt0499549`.
fn imdb_id(html: &str) -> Option<String> {
    imdb_id_pattern()
        .captures(html)
        .map(|captures| captures[1].to_string())
}
