/// One row of the ranked worldwide-grossing chart, as printed on a cached
/// listing page. Gross and share cells may hold the `-` sentinel instead of a
/// figure, in which case the field is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmRecord {
    pub rank: u32,
    pub title: String,
    /// Site-relative link to the film's detail page.
    pub detail_ref: String,
    pub worldwide_gross: Option<u64>,
    pub domestic_gross: Option<u64>,
    /// Fraction in [0, 1], decoded from the printed percentage.
    pub domestic_share: Option<f64>,
    pub foreign_gross: Option<u64>,
    pub foreign_share: Option<f64>,
    pub year: u16,
}

/// Supplementary attributes read from a film's cached detail page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailAttributes {
    /// Rating token as declared on the page, if any. Not every film declares
    /// one, and declared tokens are not always drawn from the MPAA scale.
    pub mpaa: Option<String>,
    /// IMDb title id, used to address the parental-guide fallback.
    pub imdb_id: Option<String>,
}

/// Outcome of the rating resolution. A film carries at most one code; the
/// variants make a "both populated" state unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rating {
    Unresolved,
    /// MPAA code (G, PG, PG-13, R, NC-17).
    Domestic(String),
    /// Singapore MDA code, consulted only when no US rating was found.
    Foreign(String),
}

impl Rating {
    pub fn domestic(&self) -> Option<&str> {
        match self {
            Rating::Domestic(code) => Some(code),
            _ => None,
        }
    }

    pub fn foreign(&self) -> Option<&str> {
        match self {
            Rating::Foreign(code) => Some(code),
            _ => None,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, Rating::Unresolved)
    }
}

/// Fully assembled output row: chart record plus the resolved rating pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub record: FilmRecord,
    pub imdb_id: Option<String>,
    pub rating: Rating,
}
