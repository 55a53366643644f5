//! Tiered rating resolution. The declared MPAA rating wins when it is one of
//! the canonical codes; everything else falls back to the film's IMDb
//! parental guide, where a US rating is preferred and the Singapore MDA
//! rating is a last resort. Fallback failures are per-film and never abort
//! the batch.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::domain::model::{DetailAttributes, Rating};
use crate::domain::ports::RatingSource;

/// Codes the detail page may declare that need no fallback lookup.
const MPAA_CODES: [&str; 5] = ["G", "PG", "PG-13", "R", "NC-17"];

fn us_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"United States:([-PGR137NC]+)<").unwrap())
}

fn singapore_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Singapore:([GP13682NCMR]+)<").unwrap())
}

pub struct RatingResolver<R: RatingSource> {
    source: R,
}

impl<R: RatingSource> RatingResolver<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub async fn resolve(&self, title: &str, attrs: &DetailAttributes) -> Rating {
        if let Some(code) = attrs.mpaa.as_deref() {
            if MPAA_CODES.contains(&code) {
                return Rating::Domestic(code.to_string());
            }
        }

        let Some(id) = attrs.imdb_id.as_deref() else {
            warn!(title, "no IMDb id, rating left unresolved");
            return Rating::Unresolved;
        };

        let body = match self.source.parental_guide(id).await {
            Ok(Some(body)) => body,
            Ok(None) => {
                warn!(title, id, "parental guide unavailable");
                return Rating::Unresolved;
            }
            Err(error) => {
                warn!(title, id, %error, "parental guide lookup failed");
                return Rating::Unresolved;
            }
        };

        if let Some(captures) = us_pattern().captures(&body) {
            return Rating::Domestic(captures[1].to_string());
        }
        if let Some(captures) = singapore_pattern().captures(&body) {
            return Rating::Foreign(captures[1].to_string());
        }

        warn!(title, "parental guide holds no usable rating");
        Rating::Unresolved
    }
}
