//! Decoders for the chart's printed figures. Every numeric or percentage
//! cell in the system goes through these, so the `-` sentinel ("value
//! intentionally absent") is handled in exactly one place.

use crate::utils::error::{CatalogError, Result};

/// Marker the chart prints instead of a figure when no data exists.
pub const SENTINEL: &str = "-";

/// Integer with optional `$` and thousands separators. `Ok(None)` on the
/// sentinel, `Format` error on anything else that does not parse.
pub fn decode_integer(field: &'static str, raw: &str) -> Result<Option<u64>> {
    let raw = raw.trim();
    if raw == SENTINEL {
        return Ok(None);
    }
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '$').collect();
    cleaned
        .parse::<u64>()
        .map(Some)
        .map_err(|_| CatalogError::Format {
            field,
            value: raw.to_string(),
        })
}

/// Percentage with optional `<` bound marker, divided by 100. A bound like
/// `<0.1%` decodes to the bare bound value; the source does not expose
/// anything more precise.
pub fn decode_percentage(field: &'static str, raw: &str) -> Result<Option<f64>> {
    let raw = raw.trim();
    if raw == SENTINEL {
        return Ok(None);
    }
    let cleaned: String = raw.chars().filter(|c| *c != '%' && *c != '<').collect();
    cleaned
        .parse::<f64>()
        .map(|value| Some(value / 100.0))
        .map_err(|_| CatalogError::Format {
            field,
            value: raw.to_string(),
        })
}
