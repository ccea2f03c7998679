//! Turn the World Bank population envelope into a ranked country table.

use crate::error::{ReportError, Result};
use crate::models::{CountryPopulation, Meta, PopulationEntry};
use log::{debug, warn};
use serde_json::Value;

/// Number of leading records that are regional/income aggregates, not countries.
///
/// The API lists aggregates first in a fixed order; this is a positional filter and
/// breaks if the source ever reorders or adds aggregates.
pub const AGGREGATE_ROWS: usize = 49;

/// Top-N countries by population for one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationTable {
    pub year: i32,
    /// Sorted by population, descending; the index is the rank (0-based).
    pub rows: Vec<CountryPopulation>,
    /// Country count after clamping to the source total.
    pub country_count: usize,
    /// Set to the source total when the request asked for more countries.
    pub clamped_to: Option<u32>,
}

/// Build the table from a raw `[meta, records]` envelope.
///
/// ### Errors
/// - [`ReportError::NoDataForYear`] if the envelope has fewer than two elements, the
///   page number is below 1 or the records element is null
/// - [`ReportError::Decode`] if meta or records do not have the expected shape
pub fn build_table(envelope: &Value, year: i32, requested: usize) -> Result<PopulationTable> {
    let arr = match envelope.as_array() {
        Some(arr) if arr.len() >= 2 => arr,
        _ => return Err(ReportError::NoDataForYear { year }),
    };

    let meta: Meta = serde_json::from_value(arr[0].clone()).map_err(|source| {
        ReportError::Decode {
            what: "population metadata",
            source,
        }
    })?;
    if meta.page < 1 || arr[1].is_null() {
        return Err(ReportError::NoDataForYear { year });
    }

    let entries: Vec<PopulationEntry> = serde_json::from_value(arr[1].clone()).map_err(
        |source| ReportError::Decode {
            what: "population records",
            source,
        },
    )?;
    debug!("{} population records, {} reported total", entries.len(), meta.total);

    let mut candidates: Vec<(CountryPopulation, Option<f64>)> = entries
        .into_iter()
        .skip(AGGREGATE_ROWS)
        .map(|e| {
            let row = CountryPopulation {
                country_code: e.countryiso3code,
                country_name: e.country.value,
                population: 0,
            };
            (row, e.value)
        })
        .collect();

    let mut country_count = requested;
    let mut clamped_to = None;
    if requested > meta.total as usize {
        warn!("requested {} countries, source has {}", requested, meta.total);
        country_count = meta.total as usize;
        clamped_to = Some(meta.total);
    }

    // Stable: equal populations keep input order; missing values go last.
    candidates.sort_by(|(_, a), (_, b)| match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    let rows = candidates
        .into_iter()
        .take(country_count)
        .map(|(mut row, value)| {
            row.population = coerce_population(value);
            row
        })
        .collect();

    Ok(PopulationTable {
        year,
        rows,
        country_count,
        clamped_to,
    })
}

/// Missing or negative populations become zero; fractions are truncated.
fn coerce_population(value: Option<f64>) -> u64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v as u64,
        _ => 0,
    }
}
