//! Conversion-rate join and the "one penny per person" total.

use crate::error::{ReportError, Result};
use crate::models::ReportRow;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Share of one local currency unit each person contributes.
pub const PENNY: f64 = 0.01;

/// What to do with rows that have no usable conversion rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GapPolicy {
    /// Leave the row out of the total and list it in [`PennyTotal::skipped`].
    #[default]
    Skip,
    /// Fail the whole computation with [`ReportError::JoinGap`].
    Strict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PennyTotal {
    /// Total in the base currency.
    pub total: f64,
    /// Country codes left out of the total (absent, zero or non-finite rate).
    pub skipped: Vec<String>,
}

/// Left-join the conversion rate onto `rows` by currency code.
///
/// Rows without a currency, or whose currency is missing from `rates`, get `None`.
pub fn add_conversion_rates(rows: &mut [ReportRow], rates: &HashMap<String, f64>) {
    for row in rows.iter_mut() {
        row.conversion_rate = row
            .currency
            .as_ref()
            .and_then(|c| rates.get(c))
            .copied();
    }
}

fn usable_rate(row: &ReportRow) -> Option<f64> {
    row.conversion_rate.filter(|r| r.is_finite() && *r > 0.0)
}

/// Sum of `population / rate * 0.01` over the rows.
///
/// ### Errors
/// [`ReportError::JoinGap`] under [`GapPolicy::Strict`] when any row lacks a usable rate.
pub fn penny_total(rows: &[ReportRow], policy: GapPolicy) -> Result<PennyTotal> {
    let mut total = 0.0;
    let mut skipped = Vec::new();
    for row in rows {
        match usable_rate(row) {
            Some(rate) => total += row.population as f64 / rate,
            None => skipped.push(row.country_code.clone()),
        }
    }

    if !skipped.is_empty() {
        if policy == GapPolicy::Strict {
            return Err(ReportError::JoinGap {
                country_codes: skipped,
            });
        }
        warn!("left out of the total (no usable rate): {}", skipped.join(", "));
    }

    Ok(PennyTotal {
        total: total * PENNY,
        skipped,
    })
}
