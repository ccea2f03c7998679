//! End-to-end run: population -> currency -> exchange rate -> total.

use crate::api::{self, Fetch};
use crate::config::Config;
use crate::currency;
use crate::error::Result;
use crate::exchange::{self, PennyTotal};
use crate::models::ReportRow;
use crate::population;
use crate::report;
use log::info;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Outcome of a run, as printed and as exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub year: i32,
    pub base_currency: String,
    pub rows: Vec<ReportRow>,
    pub penny: PennyTotal,
    /// Source total the country count was clamped to, if any.
    pub clamped_to: Option<u32>,
}

/// Fetch, join and print the report for `config`.
///
/// Each stage writes its table to `out` as soon as it is built. The first failing
/// stage stops the run; later sources are not contacted.
pub fn run<F: Fetch, W: Write>(config: &Config, fetch: &F, out: &mut W) -> Result<Report> {
    let locale = config.locale.as_str();

    let envelope = api::fetch_population(fetch, &config.endpoints, config.year)?;
    let table = population::build_table(&envelope, config.year, config.country_count)?;
    report::write_population(out, &table, locale)?;
    let clamped_to = table.clamped_to;
    info!("population table: {} rows for {}", table.rows.len(), config.year);

    let mut rows: Vec<ReportRow> = table.rows.into_iter().map(ReportRow::from).collect();

    let currencies = api::fetch_currencies(fetch, &config.endpoints)?;
    currency::add_currency(&mut rows, &currencies);

    let rates = api::fetch_exchange_rates(
        fetch,
        &config.endpoints,
        &config.base_currency,
        config.exchange_api_key.as_deref(),
    )?;
    exchange::add_conversion_rates(&mut rows, &rates.conversion_rates);
    report::write_enriched(out, &rows, &config.base_currency, locale)?;

    let penny = exchange::penny_total(&rows, config.gap_policy)?;
    report::write_total(out, config.year, &config.base_currency, &penny, locale)?;

    Ok(Report {
        year: config.year,
        base_currency: config.base_currency.clone(),
        rows,
        penny,
        clamped_to,
    })
}
