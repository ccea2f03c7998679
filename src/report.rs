//! Console rendering of the population and enriched tables and the final total.

use crate::exchange::PennyTotal;
use crate::models::ReportRow;
use crate::population::PopulationTable;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use num_format::{Locale, ToFormattedString};
use std::io::{self, Write};

const MISSING: &str = "N/A";

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'), // default
    }
}

/// Integer with thousands separators for the given locale tag.
pub fn format_count(n: u64, locale_tag: &str) -> String {
    let (locale, _) = map_locale(locale_tag);
    n.to_formatted_string(locale)
}

/// Amount rounded to two decimals with thousands separators (`1,234,567.89`).
pub fn format_money(value: f64, locale_tag: &str) -> String {
    if !value.is_finite() {
        return MISSING.to_string();
    }
    let (locale, dec_sep) = map_locale(locale_tag);
    let cents = (value.abs() * 100.0).round() as u128;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{}{}{:02}",
        sign,
        (cents / 100).to_formatted_string(locale),
        dec_sep,
        cents % 100
    )
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(header.iter().copied());
    table
}

fn right(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Ranked population table as rendered under the "Top N" heading.
pub fn population_table(table: &PopulationTable, locale_tag: &str) -> Table {
    let mut out = new_table(&["#", "Country Code", "Country", "Population"]);
    for (i, row) in table.rows.iter().enumerate() {
        out.add_row(vec![
            right(i.to_string()),
            Cell::new(&row.country_code),
            Cell::new(&row.country_name),
            right(format_count(row.population, locale_tag)),
        ]);
    }
    out
}

/// Population table with the Currency and Conversion Rate columns.
pub fn enriched_table(rows: &[ReportRow], locale_tag: &str) -> Table {
    let mut out = new_table(&[
        "#",
        "Country Code",
        "Country",
        "Population",
        "Currency",
        "Conversion Rate",
    ]);
    for (i, row) in rows.iter().enumerate() {
        out.add_row(vec![
            right(i.to_string()),
            Cell::new(&row.country_code),
            Cell::new(&row.country_name),
            right(format_count(row.population, locale_tag)),
            Cell::new(row.currency.as_deref().unwrap_or(MISSING)),
            right(
                row.conversion_rate
                    .map_or_else(|| MISSING.to_string(), |r| format!("{}", r)),
            ),
        ]);
    }
    out
}

pub fn write_population<W: Write>(
    out: &mut W,
    table: &PopulationTable,
    locale_tag: &str,
) -> io::Result<()> {
    if let Some(total) = table.clamped_to {
        writeln!(out, "There are only {} countries.", total)?;
    }
    writeln!(
        out,
        "Top {} countries by Population in year {}",
        table.country_count, table.year
    )?;
    writeln!(out, "{}", population_table(table, locale_tag))
}

pub fn write_enriched<W: Write>(
    out: &mut W,
    rows: &[ReportRow],
    base: &str,
    locale_tag: &str,
) -> io::Result<()> {
    writeln!(out, "----------------------------------")?;
    writeln!(
        out,
        "Exchange rate from {} to local currency of specified countries",
        base
    )?;
    writeln!(out, "{}", enriched_table(rows, locale_tag))
}

pub fn write_total<W: Write>(
    out: &mut W,
    year: i32,
    base: &str,
    total: &PennyTotal,
    locale_tag: &str,
) -> io::Result<()> {
    if !total.skipped.is_empty() {
        writeln!(
            out,
            "Left out of the total (no usable conversion rate): {}",
            total.skipped.join(", ")
        )?;
    }
    writeln!(
        out,
        "Considering the population in those countries in year {}. If each of them gives you \
         1 penny of their local currency (current exchange rate), you will have: ${} {}",
        year,
        format_money(total.total, locale_tag),
        base
    )
}
