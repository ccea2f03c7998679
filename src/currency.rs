use crate::models::{CountryCurrencies, ReportRow};
use log::debug;
use std::collections::HashMap;

/// Currency value for a country that declares no currency at all.
pub const NO_CURRENCY: &str = "-";

/// Map ISO3 code -> first listed currency code (or [`NO_CURRENCY`]).
///
/// Duplicate country codes collapse to the last record seen.
pub fn currency_map(records: &[CountryCurrencies]) -> HashMap<String, String> {
    records
        .iter()
        .map(|r| {
            let code = r
                .currencies
                .keys()
                .next()
                .cloned()
                .unwrap_or_else(|| NO_CURRENCY.to_string());
            (r.cca3.clone(), code)
        })
        .collect()
}

/// Left-join the currency column onto `rows` by country code.
///
/// Every row is kept in order; countries absent from `records` get `None`.
pub fn add_currency(rows: &mut [ReportRow], records: &[CountryCurrencies]) {
    let by_country = currency_map(records);
    for row in rows.iter_mut() {
        row.currency = by_country.get(&row.country_code).cloned();
    }
    let unmatched = rows.iter().filter(|r| r.currency.is_none()).count();
    if unmatched > 0 {
        debug!("{} rows without a currency entry", unmatched);
    }
}
