use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Metadata section of the population envelope (position 0).
/// The paging fields the API also sends are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub page: i64,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeName {
    #[serde(default)]
    pub id: String,
    pub value: String,
}

/// Raw per-country population entry (position 1 array).
///
/// Only the fields the report needs are read; the indicator, date and
/// observation status that the API also sends are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationEntry {
    pub country: CodeName,
    #[serde(default)]
    pub countryiso3code: String,
    #[serde(default)]
    pub value: Option<f64>,
}

/// One row of the population table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryPopulation {
    pub country_code: String,
    pub country_name: String,
    pub population: u64,
}

/// Raw country record from the currency source (`fields=cca3,currencies`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryCurrencies {
    pub cca3: String,
    /// Keyed by currency code; values carry name/symbol, which are not used.
    #[serde(default)]
    pub currencies: Map<String, Value>,
}

/// Latest-rates payload of the exchange source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRates {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub base_code: Option<String>,
    #[serde(default)]
    pub conversion_rates: HashMap<String, f64>,
    #[serde(rename = "error-type", default)]
    pub error_type: Option<String>,
}

/// Fully enriched row: population plus the two joined columns.
///
/// `currency` is `None` when the country is missing from the currency source,
/// `conversion_rate` is `None` when the currency has no rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportRow {
    pub country_code: String,
    pub country_name: String,
    pub population: u64,
    pub currency: Option<String>,
    pub conversion_rate: Option<f64>,
}

impl From<CountryPopulation> for ReportRow {
    fn from(p: CountryPopulation) -> Self {
        Self {
            country_code: p.country_code,
            country_name: p.country_name,
            population: p.population,
            currency: None,
            conversion_rate: None,
        }
    }
}
