//! Run configuration: what to report on and where to fetch it from.

use crate::error::{ReportError, Result};
use crate::exchange::GapPolicy;

/// Environment variable holding the exchange-rate API key.
pub const API_KEY_VAR: &str = "API_KEY";

pub const DEFAULT_BASE_CURRENCY: &str = "MXN";

/// Base URLs of the three sources. Overridable for tests and mirrors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub population_url: String,
    pub currency_url: String,
    /// Latest-rates prefix; the base currency code is appended as the last path segment.
    pub exchange_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            population_url: "https://api.worldbank.org/v2/country/all/indicator/SP.POP.TOTL".into(),
            currency_url: "https://restcountries.com/v3.1/all".into(),
            exchange_url: "https://v6.exchangerate-api.com/v6/latest".into(),
        }
    }
}

impl Endpoints {
    pub fn exchange_url(&self, base: &str) -> String {
        format!("{}/{}", self.exchange_url.trim_end_matches('/'), base)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub year: i32,
    pub country_count: usize,
    pub exchange_api_key: Option<String>,
    pub base_currency: String,
    pub endpoints: Endpoints,
    pub gap_policy: GapPolicy,
    /// Locale tag for number formatting (`en`, `de`, ...).
    pub locale: String,
}

impl Config {
    /// Config with default endpoints, MXN base, skip policy and no API key.
    pub fn new(year: i32, country_count: usize) -> Self {
        Self {
            year,
            country_count,
            exchange_api_key: None,
            base_currency: DEFAULT_BASE_CURRENCY.into(),
            endpoints: Endpoints::default(),
            gap_policy: GapPolicy::default(),
            locale: "en".into(),
        }
    }

    /// Pick up the API key from the environment, loading `.env` first if present.
    pub fn with_env_api_key(mut self) -> Self {
        dotenvy::dotenv().ok();
        self.exchange_api_key = std::env::var(API_KEY_VAR)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        self
    }
}

fn parse_int(s: &str) -> Result<i64> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| ReportError::InvalidInput("That's not an integer number".into()))
}

/// Parse a year; the sign is dropped (`-2020` means 2020).
pub fn parse_year(s: &str) -> Result<i32> {
    let y = parse_int(s)?.unsigned_abs();
    i32::try_from(y).map_err(|_| ReportError::InvalidInput(format!("year out of range: {}", y)))
}

/// Parse a country count; the sign is dropped and zero is rejected.
pub fn parse_country_count(s: &str) -> Result<usize> {
    let n = parse_int(s)?.unsigned_abs();
    if n < 1 {
        return Err(ReportError::InvalidInput(
            "The number of countries needs to be more than 0.".into(),
        ));
    }
    usize::try_from(n).map_err(|_| ReportError::InvalidInput(format!("count out of range: {}", n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_parsing_drops_sign_and_rejects_text() {
        assert_eq!(parse_year(" 2020 ").unwrap(), 2020);
        assert_eq!(parse_year("-1999").unwrap(), 1999);
        assert!(matches!(parse_year("abc"), Err(ReportError::InvalidInput(_))));
        assert!(matches!(parse_year("20.5"), Err(ReportError::InvalidInput(_))));
    }

    #[test]
    fn country_count_must_be_positive() {
        assert_eq!(parse_country_count("-5").unwrap(), 5);
        assert!(matches!(parse_country_count("0"), Err(ReportError::InvalidInput(_))));
    }

    #[test]
    fn exchange_url_appends_base() {
        let mut e = Endpoints::default();
        assert_eq!(e.exchange_url("MXN"), "https://v6.exchangerate-api.com/v6/latest/MXN");
        e.exchange_url = "http://localhost:1/latest/".into();
        assert_eq!(e.exchange_url("EUR"), "http://localhost:1/latest/EUR");
    }
}
