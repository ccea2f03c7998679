//! Synchronous HTTP access to the three data sources.
//!
//! The pipeline only talks to the network through the [`Fetch`] trait, so tests can
//! hand it canned JSON instead of a live [`Client`].
//!
//! ### Notes
//! - No retry: a non-success status is reported once and surfaces as
//!   [`ReportError::UpstreamFetchFailed`].
//! - Network timeouts use a sane default (30s) and can be adjusted by editing the client builder.
//!
//! Typical usage:
//! ```no_run
//! # use pop_penny::api::{self, Client};
//! # use pop_penny::config::Endpoints;
//! let client = Client::default();
//! let envelope = api::fetch_population(&client, &Endpoints::default(), 2020)?;
//! # Ok::<(), pop_penny::ReportError>(())
//! ```
use crate::config::Endpoints;
use crate::error::{ReportError, Result};
use crate::models::{CountryCurrencies, ExchangeRates};
use log::{debug, warn};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

/// Page size for the population query; large enough for every country and aggregate.
pub const POPULATION_PER_PAGE: u32 = 266;

/// Capability to issue one GET and decode the JSON body.
pub trait Fetch {
    /// GET `url` with `query` appended and an optional bearer token.
    ///
    /// Non-success statuses must come back as [`ReportError::UpstreamFetchFailed`].
    fn get_json(&self, url: &str, query: &[(&str, String)], bearer: Option<&str>)
    -> Result<Value>;
}

#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
}

impl Client {
    pub fn new() -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("pop_penny/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ReportError::Transport {
                url: String::new(),
                source,
            })?;
        Ok(Self::from_http(http))
    }

    /// Wrap an already configured reqwest client.
    pub fn from_http(http: HttpClient) -> Self {
        Self { http }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new().expect("reqwest client build")
    }
}

impl Fetch for Client {
    fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
        bearer: Option<&str>,
    ) -> Result<Value> {
        let mut req = self.http.get(url).query(query);
        if let Some(token) = bearer {
            req = req.bearer_auth(token);
        }
        debug!("GET {} {:?}", url, query);

        let transport = |source: reqwest::Error| ReportError::Transport {
            url: url.to_string(),
            source,
        };
        let resp = req.send().map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            warn!("GET {} returned HTTP {}", url, status);
            return Err(ReportError::UpstreamFetchFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = resp.text().map_err(transport)?;
        serde_json::from_str(&body).map_err(|source| ReportError::Decode {
            what: "response body",
            source,
        })
    }
}

/// Fetch the raw `[meta, records]` population envelope for `year`.
///
/// The envelope is returned undecoded; [`crate::population::build_table`] validates it.
/// A one-element World Bank error payload (`[{"message": ...}]`) is logged and
/// treated like any other short envelope: no data for the year.
pub fn fetch_population(fetch: &impl Fetch, endpoints: &Endpoints, year: i32) -> Result<Value> {
    let query = [
        ("date", year.to_string()),
        ("format", "json".to_string()),
        ("per_page", POPULATION_PER_PAGE.to_string()),
    ];
    let v = fetch.get_json(&endpoints.population_url, &query, None)?;

    if let Some(first) = v.as_array().and_then(|arr| arr.first())
        && let Some(message) = first.get("message")
    {
        warn!("world bank api message for {}: {}", year, message);
    }
    Ok(v)
}

/// Fetch `{cca3, currencies}` for every country.
pub fn fetch_currencies(
    fetch: &impl Fetch,
    endpoints: &Endpoints,
) -> Result<Vec<CountryCurrencies>> {
    let query = [("fields", "cca3,currencies".to_string())];
    let v = fetch.get_json(&endpoints.currency_url, &query, None)?;
    serde_json::from_value(v).map_err(|source| ReportError::Decode {
        what: "country currencies",
        source,
    })
}

/// Fetch the latest rates expressed against `base` (e.g. `"MXN"`).
pub fn fetch_exchange_rates(
    fetch: &impl Fetch,
    endpoints: &Endpoints,
    base: &str,
    api_key: Option<&str>,
) -> Result<ExchangeRates> {
    if api_key.is_none() {
        warn!("no exchange api key configured; the request will likely be rejected");
    }
    let url = endpoints.exchange_url(base);
    let v = fetch.get_json(&url, &[], api_key)?;
    let rates: ExchangeRates =
        serde_json::from_value(v).map_err(|source| ReportError::Decode {
            what: "exchange rates",
            source,
        })?;

    if rates.result.as_deref() == Some("error") {
        return Err(ReportError::Upstream {
            source_name: "exchange rate",
            message: rates
                .error_type
                .unwrap_or_else(|| "unknown error".to_string()),
        });
    }
    debug!("received {} conversion rates", rates.conversion_rates.len());
    Ok(rates)
}
