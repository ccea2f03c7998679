//! pop_penny
//!
//! Ranks countries by population for a given year (World Bank), attaches each
//! country's currency (REST Countries) and its exchange rate against a base
//! currency (ExchangeRate-API), then answers: how much would you collect if every
//! person in those countries gave you one penny of their local currency?
//! Pairs with the `pop-penny` CLI.
//!
//! ### Features
//! - Top-N population table with clamping to the number of available countries
//! - Left joins for currency and conversion rate, gaps kept visible
//! - Explicit policy for rows without a usable rate (skip or fail)
//! - Quick population statistics (count, min, max, mean, median)
//!
//! ### Example
//! ```no_run
//! use pop_penny::{Client, Config};
//!
//! let config = Config::new(2020, 10).with_env_api_key();
//! let client = Client::default();
//! let report = pop_penny::pipeline::run(&config, &client, &mut std::io::stdout())?;
//! println!("{:#?}", pop_penny::stats::population_summary(&report.rows));
//! # Ok::<(), pop_penny::ReportError>(())
//! ```

pub mod api;
pub mod config;
pub mod currency;
pub mod error;
pub mod exchange;
pub mod models;
pub mod pipeline;
pub mod population;
pub mod report;
pub mod stats;

pub use api::{Client, Fetch};
pub use config::Config;
pub use error::ReportError;
pub use exchange::GapPolicy;
pub use pipeline::Report;
