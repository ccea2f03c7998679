//! Live API tests. Run with: `cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use pop_penny::Client;
use pop_penny::api;
use pop_penny::config::Endpoints;
use pop_penny::population::build_table;

#[test]
fn fetch_population_top_five() {
    let cli = Client::default();
    let env = api::fetch_population(&cli, &Endpoints::default(), 2020).unwrap();
    let table = build_table(&env, 2020, 5).unwrap();
    assert_eq!(table.rows.len(), 5);
    assert!(table.rows.windows(2).all(|w| w[0].population >= w[1].population));
    assert!(table.rows.iter().all(|r| r.country_code.len() == 3));
}

#[test]
fn fetch_currencies_includes_mexico() {
    let cli = Client::default();
    let list = api::fetch_currencies(&cli, &Endpoints::default()).unwrap();
    let mex = list.iter().find(|c| c.cca3 == "MEX").unwrap();
    assert!(mex.currencies.contains_key("MXN"));
}
