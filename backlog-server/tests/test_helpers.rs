#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use backlog_server::{
    catalog::Catalog, config::Config, create_routes, steam_import::SteamImporter,
};
use chrono::NaiveDate;
use serde_json::Value;
use warp::Filter;

/// Date every test catalog is built for.
pub fn snapshot_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
}

/// Routes over the mock catalog as of [`snapshot_date`].
pub fn create_test_app() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone
{
    create_test_app_with_config(Config::default())
}

pub fn create_test_app_with_config(
    config: Config,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let catalog = Catalog::mock(snapshot_date());
    let steam_importer = SteamImporter::new(catalog.steam_library.clone(), Duration::ZERO);

    create_routes(Arc::new(catalog), Arc::new(steam_importer), Arc::new(config))
}

/// Parse a response body as JSON.
pub fn json_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("response body should be JSON")
}

/// Collect the `id` field of every game in a JSON array.
pub fn game_ids(games: &Value) -> Vec<String> {
    games
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|game| game["id"].as_str().expect("game id").to_string())
        .collect()
}
