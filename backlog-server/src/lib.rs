use serde::Deserialize;
use std::sync::Arc;
use warp::Filter;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::steam_import::SteamImporter;

pub mod catalog;
pub mod config;
pub mod handlers;
pub mod steam_import;
pub mod validation;

/// Raw library query string. Values are parsed into a `LibraryQuery` by the
/// handler so unknown values can be answered with a 400.
#[derive(Debug, Default, Deserialize)]
pub struct GamesQueryParams {
    pub search: Option<String>,
    pub platform: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
}

pub fn create_routes(
    catalog: Arc<Catalog>,
    steam_importer: Arc<SteamImporter>,
    config: Arc<Config>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // Clone for filters
    let catalog_filter = warp::any().map({
        let catalog = catalog.clone();
        move || catalog.clone()
    });

    let importer_filter = warp::any().map({
        let steam_importer = steam_importer.clone();
        move || steam_importer.clone()
    });

    let config_filter = warp::any().map({
        let config = config.clone();
        move || config.clone()
    });

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", warp::http::StatusCode::OK));

    // Library list with search, filters and sort
    let list_games = warp::path!("games")
        .and(warp::get())
        .and(warp::query::<GamesQueryParams>())
        .and(catalog_filter.clone())
        .and_then(handlers::handle_list_games);

    let create_game = warp::path!("games")
        .and(warp::post())
        .and(warp::body::json())
        .and(catalog_filter.clone())
        .and_then(handlers::handle_create_game);

    let game_detail = warp::path!("games" / String)
        .and(warp::get())
        .and(catalog_filter.clone())
        .and_then(handlers::handle_game_detail);

    let update_game = warp::path!("games" / String)
        .and(warp::put())
        .and(warp::body::json())
        .and(catalog_filter.clone())
        .and_then(handlers::handle_update_game);

    let dashboard = warp::path!("dashboard")
        .and(warp::get())
        .and(catalog_filter.clone())
        .and(config_filter.clone())
        .and_then(handlers::handle_dashboard);

    let random_pick = warp::path!("dashboard" / "random")
        .and(warp::get())
        .and(catalog_filter.clone())
        .and_then(handlers::handle_random_pick);

    let stats = warp::path!("stats")
        .and(warp::get())
        .and(catalog_filter.clone())
        .and_then(handlers::handle_stats);

    let wishlist = warp::path!("wishlist")
        .and(warp::get())
        .and(catalog_filter.clone())
        .and(config_filter.clone())
        .and_then(handlers::handle_wishlist);

    let add_wishlist = warp::path!("wishlist")
        .and(warp::post())
        .and(warp::body::json())
        .and(catalog_filter.clone())
        .and_then(handlers::handle_add_wishlist);

    let delete_wishlist = warp::path!("wishlist" / String)
        .and(warp::delete())
        .and(catalog_filter.clone())
        .and_then(handlers::handle_delete_wishlist);

    let get_profile = warp::path!("settings" / "profile")
        .and(warp::get())
        .and(catalog_filter.clone())
        .and(config_filter.clone())
        .and_then(handlers::handle_get_profile);

    let update_profile = warp::path!("settings" / "profile")
        .and(warp::put())
        .and(warp::body::json())
        .and_then(handlers::handle_update_profile);

    let fetch_steam_library = warp::path!("settings" / "steam" / "library")
        .and(warp::post())
        .and(warp::body::json())
        .and(importer_filter.clone())
        .and_then(handlers::handle_fetch_steam_library);

    let import_steam = warp::path!("settings" / "steam" / "import")
        .and(warp::post())
        .and(warp::body::json())
        .and(importer_filter.clone())
        .and_then(handlers::handle_import_steam);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE"]);

    health
        .or(list_games)
        .or(create_game)
        .or(game_detail)
        .or(update_game)
        .or(dashboard)
        .or(random_pick)
        .or(stats)
        .or(wishlist)
        .or(add_wishlist)
        .or(delete_wishlist)
        .or(get_profile)
        .or(update_profile)
        .or(fetch_steam_library)
        .or(import_steam)
        .with(cors)
        .with(warp::log("backlog"))
}
