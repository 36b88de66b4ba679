use std::sync::Arc;

use backlog_core::{
    DEFAULT_LIST_LIMIT, backlog_warning, compute_dashboard_stats, compute_library_stats,
    filter_and_sort, pick_random_eligible, priority_queue, recent_activity, sessions_for_game,
    top_by_playtime, total_session_minutes,
};
use backlog_types::{
    BacklogWarning, DashboardStats, Game, GameDraft, GameUpdate, LibraryError, LibraryQuery,
    LibraryStats, MonthlyGoal, MonthlyStat, PlaySession, ProfileUpdate, SteamImportRequest,
    SteamLibraryRequest, SteamOwnedGame, User, WishlistDraft, WishlistItem,
};
use serde::Serialize;
use tracing::{info, warn};
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};

use crate::GamesQueryParams;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::steam_import::SteamImporter;
use crate::validation;

type JsonReply = WithStatus<Json>;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameListResponse<'a> {
    pub games: Vec<&'a Game>,
    pub total: usize,
    pub query: LibraryQuery,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetailResponse<'a> {
    pub game: &'a Game,
    pub sessions: Vec<&'a PlaySession>,
    pub total_session_minutes: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse<'a> {
    pub stats: DashboardStats,
    pub remaining_to_target: u32,
    pub total_games: usize,
    pub priority_games: Vec<&'a Game>,
    pub recent_activity: Vec<&'a Game>,
}

#[derive(Serialize)]
pub struct RandomPickResponse<'a> {
    pub game: Option<&'a Game>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse<'a> {
    pub stats: LibraryStats,
    pub monthly: &'a [MonthlyStat],
    pub top_playtime: Vec<&'a Game>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse<'a> {
    pub items: &'a [WishlistItem],
    pub warning: Option<BacklogWarning>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse<'a> {
    pub user: &'a User,
    pub monthly_goal: MonthlyGoal,
}

/// Reply for the placeholder write actions: a confirmation plus whatever
/// the action would have produced.
#[derive(Serialize)]
pub struct MockActionResponse<T: Serialize> {
    pub message: String,
    pub result: Option<T>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SteamLibraryResponse {
    pub message: String,
    pub games: Vec<SteamOwnedGame>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SteamImportResponse {
    pub message: String,
    pub imported: usize,
}

fn ok_reply<T: Serialize>(body: &T) -> JsonReply {
    warp::reply::with_status(warp::reply::json(body), StatusCode::OK)
}

fn error_reply(err: &LibraryError) -> JsonReply {
    let status = match err {
        LibraryError::GameNotFound { .. } | LibraryError::WishlistItemNotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        _ => StatusCode::BAD_REQUEST,
    };

    warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": err.to_string()
        })),
        status,
    )
}

fn mock_action<T: Serialize>(message: String, result: Option<T>) -> JsonReply {
    ok_reply(&MockActionResponse { message, result })
}

pub async fn handle_list_games(
    params: GamesQueryParams,
    catalog: Arc<Catalog>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let query = match LibraryQuery::from_raw(
        params.search.as_deref(),
        params.platform.as_deref(),
        params.status.as_deref(),
        params.sort.as_deref(),
    ) {
        Ok(query) => query,
        Err(err) => {
            warn!("Rejected library query: {}", err);
            return Ok(error_reply(&err.into()));
        }
    };

    let games = filter_and_sort(&catalog.games, &query);
    Ok(ok_reply(&GameListResponse {
        total: games.len(),
        games,
        query,
    }))
}

pub async fn handle_game_detail(
    game_id: String,
    catalog: Arc<Catalog>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let Some(game) = catalog.find_game(&game_id) else {
        return Ok(error_reply(&LibraryError::GameNotFound { game_id }));
    };

    let sessions = sessions_for_game(&catalog.sessions, &game.id);
    Ok(ok_reply(&GameDetailResponse {
        game,
        total_session_minutes: total_session_minutes(sessions.iter().copied()),
        sessions,
    }))
}

pub async fn handle_create_game(
    draft: GameDraft,
    catalog: Arc<Catalog>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match validation::game_from_draft(draft, &catalog.user.id) {
        Ok(game) => {
            info!("Registered game {:?} (mock, not stored)", game.title);
            Ok(mock_action(
                format!("ゲーム「{}」を登録しました（モック）", game.title),
                Some(game),
            ))
        }
        Err(err) => Ok(error_reply(&err)),
    }
}

pub async fn handle_update_game(
    game_id: String,
    update: GameUpdate,
    catalog: Arc<Catalog>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let Some(game) = catalog.find_game(&game_id) else {
        return Ok(error_reply(&LibraryError::GameNotFound { game_id }));
    };

    match validation::apply_update(game, update) {
        Ok(updated) => {
            info!("Saved changes to game {} (mock, not stored)", updated.id);
            Ok(mock_action(
                "変更を保存しました（モック）".to_string(),
                Some(updated),
            ))
        }
        Err(err) => Ok(error_reply(&err)),
    }
}

pub async fn handle_dashboard(
    catalog: Arc<Catalog>,
    config: Arc<Config>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let stats = compute_dashboard_stats(&catalog.games, config.monthly_target)
        .with_monthly_completed(catalog.completed_this_month());

    Ok(ok_reply(&DashboardResponse {
        remaining_to_target: stats.remaining_to_target(),
        stats,
        total_games: catalog.games.len(),
        priority_games: priority_queue(&catalog.games, DEFAULT_LIST_LIMIT),
        recent_activity: recent_activity(&catalog.games, DEFAULT_LIST_LIMIT),
    }))
}

pub async fn handle_random_pick(
    catalog: Arc<Catalog>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let game = {
        let mut rng = rand::thread_rng();
        pick_random_eligible(&catalog.games, &mut rng)
    };

    Ok(ok_reply(&RandomPickResponse { game }))
}

pub async fn handle_stats(catalog: Arc<Catalog>) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(ok_reply(&StatsResponse {
        stats: compute_library_stats(&catalog.games),
        monthly: &catalog.monthly_history,
        top_playtime: top_by_playtime(&catalog.games, DEFAULT_LIST_LIMIT),
    }))
}

pub async fn handle_wishlist(
    catalog: Arc<Catalog>,
    config: Arc<Config>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(ok_reply(&WishlistResponse {
        items: &catalog.wishlist,
        warning: backlog_warning(&catalog.games, config.backlog_warning_threshold),
    }))
}

pub async fn handle_add_wishlist(
    draft: WishlistDraft,
    catalog: Arc<Catalog>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match validation::wishlist_item_from_draft(draft, &catalog.user.id) {
        Ok(item) => Ok(mock_action(
            "Wishlistアイテムを追加しました（モック）".to_string(),
            Some(item),
        )),
        Err(err) => Ok(error_reply(&err)),
    }
}

pub async fn handle_delete_wishlist(
    item_id: String,
    catalog: Arc<Catalog>,
) -> Result<impl warp::Reply, warp::Rejection> {
    if catalog.find_wishlist_item(&item_id).is_none() {
        return Ok(error_reply(&LibraryError::WishlistItemNotFound { item_id }));
    }

    info!("Deleted wishlist item {} (mock, not stored)", item_id);
    Ok(mock_action::<()>(
        format!("Wishlistアイテムを削除しました（モック）: {}", item_id),
        None,
    ))
}

pub async fn handle_get_profile(
    catalog: Arc<Catalog>,
    config: Arc<Config>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(ok_reply(&ProfileResponse {
        user: &catalog.user,
        monthly_goal: catalog.monthly_goal(config.monthly_target),
    }))
}

pub async fn handle_update_profile(
    update: ProfileUpdate,
) -> Result<impl warp::Reply, warp::Rejection> {
    match validation::validate_profile(&update) {
        Ok(()) => Ok(mock_action(
            "プロフィールを保存しました（モック）".to_string(),
            Some(update),
        )),
        Err(err) => Ok(error_reply(&err)),
    }
}

pub async fn handle_fetch_steam_library(
    request: SteamLibraryRequest,
    importer: Arc<SteamImporter>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match importer.fetch_library(&request.steam_id).await {
        Ok(games) => Ok(ok_reply(&SteamLibraryResponse {
            message: format!("{}件のゲームを取得しました", games.len()),
            games,
        })),
        Err(err) => Ok(error_reply(&err)),
    }
}

pub async fn handle_import_steam(
    request: SteamImportRequest,
    importer: Arc<SteamImporter>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let imported = importer.import_selected(&request.appids);
    Ok(ok_reply(&SteamImportResponse {
        message: format!("{}件のゲームをインポートしました（モック）", imported),
        imported,
    }))
}
