#![allow(dead_code)]

use backlog_types::{Game, GameStatus, Platform, PlaySession};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap()
}

/// Creates a test game with neutral defaults
pub fn create_test_game(id: &str, title: &str) -> Game {
    Game {
        id: id.to_string(),
        user_id: "test-user".to_string(),
        title: title.to_string(),
        platform: Platform::Steam,
        status: GameStatus::Unplayed,
        igdb_id: None,
        steam_app_id: None,
        cover_image_url: None,
        purchase_price: None,
        purchase_date: None,
        priority: 3,
        playtime_hours: None,
        notes: None,
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
    }
}

/// Creates a test game with the given priority
pub fn create_game_with_priority(id: &str, priority: u8) -> Game {
    let mut game = create_test_game(id, &format!("Game {}", id));
    game.priority = priority;
    game
}

/// Creates a test game with status and price, for cost aggregation
pub fn create_priced_game(id: &str, status: GameStatus, price: u32) -> Game {
    let mut game = create_test_game(id, &format!("Game {}", id));
    game.status = status;
    game.purchase_price = Some(price);
    game
}

/// A small library covering every platform and status
pub fn create_sample_library() -> Vec<Game> {
    let mut zelda = create_test_game("1", "ゼルダの伝説 ティアーズ オブ ザ キングダム");
    zelda.platform = Platform::Switch;
    zelda.status = GameStatus::Playing;
    zelda.priority = 5;
    zelda.purchase_price = Some(7920);
    zelda.purchase_date = NaiveDate::from_ymd_opt(2023, 5, 12);
    zelda.playtime_hours = Some(45.0);

    let mut persona = create_test_game("2", "ペルソナ5 ザ・ロイヤル");
    persona.platform = Platform::Ps5;
    persona.status = GameStatus::Backlog;
    persona.priority = 4;
    persona.purchase_price = Some(4800);
    persona.purchase_date = NaiveDate::from_ymd_opt(2022, 10, 21);

    let mut elden = create_test_game("3", "ELDEN RING");
    elden.platform = Platform::Steam;
    elden.status = GameStatus::Completed;
    elden.priority = 3;
    elden.purchase_price = Some(7920);
    elden.purchase_date = NaiveDate::from_ymd_opt(2022, 2, 25);
    elden.playtime_hours = Some(132.5);

    let mut hades = create_test_game("4", "Hades");
    hades.platform = Platform::Steam;
    hades.status = GameStatus::Unplayed;
    hades.priority = 2;
    hades.purchase_price = Some(2570);

    let mut starfield = create_test_game("5", "Starfield");
    starfield.platform = Platform::Xbox;
    starfield.status = GameStatus::Unplayed;
    starfield.priority = 4;
    starfield.purchase_price = Some(9878);
    starfield.purchase_date = NaiveDate::from_ymd_opt(2023, 9, 6);

    let mut dq = create_test_game("6", "ドラゴンクエストXI");
    dq.platform = Platform::Pc;
    dq.status = GameStatus::Backlog;
    dq.priority = 3;
    dq.playtime_hours = Some(3.0);

    let mut tetris = create_test_game("7", "TETRIS 99");
    tetris.platform = Platform::Other;
    tetris.status = GameStatus::Completed;
    tetris.priority = 1;
    tetris.playtime_hours = Some(20.0);

    vec![zelda, persona, elden, hades, starfield, dq, tetris]
}

/// Creates a play session for a game at the given day of April 2024
pub fn create_session(id: &str, game_id: &str, day: u32, minutes: u32) -> PlaySession {
    PlaySession {
        id: id.to_string(),
        game_id: game_id.to_string(),
        user_id: "test-user".to_string(),
        played_at: Utc.with_ymd_and_hms(2024, 4, day, 20, 0, 0).unwrap(),
        duration_minutes: minutes,
        memo: None,
        created_at: fixed_timestamp(),
    }
}

/// Collects the ids of a result set, in order
pub fn ids(games: &[&Game]) -> Vec<String> {
    games.iter().map(|game| game.id.clone()).collect()
}
