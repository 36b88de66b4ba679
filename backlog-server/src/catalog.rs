use backlog_core::completions_in_month;
use backlog_types::{
    Game, GameStatus, MonthlyGoal, MonthlyStat, Platform, PlaySession, SteamOwnedGame, User,
    WishlistItem,
};
use chrono::{DateTime, Datelike, Months, NaiveDate, TimeZone, Utc};

/// Number of months of history shown on the statistics page.
const HISTORY_MONTHS: u32 = 6;

const MOCK_USER_ID: &str = "user-1";

/// Immutable in-memory snapshot of everything the pages display.
///
/// Every handler reads from one shared instance; nothing ever writes to it.
/// `as_of` is the date the snapshot describes; "this month" on the
/// dashboard and profile pages means the month of `as_of`.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub as_of: NaiveDate,
    pub user: User,
    pub games: Vec<Game>,
    pub sessions: Vec<PlaySession>,
    pub wishlist: Vec<WishlistItem>,
    pub monthly_history: Vec<MonthlyStat>,
    pub steam_library: Vec<SteamOwnedGame>,
}

impl Catalog {
    pub fn new(
        as_of: NaiveDate,
        user: User,
        games: Vec<Game>,
        sessions: Vec<PlaySession>,
        wishlist: Vec<WishlistItem>,
        monthly_history: Vec<MonthlyStat>,
        steam_library: Vec<SteamOwnedGame>,
    ) -> Self {
        Self {
            as_of,
            user,
            games,
            sessions,
            wishlist,
            monthly_history,
            steam_library,
        }
    }

    /// The demo data set. Monthly history covers the six months ending with
    /// the month of `today`.
    pub fn mock(today: NaiveDate) -> Self {
        Self::new(
            today,
            mock_user(),
            mock_games(),
            mock_sessions(),
            mock_wishlist(),
            mock_monthly_history(today),
            mock_steam_library(),
        )
    }

    pub fn find_game(&self, game_id: &str) -> Option<&Game> {
        self.games.iter().find(|game| game.id == game_id)
    }

    pub fn find_wishlist_item(&self, item_id: &str) -> Option<&WishlistItem> {
        self.wishlist.iter().find(|item| item.id == item_id)
    }

    /// Completions recorded for the snapshot month.
    pub fn completed_this_month(&self) -> u32 {
        completions_in_month(&self.monthly_history, self.as_of)
    }

    pub fn monthly_goal(&self, target_completions: u32) -> MonthlyGoal {
        MonthlyGoal {
            id: format!("goal-{}", self.as_of.format("%Y-%m")),
            user_id: self.user.id.clone(),
            year: self.as_of.year(),
            month: self.as_of.month(),
            target_completions,
            created_at: self.user.created_at,
        }
    }
}

fn timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

fn mock_user() -> User {
    User {
        id: MOCK_USER_ID.to_string(),
        email: "player@example.com".to_string(),
        display_name: "ゲーマー太郎".to_string(),
        avatar_url: None,
        steam_id: Some("76561198012345678".to_string()),
        created_at: timestamp(2023, 1, 10),
        updated_at: timestamp(2024, 3, 2),
    }
}

struct GameSeed {
    id: &'static str,
    title: &'static str,
    platform: Platform,
    status: GameStatus,
    priority: u8,
    price: Option<u32>,
    purchased: Option<(i32, u32, u32)>,
    playtime: Option<f64>,
    steam_app_id: Option<u32>,
    notes: Option<&'static str>,
}

impl GameSeed {
    fn into_game(self) -> Game {
        let created = match self.purchased {
            Some((year, month, day)) => timestamp(year, month, day),
            None => timestamp(2024, 1, 1),
        };

        Game {
            id: self.id.to_string(),
            user_id: MOCK_USER_ID.to_string(),
            title: self.title.to_string(),
            platform: self.platform,
            status: self.status,
            igdb_id: None,
            steam_app_id: self.steam_app_id,
            cover_image_url: None,
            purchase_price: self.price,
            purchase_date: self
                .purchased
                .and_then(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day)),
            priority: self.priority,
            playtime_hours: self.playtime,
            notes: self.notes.map(str::to_string),
            created_at: created,
            updated_at: created,
        }
    }
}

fn mock_games() -> Vec<Game> {
    let seeds = vec![
        GameSeed {
            id: "1",
            title: "ゼルダの伝説 ティアーズ オブ ザ キングダム",
            platform: Platform::Switch,
            status: GameStatus::Playing,
            priority: 5,
            price: Some(7920),
            purchased: Some((2023, 5, 12)),
            playtime: Some(45.0),
            steam_app_id: None,
            notes: Some("祠を全部回りたい"),
        },
        GameSeed {
            id: "2",
            title: "ペルソナ5 ザ・ロイヤル",
            platform: Platform::Ps5,
            status: GameStatus::Backlog,
            priority: 4,
            price: Some(4800),
            purchased: Some((2022, 10, 21)),
            playtime: Some(2.0),
            steam_app_id: None,
            notes: None,
        },
        GameSeed {
            id: "3",
            title: "ELDEN RING",
            platform: Platform::Steam,
            status: GameStatus::Completed,
            priority: 3,
            price: Some(7920),
            purchased: Some((2022, 2, 25)),
            playtime: Some(132.5),
            steam_app_id: Some(1245620),
            notes: Some("DLCも購入済み"),
        },
        GameSeed {
            id: "4",
            title: "Hades",
            platform: Platform::Steam,
            status: GameStatus::Unplayed,
            priority: 3,
            price: Some(2570),
            purchased: Some((2023, 11, 24)),
            playtime: None,
            steam_app_id: Some(1145360),
            notes: None,
        },
        GameSeed {
            id: "5",
            title: "Starfield",
            platform: Platform::Xbox,
            status: GameStatus::Unplayed,
            priority: 2,
            price: Some(9878),
            purchased: Some((2023, 9, 6)),
            playtime: None,
            steam_app_id: None,
            notes: None,
        },
        GameSeed {
            id: "6",
            title: "ドラゴンクエストXI 過ぎ去りし時を求めて S",
            platform: Platform::Switch,
            status: GameStatus::Backlog,
            priority: 4,
            price: Some(4378),
            purchased: Some((2021, 12, 3)),
            playtime: Some(6.5),
            steam_app_id: None,
            notes: Some("ボイス付きで最初から"),
        },
        GameSeed {
            id: "7",
            title: "ファイナルファンタジーXVI",
            platform: Platform::Ps5,
            status: GameStatus::Completed,
            priority: 4,
            price: Some(9900),
            purchased: Some((2023, 6, 22)),
            playtime: Some(58.0),
            steam_app_id: None,
            notes: None,
        },
        GameSeed {
            id: "8",
            title: "Baldur's Gate 3",
            platform: Platform::Pc,
            status: GameStatus::Playing,
            priority: 5,
            price: Some(7000),
            purchased: Some((2023, 8, 3)),
            playtime: Some(88.0),
            steam_app_id: Some(1086940),
            notes: None,
        },
        GameSeed {
            id: "9",
            title: "スーパーマリオブラザーズ ワンダー",
            platform: Platform::Switch,
            status: GameStatus::Unplayed,
            priority: 3,
            price: Some(6578),
            purchased: Some((2023, 10, 20)),
            playtime: None,
            steam_app_id: None,
            notes: None,
        },
        GameSeed {
            id: "10",
            title: "Outer Wilds",
            platform: Platform::Steam,
            status: GameStatus::Backlog,
            priority: 2,
            price: None,
            purchased: None,
            playtime: None,
            steam_app_id: Some(753640),
            notes: Some("セールで購入、価格不明"),
        },
        GameSeed {
            id: "11",
            title: "テトリス エフェクト・コネクテッド",
            platform: Platform::Other,
            status: GameStatus::Completed,
            priority: 1,
            price: Some(3990),
            purchased: Some((2021, 7, 16)),
            playtime: Some(21.0),
            steam_app_id: None,
            notes: None,
        },
    ];

    seeds.into_iter().map(GameSeed::into_game).collect()
}

fn mock_sessions() -> Vec<PlaySession> {
    let entries: [(&str, &str, (i32, u32, u32), u32, Option<&str>); 7] = [
        ("s1", "1", (2024, 3, 1), 120, Some("始まりの空島クリア")),
        ("s2", "1", (2024, 3, 5), 90, None),
        ("s3", "1", (2024, 3, 12), 150, Some("ゾナウギア楽しい")),
        ("s4", "8", (2024, 3, 3), 180, None),
        ("s5", "8", (2024, 3, 10), 240, Some("第2幕突入")),
        ("s6", "3", (2024, 2, 20), 200, Some("ラスボス撃破")),
        ("s7", "2", (2024, 1, 8), 120, None),
    ];

    entries
        .into_iter()
        .map(|(id, game_id, (year, month, day), minutes, memo)| PlaySession {
            id: id.to_string(),
            game_id: game_id.to_string(),
            user_id: MOCK_USER_ID.to_string(),
            played_at: timestamp(year, month, day),
            duration_minutes: minutes,
            memo: memo.map(str::to_string),
            created_at: timestamp(year, month, day),
        })
        .collect()
}

fn mock_wishlist() -> Vec<WishlistItem> {
    vec![
        WishlistItem {
            id: "w1".to_string(),
            user_id: MOCK_USER_ID.to_string(),
            title: "メタファー：リファンタジオ".to_string(),
            platform: Platform::Ps5,
            igdb_id: None,
            expected_price: Some(9680),
            release_date: NaiveDate::from_ymd_opt(2024, 10, 11),
            notes: Some("アトラス新作".to_string()),
            created_at: timestamp(2024, 2, 1),
        },
        WishlistItem {
            id: "w2".to_string(),
            user_id: MOCK_USER_ID.to_string(),
            title: "Hollow Knight: Silksong".to_string(),
            platform: Platform::Steam,
            igdb_id: None,
            expected_price: None,
            release_date: None,
            notes: Some("発売日未定".to_string()),
            created_at: timestamp(2024, 2, 14),
        },
        WishlistItem {
            id: "w3".to_string(),
            user_id: MOCK_USER_ID.to_string(),
            title: "ドラゴンクエストIII そして伝説へ…".to_string(),
            platform: Platform::Switch,
            igdb_id: None,
            expected_price: Some(7678),
            release_date: NaiveDate::from_ymd_opt(2024, 11, 14),
            notes: None,
            created_at: timestamp(2024, 3, 1),
        },
    ]
}

fn mock_monthly_history(today: NaiveDate) -> Vec<MonthlyStat> {
    // Oldest first; the last entry is the current month
    let samples: [(u32, f64); HISTORY_MONTHS as usize] = [
        (2, 38.0),
        (1, 24.5),
        (3, 52.0),
        (0, 12.0),
        (2, 41.5),
        (1, 18.0),
    ];
    let first_of_month = today.with_day(1).unwrap_or(today);

    samples
        .iter()
        .enumerate()
        .filter_map(|(index, (completions, playtime_hours))| {
            let months_back = HISTORY_MONTHS - 1 - index as u32;
            let month = first_of_month.checked_sub_months(Months::new(months_back))?;
            Some(MonthlyStat {
                month: month.format("%Y-%m").to_string(),
                completions: *completions,
                playtime_hours: *playtime_hours,
            })
        })
        .collect()
}

fn mock_steam_library() -> Vec<SteamOwnedGame> {
    [
        (1145360, "Hades", 0),
        (753640, "Outer Wilds", 45),
        (1245620, "ELDEN RING", 7950),
        (413150, "Stardew Valley", 1830),
        (367520, "Hollow Knight", 615),
    ]
    .into_iter()
    .map(|(appid, name, playtime_forever)| SteamOwnedGame {
        appid,
        name: name.to_string(),
        playtime_forever,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_mock_ids_are_unique() {
        let catalog = Catalog::mock(today());
        let ids: HashSet<&str> = catalog.games.iter().map(|game| game.id.as_str()).collect();

        assert_eq!(ids.len(), catalog.games.len());
        assert!(catalog.games.iter().all(|game| (1..=5).contains(&game.priority)));
    }

    #[test]
    fn test_sessions_reference_existing_games() {
        let catalog = Catalog::mock(today());

        for session in &catalog.sessions {
            assert!(
                catalog.find_game(&session.game_id).is_some(),
                "session {} points at unknown game {}",
                session.id,
                session.game_id
            );
        }
    }

    #[test]
    fn test_monthly_history_ends_with_current_month() {
        let catalog = Catalog::mock(today());
        let months: Vec<&str> = catalog
            .monthly_history
            .iter()
            .map(|stat| stat.month.as_str())
            .collect();

        assert_eq!(
            months,
            vec!["2023-10", "2023-11", "2023-12", "2024-01", "2024-02", "2024-03"]
        );
    }

    #[test]
    fn test_monthly_goal_for_current_month() {
        let catalog = Catalog::mock(today());
        let goal = catalog.monthly_goal(4);

        assert_eq!(goal.id, "goal-2024-03");
        assert_eq!(goal.year, 2024);
        assert_eq!(goal.month, 3);
        assert_eq!(goal.target_completions, 4);
        assert_eq!(goal.user_id, "user-1");
    }

    #[test]
    fn test_completed_this_month_follows_snapshot_date() {
        assert_eq!(Catalog::mock(today()).completed_this_month(), 1);

        // Same history, read for a month it does not cover
        let mut catalog = Catalog::mock(today());
        catalog.as_of = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert_eq!(catalog.completed_this_month(), 0);
    }

    #[test]
    fn test_lookup_misses() {
        let catalog = Catalog::mock(today());

        assert!(catalog.find_game("999").is_none());
        assert!(catalog.find_wishlist_item("w999").is_none());
        assert!(catalog.find_wishlist_item("w1").is_some());
    }
}
