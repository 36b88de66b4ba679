use crate::{GameId, ParseError, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Platform {
    Steam,
    Switch,
    Ps5,
    Xbox,
    Pc,
    Other,
}

impl Platform {
    /// Canonical display order, used by every per-platform breakdown.
    pub const ALL: [Platform; 6] = [
        Platform::Steam,
        Platform::Switch,
        Platform::Ps5,
        Platform::Xbox,
        Platform::Pc,
        Platform::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Steam => "steam",
            Platform::Switch => "switch",
            Platform::Ps5 => "ps5",
            Platform::Xbox => "xbox",
            Platform::Pc => "pc",
            Platform::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Steam => "Steam",
            Platform::Switch => "Nintendo Switch",
            Platform::Ps5 => "PlayStation 5",
            Platform::Xbox => "Xbox",
            Platform::Pc => "PC",
            Platform::Other => "その他",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Platform::ALL
            .into_iter()
            .find(|platform| platform.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownPlatform(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum GameStatus {
    Unplayed,  // Bought, never started
    Playing,   // Currently in progress
    Completed, // Cleared
    Backlog,   // Parked on the pile (積みゲー)
}

impl GameStatus {
    pub const ALL: [GameStatus; 4] = [
        GameStatus::Unplayed,
        GameStatus::Playing,
        GameStatus::Completed,
        GameStatus::Backlog,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Unplayed => "unplayed",
            GameStatus::Playing => "playing",
            GameStatus::Completed => "completed",
            GameStatus::Backlog => "backlog",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameStatus::Unplayed => "未プレイ",
            GameStatus::Playing => "プレイ中",
            GameStatus::Completed => "クリア",
            GameStatus::Backlog => "積みゲー",
        }
    }

    /// Owned but not yet started: the pool the random picker draws from
    /// and the games whose price counts toward the backlog cost.
    pub fn is_unstarted(&self) -> bool {
        matches!(self, GameStatus::Unplayed | GameStatus::Backlog)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        GameStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Game {
    pub id: GameId,
    pub user_id: UserId,
    pub title: String,
    pub platform: Platform,
    pub status: GameStatus,
    #[serde(default)]
    pub igdb_id: Option<u32>,
    #[serde(default)]
    pub steam_app_id: Option<u32>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub purchase_price: Option<u32>, // Yen
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    pub priority: u8, // 1-5, 5 is highest
    #[serde(default)]
    pub playtime_hours: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    pub fn playtime_or_zero(&self) -> f64 {
        self.playtime_hours.unwrap_or(0.0)
    }

    pub fn price_or_zero(&self) -> u32 {
        self.purchase_price.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PlaySession {
    pub id: String,
    pub game_id: GameId,
    pub user_id: UserId,
    pub played_at: DateTime<Utc>,
    pub duration_minutes: u32,
    #[serde(default)]
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
}
