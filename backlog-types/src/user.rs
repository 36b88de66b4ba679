use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub steam_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Entry of a Steam owned-games listing. Field names follow the Steam Web API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SteamOwnedGame {
    pub appid: u32,
    pub name: String,
    pub playtime_forever: u32, // Minutes
}

impl SteamOwnedGame {
    /// Playtime split into whole hours and leftover minutes.
    pub fn playtime_hours_minutes(&self) -> (u32, u32) {
        (self.playtime_forever / 60, self.playtime_forever % 60)
    }
}
