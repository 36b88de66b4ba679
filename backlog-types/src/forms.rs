use crate::{GameStatus, Platform};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// Raw form submissions. Numeric fields are signed so out-of-range input
// reaches validation instead of failing deserialization.

/// "Register game" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GameDraft {
    pub title: String,
    pub platform: Platform,
    pub status: GameStatus,
    #[serde(default)]
    pub purchase_price: Option<i64>,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    pub priority: i32,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Edits available on the game detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GameUpdate {
    pub status: GameStatus,
    pub priority: i32,
    #[serde(default)]
    pub playtime_hours: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WishlistDraft {
    pub title: String,
    pub platform: Platform,
    #[serde(default)]
    pub expected_price: Option<i64>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProfileUpdate {
    pub display_name: String,
    #[serde(default)]
    pub steam_id: Option<String>,
    #[serde(default)]
    pub monthly_target: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SteamLibraryRequest {
    #[serde(default)]
    pub steam_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SteamImportRequest {
    pub appids: Vec<u32>,
}
