use crate::{Platform, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A game the user intends to buy. Not linked to a `Game` until purchased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WishlistItem {
    pub id: String,
    pub user_id: UserId,
    pub title: String,
    pub platform: Platform,
    #[serde(default)]
    pub igdb_id: Option<u32>,
    #[serde(default)]
    pub expected_price: Option<u32>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Shown above the wishlist when too many games are still waiting to be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BacklogWarning {
    pub backlog_count: usize,
    pub threshold: usize,
}
