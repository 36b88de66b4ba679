use crate::{GameStatus, Platform, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlatformCount {
    pub platform: Platform,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusCount {
    pub status: GameStatus,
    pub count: usize,
}

/// Dashboard summary, recomputed from the game collection on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DashboardStats {
    pub unplayed_count: usize,
    #[ts(type = "number")]
    pub backlog_total_cost: u64,
    pub monthly_completed_count: u32,
    pub monthly_target_count: u32,
    pub platform_breakdown: Vec<PlatformCount>,
}

impl DashboardStats {
    /// Completion tracking lives outside the game collection, so the
    /// monthly count is attached by the caller.
    pub fn with_monthly_completed(mut self, count: u32) -> Self {
        self.monthly_completed_count = count;
        self
    }

    pub fn remaining_to_target(&self) -> u32 {
        self.monthly_target_count
            .saturating_sub(self.monthly_completed_count)
    }
}

/// Statistics page summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LibraryStats {
    pub total_games: usize,
    pub completed_count: usize,
    pub total_playtime_hours: f64,
    pub completion_rate: u32, // Whole percent
    pub status_breakdown: Vec<StatusCount>,
    pub platform_breakdown: Vec<PlatformCount>,
}

/// One month of externally tracked history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MonthlyStat {
    pub month: String, // YYYY-MM
    pub completions: u32,
    pub playtime_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MonthlyGoal {
    pub id: String,
    pub user_id: UserId,
    pub year: i32,
    pub month: u32,
    pub target_completions: u32,
    pub created_at: DateTime<Utc>,
}
