use crate::{platform_breakdown, sort_games};
use backlog_types::{Game, GameStatus, LibraryStats, MonthlyStat, SortBy, StatusCount};
use chrono::NaiveDate;

pub fn compute_library_stats(games: &[Game]) -> LibraryStats {
    let total_games = games.len();
    let completed_count = games
        .iter()
        .filter(|game| game.status == GameStatus::Completed)
        .count();
    let total_playtime_hours: f64 = games.iter().map(Game::playtime_or_zero).sum();

    LibraryStats {
        total_games,
        completed_count,
        total_playtime_hours,
        completion_rate: completion_rate(completed_count, total_games),
        status_breakdown: status_breakdown(games),
        platform_breakdown: platform_breakdown(games),
    }
}

/// Whole-number percentage, rounded half up. An empty library is 0%.
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

/// Per-status counts in canonical status order, zero counts included.
pub fn status_breakdown(games: &[Game]) -> Vec<StatusCount> {
    GameStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: games.iter().filter(|game| game.status == status).count(),
        })
        .collect()
}

/// Most-played games, longest first.
pub fn top_by_playtime(games: &[Game], limit: usize) -> Vec<&Game> {
    let mut ranked: Vec<&Game> = games.iter().collect();
    sort_games(&mut ranked, SortBy::PlaytimeHours);
    ranked.truncate(limit);
    ranked
}

/// Completions recorded for the month containing `today`, or 0 when the
/// history has no entry for it.
pub fn completions_in_month(history: &[MonthlyStat], today: NaiveDate) -> u32 {
    let month_key = today.format("%Y-%m").to_string();
    history
        .iter()
        .find(|stat| stat.month == month_key)
        .map(|stat| stat.completions)
        .unwrap_or(0)
}
