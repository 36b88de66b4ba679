use backlog_types::{DashboardStats, Game, GameStatus, Platform, PlatformCount};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Derive the dashboard summary from the game collection.
///
/// `monthly_completed_count` starts at zero; completion dates are not part
/// of `Game`, so callers attach the tracked value with
/// [`DashboardStats::with_monthly_completed`].
pub fn compute_dashboard_stats(games: &[Game], monthly_target_count: u32) -> DashboardStats {
    let unplayed_count = games
        .iter()
        .filter(|game| game.status == GameStatus::Unplayed)
        .count();

    let backlog_total_cost: u64 = games
        .iter()
        .filter(|game| game.status.is_unstarted())
        .map(|game| u64::from(game.price_or_zero()))
        .sum();

    DashboardStats {
        unplayed_count,
        backlog_total_cost,
        monthly_completed_count: 0,
        monthly_target_count,
        platform_breakdown: platform_breakdown(games),
    }
}

/// Per-platform counts in canonical platform order, zero counts included.
pub fn platform_breakdown(games: &[Game]) -> Vec<PlatformCount> {
    Platform::ALL
        .into_iter()
        .map(|platform| PlatformCount {
            platform,
            count: games
                .iter()
                .filter(|game| game.platform == platform)
                .count(),
        })
        .collect()
}

/// Pick one unplayed or backlog game uniformly at random.
///
/// Returns `None` when nothing is eligible. Each call draws independently
/// from `rng`.
pub fn pick_random_eligible<'a, R>(games: &'a [Game], rng: &mut R) -> Option<&'a Game>
where
    R: Rng + ?Sized,
{
    let eligible: Vec<&Game> = games
        .iter()
        .filter(|game| game.status.is_unstarted())
        .collect();

    let picked = eligible.choose(rng).copied();
    debug!(
        "Random pick from {} eligible games: {:?}",
        eligible.len(),
        picked.map(|game| &game.id)
    );
    picked
}
