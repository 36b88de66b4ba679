use backlog_types::{BacklogWarning, Game};

/// Warn before buying more when at least `threshold` owned games are
/// still unplayed or parked on the backlog.
pub fn backlog_warning(games: &[Game], threshold: usize) -> Option<BacklogWarning> {
    let backlog_count = games
        .iter()
        .filter(|game| game.status.is_unstarted())
        .count();

    (backlog_count >= threshold).then_some(BacklogWarning {
        backlog_count,
        threshold,
    })
}
