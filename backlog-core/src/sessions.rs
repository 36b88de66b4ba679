use backlog_types::PlaySession;

/// Play history of one game, most recent session first.
pub fn sessions_for_game<'a>(
    sessions: &'a [PlaySession],
    game_id: &str,
) -> Vec<&'a PlaySession> {
    let mut history: Vec<&PlaySession> = sessions
        .iter()
        .filter(|session| session.game_id == game_id)
        .collect();

    history.sort_by(|a, b| b.played_at.cmp(&a.played_at));
    history
}

pub fn total_session_minutes<'a>(sessions: impl IntoIterator<Item = &'a PlaySession>) -> u64 {
    sessions
        .into_iter()
        .map(|session| u64::from(session.duration_minutes))
        .sum()
}
