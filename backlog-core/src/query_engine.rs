use crate::{TitleCollator, with_title_collator};
use backlog_types::{Game, GameStatus, LibraryQuery, SortBy};
use std::cmp::Ordering;
use tracing::debug;

/// Run a library query: text, platform and status filters in that order,
/// followed by a stable sort on the requested key.
///
/// The input is never reordered; the result borrows from it and keeps the
/// collection order among games that compare equal.
pub fn filter_and_sort<'a>(games: &'a [Game], query: &LibraryQuery) -> Vec<&'a Game> {
    let needle = query.search_text.to_lowercase();
    let (platform, status) = (query.platform, query.status);

    let mut results: Vec<&Game> = games
        .iter()
        .filter(|game| matches_search(game, &needle))
        .filter(|game| platform.is_none_or(|wanted| game.platform == wanted))
        .filter(|game| status.is_none_or(|wanted| game.status == wanted))
        .collect();

    sort_games(&mut results, query.sort_by);

    debug!(
        "Library query search={:?} platform={:?} status={:?} sort={} matched {}/{}",
        query.search_text,
        query.platform,
        query.status,
        query.sort_by,
        results.len(),
        games.len()
    );

    results
}

/// Case-insensitive substring match on the title. `needle` must already be
/// lowercased; an empty needle matches everything.
fn matches_search(game: &Game, needle: &str) -> bool {
    needle.is_empty() || game.title.to_lowercase().contains(needle)
}

/// Stable in-place sort of a result set by one key. Title sorts use the
/// calling thread's shared collator.
pub fn sort_games(games: &mut [&Game], sort_by: SortBy) {
    with_title_collator(|collator| sort_games_with(collator, games, sort_by));
}

pub fn sort_games_with(collator: &TitleCollator, games: &mut [&Game], sort_by: SortBy) {
    match sort_by {
        SortBy::Title => {
            games.sort_by(|a, b| collator.compare(&a.title, &b.title));
        }
        SortBy::PurchaseDate => {
            // None orders before every date, so undated games end up last
            games.sort_by(|a, b| b.purchase_date.cmp(&a.purchase_date));
        }
        SortBy::PlaytimeHours => {
            games.sort_by(|a, b| compare_playtime_desc(a, b));
        }
        SortBy::Priority => {
            games.sort_by(|a, b| b.priority.cmp(&a.priority));
        }
    }
}

fn compare_playtime_desc(a: &Game, b: &Game) -> Ordering {
    b.playtime_or_zero().total_cmp(&a.playtime_or_zero())
}

/// Dashboard "play next" list: everything not yet finished, highest
/// priority first, capped at `limit`.
pub fn priority_queue(games: &[Game], limit: usize) -> Vec<&Game> {
    let mut pending: Vec<&Game> = games
        .iter()
        .filter(|game| game.status != GameStatus::Completed)
        .collect();

    sort_games(&mut pending, SortBy::Priority);
    pending.truncate(limit);
    pending
}

/// Games with recent activity (in progress or just cleared), in collection order.
pub fn recent_activity(games: &[Game], limit: usize) -> Vec<&Game> {
    games
        .iter()
        .filter(|game| matches!(game.status, GameStatus::Playing | GameStatus::Completed))
        .take(limit)
        .collect()
}
