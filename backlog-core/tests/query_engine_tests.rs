mod common;

use backlog_core::{
    DEFAULT_LIST_LIMIT, backlog_warning, compute_dashboard_stats, compute_library_stats,
    filter_and_sort, pick_random_eligible, priority_queue, sessions_for_game, top_by_playtime,
    total_session_minutes,
};
use backlog_types::{GameStatus, LibraryQuery, Platform, SortBy};
use common::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::{HashMap, HashSet};

#[test]
fn test_result_is_subset_without_duplicates() {
    let library = create_sample_library();
    let known: HashSet<&str> = library.iter().map(|game| game.id.as_str()).collect();

    for sort_by in [
        SortBy::Title,
        SortBy::PurchaseDate,
        SortBy::PlaytimeHours,
        SortBy::Priority,
    ] {
        let query = LibraryQuery::new(sort_by).with_search("e");
        let result = filter_and_sort(&library, &query);
        let unique: HashSet<&str> = result.iter().map(|game| game.id.as_str()).collect();

        assert_eq!(unique.len(), result.len(), "duplicate ids for {}", sort_by);
        assert!(unique.is_subset(&known));
    }
}

#[test]
fn test_empty_query_sorted_by_title_returns_everything() {
    let library = vec![
        create_test_game("c", "Celeste"),
        create_test_game("a", "Astro Bot"),
        create_test_game("b1", "Bayonetta"),
        create_test_game("b2", "Bayonetta"),
    ];

    let result = filter_and_sort(&library, &LibraryQuery::new(SortBy::Title));

    assert_eq!(ids(&result), vec!["a", "b1", "b2", "c"]);
}

#[test]
fn test_title_sort_uses_japanese_collation() {
    let library = vec![
        create_test_game("sa", "さいごのひとり"),
        create_test_game("ka", "かぐや"),
        create_test_game("a", "あおいとり"),
    ];

    let result = filter_and_sort(&library, &LibraryQuery::new(SortBy::Title));

    assert_eq!(ids(&result), vec!["a", "ka", "sa"]);
}

#[test]
fn test_filtering_is_idempotent() {
    let library = create_sample_library();
    let query = LibraryQuery::new(SortBy::Priority).with_status(GameStatus::Backlog);

    let once: Vec<_> = filter_and_sort(&library, &query)
        .into_iter()
        .cloned()
        .collect();
    let twice = filter_and_sort(&once, &query);

    assert_eq!(ids(&twice), once.iter().map(|game| game.id.clone()).collect::<Vec<_>>());
}

#[test]
fn test_priority_sort_is_stable() {
    let library = vec![
        create_game_with_priority("A", 3),
        create_game_with_priority("B", 5),
        create_game_with_priority("C", 1),
        create_game_with_priority("D", 5),
    ];

    let result = filter_and_sort(&library, &LibraryQuery::new(SortBy::Priority));

    assert_eq!(ids(&result), vec!["B", "D", "A", "C"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let library = vec![
        create_test_game("1", "The Legend of Zelda"),
        create_test_game("2", "Metroid Dread"),
    ];
    let query = LibraryQuery::new(SortBy::Title).with_search("zelda");

    assert_eq!(ids(&filter_and_sort(&library, &query)), vec!["1"]);

    let query = LibraryQuery::new(SortBy::Title).with_search("ZELDA");
    assert_eq!(ids(&filter_and_sort(&library, &query)), vec!["1"]);
}

#[test]
fn test_filters_combine() {
    let library = create_sample_library();

    let query = LibraryQuery::new(SortBy::PurchaseDate)
        .with_platform(Platform::Steam)
        .with_status(GameStatus::Unplayed);
    assert_eq!(ids(&filter_and_sort(&library, &query)), vec!["4"]);

    let query = LibraryQuery::new(SortBy::PurchaseDate).with_platform(Platform::Steam);
    // ELDEN RING has a purchase date, Hades does not
    assert_eq!(ids(&filter_and_sort(&library, &query)), vec!["3", "4"]);

    let query = LibraryQuery::new(SortBy::Title)
        .with_search("ring")
        .with_status(GameStatus::Backlog);
    assert!(filter_and_sort(&library, &query).is_empty());
}

#[test]
fn test_empty_input_yields_empty_output() {
    let result = filter_and_sort(&[], &LibraryQuery::default());
    assert!(result.is_empty());
}

#[test]
fn test_input_order_untouched() {
    let library = create_sample_library();
    let before = ids(&library.iter().collect::<Vec<_>>());

    let _ = filter_and_sort(&library, &LibraryQuery::new(SortBy::Title));

    assert_eq!(ids(&library.iter().collect::<Vec<_>>()), before);
}

#[test]
fn test_platform_breakdown_sums_to_collection_size() {
    let library = create_sample_library();
    let stats = compute_dashboard_stats(&library, 3);

    let total: usize = stats.platform_breakdown.iter().map(|entry| entry.count).sum();
    assert_eq!(total, library.len());
    assert_eq!(stats.platform_breakdown.len(), Platform::ALL.len());
}

#[test]
fn test_backlog_total_cost_example() {
    let library = vec![
        create_priced_game("1", GameStatus::Backlog, 5000),
        create_priced_game("2", GameStatus::Unplayed, 3000),
        create_priced_game("3", GameStatus::Completed, 8000),
    ];

    assert_eq!(compute_dashboard_stats(&library, 3).backlog_total_cost, 8000);
}

#[test]
fn test_dashboard_on_sample_library() {
    let library = create_sample_library();
    let stats = compute_dashboard_stats(&library, 3).with_monthly_completed(1);

    assert_eq!(stats.unplayed_count, 2);
    // persona 4800 + hades 2570 + starfield 9878 + dq (no price)
    assert_eq!(stats.backlog_total_cost, 17248);
    assert_eq!(stats.remaining_to_target(), 2);
}

#[test]
fn test_random_pick_empty_collection() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(pick_random_eligible(&[], &mut rng).is_none());
}

#[test]
fn test_random_pick_only_eligible_games() {
    let library = create_sample_library();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..200 {
        let picked = pick_random_eligible(&library, &mut rng).unwrap();
        assert!(picked.status.is_unstarted());
    }
}

#[test]
fn test_random_pick_is_uniform() {
    let library = create_sample_library();
    let eligible = library.iter().filter(|game| game.status.is_unstarted()).count();
    let draws = 8000;
    let mut rng = StdRng::seed_from_u64(99);
    let mut counts: HashMap<String, usize> = HashMap::new();

    for _ in 0..draws {
        let picked = pick_random_eligible(&library, &mut rng).unwrap();
        *counts.entry(picked.id.clone()).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), eligible);
    let expected = draws / eligible;
    for (id, count) in counts {
        let deviation = count.abs_diff(expected);
        assert!(
            deviation < expected / 10,
            "game {} picked {} times, expected about {}",
            id,
            count,
            expected
        );
    }
}

#[test]
fn test_priority_queue_on_sample_library() {
    let library = create_sample_library();
    let queue = priority_queue(&library, DEFAULT_LIST_LIMIT);

    // Completed games are left out; equal priorities keep collection order
    assert_eq!(ids(&queue), vec!["1", "2", "5", "6", "4"]);
}

#[test]
fn test_library_stats_on_sample_library() {
    let library = create_sample_library();
    let stats = compute_library_stats(&library);

    assert_eq!(stats.total_games, 7);
    assert_eq!(stats.completed_count, 2);
    assert_eq!(stats.total_playtime_hours, 200.5);
    assert_eq!(stats.completion_rate, 29);

    let counts: Vec<usize> = stats.status_breakdown.iter().map(|entry| entry.count).collect();
    assert_eq!(counts, vec![2, 1, 2, 2]);

    let top = top_by_playtime(&library, 3);
    assert_eq!(ids(&top), vec!["3", "1", "7"]);
}

#[test]
fn test_backlog_warning_threshold() {
    let library = create_sample_library();

    // Four unplayed or backlog games
    let warning = backlog_warning(&library, 4).unwrap();
    assert_eq!(warning.backlog_count, 4);
    assert_eq!(warning.threshold, 4);

    assert!(backlog_warning(&library, 5).is_none());
}

#[test]
fn test_sessions_for_game_newest_first() {
    let sessions = vec![
        create_session("s1", "1", 3, 90),
        create_session("s2", "2", 4, 30),
        create_session("s3", "1", 10, 45),
        create_session("s4", "1", 7, 60),
    ];

    let history = sessions_for_game(&sessions, "1");
    let session_ids: Vec<&str> = history.iter().map(|session| session.id.as_str()).collect();

    assert_eq!(session_ids, vec!["s3", "s4", "s1"]);
    assert_eq!(total_session_minutes(history), 195);
    assert!(sessions_for_game(&sessions, "missing").is_empty());
}
