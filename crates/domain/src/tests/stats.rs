// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    LeagueYearData, Match, MatchId, MatchResults, Season, SeasonRecord, recent_results,
    sample_league, season_record, season_split, upcoming_matches,
};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

const NOW: OffsetDateTime = datetime!(2024-05-01 12:00 UTC);

fn played_match(id: &str, days_ago: i64, ours: u32, theirs: u32) -> Match {
    let mut fixture: Match = Match::new(
        MatchId::new(id),
        "Opponent",
        "Home",
        NOW - Duration::days(days_ago),
    );
    fixture.results = Some(MatchResults::with_score(ours, theirs));
    fixture
}

#[test]
fn test_win_rate_of_empty_record_is_zero() {
    let record: SeasonRecord = SeasonRecord::default();
    assert_eq!(record.played(), 0);
    assert_eq!(record.win_rate_percent(), 0);
}

#[test]
fn test_win_rate_rounds_to_nearest_percent() {
    let record: SeasonRecord = SeasonRecord { wins: 2, losses: 1 };
    assert_eq!(record.win_rate_percent(), 67);

    let record: SeasonRecord = SeasonRecord { wins: 1, losses: 2 };
    assert_eq!(record.win_rate_percent(), 33);

    let record: SeasonRecord = SeasonRecord { wins: 1, losses: 1 };
    assert_eq!(record.win_rate_percent(), 50);
}

#[test]
fn test_upcoming_matches_span_seasons_soonest_first() {
    let data: LeagueYearData = sample_league(NOW);

    let upcoming: Vec<&Match> = upcoming_matches(&data, NOW, 3);
    let ids: Vec<&str> = upcoming.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["m2s", "m1f"]);

    let limited: Vec<&Match> = upcoming_matches(&data, NOW, 1);
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].id.as_str(), "m2s");
}

#[test]
fn test_recent_results_skip_matches_without_results() {
    let mut data: LeagueYearData = sample_league(NOW);
    data.matches[Season::Fall].push(Match::new(
        MatchId::new("unscored"),
        "Opponent",
        "Away",
        NOW - Duration::days(3),
    ));
    data.matches[Season::Fall].push(played_match("recent", 1, 3, 6));

    let recent: Vec<&Match> = recent_results(&data, NOW);
    let ids: Vec<&str> = recent.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["recent", "m1s"]);
}

#[test]
fn test_season_record_counts_ties_as_losses() {
    let mut data: LeagueYearData = LeagueYearData::new(2024);
    data.matches.spring = vec![
        played_match("a", 10, 7, 2),
        played_match("b", 8, 4, 5),
        played_match("c", 6, 4, 4),
        played_match("d", 4, 6, 3),
    ];

    let record: SeasonRecord = season_record(&data, NOW);
    assert_eq!(record, SeasonRecord { wins: 2, losses: 2 });
    assert_eq!(record.win_rate_percent(), 50);
}

#[test]
fn test_season_split_orders_both_halves() {
    let matches: Vec<Match> = vec![
        played_match("old", 20, 1, 8),
        Match::new(MatchId::new("later"), "X", "Home", NOW + Duration::days(9)),
        played_match("newer", 2, 5, 4),
        Match::new(MatchId::new("soon"), "Y", "Away", NOW + Duration::days(1)),
    ];

    let (upcoming, past) = season_split(&matches, NOW);
    let upcoming_ids: Vec<&str> = upcoming.iter().map(|m| m.id.as_str()).collect();
    let past_ids: Vec<&str> = past.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(upcoming_ids, vec!["soon", "later"]);
    assert_eq!(past_ids, vec!["newer", "old"]);
}
