// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{TEST_NOW, apply_ok, create_test_state};
use crate::{Command, Outcome, TransitionResult};
use league_domain::{
    Availability, DoublesPair, LeagueYearData, Lineup, Match, MatchId, MatchResults, PlayerId,
    Season,
};
use time::Duration;

fn set_availability(season: Season, match_id: &str, player_id: &str, status: Availability) -> Command {
    Command::SetPlayerAvailability {
        season,
        match_id: MatchId::new(match_id),
        player_id: PlayerId::new(player_id),
        status,
    }
}

#[test]
fn test_add_match_appends_to_season() {
    let state: LeagueYearData = create_test_state();
    let date = TEST_NOW + Duration::days(3);
    let command: Command = Command::AddMatch {
        season: Season::Spring,
        id: MatchId::new("m2"),
        opponent: String::from("Eagles TC"),
        location: String::from("Home"),
        date,
    };

    let transition: TransitionResult = apply_ok(&state, command);
    let spring: &[Match] = transition.new_state.season_matches(Season::Spring);

    assert_eq!(transition.outcome, Outcome::Applied);
    assert_eq!(spring.len(), 2);
    let added: &Match = &spring[1];
    assert_eq!(added.id.as_str(), "m2");
    assert_eq!(added.opponent, "Eagles TC");
    assert_eq!(added.location, "Home");
    assert_eq!(added.date, date);
    assert!(added.availability.is_empty());
    assert!(added.lineup.is_none());
    assert!(added.results.is_none());
    assert!(added.mvp_vote.is_none());
    assert!(added.mvp.is_none());
    assert!(transition.new_state.matches.fall.is_empty());
}

#[test]
fn test_add_match_keeps_scheduling_order() {
    let state: LeagueYearData = create_test_state();
    let earlier = TEST_NOW - Duration::days(30);
    let transition: TransitionResult = apply_ok(
        &state,
        Command::AddMatch {
            season: Season::Spring,
            id: MatchId::new("m0"),
            opponent: String::from("Lions Tennis"),
            location: String::from("Away"),
            date: earlier,
        },
    );

    let ids: Vec<&str> = transition
        .new_state
        .matches
        .spring
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(ids, vec!["m1", "m0"]);
}

#[test]
fn test_update_match_replaces_record() {
    let state: LeagueYearData = create_test_state();
    let mut updated: Match = state.matches.spring[0].clone();
    updated.location = String::from("Away");
    updated.lineup = Some(Lineup::empty());

    let transition: TransitionResult = apply_ok(
        &state,
        Command::UpdateMatch {
            season: Season::Spring,
            updated: updated.clone(),
        },
    );

    assert_eq!(transition.outcome, Outcome::Applied);
    assert_eq!(transition.new_state.matches.spring[0], updated);
}

#[test]
fn test_update_match_in_other_season_is_unmatched() {
    let state: LeagueYearData = create_test_state();
    let updated: Match = state.matches.spring[0].clone();

    let transition: TransitionResult = apply_ok(
        &state,
        Command::UpdateMatch {
            season: Season::Fall,
            updated,
        },
    );

    assert_eq!(transition.outcome, Outcome::Unmatched);
    assert_eq!(transition.new_state, state);
}

#[test]
fn test_delete_then_update_match_is_unmatched() {
    let state: LeagueYearData = create_test_state();
    let original: Match = state.matches.spring[0].clone();

    let deleted: TransitionResult = apply_ok(
        &state,
        Command::DeleteMatch {
            season: Season::Spring,
            match_id: MatchId::new("m1"),
        },
    );
    assert_eq!(deleted.outcome, Outcome::Applied);
    assert!(deleted.new_state.matches.spring.is_empty());

    let updated: TransitionResult = apply_ok(
        &deleted.new_state,
        Command::UpdateMatch {
            season: Season::Spring,
            updated: original,
        },
    );
    assert_eq!(updated.outcome, Outcome::Unmatched);
    assert!(updated.new_state.matches.spring.is_empty());
}

#[test]
fn test_delete_missing_match_is_unmatched() {
    let state: LeagueYearData = create_test_state();
    let transition: TransitionResult = apply_ok(
        &state,
        Command::DeleteMatch {
            season: Season::Fall,
            match_id: MatchId::new("m1"),
        },
    );

    assert_eq!(transition.outcome, Outcome::Unmatched);
    assert_eq!(transition.new_state.matches.spring.len(), 1);
}

#[test]
fn test_set_availability_twice_keeps_one_entry() {
    let state: LeagueYearData = create_test_state();
    let first: TransitionResult = apply_ok(
        &state,
        set_availability(Season::Spring, "m1", "p1", Availability::Yes),
    );
    let second: TransitionResult = apply_ok(
        &first.new_state,
        set_availability(Season::Spring, "m1", "p1", Availability::IfNeeded),
    );

    let fixture: &Match = &second.new_state.matches.spring[0];
    assert_eq!(fixture.availability.len(), 1);
    assert_eq!(
        fixture.availability_of(&PlayerId::new("p1")),
        Some(Availability::IfNeeded)
    );
}

#[test]
fn test_set_availability_for_missing_match_is_unmatched() {
    let state: LeagueYearData = create_test_state();
    let transition: TransitionResult = apply_ok(
        &state,
        set_availability(Season::Spring, "nope", "p1", Availability::Yes),
    );

    assert_eq!(transition.outcome, Outcome::Unmatched);
    assert_eq!(transition.new_state, state);
    assert!(transition.action.details.contains("nope"));
}

#[test]
fn test_set_availability_accepts_unrostered_player() {
    let state: LeagueYearData = create_test_state();
    let transition: TransitionResult = apply_ok(
        &state,
        set_availability(Season::Spring, "m1", "stranger", Availability::No),
    );

    assert_eq!(transition.outcome, Outcome::Applied);
    assert_eq!(transition.new_state.matches.spring[0].availability.len(), 1);
}

#[test]
fn test_set_lineup_stores_lineup() {
    let state: LeagueYearData = create_test_state();
    let mut lineup: Lineup = Lineup::empty();
    lineup.singles[0] = Some(PlayerId::new("p1"));
    lineup.doubles[0] = DoublesPair::of(PlayerId::new("p2"), PlayerId::new("p3"));

    let transition: TransitionResult = apply_ok(
        &state,
        Command::SetLineup {
            season: Season::Spring,
            match_id: MatchId::new("m1"),
            lineup: lineup.clone(),
        },
    );

    assert_eq!(transition.outcome, Outcome::Applied);
    assert_eq!(transition.new_state.matches.spring[0].lineup, Some(lineup));
    assert!(transition.action.details.contains("3 players"));
}

#[test]
fn test_record_results_stores_results() {
    let state: LeagueYearData = create_test_state();
    let transition: TransitionResult = apply_ok(
        &state,
        Command::RecordResults {
            season: Season::Spring,
            match_id: MatchId::new("m1"),
            results: MatchResults::with_score(5, 4),
        },
    );

    let fixture: &Match = &transition.new_state.matches.spring[0];
    assert!(fixture.is_win());
    assert!(transition.action.details.contains("5 - 4"));
}

#[test]
fn test_mvp_votes_accumulate_then_finalize() {
    let mut state: LeagueYearData = create_test_state();
    for voter_choice in ["p2", "p3", "p2"] {
        state = apply_ok(
            &state,
            Command::CastMvpVote {
                season: Season::Spring,
                match_id: MatchId::new("m1"),
                player_id: PlayerId::new(voter_choice),
            },
        )
        .new_state;
    }

    let fixture: &Match = &state.matches.spring[0];
    assert_eq!(fixture.mvp_leader(), Some((&PlayerId::new("p2"), 2)));
    assert!(fixture.mvp.is_none());

    let transition: TransitionResult = apply_ok(
        &state,
        Command::FinalizeMvp {
            season: Season::Spring,
            match_id: MatchId::new("m1"),
            player_id: PlayerId::new("p2"),
        },
    );
    assert_eq!(
        transition.new_state.matches.spring[0].mvp,
        Some(PlayerId::new("p2"))
    );
}

#[test]
fn test_mvp_vote_for_missing_match_is_unmatched() {
    let state: LeagueYearData = create_test_state();
    let transition: TransitionResult = apply_ok(
        &state,
        Command::CastMvpVote {
            season: Season::Fall,
            match_id: MatchId::new("m1"),
            player_id: PlayerId::new("p2"),
        },
    );

    assert_eq!(transition.outcome, Outcome::Unmatched);
    assert!(transition.new_state.matches.spring[0].mvp_vote.is_none());
}
