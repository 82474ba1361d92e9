// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, TransitionResult, apply};
use league_domain::{LeagueYearData, Match, MatchId, Player, PlayerId, Season};
use time::OffsetDateTime;
use time::macros::datetime;

pub const TEST_NOW: OffsetDateTime = datetime!(2024-05-01 12:00 UTC);

pub fn create_test_player(id: &str, name: &str, rank: u32) -> Player {
    Player::new(PlayerId::new(id), name, rank)
}

/// A league year with players ranked 1, 2 and 3 and one spring match.
pub fn create_test_state() -> LeagueYearData {
    let mut state: LeagueYearData = LeagueYearData::new(2024);
    state.players = vec![
        create_test_player("p1", "Alex Johnson", 1),
        create_test_player("p2", "Ben Carter", 2),
        create_test_player("p3", "Chris Davis", 3),
    ];
    state.matches[Season::Spring].push(Match::new(
        MatchId::new("m1"),
        "Eagles TC",
        "Home",
        TEST_NOW,
    ));
    state
}

pub fn apply_ok(state: &LeagueYearData, command: Command) -> TransitionResult {
    apply(state, command).unwrap()
}

pub fn roster_ids(state: &LeagueYearData) -> Vec<&str> {
    state.players.iter().map(|p| p.id.as_str()).collect()
}
