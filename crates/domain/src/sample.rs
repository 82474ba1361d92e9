// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::league_year::LeagueYearData;
use crate::matches::{DoublesPair, Lineup, Match, MatchResults};
use crate::types::{Availability, MatchId, Player, PlayerAvailability, PlayerId};
use time::{Duration, OffsetDateTime};

const SAMPLE_YEAR: u16 = 2024;

const SAMPLE_ROSTER: [(&str, &str); 8] = [
    ("p1", "Alex Johnson"),
    ("p2", "Ben Carter"),
    ("p3", "Chris Davis"),
    ("p4", "David Evans"),
    ("p5", "Ethan Foster"),
    ("p6", "Frank Green"),
    ("p7", "George Hill"),
    ("p8", "Henry Ian"),
];

fn pid(value: &str) -> PlayerId {
    PlayerId::new(value)
}

fn entry(player: &str, status: Availability) -> PlayerAvailability {
    PlayerAvailability::new(pid(player), status)
}

/// Builds the starting data set: an eight-player roster, a played and an
/// upcoming spring match, and one fall match.
///
/// Match dates are placed relative to `now` so the data always has both past
/// and upcoming matches.
#[must_use]
pub fn sample_league(now: OffsetDateTime) -> LeagueYearData {
    let mut data = LeagueYearData::new(SAMPLE_YEAR);

    data.players = (1u32..)
        .zip(SAMPLE_ROSTER)
        .map(|(rank, (id, name))| Player::new(pid(id), name, rank))
        .collect();

    let mut opener = Match::new(
        MatchId::new("m1s"),
        "Eagles TC",
        "Home",
        now - Duration::days(14),
    );
    opener.availability = vec![
        entry("p1", Availability::Yes),
        entry("p2", Availability::Yes),
        entry("p3", Availability::Yes),
        entry("p4", Availability::Yes),
        entry("p5", Availability::Yes),
        entry("p6", Availability::Yes),
        entry("p7", Availability::No),
        entry("p8", Availability::IfNeeded),
    ];
    opener.lineup = Some(Lineup {
        singles: [
            Some(pid("p1")),
            Some(pid("p2")),
            Some(pid("p3")),
            Some(pid("p4")),
            Some(pid("p5")),
            Some(pid("p6")),
        ],
        doubles: [
            DoublesPair::of(pid("p1"), pid("p2")),
            DoublesPair::of(pid("p3"), pid("p4")),
            DoublesPair::of(pid("p5"), pid("p6")),
        ],
    });
    opener.results = Some(MatchResults::with_score(7, 2));
    opener.mvp = Some(pid("p2"));

    let mut away = Match::new(
        MatchId::new("m2s"),
        "Lions Tennis",
        "Away",
        now + Duration::days(7),
    );
    away.availability = vec![
        entry("p1", Availability::Yes),
        entry("p2", Availability::Yes),
    ];

    data.matches.spring = vec![opener, away];
    data.matches.fall = vec![Match::new(
        MatchId::new("m1f"),
        "Eagles TC",
        "Away",
        now + Duration::days(90),
    )];

    data
}
