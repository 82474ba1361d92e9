// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::matches::Match;
use crate::season::Season;
use crate::types::{MatchId, Player, PlayerId};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Name shown for identifiers that no longer resolve to a rostered player.
pub const UNKNOWN_PLAYER_NAME: &str = "Unknown Player";

/// The matches of a league year, partitioned by season.
///
/// Exactly two partitions exist. Within each, insertion order is scheduling
/// order, not chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSchedule {
    /// Spring season matches.
    pub spring: Vec<Match>,
    /// Fall season matches.
    pub fall: Vec<Match>,
}

impl SeasonSchedule {
    /// Creates an empty schedule.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            spring: Vec::new(),
            fall: Vec::new(),
        }
    }

    /// Iterates over every match, spring first.
    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.spring.iter().chain(self.fall.iter())
    }
}

impl Index<Season> for SeasonSchedule {
    type Output = Vec<Match>;

    fn index(&self, season: Season) -> &Self::Output {
        match season {
            Season::Spring => &self.spring,
            Season::Fall => &self.fall,
        }
    }
}

impl IndexMut<Season> for SeasonSchedule {
    fn index_mut(&mut self, season: Season) -> &mut Self::Output {
        match season {
            Season::Spring => &mut self.spring,
            Season::Fall => &mut self.fall,
        }
    }
}

/// The root aggregate: one league year's roster and schedule.
///
/// Every player and match is owned here. Removing a player does not remove
/// references to them held by matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueYearData {
    /// The calendar year.
    pub year: u16,
    /// The roster, ordered by ascending rank.
    pub players: Vec<Player>,
    /// The schedule for both seasons.
    pub matches: SeasonSchedule,
}

impl LeagueYearData {
    /// Creates an empty league year.
    #[must_use]
    pub const fn new(year: u16) -> Self {
        Self {
            year,
            players: Vec::new(),
            matches: SeasonSchedule::new(),
        }
    }

    /// Restores the roster ordering invariant.
    ///
    /// The sort is stable, so players sharing a rank keep their relative order.
    pub fn sort_roster(&mut self) {
        self.players.sort_by_key(|player| player.rank);
    }

    /// Looks up a rostered player.
    #[must_use]
    pub fn player(&self, player_id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| &player.id == player_id)
    }

    /// Returns a player's display name, or [`UNKNOWN_PLAYER_NAME`] if the
    /// identifier is not on the roster.
    #[must_use]
    pub fn player_name(&self, player_id: &PlayerId) -> &str {
        self.player(player_id)
            .map_or(UNKNOWN_PLAYER_NAME, |player| player.name.as_str())
    }

    /// Returns one season's matches in scheduling order.
    #[must_use]
    pub fn season_matches(&self, season: Season) -> &[Match] {
        &self.matches[season]
    }

    /// Looks up a match within a season.
    #[must_use]
    pub fn find_match(&self, season: Season, match_id: &MatchId) -> Option<&Match> {
        self.matches[season]
            .iter()
            .find(|fixture| &fixture.id == match_id)
    }

    /// Looks up a match within a season for modification.
    pub fn find_match_mut(&mut self, season: Season, match_id: &MatchId) -> Option<&mut Match> {
        self.matches[season]
            .iter_mut()
            .find(|fixture| &fixture.id == match_id)
    }
}
