// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived schedule views and the team record.
//!
//! Everything here is **computed**, not stored. Each function is a pure
//! function of a snapshot and a reference instant.

use crate::league_year::LeagueYearData;
use crate::matches::Match;
use std::cmp::Reverse;
use time::OffsetDateTime;

/// Win/loss record over played matches with recorded results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeasonRecord {
    /// Matches won.
    pub wins: usize,
    /// Matches lost, including tied scores.
    pub losses: usize,
}

impl SeasonRecord {
    /// Returns the number of matches counted.
    #[must_use]
    pub const fn played(&self) -> usize {
        self.wins + self.losses
    }

    /// Returns the win rate rounded to the nearest whole percent.
    ///
    /// Zero when nothing has been played.
    #[must_use]
    pub const fn win_rate_percent(&self) -> usize {
        let played = self.played();
        if played == 0 {
            return 0;
        }
        (self.wins * 100 + played / 2) / played
    }
}

/// Returns matches from both seasons starting at or after `now`, soonest
/// first, at most `limit` of them.
#[must_use]
pub fn upcoming_matches(data: &LeagueYearData, now: OffsetDateTime, limit: usize) -> Vec<&Match> {
    let mut upcoming: Vec<&Match> = data
        .matches
        .iter()
        .filter(|fixture| fixture.is_upcoming(now))
        .collect();
    upcoming.sort_by_key(|fixture| fixture.date);
    upcoming.truncate(limit);
    upcoming
}

/// Returns matches from both seasons played before `now` that have results
/// recorded, most recent first.
#[must_use]
pub fn recent_results(data: &LeagueYearData, now: OffsetDateTime) -> Vec<&Match> {
    let mut played: Vec<&Match> = data
        .matches
        .iter()
        .filter(|fixture| !fixture.is_upcoming(now) && fixture.results.is_some())
        .collect();
    played.sort_by_key(|fixture| Reverse(fixture.date));
    played
}

/// Tallies wins and losses over [`recent_results`].
#[must_use]
pub fn season_record(data: &LeagueYearData, now: OffsetDateTime) -> SeasonRecord {
    let played = recent_results(data, now);
    let wins = played.iter().filter(|fixture| fixture.is_win()).count();
    SeasonRecord {
        wins,
        losses: played.len() - wins,
    }
}

/// Splits one season's matches into upcoming (soonest first) and past (most
/// recent first).
#[must_use]
pub fn season_split(matches: &[Match], now: OffsetDateTime) -> (Vec<&Match>, Vec<&Match>) {
    let (mut upcoming, mut past): (Vec<&Match>, Vec<&Match>) =
        matches.iter().partition(|fixture| fixture.is_upcoming(now));
    upcoming.sort_by_key(|fixture| fixture.date);
    past.sort_by_key(|fixture| Reverse(fixture.date));
    (upcoming, past)
}
