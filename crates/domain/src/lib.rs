// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod league_year;
mod matches;
mod sample;
mod season;
mod stats;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use league_year::{LeagueYearData, SeasonSchedule, UNKNOWN_PLAYER_NAME};
pub use matches::{
    AvailabilitySummary, DOUBLES_SLOTS, DoublesPair, Lineup, Match, MatchResult, MatchResults,
    SINGLES_SLOTS, TeamScore,
};
pub use sample::sample_league;
pub use season::Season;
pub use stats::{SeasonRecord, recent_results, season_record, season_split, upcoming_matches};
pub use types::{Availability, MatchId, Player, PlayerAvailability, PlayerId};
pub use validation::{validate_match_fields, validate_player_fields};
