// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use league_domain::{
    Availability, Lineup, Match, MatchId, MatchResults, Player, PlayerId, Season,
};
use time::OffsetDateTime;

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes. Identifiers for new
/// records are assigned by the caller before the command is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a player to the roster.
    AddPlayer {
        /// The identifier assigned to the new player.
        id: PlayerId,
        /// The player's display name.
        name: String,
        /// The player's ladder rank.
        rank: u32,
    },
    /// Replace a roster entry, matched by `player.id`.
    UpdatePlayer {
        /// The full replacement record.
        player: Player,
    },
    /// Remove a player from the roster.
    DeletePlayer {
        /// The player to remove.
        player_id: PlayerId,
    },
    /// Schedule a new match at the end of a season.
    AddMatch {
        /// The season to schedule into.
        season: Season,
        /// The identifier assigned to the new match.
        id: MatchId,
        /// The opposing team's name.
        opponent: String,
        /// Where the match is played.
        location: String,
        /// When the match starts.
        date: OffsetDateTime,
    },
    /// Replace a match record, matched by `updated.id` within the season.
    UpdateMatch {
        /// The season holding the match.
        season: Season,
        /// The full replacement record.
        updated: Match,
    },
    /// Remove a match from a season.
    DeleteMatch {
        /// The season holding the match.
        season: Season,
        /// The match to remove.
        match_id: MatchId,
    },
    /// Record or replace one player's availability for a match.
    SetPlayerAvailability {
        /// The season holding the match.
        season: Season,
        /// The match being answered.
        match_id: MatchId,
        /// The responding player.
        player_id: PlayerId,
        /// The player's response.
        status: Availability,
    },
    /// Set or replace a match's lineup.
    SetLineup {
        /// The season holding the match.
        season: Season,
        /// The match being staffed.
        match_id: MatchId,
        /// The lineup to store.
        lineup: Lineup,
    },
    /// Record or replace a match's results.
    RecordResults {
        /// The season holding the match.
        season: Season,
        /// The match that was played.
        match_id: MatchId,
        /// The results to store.
        results: MatchResults,
    },
    /// Add one MVP vote for a player.
    CastMvpVote {
        /// The season holding the match.
        season: Season,
        /// The match being voted on.
        match_id: MatchId,
        /// The player receiving the vote.
        player_id: PlayerId,
    },
    /// Set a match's finalized MVP.
    FinalizeMvp {
        /// The season holding the match.
        season: Season,
        /// The match being decided.
        match_id: MatchId,
        /// The chosen player.
        player_id: PlayerId,
    },
}

impl Command {
    /// Returns the stable name of this command, used in logs and events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddPlayer { .. } => "AddPlayer",
            Self::UpdatePlayer { .. } => "UpdatePlayer",
            Self::DeletePlayer { .. } => "DeletePlayer",
            Self::AddMatch { .. } => "AddMatch",
            Self::UpdateMatch { .. } => "UpdateMatch",
            Self::DeleteMatch { .. } => "DeleteMatch",
            Self::SetPlayerAvailability { .. } => "SetPlayerAvailability",
            Self::SetLineup { .. } => "SetLineup",
            Self::RecordResults { .. } => "RecordResults",
            Self::CastMvpVote { .. } => "CastMvpVote",
            Self::FinalizeMvp { .. } => "FinalizeMvp",
        }
    }

    /// Returns the season this command is scoped to, if any.
    ///
    /// Roster commands are not season-scoped.
    #[must_use]
    pub const fn season(&self) -> Option<Season> {
        match self {
            Self::AddPlayer { .. } | Self::UpdatePlayer { .. } | Self::DeletePlayer { .. } => None,
            Self::AddMatch { season, .. }
            | Self::UpdateMatch { season, .. }
            | Self::DeleteMatch { season, .. }
            | Self::SetPlayerAvailability { season, .. }
            | Self::SetLineup { season, .. }
            | Self::RecordResults { season, .. }
            | Self::CastMvpVote { season, .. }
            | Self::FinalizeMvp { season, .. } => Some(*season),
        }
    }
}
