// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scheduled matches and everything a match owns: availability responses,
//! the lineup, recorded results and MVP voting.

use crate::types::{Availability, MatchId, PlayerAvailability, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Number of singles slots in a lineup.
pub const SINGLES_SLOTS: usize = 6;

/// Number of doubles pairs in a lineup.
pub const DOUBLES_SLOTS: usize = 3;

/// One doubles pairing. Either side may be unfilled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoublesPair(pub Option<PlayerId>, pub Option<PlayerId>);

impl DoublesPair {
    /// Creates a fully filled pair.
    #[must_use]
    pub const fn of(first: PlayerId, second: PlayerId) -> Self {
        Self(Some(first), Some(second))
    }

    /// Iterates over the filled sides of the pair.
    pub fn players(&self) -> impl Iterator<Item = &PlayerId> {
        self.0.iter().chain(self.1.iter())
    }
}

/// The assignment of players to singles and doubles slots for one match.
///
/// Slots may be left empty. A lineup does not require that each player appears
/// once, nor that players were marked available; see
/// [`Match::lineup_conflicts`] for a read-only check of the latter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    /// Singles slots, in court order.
    pub singles: [Option<PlayerId>; SINGLES_SLOTS],
    /// Doubles pairs, in court order.
    pub doubles: [DoublesPair; DOUBLES_SLOTS],
}

impl Lineup {
    /// Creates a lineup with every slot unfilled.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns each distinct assigned player, in slot order (singles first).
    #[must_use]
    pub fn assigned_players(&self) -> Vec<&PlayerId> {
        let mut seen: Vec<&PlayerId> = Vec::new();
        let singles = self.singles.iter().flatten();
        let doubles = self.doubles.iter().flat_map(DoublesPair::players);
        for player_id in singles.chain(doubles) {
            if !seen.contains(&player_id) {
                seen.push(player_id);
            }
        }
        seen
    }

    /// Returns whether every slot is unfilled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned_players().is_empty()
    }
}

/// Outcome of one court within a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Our players on this court.
    pub player_ids: Vec<PlayerId>,
    /// The opposing players' names.
    pub opponent_names: Vec<String>,
    /// Free-form score, e.g. `"6-4, 3-6, 10-7"`.
    pub score: String,
    /// Whether our side won the court.
    pub win: bool,
}

/// Aggregate team score for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    /// Courts won by our team.
    pub ours: u32,
    /// Courts won by the opponent.
    pub theirs: u32,
}

impl TeamScore {
    /// Creates a new `TeamScore`.
    #[must_use]
    pub const fn new(ours: u32, theirs: u32) -> Self {
        Self { ours, theirs }
    }

    /// Returns whether our team won. A tied score is not a win.
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.ours > self.theirs
    }
}

impl std::fmt::Display for TeamScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.ours, self.theirs)
    }
}

/// Recorded results for a completed match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResults {
    /// The aggregate team score.
    pub team_score: TeamScore,
    /// Per-court results, in court order.
    pub match_results: Vec<MatchResult>,
}

impl MatchResults {
    /// Creates results with a team score and no per-court detail.
    #[must_use]
    pub const fn with_score(ours: u32, theirs: u32) -> Self {
        Self {
            team_score: TeamScore::new(ours, theirs),
            match_results: Vec::new(),
        }
    }
}

/// Counts of players who can take part in a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailabilitySummary {
    /// Players who answered YES.
    pub available: usize,
    /// Players who answered IF NEEDED.
    pub reserves: usize,
}

/// A scheduled match against one opponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// The match identifier, unique within its season.
    pub id: MatchId,
    /// The opposing team's name.
    pub opponent: String,
    /// Where the match is played.
    pub location: String,
    /// When the match starts.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// Availability responses, one per player at most.
    pub availability: Vec<PlayerAvailability>,
    /// The lineup, once one has been set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineup: Option<Lineup>,
    /// Recorded results, once the match has been played.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<MatchResults>,
    /// MVP vote tally by player.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mvp_vote: Option<BTreeMap<PlayerId, u32>>,
    /// The finalized MVP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mvp: Option<PlayerId>,
}

impl Match {
    /// Creates a newly scheduled match with no availability, lineup, results
    /// or MVP data.
    ///
    /// # Arguments
    ///
    /// * `id` - The match identifier
    /// * `opponent` - The opposing team's name
    /// * `location` - Where the match is played
    /// * `date` - When the match starts
    #[must_use]
    pub fn new(
        id: MatchId,
        opponent: impl Into<String>,
        location: impl Into<String>,
        date: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            opponent: opponent.into(),
            location: location.into(),
            date,
            availability: Vec::new(),
            lineup: None,
            results: None,
            mvp_vote: None,
            mvp: None,
        }
    }

    /// Returns the recorded status for a player, if they have responded.
    #[must_use]
    pub fn availability_of(&self, player_id: &PlayerId) -> Option<Availability> {
        self.availability
            .iter()
            .find(|entry| &entry.player_id == player_id)
            .map(|entry| entry.status)
    }

    /// Records a player's status, replacing any earlier response.
    ///
    /// Returns `true` if an existing entry was replaced and `false` if a new
    /// entry was appended.
    pub fn upsert_availability(&mut self, player_id: PlayerId, status: Availability) -> bool {
        if let Some(entry) = self
            .availability
            .iter_mut()
            .find(|entry| entry.player_id == player_id)
        {
            entry.status = status;
            true
        } else {
            self.availability
                .push(PlayerAvailability::new(player_id, status));
            false
        }
    }

    /// Counts YES and IF NEEDED responses.
    #[must_use]
    pub fn availability_summary(&self) -> AvailabilitySummary {
        self.availability
            .iter()
            .fold(AvailabilitySummary::default(), |mut summary, entry| {
                match entry.status {
                    Availability::Yes => summary.available += 1,
                    Availability::IfNeeded => summary.reserves += 1,
                    Availability::No => {}
                }
                summary
            })
    }

    /// Returns the players who may be placed in the lineup.
    #[must_use]
    pub fn available_players(&self) -> Vec<&PlayerId> {
        self.availability
            .iter()
            .filter(|entry| entry.status.is_selectable())
            .map(|entry| &entry.player_id)
            .collect()
    }

    /// Returns lineup players who are not marked YES or IF NEEDED.
    ///
    /// Empty when no lineup is set.
    #[must_use]
    pub fn lineup_conflicts(&self) -> Vec<&PlayerId> {
        let Some(lineup) = &self.lineup else {
            return Vec::new();
        };
        let available = self.available_players();
        lineup
            .assigned_players()
            .into_iter()
            .filter(|player_id| !available.contains(player_id))
            .collect()
    }

    /// Returns whether the match starts at or after `now`.
    #[must_use]
    pub fn is_upcoming(&self, now: OffsetDateTime) -> bool {
        self.date >= now
    }

    /// Returns whether results are recorded and our team won.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.results
            .as_ref()
            .is_some_and(|results| results.team_score.is_win())
    }

    /// Adds one MVP vote for a player, starting the tally if needed.
    ///
    /// Returns the player's new vote count.
    pub fn record_mvp_vote(&mut self, player_id: PlayerId) -> u32 {
        let votes = self
            .mvp_vote
            .get_or_insert_with(BTreeMap::new)
            .entry(player_id)
            .or_insert(0);
        *votes += 1;
        *votes
    }

    /// Returns the player with the most MVP votes and their count.
    ///
    /// `None` when no votes are recorded or the lead is shared.
    #[must_use]
    pub fn mvp_leader(&self) -> Option<(&PlayerId, u32)> {
        let tally = self.mvp_vote.as_ref()?;
        let top = tally.values().copied().max()?;
        let mut leaders = tally.iter().filter(|(_, votes)| **votes == top);
        let (leader, _) = leaders.next()?;
        if leaders.next().is_some() {
            return None;
        }
        Some((leader, top))
    }
}
