// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents a player identifier.
///
/// Identifiers are opaque strings assigned by the store when a player is
/// created. They are stable for the lifetime of the player.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Creates a new `PlayerId`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Represents a match identifier.
///
/// Match identifiers are unique within the season that holds the match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(String);

impl MatchId {
    /// Creates a new `MatchId`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MatchId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A rostered player.
///
/// Rank is a positive integer where lower is better. Ranks are not required
/// to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// The player's identifier.
    pub id: PlayerId,
    /// The player's display name.
    pub name: String,
    /// The player's ladder rank (1 is the top of the ladder).
    pub rank: u32,
}

impl Player {
    /// Creates a new `Player`.
    ///
    /// # Arguments
    ///
    /// * `id` - The player's identifier
    /// * `name` - The player's display name
    /// * `rank` - The player's ladder rank
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, rank: u32) -> Self {
        Self {
            id,
            name: name.into(),
            rank,
        }
    }
}

/// A player's response to a specific match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    /// The player will play.
    #[serde(rename = "Yes")]
    Yes,
    /// The player cannot play.
    #[serde(rename = "No")]
    No,
    /// The player will play only if the lineup cannot be filled otherwise.
    #[serde(rename = "If Needed")]
    IfNeeded,
}

impl Availability {
    /// All availability statuses in display order.
    pub const ALL: [Self; 3] = [Self::Yes, Self::No, Self::IfNeeded];

    /// Returns the display label for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::IfNeeded => "If Needed",
        }
    }

    /// Returns whether a player with this status may be placed in a lineup.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        matches!(self, Self::Yes | Self::IfNeeded)
    }
}

impl FromStr for Availability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yes" | "yes" => Ok(Self::Yes),
            "No" | "no" => Ok(Self::No),
            "If Needed" | "if_needed" | "if-needed" => Ok(Self::IfNeeded),
            _ => Err(DomainError::InvalidAvailability(s.to_string())),
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single player's availability entry for one match.
///
/// A match holds at most one entry per player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAvailability {
    /// The responding player.
    pub player_id: PlayerId,
    /// The player's response.
    pub status: Availability,
}

impl PlayerAvailability {
    /// Creates a new `PlayerAvailability`.
    #[must_use]
    pub const fn new(player_id: PlayerId, status: Availability) -> Self {
        Self { player_id, status }
    }
}
