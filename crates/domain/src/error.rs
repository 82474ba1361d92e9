// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Player name is empty or invalid.
    InvalidName(String),
    /// Player rank is not a positive integer.
    InvalidRank {
        /// The rejected rank value.
        rank: u32,
    },
    /// Match opponent is empty or invalid.
    InvalidOpponent(String),
    /// Match location is empty or invalid.
    InvalidLocation(String),
    /// An availability label could not be parsed.
    InvalidAvailability(String),
    /// A season label could not be parsed.
    InvalidSeason(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidRank { rank } => {
                write!(f, "Invalid rank: {rank}. Must be greater than 0")
            }
            Self::InvalidOpponent(msg) => write!(f, "Invalid opponent: {msg}"),
            Self::InvalidLocation(msg) => write!(f, "Invalid location: {msg}"),
            Self::InvalidAvailability(value) => {
                write!(f, "Unknown availability status: '{value}'")
            }
            Self::InvalidSeason(value) => write!(f, "Unknown season: '{value}'"),
        }
    }
}

impl std::error::Error for DomainError {}
