// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates the fields of a new or edited player.
///
/// This function checks field presence only. It does NOT check rank
/// uniqueness; tied ranks are allowed.
///
/// # Arguments
///
/// * `name` - The player's display name
/// * `rank` - The player's ladder rank
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or whitespace
/// - The rank is zero
pub fn validate_player_fields(name: &str, rank: u32) -> Result<(), DomainError> {
    // Rule: name must not be blank
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    // Rule: rank is a positive integer
    if rank == 0 {
        return Err(DomainError::InvalidRank { rank });
    }

    Ok(())
}

/// Validates the fields of a new or edited match.
///
/// # Arguments
///
/// * `opponent` - The opposing team's name
/// * `location` - Where the match is played
///
/// # Errors
///
/// Returns an error if the opponent or location is empty or whitespace.
pub fn validate_match_fields(opponent: &str, location: &str) -> Result<(), DomainError> {
    if opponent.trim().is_empty() {
        return Err(DomainError::InvalidOpponent(String::from(
            "Opponent cannot be empty",
        )));
    }

    if location.trim().is_empty() {
        return Err(DomainError::InvalidLocation(String::from(
            "Location cannot be empty",
        )));
    }

    Ok(())
}
