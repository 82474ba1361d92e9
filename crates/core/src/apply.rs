// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Action, Outcome, TransitionResult};
use league_domain::{
    LeagueYearData, Match, MatchId, Player, Season, validate_match_fields, validate_player_fields,
};

/// Builds the result for a command whose target was not found.
fn unmatched(state: &LeagueYearData, name: &'static str, details: String) -> TransitionResult {
    TransitionResult {
        new_state: state.clone(),
        outcome: Outcome::Unmatched,
        action: Action::new(name, details),
    }
}

/// Runs `edit` against one match in a copy of the state.
///
/// Returns an `Unmatched` result when the match is not in the season.
fn edit_match(
    state: &LeagueYearData,
    season: Season,
    match_id: &MatchId,
    name: &'static str,
    edit: impl FnOnce(&mut Match) -> String,
) -> TransitionResult {
    let mut new_state: LeagueYearData = state.clone();
    let Some(fixture) = new_state.find_match_mut(season, match_id) else {
        return unmatched(
            state,
            name,
            format!("No match '{match_id}' in the {season} season"),
        );
    };

    let details: String = edit(fixture);

    TransitionResult {
        new_state,
        outcome: Outcome::Applied,
        action: Action::new(name, details),
    }
}

/// Applies a command to the current state, producing a new state.
///
/// The input state is never modified. Commands whose target identifier is
/// not found succeed with [`Outcome::Unmatched`] and an unchanged copy of the
/// state.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and outcome
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A player's name is blank or rank is zero
/// - A match's opponent or location is blank
#[allow(clippy::too_many_lines)]
pub fn apply(state: &LeagueYearData, command: Command) -> Result<TransitionResult, CoreError> {
    let name: &'static str = command.name();

    match command {
        Command::AddPlayer { id, name: player_name, rank } => {
            validate_player_fields(&player_name, rank)?;

            let details: String = format!("Added player '{player_name}' ({id}) at rank {rank}");
            let mut new_state: LeagueYearData = state.clone();
            new_state.players.push(Player::new(id, player_name, rank));
            new_state.sort_roster();

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::Applied,
                action: Action::new(name, details),
            })
        }
        Command::UpdatePlayer { player } => {
            validate_player_fields(&player.name, player.rank)?;

            let mut new_state: LeagueYearData = state.clone();
            let Some(slot) = new_state
                .players
                .iter_mut()
                .find(|existing| existing.id == player.id)
            else {
                return Ok(unmatched(
                    state,
                    name,
                    format!("No player '{}' on the roster", player.id),
                ));
            };

            let details: String = format!(
                "Updated player {} to '{}' at rank {}",
                player.id, player.name, player.rank
            );
            *slot = player;
            new_state.sort_roster();

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::Applied,
                action: Action::new(name, details),
            })
        }
        Command::DeletePlayer { player_id } => {
            let mut new_state: LeagueYearData = state.clone();
            let before: usize = new_state.players.len();
            new_state.players.retain(|player| player.id != player_id);

            if new_state.players.len() == before {
                return Ok(unmatched(
                    state,
                    name,
                    format!("No player '{player_id}' on the roster"),
                ));
            }

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::Applied,
                action: Action::new(name, format!("Deleted player {player_id}")),
            })
        }
        Command::AddMatch {
            season,
            id,
            opponent,
            location,
            date,
        } => {
            validate_match_fields(&opponent, &location)?;

            let details: String =
                format!("Scheduled match {id} vs '{opponent}' at '{location}' in {season}");
            let mut new_state: LeagueYearData = state.clone();
            new_state.matches[season].push(Match::new(id, opponent, location, date));

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::Applied,
                action: Action::new(name, details),
            })
        }
        Command::UpdateMatch { season, updated } => {
            validate_match_fields(&updated.opponent, &updated.location)?;

            let match_id: MatchId = updated.id.clone();
            Ok(edit_match(state, season, &match_id, name, |fixture| {
                *fixture = updated;
                format!("Replaced match {match_id} in {season}")
            }))
        }
        Command::DeleteMatch { season, match_id } => {
            let mut new_state: LeagueYearData = state.clone();
            let matches: &mut Vec<Match> = &mut new_state.matches[season];
            let before: usize = matches.len();
            matches.retain(|fixture| fixture.id != match_id);

            if matches.len() == before {
                return Ok(unmatched(
                    state,
                    name,
                    format!("No match '{match_id}' in the {season} season"),
                ));
            }

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::Applied,
                action: Action::new(name, format!("Deleted match {match_id} from {season}")),
            })
        }
        Command::SetPlayerAvailability {
            season,
            match_id,
            player_id,
            status,
        } => Ok(edit_match(state, season, &match_id, name, |fixture| {
            let details: String =
                format!("Player {player_id} answered '{status}' for match {match_id}");
            fixture.upsert_availability(player_id, status);
            details
        })),
        Command::SetLineup {
            season,
            match_id,
            lineup,
        } => Ok(edit_match(state, season, &match_id, name, |fixture| {
            let assigned: usize = lineup.assigned_players().len();
            fixture.lineup = Some(lineup);
            format!("Set lineup for match {match_id} with {assigned} players")
        })),
        Command::RecordResults {
            season,
            match_id,
            results,
        } => Ok(edit_match(state, season, &match_id, name, |fixture| {
            let details: String = format!(
                "Recorded {} for match {match_id}",
                results.team_score
            );
            fixture.results = Some(results);
            details
        })),
        Command::CastMvpVote {
            season,
            match_id,
            player_id,
        } => Ok(edit_match(state, season, &match_id, name, |fixture| {
            let details: String = format!("MVP vote for {player_id} in match {match_id}");
            let votes: u32 = fixture.record_mvp_vote(player_id);
            format!("{details} (now {votes})")
        })),
        Command::FinalizeMvp {
            season,
            match_id,
            player_id,
        } => Ok(edit_match(state, season, &match_id, name, |fixture| {
            let details: String = format!("Finalized MVP {player_id} for match {match_id}");
            fixture.mvp = Some(player_id);
            details
        })),
    }
}
