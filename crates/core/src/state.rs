// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use league_domain::LeagueYearData;

/// Whether a command found the record it targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command matched and the state changed.
    Applied,
    /// An identifier lookup missed. The state is unchanged.
    Unmatched,
}

impl Outcome {
    /// Returns whether the command took effect.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// A description of what a transition did, for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The command name.
    pub name: &'static str,
    /// A human-readable account of the change.
    pub details: String,
}

impl Action {
    /// Creates a new `Action`.
    #[must_use]
    pub const fn new(name: &'static str, details: String) -> Self {
        Self { name, details }
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side
/// effects. An `Unmatched` outcome carries a copy of the prior state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: LeagueYearData,
    /// Whether the command matched its target.
    pub outcome: Outcome,
    /// What the transition did.
    pub action: Action,
}

/// Summarizes a state for before/after log lines.
#[must_use]
pub fn summarize(state: &LeagueYearData) -> String {
    format!(
        "year={},players_count={},spring_count={},fall_count={}",
        state.year,
        state.players.len(),
        state.matches.spring.len(),
        state.matches.fall.len()
    )
}
