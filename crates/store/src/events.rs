// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Change notifications for store consumers.
//!
//! Events are facts about what changed, published after a mutation has been
//! applied. They carry identifiers only; consumers read the new snapshot from
//! the store when they receive one.

use league_core::Command;
use league_domain::{Availability, MatchId, PlayerId, Season};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// A change applied to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A player joined the roster.
    PlayerAdded {
        /// The new player.
        player_id: PlayerId,
    },
    /// A roster entry was replaced.
    PlayerUpdated {
        /// The updated player.
        player_id: PlayerId,
    },
    /// A player left the roster.
    PlayerDeleted {
        /// The removed player.
        player_id: PlayerId,
    },
    /// A match was scheduled.
    MatchAdded {
        /// The season it was scheduled into.
        season: Season,
        /// The new match.
        match_id: MatchId,
    },
    /// A match record was replaced.
    MatchUpdated {
        /// The season holding the match.
        season: Season,
        /// The updated match.
        match_id: MatchId,
    },
    /// A match was removed.
    MatchDeleted {
        /// The season that held the match.
        season: Season,
        /// The removed match.
        match_id: MatchId,
    },
    /// A player's availability was recorded.
    AvailabilitySet {
        /// The season holding the match.
        season: Season,
        /// The match.
        match_id: MatchId,
        /// The responding player.
        player_id: PlayerId,
        /// The recorded status.
        status: Availability,
    },
    /// A lineup was stored.
    LineupSet {
        /// The season holding the match.
        season: Season,
        /// The match.
        match_id: MatchId,
    },
    /// Results were stored.
    ResultsRecorded {
        /// The season holding the match.
        season: Season,
        /// The match.
        match_id: MatchId,
    },
    /// An MVP vote was counted.
    MvpVoteCast {
        /// The season holding the match.
        season: Season,
        /// The match.
        match_id: MatchId,
        /// The player voted for.
        player_id: PlayerId,
    },
    /// The MVP was finalized.
    MvpFinalized {
        /// The season holding the match.
        season: Season,
        /// The match.
        match_id: MatchId,
        /// The chosen player.
        player_id: PlayerId,
    },
}

impl StoreEvent {
    /// Describes the change a command makes if it applies.
    #[must_use]
    pub fn for_command(command: &Command) -> Self {
        match command {
            Command::AddPlayer { id, .. } => Self::PlayerAdded {
                player_id: id.clone(),
            },
            Command::UpdatePlayer { player } => Self::PlayerUpdated {
                player_id: player.id.clone(),
            },
            Command::DeletePlayer { player_id } => Self::PlayerDeleted {
                player_id: player_id.clone(),
            },
            Command::AddMatch { season, id, .. } => Self::MatchAdded {
                season: *season,
                match_id: id.clone(),
            },
            Command::UpdateMatch { season, updated } => Self::MatchUpdated {
                season: *season,
                match_id: updated.id.clone(),
            },
            Command::DeleteMatch { season, match_id } => Self::MatchDeleted {
                season: *season,
                match_id: match_id.clone(),
            },
            Command::SetPlayerAvailability {
                season,
                match_id,
                player_id,
                status,
            } => Self::AvailabilitySet {
                season: *season,
                match_id: match_id.clone(),
                player_id: player_id.clone(),
                status: *status,
            },
            Command::SetLineup {
                season, match_id, ..
            } => Self::LineupSet {
                season: *season,
                match_id: match_id.clone(),
            },
            Command::RecordResults {
                season, match_id, ..
            } => Self::ResultsRecorded {
                season: *season,
                match_id: match_id.clone(),
            },
            Command::CastMvpVote {
                season,
                match_id,
                player_id,
            } => Self::MvpVoteCast {
                season: *season,
                match_id: match_id.clone(),
                player_id: player_id.clone(),
            },
            Command::FinalizeMvp {
                season,
                match_id,
                player_id,
            } => Self::MvpFinalized {
                season: *season,
                match_id: match_id.clone(),
                player_id: player_id.clone(),
            },
        }
    }
}

/// Broadcaster for store change events.
///
/// This is a lightweight wrapper around `tokio::sync::broadcast` that allows
/// any number of consumers to learn when to re-read the store.
#[derive(Debug, Clone)]
pub struct EventBroadcaster {
    /// The broadcast channel sender.
    tx: broadcast::Sender<StoreEvent>,
}

impl EventBroadcaster {
    /// Creates a new broadcaster buffering up to `capacity` events
    /// (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publishes an event to all subscribers.
    ///
    /// If nobody is subscribed, the event is silently dropped.
    pub fn broadcast(&self, event: &StoreEvent) {
        match self.tx.send(event.clone()) {
            Ok(count) => {
                debug!(?event, receivers = count, "Broadcast store event");
            }
            Err(_) => {
                // No receivers, which is fine
                debug!(?event, "No receivers for store event");
            }
        }
    }

    /// Subscribes to the event stream.
    ///
    /// Events sent before subscription are not received.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    /// Returns the number of active subscribers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
