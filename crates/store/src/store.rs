// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::{ConflictPolicy, StoreConfig};
use crate::error::StoreError;
use crate::events::{EventBroadcaster, StoreEvent};
use crate::ids::IdGenerator;
use league_core::{Command, CoreError, Outcome, TransitionResult, apply, summarize};
use league_domain::{
    Availability, LeagueYearData, Lineup, Match, MatchId, MatchResults, Player, PlayerId, Season,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use time::OffsetDateTime;
use tokio::sync::{Mutex, RwLock, broadcast};
use tracing::{debug, info, warn};

/// A read-only view of the store at one instant.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// The aggregate as of the read.
    pub data: Arc<LeagueYearData>,
    /// Whether any mutation was in flight at the time of the read.
    pub loading: bool,
}

/// Marks one mutation as in flight for as long as it is alive.
struct LoadingGuard<'a> {
    in_flight: &'a AtomicUsize,
}

impl<'a> LoadingGuard<'a> {
    fn enter(in_flight: &'a AtomicUsize) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        Self { in_flight }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

struct Inner {
    data: RwLock<Arc<LeagueYearData>>,
    in_flight: AtomicUsize,
    queue: Mutex<()>,
    ids: IdGenerator,
    events: EventBroadcaster,
    config: StoreConfig,
    current_season: Season,
}

/// Handle to an in-memory league store.
///
/// Cloning the handle is cheap; all clones share one aggregate. Every
/// mutation waits out the configured latency, then applies to the snapshot
/// current at that moment and replaces it whole. Lookups that miss leave the
/// aggregate unchanged and report `false`.
#[derive(Clone)]
pub struct LeagueStore {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for LeagueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeagueStore")
            .field("config", &self.inner.config)
            .field("current_season", &self.inner.current_season)
            .field("loading", &self.is_loading())
            .finish_non_exhaustive()
    }
}

impl LeagueStore {
    /// Creates a store holding `data`.
    ///
    /// The roster is sorted on the way in. The current season is fixed here,
    /// from `config.season_override` or else the wall clock, and is not
    /// re-evaluated afterwards.
    #[must_use]
    pub fn new(mut data: LeagueYearData, config: StoreConfig) -> Self {
        data.sort_roster();
        let current_season: Season = config
            .season_override
            .unwrap_or_else(|| Season::for_instant(OffsetDateTime::now_utc()));

        info!(
            year = data.year,
            season = %current_season,
            latency_ms = config.latency.as_millis(),
            policy = ?config.policy,
            "Initialized league store"
        );

        Self {
            inner: Arc::new(Inner {
                data: RwLock::new(Arc::new(data)),
                in_flight: AtomicUsize::new(0),
                queue: Mutex::new(()),
                ids: IdGenerator::new(),
                events: EventBroadcaster::new(config.event_buffer),
                current_season,
                config,
            }),
        }
    }

    /// Returns the store configuration.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Returns the season fixed when the store was created.
    #[must_use]
    pub fn current_season(&self) -> Season {
        self.inner.current_season
    }

    /// Returns whether any mutation is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Returns the current aggregate and loading flag.
    pub async fn snapshot(&self) -> Snapshot {
        let data: Arc<LeagueYearData> = self.data().await;
        Snapshot {
            data,
            loading: self.is_loading(),
        }
    }

    /// Returns the current aggregate.
    pub async fn data(&self) -> Arc<LeagueYearData> {
        Arc::clone(&*self.inner.data.read().await)
    }

    /// Subscribes to change events for mutations applied from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.inner.events.subscribe()
    }

    /// Adds a player with a fresh identifier and re-sorts the roster.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Rejected` if the name is blank or the rank is zero.
    pub async fn add_player(
        &self,
        name: impl Into<String>,
        rank: u32,
    ) -> Result<Player, StoreError> {
        let player: Player = Player::new(self.inner.ids.player_id(), name, rank);
        self.execute(Command::AddPlayer {
            id: player.id.clone(),
            name: player.name.clone(),
            rank,
        })
        .await?;
        Ok(player)
    }

    /// Replaces the roster entry with the same identifier and re-sorts.
    ///
    /// Returns `false` if no player has that identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Rejected` if the name is blank or the rank is zero.
    pub async fn update_player(&self, player: Player) -> Result<bool, StoreError> {
        self.execute(Command::UpdatePlayer { player })
            .await
            .map(|outcome| outcome.is_applied())
    }

    /// Removes a player from the roster.
    ///
    /// Returns `false` if no player has that identifier. Match data that
    /// refers to the player is kept.
    ///
    /// # Errors
    ///
    /// This command carries no fields to validate; the `Result` is part of
    /// the uniform mutation contract.
    pub async fn delete_player(&self, player_id: &PlayerId) -> Result<bool, StoreError> {
        self.execute(Command::DeletePlayer {
            player_id: player_id.clone(),
        })
        .await
        .map(|outcome| outcome.is_applied())
    }

    /// Schedules a match at the end of a season with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Rejected` if the opponent or location is blank.
    pub async fn add_match(
        &self,
        season: Season,
        opponent: impl Into<String>,
        location: impl Into<String>,
        date: OffsetDateTime,
    ) -> Result<Match, StoreError> {
        let fixture: Match = Match::new(self.inner.ids.match_id(), opponent, location, date);
        self.execute(Command::AddMatch {
            season,
            id: fixture.id.clone(),
            opponent: fixture.opponent.clone(),
            location: fixture.location.clone(),
            date,
        })
        .await?;
        Ok(fixture)
    }

    /// Replaces the season's match with the same identifier.
    ///
    /// Returns `false` if the season has no such match.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Rejected` if the opponent or location is blank.
    pub async fn update_match(&self, season: Season, updated: Match) -> Result<bool, StoreError> {
        self.execute(Command::UpdateMatch { season, updated })
            .await
            .map(|outcome| outcome.is_applied())
    }

    /// Removes a match from a season.
    ///
    /// Returns `false` if the season has no such match.
    ///
    /// # Errors
    ///
    /// This command carries no fields to validate; the `Result` is part of
    /// the uniform mutation contract.
    pub async fn delete_match(&self, season: Season, match_id: &MatchId) -> Result<bool, StoreError> {
        self.execute(Command::DeleteMatch {
            season,
            match_id: match_id.clone(),
        })
        .await
        .map(|outcome| outcome.is_applied())
    }

    /// Records a player's availability for a match, replacing any earlier
    /// response from the same player.
    ///
    /// Returns `false` (and changes nothing) if the season has no such match.
    ///
    /// # Errors
    ///
    /// This command carries no fields to validate; the `Result` is part of
    /// the uniform mutation contract.
    pub async fn set_player_availability(
        &self,
        season: Season,
        match_id: &MatchId,
        player_id: &PlayerId,
        status: Availability,
    ) -> Result<bool, StoreError> {
        self.execute(Command::SetPlayerAvailability {
            season,
            match_id: match_id.clone(),
            player_id: player_id.clone(),
            status,
        })
        .await
        .map(|outcome| outcome.is_applied())
    }

    /// Sets or replaces a match's lineup.
    ///
    /// Returns `false` if the season has no such match.
    ///
    /// # Errors
    ///
    /// This command carries no fields to validate; the `Result` is part of
    /// the uniform mutation contract.
    pub async fn set_lineup(
        &self,
        season: Season,
        match_id: &MatchId,
        lineup: Lineup,
    ) -> Result<bool, StoreError> {
        self.execute(Command::SetLineup {
            season,
            match_id: match_id.clone(),
            lineup,
        })
        .await
        .map(|outcome| outcome.is_applied())
    }

    /// Records or replaces a match's results.
    ///
    /// Returns `false` if the season has no such match.
    ///
    /// # Errors
    ///
    /// This command carries no fields to validate; the `Result` is part of
    /// the uniform mutation contract.
    pub async fn record_results(
        &self,
        season: Season,
        match_id: &MatchId,
        results: MatchResults,
    ) -> Result<bool, StoreError> {
        self.execute(Command::RecordResults {
            season,
            match_id: match_id.clone(),
            results,
        })
        .await
        .map(|outcome| outcome.is_applied())
    }

    /// Adds one MVP vote for a player.
    ///
    /// Returns `false` if the season has no such match.
    ///
    /// # Errors
    ///
    /// This command carries no fields to validate; the `Result` is part of
    /// the uniform mutation contract.
    pub async fn cast_mvp_vote(
        &self,
        season: Season,
        match_id: &MatchId,
        player_id: &PlayerId,
    ) -> Result<bool, StoreError> {
        self.execute(Command::CastMvpVote {
            season,
            match_id: match_id.clone(),
            player_id: player_id.clone(),
        })
        .await
        .map(|outcome| outcome.is_applied())
    }

    /// Sets a match's MVP.
    ///
    /// Returns `false` if the season has no such match.
    ///
    /// # Errors
    ///
    /// This command carries no fields to validate; the `Result` is part of
    /// the uniform mutation contract.
    pub async fn finalize_mvp(
        &self,
        season: Season,
        match_id: &MatchId,
        player_id: &PlayerId,
    ) -> Result<bool, StoreError> {
        self.execute(Command::FinalizeMvp {
            season,
            match_id: match_id.clone(),
            player_id: player_id.clone(),
        })
        .await
        .map(|outcome| outcome.is_applied())
    }

    /// Runs one mutation: wait, apply to the latest snapshot, publish.
    async fn execute(&self, command: Command) -> Result<Outcome, StoreError> {
        let _loading = LoadingGuard::enter(&self.inner.in_flight);
        let name: &'static str = command.name();
        debug!(command = name, season = ?command.season(), "Mutation issued");

        // Under the serialized policy the queue slot is held across the
        // latency, so later calls cannot start waiting until this one applies.
        let _queued = match self.inner.config.policy {
            ConflictPolicy::Serialized => Some(self.inner.queue.lock().await),
            ConflictPolicy::LastWriteWins => None,
        };

        tokio::time::sleep(self.inner.config.latency).await;

        let event: StoreEvent = StoreEvent::for_command(&command);
        let mut current = self.inner.data.write().await;

        let transition: TransitionResult = apply(&current, command).map_err(|err: CoreError| {
            warn!(command = name, error = %err, "Mutation rejected");
            StoreError::from(err)
        })?;
        let TransitionResult {
            new_state,
            outcome,
            action,
        } = transition;

        match outcome {
            Outcome::Applied => {
                info!(
                    command = action.name,
                    details = %action.details,
                    before = %summarize(&current),
                    after = %summarize(&new_state),
                    "Mutation applied"
                );
                *current = Arc::new(new_state);
                // Published under the write lock so events arrive in apply order.
                self.inner.events.broadcast(&event);
                drop(current);
            }
            Outcome::Unmatched => {
                warn!(
                    command = action.name,
                    details = %action.details,
                    "Mutation target not found"
                );
            }
        }

        Ok(outcome)
    }
}
