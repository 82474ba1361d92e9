// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use league_domain::Season;
use std::time::Duration;

/// Simulated latency applied to every mutation.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(300);

/// Maximum number of change events buffered per subscriber.
/// Subscribers that fall further behind miss the oldest events.
pub const DEFAULT_EVENT_BUFFER: usize = 100;

/// How overlapping mutations are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Each mutation waits out its latency independently and applies to
    /// whatever snapshot is current when it wakes. Overlapping mutations apply
    /// in completion order and the later one wins.
    #[default]
    LastWriteWins,
    /// Mutations queue behind one another and apply in issue order, one at a
    /// time, each paying the full latency.
    Serialized,
}

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Delay before each mutation is applied.
    pub latency: Duration,
    /// Ordering policy for overlapping mutations.
    pub policy: ConflictPolicy,
    /// Change event buffer size (minimum 1).
    pub event_buffer: usize,
    /// Fixed current season. When `None` the season is derived from the
    /// wall clock when the store is created.
    pub season_override: Option<Season>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            policy: ConflictPolicy::default(),
            event_buffer: DEFAULT_EVENT_BUFFER,
            season_override: None,
        }
    }
}

impl StoreConfig {
    /// Sets the simulated latency.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Sets the conflict policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the change event buffer size.
    #[must_use]
    pub const fn with_event_buffer(mut self, event_buffer: usize) -> Self {
        self.event_buffer = event_buffer;
        self
    }

    /// Pins the current season instead of reading the clock.
    #[must_use]
    pub const fn with_season(mut self, season: Season) -> Self {
        self.season_override = Some(season);
        self
    }
}
