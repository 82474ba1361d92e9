// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use league_domain::{MatchId, PlayerId};
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

/// Time-based identifier source.
///
/// Identifiers are `p<millis>` for players and `m<millis>` for matches, where
/// `millis` is the Unix time in milliseconds. The counter never repeats or
/// goes backwards: a request within the same millisecond as (or earlier
/// than) the previous one is given the previous value plus one.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// Returns a fresh player identifier.
    pub fn player_id(&self) -> PlayerId {
        PlayerId::new(format!("p{}", self.next_millis()))
    }

    /// Returns a fresh match identifier.
    pub fn match_id(&self) -> MatchId {
        MatchId::new(format!("m{}", self.next_millis()))
    }

    fn next_millis(&self) -> u64 {
        let now: u64 =
            u64::try_from(OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000)
                .unwrap_or(0);
        self.advance(now)
    }

    /// Moves the counter to `now`, or one past the last value if `now` is not
    /// ahead of it, and returns the new value.
    pub(crate) fn advance(&self, now: u64) -> u64 {
        let step = |last: u64| now.max(last.saturating_add(1));
        // The closure always returns Some, so both arms carry the prior value.
        let previous: u64 = match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(step(last)))
        {
            Ok(last) | Err(last) => last,
        };
        step(previous)
    }
}
