// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory league store.
//!
//! [`LeagueStore`] holds one [`LeagueYearData`](league_domain::LeagueYearData)
//! aggregate and applies [`league_core::Command`]s to it after a simulated
//! latency. Reads return a shared snapshot; every applied mutation replaces
//! the whole aggregate in one step and is announced on a broadcast channel.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod error;
mod events;
mod ids;
mod store;

#[cfg(test)]
mod tests;

pub use config::{ConflictPolicy, DEFAULT_EVENT_BUFFER, DEFAULT_LATENCY, StoreConfig};
pub use error::StoreError;
pub use events::{EventBroadcaster, StoreEvent};
pub use ids::IdGenerator;
pub use store::{LeagueStore, Snapshot};
