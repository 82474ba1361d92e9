// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod render;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use league_domain::{Availability, Match, Player, PlayerId, Season, sample_league};
use league_store::{ConflictPolicy, LeagueStore, StoreConfig, StoreEvent};
use std::time::Duration;
use time::OffsetDateTime;
use tokio::sync::broadcast;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// League roster - inspect and exercise an in-memory league store
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Simulated latency applied to every mutation, in milliseconds
    #[arg(long, env = "LEAGUE_LATENCY_MS", global = true)]
    latency_ms: Option<u64>,

    /// Pin the current season instead of deriving it from today's date
    #[arg(long, global = true)]
    season: Option<Season>,

    /// Queue overlapping mutations so they apply in issue order
    #[arg(long, global = true)]
    serialized: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn store_config(&self) -> StoreConfig {
        let mut config: StoreConfig = StoreConfig::default();
        if let Some(latency_ms) = self.latency_ms {
            config = config.with_latency(Duration::from_millis(latency_ms));
        }
        if let Some(season) = self.season {
            config = config.with_season(season);
        }
        if self.serialized {
            config = config.with_policy(ConflictPolicy::Serialized);
        }
        config
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Show the team record, next matches and recent results
    #[command(visible_alias = "d")]
    Dashboard,

    /// List the roster in rank order
    #[command(visible_alias = "r")]
    Roster,

    /// List one season's matches (defaults to the current season)
    #[command(visible_alias = "s")]
    Schedule,

    /// Print the whole league year as JSON
    Snapshot,

    /// Run a scripted session against the store and print its change events
    Demo,
}

impl Command {
    async fn run(self, store: &LeagueStore, now: OffsetDateTime) -> Result<()> {
        let season: Season = store.current_season();
        match self {
            Self::Dashboard => {
                print!("{}", render::dashboard(&*store.data().await, season, now));
            }
            Self::Roster => print!("{}", render::roster(&*store.data().await)),
            Self::Schedule => {
                print!("{}", render::schedule(&*store.data().await, season, now));
            }
            Self::Snapshot => {
                let json: String = serde_json::to_string_pretty(&*store.data().await)
                    .wrap_err("Failed to serialize league data")?;
                println!("{json}");
            }
            Self::Demo => run_demo(store, season, now).await?,
        }
        Ok(())
    }
}

/// Adds a player, schedules a match, collects availability from the top of
/// the roster concurrently, then prints what changed.
async fn run_demo(store: &LeagueStore, season: Season, now: OffsetDateTime) -> Result<()> {
    let mut events: broadcast::Receiver<StoreEvent> = store.subscribe();

    let player: Player = store
        .add_player("Isla Jones", 3)
        .await
        .wrap_err("Failed to add player")?;
    info!(player_id = %player.id, "Added demo player");

    let fixture: Match = store
        .add_match(season, "Panthers RC", "Away", now + time::Duration::days(21))
        .await
        .wrap_err("Failed to schedule match")?;
    info!(match_id = %fixture.id, %season, "Scheduled demo match");

    let responders: Vec<PlayerId> = store
        .data()
        .await
        .players
        .iter()
        .take(4)
        .map(|player| player.id.clone())
        .collect();
    let statuses = [Availability::Yes, Availability::IfNeeded, Availability::No];
    let pending = responders.iter().zip(statuses.iter().cycle()).map(|(player_id, status)| {
        store.set_player_availability(season, &fixture.id, player_id, *status)
    });
    info!(responses = responders.len(), "Collecting availability");
    for applied in futures::future::join_all(pending).await {
        if !applied.wrap_err("Failed to record availability")? {
            warn!(match_id = %fixture.id, "Match disappeared before availability was recorded");
        }
    }

    let deleted: bool = store.delete_player(&PlayerId::new("p-missing")).await?;
    info!(deleted, "Deleting an unknown player changes nothing");

    let data = store.data().await;
    print!("{}", render::roster(&data));
    println!();
    print!("{}", render::schedule(&data, season, now));

    println!("\nChange events:");
    loop {
        match events.try_recv() {
            Ok(event) => println!("  {}", serde_json::to_string(&event)?),
            Err(broadcast::error::TryRecvError::Empty) => break,
            Err(err) => return Err(eyre!("Change event stream failed: {err}")),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let store: LeagueStore = LeagueStore::new(sample_league(now), args.store_config());
    info!(command = ?args.command, "Starting league session");

    args.command.run(&store, now).await
}
