// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ConflictPolicy, LeagueStore, StoreConfig};
use league_domain::{LeagueYearData, Match, MatchId, Player, PlayerId, Season};
use time::OffsetDateTime;
use time::macros::datetime;

pub const TEST_NOW: OffsetDateTime = datetime!(2024-05-01 12:00 UTC);

/// Players ranked 1, 2 and 3, one spring match `m1` and an empty fall season.
pub fn create_test_data() -> LeagueYearData {
    let mut data: LeagueYearData = LeagueYearData::new(2024);
    data.players = vec![
        Player::new(PlayerId::new("p1"), "Alex Johnson", 1),
        Player::new(PlayerId::new("p2"), "Ben Carter", 2),
        Player::new(PlayerId::new("p3"), "Chris Davis", 3),
    ];
    data.matches[Season::Spring].push(Match::new(
        MatchId::new("m1"),
        "Eagles TC",
        "Home",
        TEST_NOW,
    ));
    data
}

pub fn create_test_config(policy: ConflictPolicy) -> StoreConfig {
    StoreConfig::default()
        .with_policy(policy)
        .with_season(Season::Spring)
}

pub fn create_test_store() -> LeagueStore {
    LeagueStore::new(create_test_data(), create_test_config(ConflictPolicy::LastWriteWins))
}

pub async fn roster_ranks(store: &LeagueStore) -> Vec<u32> {
    store.data().await.players.iter().map(|p| p.rank).collect()
}

pub async fn roster_names(store: &LeagueStore) -> Vec<String> {
    store
        .data()
        .await
        .players
        .iter()
        .map(|p| p.name.clone())
        .collect()
}
