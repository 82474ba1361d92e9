// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Availability, DomainError, MatchId, Player, PlayerAvailability, PlayerId};
use std::str::FromStr;

#[test]
fn test_player_id_creation() {
    let id: PlayerId = PlayerId::new("p1");
    assert_eq!(id.as_str(), "p1");
    assert_eq!(id.to_string(), "p1");
    assert_eq!(PlayerId::from("p1"), id);
}

#[test]
fn test_match_id_creation() {
    let id: MatchId = MatchId::new("m1s");
    assert_eq!(id.as_str(), "m1s");
    assert_eq!(format!("{id}"), "m1s");
}

#[test]
fn test_player_id_serializes_as_bare_string() {
    let json: String = serde_json::to_string(&PlayerId::new("p7")).unwrap();
    assert_eq!(json, "\"p7\"");
}

#[test]
fn test_player_creation() {
    let player: Player = Player::new(PlayerId::new("p1"), "Alex Johnson", 1);
    assert_eq!(player.id.as_str(), "p1");
    assert_eq!(player.name, "Alex Johnson");
    assert_eq!(player.rank, 1);
}

#[test]
fn test_availability_labels() {
    assert_eq!(Availability::Yes.as_str(), "Yes");
    assert_eq!(Availability::No.as_str(), "No");
    assert_eq!(Availability::IfNeeded.to_string(), "If Needed");
}

#[test]
fn test_availability_parses_labels_and_snake_case() {
    for status in Availability::ALL {
        assert_eq!(Availability::from_str(status.as_str()).unwrap(), status);
    }
    assert_eq!(Availability::from_str("yes").unwrap(), Availability::Yes);
    assert_eq!(
        Availability::from_str("if_needed").unwrap(),
        Availability::IfNeeded
    );
}

#[test]
fn test_availability_rejects_unknown_label() {
    let result: Result<Availability, DomainError> = Availability::from_str("Maybe");
    assert_eq!(
        result,
        Err(DomainError::InvalidAvailability(String::from("Maybe")))
    );
}

#[test]
fn test_availability_serialized_form_matches_label() {
    let json: String = serde_json::to_string(&Availability::IfNeeded).unwrap();
    assert_eq!(json, "\"If Needed\"");

    let parsed: Availability = serde_json::from_str("\"No\"").unwrap();
    assert_eq!(parsed, Availability::No);
}

#[test]
fn test_only_yes_and_if_needed_are_selectable() {
    assert!(Availability::Yes.is_selectable());
    assert!(Availability::IfNeeded.is_selectable());
    assert!(!Availability::No.is_selectable());
}

#[test]
fn test_player_availability_wire_format() {
    let entry: PlayerAvailability = PlayerAvailability::new(PlayerId::new("p8"), Availability::IfNeeded);
    let value: serde_json::Value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["player_id"], "p8");
    assert_eq!(value["status"], "If Needed");
}
