// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Season};
use std::str::FromStr;
use time::Month;
use time::macros::datetime;

#[test]
fn test_february_through_july_is_spring() {
    for month in [
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
    ] {
        assert_eq!(Season::for_month(month), Season::Spring, "{month}");
    }
}

#[test]
fn test_remaining_months_are_fall() {
    for month in [
        Month::January,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ] {
        assert_eq!(Season::for_month(month), Season::Fall, "{month}");
    }
}

#[test]
fn test_season_for_instant_uses_month() {
    assert_eq!(
        Season::for_instant(datetime!(2024-02-01 00:00 UTC)),
        Season::Spring
    );
    assert_eq!(
        Season::for_instant(datetime!(2024-07-31 23:59 UTC)),
        Season::Spring
    );
    assert_eq!(
        Season::for_instant(datetime!(2024-01-31 12:00 UTC)),
        Season::Fall
    );
}

#[test]
fn test_season_labels_round_trip() {
    for season in Season::ALL {
        assert_eq!(Season::from_str(season.as_str()).unwrap(), season);
    }
    assert_eq!(Season::from_str("fall").unwrap(), Season::Fall);
}

#[test]
fn test_season_rejects_unknown_label() {
    assert_eq!(
        Season::from_str("Winter"),
        Err(DomainError::InvalidSeason(String::from("Winter")))
    );
}
