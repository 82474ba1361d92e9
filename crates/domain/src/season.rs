// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Month, OffsetDateTime};

/// One of the two fixed partitions of a league year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// February through July.
    Spring,
    /// August through January.
    Fall,
}

impl Season {
    /// Both seasons, in calendar order.
    pub const ALL: [Self; 2] = [Self::Spring, Self::Fall];

    /// Returns the season a calendar month belongs to.
    ///
    /// February through July is the spring season; every other month is fall.
    #[must_use]
    pub const fn for_month(month: Month) -> Self {
        match month {
            Month::February
            | Month::March
            | Month::April
            | Month::May
            | Month::June
            | Month::July => Self::Spring,
            Month::January
            | Month::August
            | Month::September
            | Month::October
            | Month::November
            | Month::December => Self::Fall,
        }
    }

    /// Returns the season containing the given instant.
    #[must_use]
    pub const fn for_instant(instant: OffsetDateTime) -> Self {
        Self::for_month(instant.month())
    }

    /// Returns the display label for this season.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Fall => "Fall",
        }
    }
}

impl FromStr for Season {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Spring" | "spring" => Ok(Self::Spring),
            "Fall" | "fall" => Ok(Self::Fall),
            _ => Err(DomainError::InvalidSeason(s.to_string())),
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
