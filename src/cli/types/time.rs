//! Time-related types for ESPN Fantasy Football seasons and weeks.

use crate::error::{EspnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First season served by the `seasons/{year}` endpoint; older ones live
/// under `leagueHistory`.
pub const FIRST_CURRENT_API_SEASON: u16 = 2019;

/// Regular season length. Playoff weeks are excluded from player stats.
pub const REGULAR_SEASON_WEEKS: u16 = 14;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Whether this season is only reachable through the `leagueHistory` endpoint.
    pub fn is_historical(&self) -> bool {
        self.0 < FIRST_CURRENT_API_SEASON
    }

    /// Inclusive range of seasons, rejecting inverted bounds.
    pub fn range(start: Season, end: Season) -> Result<Vec<Season>> {
        if start > end {
            return Err(EspnError::InvalidSeasonRange {
                start: start.0,
                end: end.0,
            });
        }
        Ok((start.0..=end.0).map(Season).collect())
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2024)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for Week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Weeks 1 through the end of the regular season.
    pub fn regular_season() -> impl Iterator<Item = Week> {
        (1..=REGULAR_SEASON_WEEKS).map(Week)
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}
