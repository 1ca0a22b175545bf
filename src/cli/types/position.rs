//! Fantasy football position types and utilities.

use serde::{Serialize, Serializer};
use std::fmt;

/// Fantasy football player positions as reported in league history exports.
///
/// ESPN tags each player with a `defaultPositionId`; ids outside the six
/// scoring positions collapse to `FLEX`. `Unknown` is reserved for drafted
/// players whose identity could not be recovered from any payload.
///
/// # Examples
///
/// ```rust
/// use espn_ffl_history::Position;
///
/// assert_eq!(Position::from_default_id(16), Position::DST);
/// assert_eq!(Position::DST.to_string(), "D/ST");
/// assert_eq!(Position::from_default_id(0), Position::FLEX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DST,
    FLEX,
    Unknown,
}

impl Position {
    /// Map an ESPN `defaultPositionId` to a position.
    pub fn from_default_id(id: i64) -> Self {
        match id {
            1 => Position::QB,
            2 => Position::RB,
            3 => Position::WR,
            4 => Position::TE,
            5 => Position::K,
            16 => Position::DST,
            _ => Position::FLEX,
        }
    }

    /// Weekly score at or above which a game counts as a boom.
    pub fn boom_threshold(&self) -> f64 {
        match self {
            Position::QB => 25.0,
            Position::RB | Position::WR => 20.0,
            Position::TE | Position::DST => 15.0,
            Position::K => 12.0,
            Position::FLEX | Position::Unknown => 15.0,
        }
    }

    /// Scoring weeks at or below this value count as a bust.
    pub fn bust_threshold(&self) -> f64 {
        match self {
            Position::QB => 10.0,
            Position::RB | Position::WR => 5.0,
            Position::TE | Position::K => 3.0,
            Position::DST => 2.0,
            Position::FLEX | Position::Unknown => 5.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DST => "D/ST",
            Position::FLEX => "FLEX",
            Position::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
