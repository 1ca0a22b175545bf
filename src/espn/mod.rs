//! ESPN league payloads and what we derive from them
//!
//! - `http`: Season and weekly snapshot requests
//! - `types`: Lenient views over the raw JSON
//! - `extract`: Matchups, standings and draft picks
//! - `compute`: Per-player season statistics
//! - `metrics`: Draft value aggregation across seasons
//! - `records`: The exported row types

pub mod compute;
pub mod extract;
pub mod http;
pub mod metrics;
pub mod records;
pub mod types;

pub use http::EspnClient;
pub use metrics::DraftMetrics;
pub use records::{DraftPick, Matchup, PlayerSeasonStats, SeasonDraft, TeamRecord};
