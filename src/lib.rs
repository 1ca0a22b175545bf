//! ESPN Fantasy Football League History
//!
//! Exports the complete history of an ESPN fantasy football league: every
//! season's matchups, final standings and draft, with each drafted player's
//! regular-season production attached to their pick.
//!
//! ## Features
//!
//! - **League History**: Season snapshots from both the current and the
//!   `leagueHistory` ESPN endpoints
//! - **Enriched Drafts**: Weekly roster scans score every drafted player, even
//!   those traded, dropped or waived
//! - **Draft Metrics**: Pick value, boom/bust and consistency per owner
//! - **Exports**: Matchup, standings and draft-pick CSVs plus JSON dumps
//! - **Fetcher Provisioning**: Run an external Python fetcher inside an
//!   isolated virtual environment
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use espn_ffl_history::{
//!     commands::fetch_history::{handle_fetch_history, Delays, FetchParams},
//!     LeagueId, Season,
//! };
//!
//! # async fn example() -> espn_ffl_history::Result<()> {
//! handle_fetch_history(FetchParams {
//!     league_id: Some(LeagueId::new(123456)),
//!     start_year: Season::new(2016),
//!     end_year: Season::new(2024),
//!     output_dir: ".".into(),
//!     refresh: false,
//!     delays: Delays::default(),
//!     verbose: false,
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your ESPN league ID to avoid passing it in every command, and the
//! `SWID`/`espn_s2` cookies for private leagues:
//! ```bash
//! export ESPN_FFL_LEAGUE_ID=123456
//! export ESPN_SWID='{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}'
//! export ESPN_S2=...
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod espn;
pub mod provision;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, Position, Season, Week};
pub use error::{EspnError, Result};

pub const LEAGUE_ID_ENV_VAR: &str = "ESPN_FFL_LEAGUE_ID";
pub const ESPN_SWID_ENV_VAR: &str = "ESPN_SWID";
pub const ESPN_S2_ENV_VAR: &str = "ESPN_S2";
