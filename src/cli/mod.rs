//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use types::{LeagueId, Season};

use crate::provision::{
    DEFAULT_ENTRY_POINT, DEFAULT_ENV_DIR, DEFAULT_INTERPRETER, DEFAULT_PACKAGES,
};

#[derive(Debug, Parser)]
#[clap(
    name = "espn-ffl-history",
    about = "ESPN Fantasy Football league history exporter"
)]
pub struct ESPN {
    /// Enable debug logging (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Provision an isolated Python environment and run an external fetcher script.
    ///
    /// Creates the environment only if missing, installs the fetcher's
    /// dependencies, runs the entry point and lists the files it produced.
    Run {
        /// Interpreter looked up on PATH.
        #[clap(long, default_value = DEFAULT_INTERPRETER)]
        interpreter: String,

        /// Directory holding the isolated environment.
        #[clap(long, default_value = DEFAULT_ENV_DIR)]
        env_dir: PathBuf,

        /// Fetcher script to run inside the environment.
        #[clap(long, default_value = DEFAULT_ENTRY_POINT)]
        entry_point: PathBuf,

        /// Package to install (repeatable). Defaults to the fetcher's requirements.
        #[clap(long = "package")]
        packages: Option<Vec<String>>,

        /// Directory the fetcher runs in and writes its outputs to.
        #[clap(long, default_value = ".")]
        work_dir: PathBuf,
    },

    /// Fetch league history from ESPN and export matchups, standings and drafts.
    ///
    /// Requests every season in range, walks the regular-season weeks to
    /// collect player scores, and writes CSV and JSON files.
    Fetch {
        /// League ID (or set `ESPN_FFL_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// First season to fetch.
        #[clap(long, default_value_t = Season::new(2016))]
        start_year: Season,

        /// Last season to fetch (inclusive).
        #[clap(long, default_value_t = Season::default())]
        end_year: Season,

        /// Directory the exported files are written to.
        #[clap(long, short, default_value = ".")]
        output_dir: PathBuf,

        /// Force refresh from ESPN, overwriting cached responses.
        #[clap(long)]
        refresh: bool,

        /// Pause between weekly requests, in milliseconds.
        #[clap(long, default_value_t = 120)]
        request_delay_ms: u64,

        /// Pause between seasons, in milliseconds.
        #[clap(long, default_value_t = 400)]
        season_delay_ms: u64,
    },

    /// List which of the known export files exist in a directory.
    Outputs {
        /// Directory to inspect.
        #[clap(long, default_value = ".")]
        dir: PathBuf,
    },
}

/// Packages installed by `run` when none are given.
pub fn default_packages() -> Vec<String> {
    DEFAULT_PACKAGES.iter().map(|p| p.to_string()).collect()
}
