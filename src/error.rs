//! Error types for the ESPN league history CLI

use std::path::PathBuf;

use thiserror::Error;


pub type Result<T> = std::result::Result<T, EspnError>;

#[derive(Error, Debug)]
pub enum EspnError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid season range: {start} is after {end}")]
    InvalidSeasonRange { start: u16, end: u16 },

    #[error("ESPN API returned no data")]
    NoData,

    #[error("{interpreter} is not installed or not on PATH")]
    InterpreterNotFound { interpreter: String },

    #[error("Failed to set up isolated environment at {}: {message}", path.display())]
    EnvironmentSetup { path: PathBuf, message: String },

    #[error("Entry point {} not found", path.display())]
    EntryPointMissing { path: PathBuf },
}
