//! Storage layer for league history exports
//!
//! Everything the fetch command produces is written as flat files:
//! - `export`: CSV tables and pretty-printed JSON dumps

pub mod export;


pub use export::{write_csv, write_draft_picks_csv, write_json, DraftPickRow};
