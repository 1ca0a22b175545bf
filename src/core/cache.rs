//! File system cache for raw ESPN responses.
//!
//! Storage only. The client decides which snapshots are settled enough to be
//! written here and read back.

use serde_json::Value;
use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::{LeagueId, Season, Week};


const CACHE_NAMESPACE: &str = "espn-ffl-history";

/// Where a response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
    Refreshed,
}

/// Default cache root: `~/.cache/espn-ffl-history` (platform equivalent).
pub fn default_cache_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join(CACHE_NAMESPACE)
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Cache key that knows its own file name.
pub trait CacheKey {
    /// Generate a string representation for file system storage
    fn to_file_key(&self) -> String;
}

/// One league snapshot: a whole season, or a single scoring period of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapshotCacheKey {
    pub league_id: LeagueId,
    pub season: Season,
    pub week: Option<Week>,
}

impl CacheKey for SnapshotCacheKey {
    fn to_file_key(&self) -> String {
        match self.week {
            Some(week) => format!(
                "league_{}_s{}_w{}",
                self.league_id.as_u32(),
                self.season.as_u16(),
                week.as_u16()
            ),
            None => format!(
                "league_{}_s{}",
                self.league_id.as_u32(),
                self.season.as_u16()
            ),
        }
    }
}

/// JSON responses stored as one file per key under a root directory.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    root: PathBuf,
}

impl ResponseCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for<K: CacheKey>(&self, key: &K) -> PathBuf {
        self.root.join(format!("{}.json", key.to_file_key()))
    }

    /// Unreadable or corrupt entries count as misses.
    pub fn get<K: CacheKey>(&self, key: &K) -> Option<Value> {
        let s = try_read_to_string(&self.path_for(key))?;
        serde_json::from_str(&s).ok()
    }

    pub fn put<K: CacheKey>(&self, key: &K, value: &Value) -> std::io::Result<()> {
        let json = serde_json::to_string(value)?;
        write_string(&self.path_for(key), &json)
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(default_cache_dir())
    }
}
