//! League snapshot requests against the ESPN fantasy API.

use std::time::Duration;

use reqwest::{header::HeaderMap, Client};
use serde_json::Value;
use tracing::debug;

use crate::{
    cli::types::{LeagueId, Season, Week},
    core::{
        cache::{CacheStatus, ResponseCache, SnapshotCacheKey},
        http::league_request_headers,
    },
    error::EspnError,
    espn::types::LeagueStatus,
    Result,
};

#[cfg(test)]
mod tests;

/// Base path for ESPN Fantasy Football v3 API.
pub const FFL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

/// Views requested with every league snapshot.
pub const LEAGUE_VIEWS: [&str; 12] = [
    "mDraftDetail",
    "mMatchup",
    "mMatchupScore",
    "mTeam",
    "mRoster",
    "mSettings",
    "mStandings",
    "mStatus",
    "mLiveScoring",
    "modular",
    "mNav",
    "kona_player_info",
];

pub const SEASON_TIMEOUT: Duration = Duration::from_secs(30);
pub const WEEK_TIMEOUT: Duration = Duration::from_secs(25);

/// Client for whole-season and single-week league snapshots, backed by an
/// optional on-disk cache of settled snapshots.
#[derive(Debug, Clone)]
pub struct EspnClient {
    http: Client,
    base_url: String,
    headers: HeaderMap,
    cache: Option<ResponseCache>,
    refresh: bool,
}

impl EspnClient {
    /// Client with headers built from the environment and no cache.
    pub fn new() -> Result<Self> {
        Ok(Self::with_headers(league_request_headers()?))
    }

    pub fn with_headers(headers: HeaderMap) -> Self {
        Self {
            http: Client::new(),
            base_url: FFL_BASE_URL.to_string(),
            headers,
            cache: None,
            refresh: false,
        }
    }

    /// Point at another host (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Read through `cache`; with `refresh` set, always hit the network and
    /// overwrite the cached copy.
    pub fn with_cache(mut self, cache: ResponseCache, refresh: bool) -> Self {
        self.cache = Some(cache);
        self.refresh = refresh;
        self
    }

    /// Full snapshot URL. Seasons before 2019 are only served by `leagueHistory`.
    pub fn snapshot_url(&self, league_id: LeagueId, season: Season, week: Option<Week>) -> String {
        let views = LEAGUE_VIEWS
            .iter()
            .map(|v| format!("view={v}"))
            .collect::<Vec<_>>()
            .join("&");

        let mut url = if season.is_historical() {
            format!(
                "{}/leagueHistory/{}?seasonId={}&{}",
                self.base_url, league_id, season, views
            )
        } else {
            format!(
                "{}/seasons/{}/segments/0/leagues/{}?{}",
                self.base_url, season, league_id, views
            )
        };
        if let Some(week) = week {
            url.push_str(&format!("&scoringPeriodId={}", week));
        }
        url
    }

    /// Whole-season snapshot: teams, members, schedule and draft.
    pub async fn fetch_season(
        &self,
        league_id: LeagueId,
        season: Season,
    ) -> Result<(Value, CacheStatus)> {
        let key = SnapshotCacheKey {
            league_id,
            season,
            week: None,
        };
        self.fetch_snapshot(key, SEASON_TIMEOUT).await
    }

    /// Snapshot pinned to one scoring period, used for weekly rosters.
    pub async fn fetch_week(
        &self,
        league_id: LeagueId,
        season: Season,
        week: Week,
    ) -> Result<(Value, CacheStatus)> {
        let key = SnapshotCacheKey {
            league_id,
            season,
            week: Some(week),
        };
        self.fetch_snapshot(key, WEEK_TIMEOUT).await
    }

    async fn fetch_snapshot(
        &self,
        key: SnapshotCacheKey,
        timeout: Duration,
    ) -> Result<(Value, CacheStatus)> {
        if !self.refresh {
            let cached = self
                .cache
                .as_ref()
                .and_then(|c| c.get(&key))
                .filter(|value| is_settled(&key, value));
            if let Some(cached) = cached {
                debug!(season = %key.season, week = ?key.week, "snapshot cache hit");
                return Ok((cached, CacheStatus::Hit));
            }
        }

        let url = self.snapshot_url(key.league_id, key.season, key.week);
        debug!(%url, "requesting league snapshot");

        let raw = self
            .http
            .get(&url)
            .headers(self.headers.clone())
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        let value = unwrap_history_payload(key.season, raw)?;

        if let Some(cache) = self.cache.as_ref().filter(|_| is_settled(&key, &value)) {
            if let Err(e) = cache.put(&key, &value) {
                tracing::warn!(path = %cache.path_for(&key).display(), "failed to cache snapshot: {e}");
            }
        }

        let status = if self.refresh {
            CacheStatus::Refreshed
        } else {
            CacheStatus::Miss
        };
        Ok((value, status))
    }
}

/// Whether a snapshot can no longer change. Only settled snapshots are
/// cached; anything else, including payloads without a readable `status`,
/// is fetched fresh on every run.
pub fn is_settled(key: &SnapshotCacheKey, value: &Value) -> bool {
    if key.season.is_historical() {
        return true;
    }
    LeagueStatus::of(value).is_some_and(|status| match key.week {
        Some(week) => status.week_finished(week),
        None => status.season_finished(),
    })
}

/// `leagueHistory` answers with a list whose first element is the requested
/// season; current seasons come back as the league object itself.
pub fn unwrap_history_payload(season: Season, value: Value) -> Result<Value> {
    if !season.is_historical() {
        return Ok(value);
    }
    match value {
        Value::Array(items) => items.into_iter().next().ok_or(EspnError::NoData),
        other => Ok(other),
    }
}
