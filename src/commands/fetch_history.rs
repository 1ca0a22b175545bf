//! Fetch command implementation
//!
//! Walks every season in range, pulls the weekly rosters needed to score
//! drafted players, and writes the CSV and JSON exports.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    time::Duration,
};

use serde_json::Value;
use tokio::time::sleep;
use tracing::debug;

use crate::{
    core::{
        cache::{CacheStatus, ResponseCache},
        outputs::{
            existing_outputs, print_generated_files, COMPLETE_DATA_JSON, DRAFT_DATA_JSON,
            DRAFT_PICKS_CSV, MATCHUPS_CSV, STANDINGS_CSV,
        },
    },
    espn::{
        extract::{collect_player_weeks, extract_draft, extract_matchups, extract_team_records},
        http::EspnClient,
        metrics::DraftMetrics,
        records::{DraftPick, Matchup, SeasonDraft, TeamRecord},
        types::{SeasonData, WeekSnapshot},
    },
    error::EspnError,
    storage::{write_csv, write_draft_picks_csv, write_json},
    LeagueId, Result, Season, Week,
};

use super::resolve_league_id;

/// Pause after a failed weekly request before trying the next week.
const FAILED_WEEK_BACKOFF: Duration = Duration::from_millis(200);

/// Parameters for the fetch command
#[derive(Debug, Clone)]
pub struct FetchParams {
    pub league_id: Option<LeagueId>,
    pub start_year: Season,
    pub end_year: Season,
    pub output_dir: PathBuf,
    pub refresh: bool,
    pub delays: Delays,
    pub verbose: bool,
}

/// Courtesy pauses between requests. Skipped after cache hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    pub request: Duration,
    pub season: Duration,
}

impl Delays {
    pub fn from_millis(request_ms: u64, season_ms: u64) -> Self {
        Self {
            request: Duration::from_millis(request_ms),
            season: Duration::from_millis(season_ms),
        }
    }

    pub fn none() -> Self {
        Self::from_millis(0, 0)
    }
}

impl Default for Delays {
    fn default() -> Self {
        Self::from_millis(120, 400)
    }
}

/// Everything gathered across the requested seasons.
#[derive(Debug, Clone, Default)]
pub struct LeagueHistory {
    /// Season payloads as received, keyed by year.
    pub raw_data: BTreeMap<Season, Value>,
    pub drafts: BTreeMap<Season, SeasonDraft>,
    pub matchups: Vec<Matchup>,
    pub standings: Vec<TeamRecord>,
}

impl LeagueHistory {
    pub fn draft_picks(&self) -> impl Iterator<Item = &DraftPick> {
        self.drafts.values().flat_map(|d| d.picks.iter())
    }
}

async fn pause_unless_cached(status: CacheStatus, delay: Duration) {
    if status != CacheStatus::Hit && !delay.is_zero() {
        sleep(delay).await;
    }
}

/// Regular-season roster snapshots. Weeks that fail to load are reported and
/// left out.
pub async fn fetch_weekly_snapshots(
    client: &EspnClient,
    league_id: LeagueId,
    season: Season,
    delay: Duration,
) -> Vec<(Week, WeekSnapshot)> {
    let mut snapshots = Vec::new();

    for week in Week::regular_season() {
        let snapshot = match client.fetch_week(league_id, season, week).await {
            Ok((value, status)) => {
                pause_unless_cached(status, delay).await;
                serde_json::from_value::<WeekSnapshot>(value).map_err(EspnError::from)
            }
            Err(e) => Err(e),
        };

        match snapshot {
            Ok(snapshot) => snapshots.push((week, snapshot)),
            Err(e) => {
                println!("   ! Week {} fetch failed: {}", week, e);
                sleep(FAILED_WEEK_BACKOFF).await;
            }
        }
    }

    snapshots
}

fn print_sample_pick(pick: &DraftPick) {
    println!(
        "  Sample pick: {} - {} - {:.1} pts - Consistency: {:.1}",
        pick.stats.player_name,
        pick.stats.position,
        pick.stats.season_points,
        pick.stats.consistency_score
    );
}

/// Fetch and extract every season in `seasons`. A season that cannot be
/// fetched or parsed is reported and skipped.
pub async fn fetch_league_history(
    client: &EspnClient,
    league_id: LeagueId,
    seasons: &[Season],
    delays: Delays,
) -> LeagueHistory {
    let mut history = LeagueHistory::default();
    let last_season = seasons.last().copied();

    for &year in seasons {
        println!("Fetching data for {}...", year);

        let fetched = client
            .fetch_season(league_id, year)
            .await
            .and_then(|(value, status)| {
                let season = serde_json::from_value::<SeasonData>(value.clone())?;
                Ok((value, season, status))
            });
        let (raw, season, status) = match fetched {
            Ok(fetched) => fetched,
            Err(e) => {
                println!("Error fetching season {}: {}", year, e);
                sleep(delays.season).await;
                continue;
            }
        };
        history.raw_data.insert(year, raw);

        let snapshots = if season.draft_picks().is_empty() {
            debug!(season = %year, "no draft picks, skipping weekly rosters");
            Vec::new()
        } else {
            println!("  Fetching weekly data for all players in {}...", year);
            fetch_weekly_snapshots(client, league_id, year, delays.request).await
        };
        let players = collect_player_weeks(&snapshots, season.draft_picks());

        let draft = extract_draft(&season, year, &players);
        println!("  Found {} draft picks", draft.picks.len());
        if Some(year) == last_season {
            if let Some(sample) = draft.picks.first() {
                print_sample_pick(sample);
            }
        }
        history.drafts.insert(year, draft);

        let matchups = extract_matchups(&season, year);
        println!("  Found {} matchups", matchups.len());
        history.matchups.extend(matchups);

        let standings = extract_team_records(&season, year);
        if !standings.is_empty() {
            println!("  Found {} team records", standings.len());
            history.standings.extend(standings);
        }

        pause_unless_cached(status, delays.season).await;
    }

    history
}

/// Write the export files into `dir`. Tables without rows are not written;
/// both JSON dumps always are.
pub fn write_exports(history: &LeagueHistory, dir: &Path) -> Result<()> {
    if !history.matchups.is_empty() {
        let n = write_csv(&dir.join(MATCHUPS_CSV), &history.matchups)?;
        println!("\n✓ Saved {} matchups to '{}'", n, MATCHUPS_CSV);
    }

    if !history.standings.is_empty() {
        write_csv(&dir.join(STANDINGS_CSV), &history.standings)?;
        println!("✓ Saved standings to '{}'", STANDINGS_CSV);
    }

    if history.draft_picks().next().is_some() {
        let n = write_draft_picks_csv(&dir.join(DRAFT_PICKS_CSV), history.draft_picks())?;
        println!("✓ Saved {} enriched draft picks to '{}'", n, DRAFT_PICKS_CSV);
    }

    write_json(&dir.join(COMPLETE_DATA_JSON), &history.raw_data)?;
    println!("✓ Saved complete raw data to '{}'", COMPLETE_DATA_JSON);

    write_json(&dir.join(DRAFT_DATA_JSON), &history.drafts)?;
    println!("✓ Saved draft data to '{}'", DRAFT_DATA_JSON);

    Ok(())
}

/// Handle the fetch command
pub async fn handle_fetch_history(params: FetchParams) -> Result<()> {
    let league_id = resolve_league_id(params.league_id)?;
    let seasons = Season::range(params.start_year, params.end_year)?;

    println!("ESPN Fantasy Football League History");
    println!("{}", "=".repeat(60));
    println!(
        "Fetching all data from {}-{} with complete player stats...",
        params.start_year, params.end_year
    );
    println!("(This captures ALL players, even if traded/dropped/waived)");
    println!();

    let cache = ResponseCache::default();
    debug!(cache = %cache.root().display(), refresh = params.refresh, "response cache");
    // tarpaulin::skip - HTTP calls, tested via integration tests
    let client = EspnClient::new()?.with_cache(cache, params.refresh);
    let history = fetch_league_history(&client, league_id, &seasons, params.delays).await;

    println!("\nCalculating advanced draft metrics...");
    let metrics = DraftMetrics::from_drafts(&history.drafts);
    debug!(owners = metrics.by_owner.len(), "draft metrics ready");
    if params.verbose {
        metrics.print_owner_summary();
    }

    write_exports(&history, &params.output_dir)?;

    println!();
    print_generated_files(&existing_outputs(&params.output_dir));
    Ok(())
}
