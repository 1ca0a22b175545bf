//! Raw ESPN league payloads.
//!
//! ESPN's league API is undocumented and its shape drifts between seasons, so
//! everything except team ids is optional: missing or `null` collections become
//! empty and unparseable numbers become `0.0`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::cli::types::{PlayerId, Week};

#[cfg(test)]
mod tests;

/// Treat an explicit `null` like a missing field.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept numbers, numeric strings, or anything else as `0.0`.
fn de_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(lenient_f64(&raw))
}

/// Best-effort float conversion used for every ESPN point value.
pub fn lenient_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => 0.0,
    }
}

/// One season snapshot (`seasons/{year}` or the first element of `leagueHistory`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonData {
    #[serde(default, deserialize_with = "de_null_default")]
    pub teams: Vec<Team>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub members: Vec<Member>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub schedule: Vec<ScheduleItem>,
    #[serde(default)]
    pub draft_detail: Option<DraftDetail>,
}

impl SeasonData {
    pub fn draft_picks(&self) -> &[DraftPickEntry] {
        self.draft_detail
            .as_ref()
            .map(|d| d.picks.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub abbrev: Option<String>,
    #[serde(default)]
    pub primary_owner: Option<String>,
    #[serde(default)]
    pub record: Option<TeamRecordBlock>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub playoff_seed: i64,
    #[serde(default, deserialize_with = "de_null_default")]
    pub rank_calculated_final: i64,
    #[serde(default, deserialize_with = "de_null_default")]
    pub draft_day_projected_rank: i64,
}

impl Team {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Team {}", self.id))
    }

    pub fn display_abbrev(&self) -> String {
        self.abbrev
            .clone()
            .unwrap_or_else(|| format!("T{}", self.id))
    }

    pub fn overall_record(&self) -> RecordLine {
        self.record
            .as_ref()
            .and_then(|r| r.overall.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamRecordBlock {
    #[serde(default)]
    pub overall: Option<RecordLine>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordLine {
    #[serde(default, deserialize_with = "de_null_default")]
    pub wins: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub losses: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub ties: u32,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub points_for: f64,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub points_against: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl Member {
    /// "First Last", falling back to "Owner {id}" when both are blank.
    pub fn display_name(&self) -> String {
        let full = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        let full = full.trim();
        if full.is_empty() {
            format!("Owner {}", self.id.as_deref().unwrap_or("None"))
        } else {
            full.to_string()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub matchup_period_id: Option<u32>,
    #[serde(default)]
    pub home: Option<MatchupSide>,
    #[serde(default)]
    pub away: Option<MatchupSide>,
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub playoff_tier_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupSide {
    #[serde(default)]
    pub team_id: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub total_points: f64,
    /// Keys are scoring period ids as strings.
    #[serde(default)]
    pub points_by_scoring_period: Option<BTreeMap<String, Value>>,
}

impl MatchupSide {
    /// Points for one scoring period, 0 when absent.
    pub fn points_for_period(&self, period: Option<u32>) -> f64 {
        let (Some(map), Some(period)) = (self.points_by_scoring_period.as_ref(), period) else {
            return 0.0;
        };
        map.get(&period.to_string()).map(lenient_f64).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftDetail {
    #[serde(default, deserialize_with = "de_null_default")]
    pub picks: Vec<DraftPickEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPickEntry {
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub round_id: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub round_pick_number: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub overall_pick_number: u32,
    #[serde(default)]
    pub team_id: Option<u32>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub keeper: bool,
    #[serde(default, deserialize_with = "de_null_default")]
    pub bid_amount: i64,
    #[serde(default)]
    pub player_pool_entry: Option<PlayerPoolEntry>,
}

impl DraftPickEntry {
    /// Player id, treating 0 as absent.
    pub fn player(&self) -> Option<PlayerId> {
        self.player_id.filter(|id| *id != 0).map(PlayerId::new)
    }
}

/// One scoring period fetched with `scoringPeriodId`; only rosters are used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeekSnapshot {
    #[serde(default, deserialize_with = "de_null_default")]
    pub teams: Vec<RosterTeam>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterTeam {
    #[serde(default)]
    pub roster: Option<Roster>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Roster {
    #[serde(default, deserialize_with = "de_null_default")]
    pub entries: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default)]
    pub player_pool_entry: Option<PlayerPoolEntry>,
}

impl RosterEntry {
    pub fn player(&self) -> Option<PlayerId> {
        self.player_id.filter(|id| *id != 0).map(PlayerId::new)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPoolEntry {
    #[serde(default)]
    pub player: Option<Player>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub applied_stat_total: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub default_position_id: i64,
    #[serde(default, deserialize_with = "de_null_default")]
    pub pro_team_id: i64,
    #[serde(default)]
    pub injury_status: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub stats: Vec<PlayerStatEntry>,
}

impl Player {
    /// Actual (not projected) fantasy points for a scoring period.
    pub fn actual_points(&self, week: Week) -> Option<f64> {
        self.stats
            .iter()
            .find(|s| s.scoring_period_id == Some(week.as_u16()) && s.stat_source_id == Some(0))
            .map(|s| s.applied_total)
    }
}

/// Player statistics for a specific period.
/// `statSourceId`: 0 = actual, 1 = projected.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatEntry {
    #[serde(default)]
    pub scoring_period_id: Option<u16>,
    #[serde(default)]
    pub stat_source_id: Option<u8>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub applied_total: f64,
}

/// The `status` block every snapshot carries through the `mStatus` view.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueStatus {
    /// `false` once the season has been played out.
    #[serde(default)]
    pub is_active: Option<bool>,
    /// Scoring period in progress. Every earlier period is final.
    #[serde(default)]
    pub latest_scoring_period: Option<u16>,
}

impl LeagueStatus {
    /// Status block of a raw snapshot, if it has a readable one.
    pub fn of(snapshot: &Value) -> Option<Self> {
        serde_json::from_value(snapshot.get("status")?.clone()).ok()
    }

    pub fn season_finished(&self) -> bool {
        self.is_active == Some(false)
    }

    pub fn week_finished(&self, week: Week) -> bool {
        self.season_finished()
            || self
                .latest_scoring_period
                .is_some_and(|latest| latest > week.as_u16())
    }
}
