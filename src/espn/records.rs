//! Rows produced from league payloads and written to the export files.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::types::{Position, Season};

/// Round to two decimal places, the precision every exported score uses.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// A decided head-to-head game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matchup {
    pub year: Season,
    pub week: Option<u32>,
    pub matchup_id: Option<u64>,
    pub home_team_id: Option<u32>,
    pub home_team_name: String,
    pub home_team_abbrev: String,
    pub home_score: f64,
    pub away_team_id: Option<u32>,
    pub away_team_name: String,
    pub away_team_abbrev: String,
    pub away_score: f64,
    pub winner: String,
    pub playoff_type: String,
    pub is_playoff: bool,
    pub margin: f64,
    pub winning_team_id: Option<u32>,
    pub winning_team_name: String,
    pub winning_score: f64,
    pub losing_team_id: Option<u32>,
    pub losing_team_name: String,
    pub losing_score: f64,
}

/// End-of-season standings line for one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRecord {
    pub year: Season,
    pub team_id: u32,
    pub team_name: String,
    pub abbrev: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub playoff_seed: i64,
    pub final_rank: i64,
    pub draft_position: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyScore {
    pub week: u16,
    pub score: f64,
}

/// Regular-season production of one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSeasonStats {
    pub player_name: String,
    pub position: Position,
    pub pro_team: i64,
    pub injury_status: String,
    pub season_points: f64,
    pub games_played: u32,
    pub weekly_scores: Vec<WeeklyScore>,
    pub consistency_score: f64,
    pub non_scoring_games: u32,
    pub boom_games: u32,
    pub bust_games: u32,
    pub best_week: f64,
    pub worst_week: f64,
    pub playoff_points: f64,
}

/// A draft selection enriched with the drafted player's season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftPick {
    pub year: Season,
    pub round: u32,
    pub pick_number: u32,
    pub overall_pick: u32,
    pub team_id: u32,
    pub team_name: String,
    pub owner_name: String,
    pub player_id: i64,
    pub keeper: bool,
    pub bid_amount: i64,
    #[serde(flatten)]
    pub stats: PlayerSeasonStats,
}

/// All picks of one season's draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonDraft {
    pub year: Season,
    pub picks: Vec<DraftPick>,
    pub draft_order: Map<String, Value>,
    pub keeper_info: Vec<Value>,
}

impl SeasonDraft {
    pub fn empty(year: Season) -> Self {
        Self {
            year,
            picks: Vec::new(),
            draft_order: Map::new(),
            keeper_info: Vec::new(),
        }
    }
}
