use rayon::prelude::*;
use std::collections::BTreeMap;

use crate::{
    cli::types::{PlayerId, Position, Week, REGULAR_SEASON_WEEKS},
    espn::records::{round2, PlayerSeasonStats, WeeklyScore},
};


pub const DEFAULT_INJURY_STATUS: &str = "ACTIVE";
pub const DID_NOT_PLAY: &str = "DNP";
pub const UNKNOWN_NAME: &str = "Unknown";

/// Who a player is, as last seen in a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerInfo {
    pub player_name: String,
    pub position: Position,
    pub pro_team: i64,
    pub injury_status: String,
}

impl PlayerInfo {
    /// Placeholder for a player with no identifying payload.
    pub fn unknown(injury_status: &str) -> Self {
        Self {
            player_name: UNKNOWN_NAME.to_string(),
            position: Position::Unknown,
            pro_team: 0,
            injury_status: injury_status.to_string(),
        }
    }
}

/// Weekly actual points for one player across the regular season.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerWeeks {
    pub info: PlayerInfo,
    pub weekly_scores: BTreeMap<Week, f64>,
    /// False for drafted players that never showed up on any weekly roster.
    pub seen_on_roster: bool,
}

impl PlayerWeeks {
    pub fn new(info: PlayerInfo) -> Self {
        Self {
            info,
            weekly_scores: BTreeMap::new(),
            seen_on_roster: true,
        }
    }
}

impl PlayerSeasonStats {
    /// Summarise weeks 1..=14; missing weeks count as zero.
    pub fn from_weekly(info: &PlayerInfo, weekly: &BTreeMap<Week, f64>) -> Self {
        let scores: Vec<f64> = Week::regular_season()
            .map(|w| weekly.get(&w).copied().unwrap_or(0.0))
            .collect();

        let weekly_scores = Week::regular_season()
            .zip(&scores)
            .map(|(w, s)| WeeklyScore {
                week: w.as_u16(),
                score: round2(*s),
            })
            .collect();

        let positive: Vec<f64> = scores.iter().copied().filter(|s| *s > 0.0).collect();
        let games_played = positive.len() as u32;
        let boom = info.position.boom_threshold();
        let bust = info.position.bust_threshold();

        Self {
            player_name: info.player_name.clone(),
            position: info.position,
            pro_team: info.pro_team,
            injury_status: info.injury_status.clone(),
            season_points: round2(scores.iter().sum()),
            games_played,
            weekly_scores,
            consistency_score: consistency_score(&positive),
            non_scoring_games: u32::from(REGULAR_SEASON_WEEKS) - games_played,
            boom_games: scores.iter().filter(|s| **s >= boom).count() as u32,
            bust_games: scores.iter().filter(|s| **s > 0.0 && **s <= bust).count() as u32,
            best_week: scores.iter().copied().reduce(f64::max).unwrap_or(0.0),
            worst_week: positive.iter().copied().reduce(f64::min).unwrap_or(0.0),
            // Playoff weeks are outside the window
            playoff_points: 0.0,
        }
    }

    /// Zeroed season for a drafted player who never recorded a roster week.
    pub fn did_not_play(info: PlayerInfo) -> Self {
        let info = PlayerInfo {
            injury_status: DID_NOT_PLAY.to_string(),
            ..info
        };
        Self::from_weekly(&info, &BTreeMap::new())
    }
}

/// `100 - coefficient of variation` over scoring weeks, floored at zero.
/// Needs at least two scoring weeks.
pub fn consistency_score(positive_scores: &[f64]) -> f64 {
    if positive_scores.len() < 2 {
        return 0.0;
    }
    let n = positive_scores.len() as f64;
    let avg = positive_scores.iter().sum::<f64>() / n;
    if avg <= 0.0 {
        return 0.0;
    }
    let var = positive_scores
        .iter()
        .map(|s| (s - avg).powi(2))
        .sum::<f64>()
        / (n - 1.0);
    (100.0 - var.sqrt() / avg * 100.0).max(0.0)
}

/// Season stats for every player, computed in parallel.
pub fn compute_season_stats(
    players: &BTreeMap<PlayerId, PlayerWeeks>,
) -> BTreeMap<PlayerId, PlayerSeasonStats> {
    players
        .par_iter()
        .map(|(id, p)| (*id, PlayerSeasonStats::from_weekly(&p.info, &p.weekly_scores)))
        .collect()
}
