//! Draft value metrics across seasons.

use std::collections::BTreeMap;

use crate::{
    cli::types::{Position, Season},
    espn::records::{DraftPick, SeasonDraft},
};

/// One more than the last overall pick of a 12-team, 16-round draft.
const DRAFT_CAPITAL_BASE: i64 = 193;

/// Season points per unit of draft capital spent; later picks cost less.
pub fn pick_value(pick: &DraftPick) -> f64 {
    let capital = DRAFT_CAPITAL_BASE - i64::from(pick.overall_pick);
    if capital > 0 {
        pick.stats.season_points / capital as f64
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnerMetrics<'a> {
    pub total_picks: u32,
    pub total_value: f64,
    pub boom_players: u32,
    pub bust_players: u32,
    pub injured_players: u32,
    pub consistency_avg: f64,
    pub playoff_performers: u32,
    pub best_pick_value: f64,
    pub worst_pick_value: f64,
    pub best_pick: Option<&'a DraftPick>,
    pub worst_pick: Option<&'a DraftPick>,
}

impl<'a> OwnerMetrics<'a> {
    fn record(&mut self, pick: &'a DraftPick) {
        let value = pick_value(pick);
        let stats = &pick.stats;

        self.total_picks += 1;
        self.total_value += value;
        self.boom_players += u32::from(stats.boom_games > 3);
        self.bust_players += u32::from(stats.bust_games > 5);
        self.injured_players += u32::from(stats.non_scoring_games > 4);
        self.playoff_performers += u32::from(stats.playoff_points > 30.0);

        if stats.consistency_score > 0.0 {
            let n = f64::from(self.total_picks);
            self.consistency_avg =
                (self.consistency_avg * (n - 1.0) + stats.consistency_score) / n;
        }

        if value > self.best_pick_value {
            self.best_pick_value = value;
            self.best_pick = Some(pick);
        }
        // Zero doubles as "unset", so a zero-value pick can be replaced
        if self.worst_pick_value == 0.0 || value < self.worst_pick_value {
            self.worst_pick_value = value;
            self.worst_pick = Some(pick);
        }
    }
}

/// Draft picks aggregated by owner, by position then round, and by round then
/// position.
#[derive(Debug, Clone, Default)]
pub struct DraftMetrics<'a> {
    pub by_owner: BTreeMap<String, OwnerMetrics<'a>>,
    pub by_position: BTreeMap<Position, BTreeMap<u32, Vec<&'a DraftPick>>>,
    pub by_round: BTreeMap<u32, BTreeMap<Position, Vec<&'a DraftPick>>>,
}

impl<'a> DraftMetrics<'a> {
    pub fn from_drafts(drafts: &'a BTreeMap<Season, SeasonDraft>) -> Self {
        let mut metrics = Self::default();

        for pick in drafts.values().flat_map(|d| d.picks.iter()) {
            metrics
                .by_owner
                .entry(pick.owner_name.clone())
                .or_default()
                .record(pick);
            metrics
                .by_position
                .entry(pick.stats.position)
                .or_default()
                .entry(pick.round)
                .or_default()
                .push(pick);
            metrics
                .by_round
                .entry(pick.round)
                .or_default()
                .entry(pick.stats.position)
                .or_default()
                .push(pick);
        }

        metrics
    }

    /// Owners ordered by total draft value, best first.
    pub fn owners_by_value(&self) -> Vec<(&str, &OwnerMetrics<'a>)> {
        let mut owners: Vec<_> = self
            .by_owner
            .iter()
            .map(|(name, m)| (name.as_str(), m))
            .collect();
        owners.sort_by(|a, b| b.1.total_value.total_cmp(&a.1.total_value));
        owners
    }

    pub fn print_owner_summary(&self) {
        println!(
            "{:<24} {:>6} {:>9} {:>5} {:>5} {:>11}",
            "Owner", "Picks", "Value", "Boom", "Bust", "Consistency"
        );
        for (owner, m) in self.owners_by_value() {
            println!(
                "{:<24} {:>6} {:>9.3} {:>5} {:>5} {:>11.1}",
                owner, m.total_picks, m.total_value, m.boom_players, m.bust_players, m.consistency_avg
            );
            if let Some(best) = m.best_pick {
                println!(
                    "    best pick: {} ({} {}, round {}) value {:.3}",
                    best.stats.player_name, best.year, best.stats.position, best.round, m.best_pick_value
                );
            }
        }
    }
}
