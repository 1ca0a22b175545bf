//! Turn league payloads into export rows.

use std::collections::{BTreeMap, HashMap};

use crate::{
    cli::types::{PlayerId, Position, Season, Week},
    espn::{
        compute::{
            compute_season_stats, PlayerInfo, PlayerWeeks, DEFAULT_INJURY_STATUS, DID_NOT_PLAY,
            UNKNOWN_NAME,
        },
        records::{round2, DraftPick, Matchup, PlayerSeasonStats, SeasonDraft, TeamRecord},
        types::{DraftPickEntry, Player, PlayerPoolEntry, SeasonData, WeekSnapshot},
    },
};


const UNKNOWN_ABBREV: &str = "UNK";
const NO_PLAYOFF: &str = "NONE";
const HOME: &str = "HOME";

/// Team name, abbreviation and resolved owner.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamInfo {
    pub name: String,
    pub abbrev: String,
    pub owner_name: String,
}

/// Index teams by id with owner ids resolved through the member list.
pub fn team_directory(season: &SeasonData) -> HashMap<u32, TeamInfo> {
    let members: HashMap<&str, String> = season
        .members
        .iter()
        .filter_map(|m| m.id.as_deref().map(|id| (id, m.display_name())))
        .collect();

    season
        .teams
        .iter()
        .map(|t| {
            let owner_name = match t.primary_owner.as_deref() {
                Some(owner) => members
                    .get(owner)
                    .cloned()
                    .unwrap_or_else(|| owner.to_string()),
                None => UNKNOWN_NAME.to_string(),
            };
            let info = TeamInfo {
                name: t.display_name(),
                abbrev: t.display_abbrev(),
                owner_name,
            };
            (t.id, info)
        })
        .collect()
}

fn player_info(player: &Player) -> PlayerInfo {
    PlayerInfo {
        player_name: player
            .full_name
            .clone()
            .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        position: Position::from_default_id(player.default_position_id),
        pro_team: player.pro_team_id,
        injury_status: player
            .injury_status
            .clone()
            .unwrap_or_else(|| DEFAULT_INJURY_STATUS.to_string()),
    }
}

fn pool_player(entry: Option<&PlayerPoolEntry>) -> Option<&Player> {
    entry.and_then(|e| e.player.as_ref())
}

/// Fold weekly roster snapshots into per-player weekly scores.
///
/// Every rostered player counts, bench included, and identity is refreshed
/// from the latest week that carries it. Drafted players that never appear on
/// a roster get an empty `DNP` record so every pick can be enriched.
pub fn collect_player_weeks(
    snapshots: &[(Week, WeekSnapshot)],
    draft_picks: &[DraftPickEntry],
) -> BTreeMap<PlayerId, PlayerWeeks> {
    let mut players: BTreeMap<PlayerId, PlayerWeeks> = BTreeMap::new();

    for (week, snapshot) in snapshots {
        let entries = snapshot
            .teams
            .iter()
            .filter_map(|t| t.roster.as_ref())
            .flat_map(|r| r.entries.iter());

        for entry in entries {
            let Some(pid) = entry.player() else {
                continue;
            };
            let record = players
                .entry(pid)
                .or_insert_with(|| PlayerWeeks::new(PlayerInfo::unknown(DEFAULT_INJURY_STATUS)));

            let Some(pool) = entry.player_pool_entry.as_ref() else {
                continue;
            };
            if let Some(player) = pool.player.as_ref() {
                record.info = player_info(player);
                if let Some(points) = player.actual_points(*week) {
                    record.weekly_scores.insert(*week, points);
                }
            }
            if !record.weekly_scores.contains_key(week) && pool.applied_stat_total > 0.0 {
                record
                    .weekly_scores
                    .insert(*week, pool.applied_stat_total);
            }
        }
    }

    for pid in draft_picks.iter().filter_map(DraftPickEntry::player) {
        players.entry(pid).or_insert_with(|| PlayerWeeks {
            info: PlayerInfo::unknown(DID_NOT_PLAY),
            weekly_scores: BTreeMap::new(),
            seen_on_roster: false,
        });
    }

    players
}

/// Decided games of the season. Undecided games (no winner) are skipped.
pub fn extract_matchups(season: &SeasonData, year: Season) -> Vec<Matchup> {
    let teams = team_directory(season);
    let name_of = |id: Option<u32>| {
        id.and_then(|id| teams.get(&id))
            .map(|t| (t.name.clone(), t.abbrev.clone()))
            .unwrap_or_else(|| (UNKNOWN_NAME.to_string(), UNKNOWN_ABBREV.to_string()))
    };

    season
        .schedule
        .iter()
        .filter_map(|game| {
            let winner = game.winner.clone()?;
            let home = game.home.clone().unwrap_or_default();
            let away = game.away.clone().unwrap_or_default();

            let mut home_score = home.total_points;
            let mut away_score = away.total_points;
            if home_score == 0.0 {
                home_score = home.points_for_period(game.matchup_period_id);
            }
            if away_score == 0.0 {
                away_score = away.points_for_period(game.matchup_period_id);
            }

            let (home_name, home_abbrev) = name_of(home.team_id);
            let (away_name, away_abbrev) = name_of(away.team_id);
            let playoff_type = game
                .playoff_tier_type
                .clone()
                .unwrap_or_else(|| NO_PLAYOFF.to_string());

            let home_side = (home.team_id, home_name.clone(), round2(home_score));
            let away_side = (away.team_id, away_name.clone(), round2(away_score));
            // Anything but a home win (ties included) lists the away side first
            let (win, lose) = if winner == HOME {
                (&home_side, &away_side)
            } else {
                (&away_side, &home_side)
            };

            Some(Matchup {
                year,
                week: game.matchup_period_id,
                matchup_id: game.id,
                home_team_id: home.team_id,
                home_team_name: home_name,
                home_team_abbrev: home_abbrev,
                home_score: home_side.2,
                away_team_id: away.team_id,
                away_team_name: away_name,
                away_team_abbrev: away_abbrev,
                away_score: away_side.2,
                winner,
                is_playoff: playoff_type != NO_PLAYOFF,
                playoff_type,
                margin: round2((home_score - away_score).abs()),
                winning_team_id: win.0,
                winning_team_name: win.1.clone(),
                winning_score: win.2,
                losing_team_id: lose.0,
                losing_team_name: lose.1.clone(),
                losing_score: lose.2,
            })
        })
        .collect()
}

/// Final standings line for each team.
pub fn extract_team_records(season: &SeasonData, year: Season) -> Vec<TeamRecord> {
    season
        .teams
        .iter()
        .map(|team| {
            let record = team.overall_record();
            TeamRecord {
                year,
                team_id: team.id,
                team_name: team.display_name(),
                abbrev: team.display_abbrev(),
                wins: record.wins,
                losses: record.losses,
                ties: record.ties,
                points_for: round2(record.points_for),
                points_against: round2(record.points_against),
                playoff_seed: team.playoff_seed,
                final_rank: team.rank_calculated_final,
                draft_position: team.draft_day_projected_rank,
            }
        })
        .collect()
}

/// Season stats for a pick whose player never produced a roster week.
fn unplayed_stats(pick: &DraftPickEntry) -> PlayerSeasonStats {
    let info = pool_player(pick.player_pool_entry.as_ref())
        .map(player_info)
        .unwrap_or_else(|| PlayerInfo::unknown(DID_NOT_PLAY));
    PlayerSeasonStats::did_not_play(info)
}

/// Draft picks enriched with each drafted player's regular season.
pub fn extract_draft(
    season: &SeasonData,
    year: Season,
    players: &BTreeMap<PlayerId, PlayerWeeks>,
) -> SeasonDraft {
    let mut draft = SeasonDraft::empty(year);
    if season.draft_picks().is_empty() {
        return draft;
    }

    let teams = team_directory(season);
    let stats = compute_season_stats(players);

    for pick in season.draft_picks() {
        let team = pick.team_id.and_then(|id| teams.get(&id));
        let played = pick
            .player()
            .filter(|pid| players.get(pid).is_some_and(|p| p.seen_on_roster))
            .and_then(|pid| stats.get(&pid).cloned());

        draft.picks.push(DraftPick {
            year,
            round: pick.round_id,
            pick_number: pick.round_pick_number,
            overall_pick: pick.overall_pick_number,
            team_id: pick.team_id.unwrap_or(0),
            team_name: team
                .map(|t| t.name.clone())
                .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            owner_name: team
                .map(|t| t.owner_name.clone())
                .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            player_id: pick.player_id.unwrap_or(0),
            keeper: pick.keeper,
            bid_amount: pick.bid_amount,
            stats: played.unwrap_or_else(|| unplayed_stats(pick)),
        });
    }

    draft
}
