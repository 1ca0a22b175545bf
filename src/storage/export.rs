//! CSV and JSON writers for the export files

use std::{fs, fs::File, io::BufWriter, path::Path};

use serde::Serialize;

use crate::{
    cli::types::{Position, Season},
    espn::records::DraftPick,
    Result,
};

fn create_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(File::create(path)?)
}

/// Write `rows` as a CSV table with a header taken from the field names.
/// Returns the number of data rows written.
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(create_file(path)?);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(rows.len())
}

/// Pretty-printed JSON with two-space indentation.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut writer = BufWriter::new(create_file(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    std::io::Write::flush(&mut writer)?;
    Ok(())
}

/// The columns of the draft-pick table. Weekly scores and ids stay in the
/// JSON dump.
#[derive(Debug, Serialize)]
pub struct DraftPickRow<'a> {
    pub year: Season,
    pub round: u32,
    pub overall_pick: u32,
    pub team_name: &'a str,
    pub owner_name: &'a str,
    pub player_name: &'a str,
    pub position: Position,
    pub season_points: f64,
    pub games_played: u32,
    pub consistency_score: f64,
    pub boom_games: u32,
    pub bust_games: u32,
    pub non_scoring_games: u32,
    pub best_week: f64,
    pub worst_week: f64,
    pub playoff_points: f64,
}

impl<'a> From<&'a DraftPick> for DraftPickRow<'a> {
    fn from(pick: &'a DraftPick) -> Self {
        let stats = &pick.stats;
        Self {
            year: pick.year,
            round: pick.round,
            overall_pick: pick.overall_pick,
            team_name: &pick.team_name,
            owner_name: &pick.owner_name,
            player_name: &stats.player_name,
            position: stats.position,
            season_points: stats.season_points,
            games_played: stats.games_played,
            consistency_score: stats.consistency_score,
            boom_games: stats.boom_games,
            bust_games: stats.bust_games,
            non_scoring_games: stats.non_scoring_games,
            best_week: stats.best_week,
            worst_week: stats.worst_week,
            playoff_points: stats.playoff_points,
        }
    }
}

pub fn write_draft_picks_csv<'a, I>(path: &Path, picks: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a DraftPick>,
{
    let rows: Vec<DraftPickRow<'a>> = picks.into_iter().map(DraftPickRow::from).collect();
    write_csv(path, &rows)
}
