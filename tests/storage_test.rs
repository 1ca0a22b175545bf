//! Export files written from extracted league data

use std::fs;

use espn_ffl_history::{
    espn::{extract::extract_matchups, types::SeasonData},
    storage::write_csv,
    Season,
};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_matchups_csv_layout() {
    let data: SeasonData = serde_json::from_value(json!({
        "teams": [{"id": 1, "name": "Alpha", "abbrev": "ALP"}],
        "schedule": [{
            "id": 9, "matchupPeriodId": 15, "winner": "HOME",
            "playoffTierType": "WINNERS_BRACKET",
            "home": {"teamId": 1, "totalPoints": 120.5},
            "away": {"totalPoints": 99.25}
        }]
    }))
    .unwrap();
    let matchups = extract_matchups(&data, Season::new(2022));

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("espn_fantasy_matchups.csv");
    assert_eq!(write_csv(&path, &matchups).unwrap(), 1);

    let contents = fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "year,week,matchup_id,home_team_id,home_team_name,home_team_abbrev,home_score,\
         away_team_id,away_team_name,away_team_abbrev,away_score,winner,playoff_type,\
         is_playoff,margin,winning_team_id,winning_team_name,winning_score,losing_team_id,\
         losing_team_name,losing_score"
    );
    // A missing away team leaves its id column empty
    assert_eq!(
        lines.next().unwrap(),
        "2022,15,9,1,Alpha,ALP,120.5,,Unknown,UNK,99.25,HOME,WINNERS_BRACKET,true,21.25,1,Alpha,120.5,,Unknown,99.25"
    );
    assert!(lines.next().is_none());
}
