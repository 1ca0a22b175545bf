//! Unit tests for command handlers

use super::*;

#[cfg(test)]
mod league_id_tests {
    use super::*;

    #[test]
    fn test_resolve_league_id_from_option() {
        let result = resolve_league_id(Some(LeagueId::new(12345)));
        assert_eq!(result.unwrap().as_u32(), 12345);
    }

    // Env vars are process-global, so the env cases run in one test.
    #[test]
    fn test_resolve_league_id_env_fallback() {
        std::env::set_var(LEAGUE_ID_ENV_VAR, "54321");
        assert_eq!(resolve_league_id(None).unwrap().as_u32(), 54321);

        // The flag wins over the env var
        assert_eq!(
            resolve_league_id(Some(LeagueId::new(777))).unwrap().as_u32(),
            777
        );

        std::env::set_var(LEAGUE_ID_ENV_VAR, "not_a_number");
        assert!(resolve_league_id(None).is_err());

        std::env::remove_var(LEAGUE_ID_ENV_VAR);
        match resolve_league_id(None).unwrap_err() {
            EspnError::MissingLeagueId { env_var } => {
                assert_eq!(env_var, LEAGUE_ID_ENV_VAR);
            }
            other => panic!("Expected MissingLeagueId error, got {:?}", other),
        }
    }
}

#[cfg(test)]
mod export_tests {
    use crate::{
        commands::fetch_history::{write_exports, LeagueHistory},
        core::outputs::{existing_outputs, COMPLETE_DATA_JSON, DRAFT_DATA_JSON},
        espn::records::SeasonDraft,
        Season,
    };
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_empty_history_writes_only_json() {
        let temp_dir = TempDir::new().unwrap();

        write_exports(&LeagueHistory::default(), temp_dir.path()).unwrap();

        assert_eq!(
            existing_outputs(temp_dir.path()),
            vec![
                temp_dir.path().join(COMPLETE_DATA_JSON),
                temp_dir.path().join(DRAFT_DATA_JSON),
            ]
        );
        let raw = std::fs::read_to_string(temp_dir.path().join(COMPLETE_DATA_JSON)).unwrap();
        assert_eq!(raw, "{}");
    }

    #[test]
    fn test_json_dumps_are_keyed_by_year() {
        let temp_dir = TempDir::new().unwrap();
        let mut history = LeagueHistory::default();
        history
            .raw_data
            .insert(Season::new(2018), json!({"seasonId": 2018}));
        history
            .drafts
            .insert(Season::new(2018), SeasonDraft::empty(Season::new(2018)));

        write_exports(&history, temp_dir.path()).unwrap();

        let raw: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(temp_dir.path().join(COMPLETE_DATA_JSON)).unwrap(),
        )
        .unwrap();
        assert_eq!(raw["2018"]["seasonId"], 2018);

        let drafts: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(temp_dir.path().join(DRAFT_DATA_JSON)).unwrap(),
        )
        .unwrap();
        assert_eq!(drafts["2018"]["year"], 2018);
        // No picks, so no pick table
        assert_eq!(existing_outputs(temp_dir.path()).len(), 2);
    }
}

#[cfg(test)]
mod outputs_tests {
    use crate::{commands::list_outputs::handle_list_outputs, core::outputs::STANDINGS_CSV};
    use tempfile::TempDir;

    #[test]
    fn test_handle_list_outputs() {
        let temp_dir = TempDir::new().unwrap();
        assert!(handle_list_outputs(temp_dir.path()).is_empty());

        std::fs::write(temp_dir.path().join(STANDINGS_CSV), "year\n").unwrap();
        assert_eq!(
            handle_list_outputs(temp_dir.path()),
            vec![temp_dir.path().join(STANDINGS_CSV)]
        );
    }
}
