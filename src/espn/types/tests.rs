//! Unit tests for ESPN payload types

use super::*;
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    #[test]
    fn test_lenient_f64() {
        assert_eq!(lenient_f64(&json!(12.5)), 12.5);
        assert_eq!(lenient_f64(&json!(7)), 7.0);
        assert_eq!(lenient_f64(&json!("3.25")), 3.25);
        assert_eq!(lenient_f64(&json!("n/a")), 0.0);
        assert_eq!(lenient_f64(&json!(null)), 0.0);
        assert_eq!(lenient_f64(&json!({"a": 1})), 0.0);
    }

    #[test]
    fn test_season_data_null_collections() {
        let data: SeasonData = serde_json::from_value(json!({
            "teams": null,
            "members": null,
            "schedule": null
        }))
        .unwrap();

        assert!(data.teams.is_empty());
        assert!(data.members.is_empty());
        assert!(data.schedule.is_empty());
        assert!(data.draft_picks().is_empty());
    }

    #[test]
    fn test_team_defaults() {
        let team: Team = serde_json::from_value(json!({"id": 7})).unwrap();
        assert_eq!(team.display_name(), "Team 7");
        assert_eq!(team.display_abbrev(), "T7");
        assert_eq!(team.playoff_seed, 0);

        let record = team.overall_record();
        assert_eq!(record.wins, 0);
        assert_eq!(record.points_for, 0.0);
    }

    #[test]
    fn test_team_record_parsing() {
        let team: Team = serde_json::from_value(json!({
            "id": 3,
            "name": "Gridiron Gurus",
            "abbrev": "GG",
            "primaryOwner": "{OWNER-3}",
            "playoffSeed": 2,
            "rankCalculatedFinal": 1,
            "draftDayProjectedRank": 5,
            "record": {
                "overall": {
                    "wins": 10,
                    "losses": 4,
                    "ties": 0,
                    "pointsFor": 1650.456,
                    "pointsAgainst": "1500.1"
                }
            }
        }))
        .unwrap();

        assert_eq!(team.display_name(), "Gridiron Gurus");
        assert_eq!(team.primary_owner.as_deref(), Some("{OWNER-3}"));
        assert_eq!(team.rank_calculated_final, 1);
        let record = team.overall_record();
        assert_eq!(record.wins, 10);
        assert_eq!(record.points_for, 1650.456);
        assert_eq!(record.points_against, 1500.1);
    }

    #[test]
    fn test_member_display_name() {
        let named: Member = serde_json::from_value(json!({
            "id": "{A}",
            "firstName": "Pat",
            "lastName": "Jones"
        }))
        .unwrap();
        assert_eq!(named.display_name(), "Pat Jones");

        let first_only: Member =
            serde_json::from_value(json!({"id": "{B}", "firstName": "Sam"})).unwrap();
        assert_eq!(first_only.display_name(), "Sam");

        let anonymous: Member = serde_json::from_value(json!({"id": "{C}"})).unwrap();
        assert_eq!(anonymous.display_name(), "Owner {C}");
    }

    #[test]
    fn test_points_for_period() {
        let side: MatchupSide = serde_json::from_value(json!({
            "teamId": 1,
            "totalPoints": 0,
            "pointsByScoringPeriod": {"3": 101.5, "4": null}
        }))
        .unwrap();

        assert_eq!(side.points_for_period(Some(3)), 101.5);
        assert_eq!(side.points_for_period(Some(4)), 0.0);
        assert_eq!(side.points_for_period(Some(5)), 0.0);
        assert_eq!(side.points_for_period(None), 0.0);
    }

    #[test]
    fn test_draft_pick_zero_player_id_is_absent() {
        let pick: DraftPickEntry = serde_json::from_value(json!({
            "playerId": 0,
            "roundId": 1,
            "overallPickNumber": 4
        }))
        .unwrap();
        assert!(pick.player().is_none());
        assert!(!pick.keeper);
        assert_eq!(pick.bid_amount, 0);

        let pick: DraftPickEntry =
            serde_json::from_value(json!({"playerId": -16001, "keeper": true})).unwrap();
        assert_eq!(pick.player(), Some(PlayerId::new(-16001)));
        assert!(pick.keeper);
    }

    #[test]
    fn test_actual_points_ignores_projections() {
        let player: Player = serde_json::from_value(json!({
            "fullName": "Test Player",
            "defaultPositionId": 2,
            "stats": [
                {"scoringPeriodId": 5, "statSourceId": 1, "appliedTotal": 30.0},
                {"scoringPeriodId": 5, "statSourceId": 0, "appliedTotal": 12.4},
                {"scoringPeriodId": 6, "statSourceId": 0, "appliedTotal": 9.0}
            ]
        }))
        .unwrap();

        assert_eq!(player.actual_points(Week::new(5)), Some(12.4));
        assert_eq!(player.actual_points(Week::new(6)), Some(9.0));
        assert_eq!(player.actual_points(Week::new(7)), None);
    }

    #[test]
    fn test_week_snapshot_parsing() {
        let snapshot: WeekSnapshot = serde_json::from_value(json!({
            "teams": [
                {"id": 1, "roster": {"entries": [
                    {"playerId": 100, "playerPoolEntry": {"appliedStatTotal": "8.5"}}
                ]}},
                {"id": 2, "roster": null},
                {"id": 3}
            ]
        }))
        .unwrap();

        assert_eq!(snapshot.teams.len(), 3);
        let entries = &snapshot.teams[0].roster.as_ref().unwrap().entries;
        assert_eq!(entries[0].player(), Some(PlayerId::new(100)));
        assert_eq!(
            entries[0].player_pool_entry.as_ref().unwrap().applied_stat_total,
            8.5
        );
        assert!(snapshot.teams[1].roster.is_none());
    }
}

#[cfg(test)]
mod status_tests {
    use super::*;

    #[test]
    fn test_week_finished_follows_latest_scoring_period() {
        let status = LeagueStatus::of(&json!({
            "status": {"isActive": true, "latestScoringPeriod": 10}
        }))
        .unwrap();

        assert!(!status.season_finished());
        assert!(status.week_finished(Week::new(9)));
        assert!(!status.week_finished(Week::new(10)));
        assert!(!status.week_finished(Week::new(14)));
    }

    #[test]
    fn test_inactive_season_is_finished() {
        let status = LeagueStatus::of(&json!({
            "status": {"isActive": false, "latestScoringPeriod": 18}
        }))
        .unwrap();

        assert!(status.season_finished());
        assert!(status.week_finished(Week::new(14)));
    }

    #[test]
    fn test_missing_status() {
        assert!(LeagueStatus::of(&json!({"teams": []})).is_none());
        assert!(LeagueStatus::of(&json!({"status": "live"})).is_none());

        let empty = LeagueStatus::of(&json!({"status": {}})).unwrap();
        assert!(!empty.season_finished());
        assert!(!empty.week_finished(Week::new(1)));
    }
}
