//! Unit tests for the league snapshot client

use super::*;
use reqwest::header::{HeaderValue, ACCEPT};
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn finished_season() -> serde_json::Value {
    json!({"teams": [], "status": {"isActive": false, "latestScoringPeriod": 18}})
}

fn test_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

#[cfg(test)]
mod url_tests {
    use super::*;

    #[test]
    fn test_ffl_base_url_constant() {
        assert_eq!(
            FFL_BASE_URL,
            "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl"
        );
    }

    #[test]
    fn test_current_season_url() {
        let client = EspnClient::with_headers(test_headers());
        let url = client.snapshot_url(LeagueId::new(1488486), Season::new(2023), None);

        assert!(url.starts_with(
            "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl/seasons/2023/segments/0/leagues/1488486?view=mDraftDetail&"
        ));
        assert!(url.ends_with("view=kona_player_info"));
        assert_eq!(url.matches("view=").count(), 12);
    }

    #[test]
    fn test_historical_season_url() {
        let client = EspnClient::with_headers(test_headers());
        let url = client.snapshot_url(LeagueId::new(1488486), Season::new(2018), None);

        assert!(url.starts_with(
            "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl/leagueHistory/1488486?seasonId=2018&view=mDraftDetail"
        ));
    }

    #[test]
    fn test_week_url_appends_scoring_period() {
        let client = EspnClient::with_headers(test_headers()).with_base_url("http://localhost:1/");
        let current = client.snapshot_url(LeagueId::new(1), Season::new(2020), Some(Week::new(7)));
        let history = client.snapshot_url(LeagueId::new(1), Season::new(2016), Some(Week::new(7)));

        assert!(current.starts_with("http://localhost:1/seasons/2020/"));
        assert!(current.ends_with("&scoringPeriodId=7"));
        assert!(history.ends_with("&scoringPeriodId=7"));
        assert_eq!(history.matches('?').count(), 1);
    }

    #[test]
    fn test_unwrap_history_payload() {
        let historical = Season::new(2017);
        assert_eq!(
            unwrap_history_payload(historical, json!([{"id": 1}, {"id": 2}])).unwrap(),
            json!({"id": 1})
        );
        assert!(matches!(
            unwrap_history_payload(historical, json!([])),
            Err(EspnError::NoData)
        ));
        assert_eq!(
            unwrap_history_payload(historical, json!({"id": 3})).unwrap(),
            json!({"id": 3})
        );

        // Current seasons are returned untouched, lists included
        assert_eq!(
            unwrap_history_payload(Season::new(2022), json!([1, 2])).unwrap(),
            json!([1, 2])
        );
    }
}

#[cfg(test)]
mod http_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_current_season() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/seasons/2023/segments/0/leagues/12345"))
            .and(query_param("view", "mTeam"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"teams": [{"id": 1}]})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = EspnClient::with_headers(test_headers()).with_base_url(mock_server.uri());
        let (value, status) = client
            .fetch_season(LeagueId::new(12345), Season::new(2023))
            .await
            .unwrap();

        assert_eq!(value["teams"][0]["id"], 1);
        assert_eq!(status, CacheStatus::Miss);
    }

    #[tokio::test]
    async fn test_fetch_historical_week_unwraps_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/leagueHistory/12345"))
            .and(query_param("seasonId", "2017"))
            .and(query_param("scoringPeriodId", "3"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"seasonId": 2017, "teams": []}])),
            )
            .mount(&mock_server)
            .await;

        let client = EspnClient::with_headers(test_headers()).with_base_url(mock_server.uri());
        let (value, _) = client
            .fetch_week(LeagueId::new(12345), Season::new(2017), Week::new(3))
            .await
            .unwrap();

        assert_eq!(value, json!({"seasonId": 2017, "teams": []}));
    }

    #[tokio::test]
    async fn test_http_error_status_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = EspnClient::with_headers(test_headers()).with_base_url(mock_server.uri());
        let result = client
            .fetch_season(LeagueId::new(12345), Season::new(2023))
            .await;

        assert!(matches!(result, Err(EspnError::Http(_))));
    }

    #[tokio::test]
    async fn test_cache_hit_skips_network() {
        let mock_server = MockServer::start().await;
        let temp_dir = TempDir::new().unwrap();

        Mock::given(method("GET"))
            .and(path("/seasons/2022/segments/0/leagues/12345"))
            .respond_with(ResponseTemplate::new(200).set_body_json(finished_season()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = EspnClient::with_headers(test_headers())
            .with_base_url(mock_server.uri())
            .with_cache(ResponseCache::new(temp_dir.path()), false);

        let (_, first) = client
            .fetch_season(LeagueId::new(12345), Season::new(2022))
            .await
            .unwrap();
        let (value, second) = client
            .fetch_season(LeagueId::new(12345), Season::new(2022))
            .await
            .unwrap();

        assert_eq!(first, CacheStatus::Miss);
        assert_eq!(second, CacheStatus::Hit);
        assert_eq!(value, finished_season());
    }

    #[tokio::test]
    async fn test_refresh_bypasses_cache() {
        let mock_server = MockServer::start().await;
        let temp_dir = TempDir::new().unwrap();
        let cache = ResponseCache::new(temp_dir.path());
        let key = SnapshotCacheKey {
            league_id: LeagueId::new(12345),
            season: Season::new(2022),
            week: None,
        };
        cache.put(&key, &json!({"stale": true})).unwrap();

        let fresh = json!({"fresh": true, "status": {"isActive": false}});
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fresh.clone()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = EspnClient::with_headers(test_headers())
            .with_base_url(mock_server.uri())
            .with_cache(cache.clone(), true);

        let (value, status) = client
            .fetch_season(LeagueId::new(12345), Season::new(2022))
            .await
            .unwrap();

        assert_eq!(status, CacheStatus::Refreshed);
        assert_eq!(value, fresh);
        assert_eq!(cache.get(&key), Some(fresh));
    }

    #[tokio::test]
    async fn test_week_in_progress_is_fetched_again() {
        let mock_server = MockServer::start().await;
        let temp_dir = TempDir::new().unwrap();
        let cache = ResponseCache::new(temp_dir.path());
        let league = LeagueId::new(12345);

        let early = json!({"teams": [], "status": {"isActive": true, "latestScoringPeriod": 10}});
        let played = json!({
            "teams": [{"roster": {"entries": [{"playerId": 100}]}}],
            "status": {"isActive": true, "latestScoringPeriod": 11}
        });

        let scoped = Mock::given(method("GET"))
            .and(path("/seasons/2025/segments/0/leagues/12345"))
            .and(query_param("scoringPeriodId", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(early.clone()))
            .expect(1)
            .mount_as_scoped(&mock_server)
            .await;

        let client = EspnClient::with_headers(test_headers())
            .with_base_url(mock_server.uri())
            .with_cache(cache.clone(), false);

        let (first, first_status) = client
            .fetch_week(league, Season::new(2025), Week::new(10))
            .await
            .unwrap();
        drop(scoped);

        Mock::given(method("GET"))
            .and(path("/seasons/2025/segments/0/leagues/12345"))
            .and(query_param("scoringPeriodId", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(played.clone()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (second, second_status) = client
            .fetch_week(league, Season::new(2025), Week::new(10))
            .await
            .unwrap();

        assert_eq!((first, first_status), (early, CacheStatus::Miss));
        assert_eq!((second, second_status), (played.clone(), CacheStatus::Miss));

        // Week 10 is over once period 11 is live, so this copy is kept
        let key = SnapshotCacheKey {
            league_id: league,
            season: Season::new(2025),
            week: Some(Week::new(10)),
        };
        assert_eq!(cache.get(&key), Some(played));
    }

    #[tokio::test]
    async fn test_stale_cached_entry_is_ignored() {
        let mock_server = MockServer::start().await;
        let temp_dir = TempDir::new().unwrap();
        let cache = ResponseCache::new(temp_dir.path());
        let key = SnapshotCacheKey {
            league_id: LeagueId::new(12345),
            season: Season::new(2025),
            week: None,
        };
        // Written without a status block, so it cannot be trusted
        cache.put(&key, &json!({"teams": []})).unwrap();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"teams": [{"id": 1}]})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = EspnClient::with_headers(test_headers())
            .with_base_url(mock_server.uri())
            .with_cache(cache, false);
        let (value, status) = client
            .fetch_season(LeagueId::new(12345), Season::new(2025))
            .await
            .unwrap();

        assert_eq!(status, CacheStatus::Miss);
        assert_eq!(value["teams"][0]["id"], 1);
    }
}

#[cfg(test)]
mod settled_tests {
    use super::*;

    fn key(season: u16, week: Option<u16>) -> SnapshotCacheKey {
        SnapshotCacheKey {
            league_id: LeagueId::new(1),
            season: Season::new(season),
            week: week.map(Week::new),
        }
    }

    #[test]
    fn test_history_seasons_are_always_settled() {
        assert!(is_settled(&key(2017, None), &json!({})));
        assert!(is_settled(&key(2017, Some(4)), &json!({})));
    }

    #[test]
    fn test_current_api_needs_status() {
        let live = json!({"status": {"isActive": true, "latestScoringPeriod": 6}});
        let over = json!({"status": {"isActive": false}});

        assert!(!is_settled(&key(2024, None), &json!({"teams": []})));
        assert!(!is_settled(&key(2024, None), &live));
        assert!(is_settled(&key(2024, None), &over));
        assert!(is_settled(&key(2024, Some(5)), &live));
        assert!(!is_settled(&key(2024, Some(6)), &live));
        assert!(is_settled(&key(2024, Some(14)), &over));
    }
}
