use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    matches::{get_live_match_stats, get_live_matches, get_tournament_stats},
    rankings::{get_player_details, get_tournament_calendar, get_wta_rankings, search_tennis_data},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    let tennis = Router::new()
        .route("/rankings/wta", get(get_wta_rankings))
        .route("/search", get(search_tennis_data))
        .route("/player/:player_id", get(get_player_details))
        .route("/calendar", get(get_tournament_calendar))
        .route("/matches/live", get(get_live_matches))
        .route("/matches/:match_id", get(get_live_match_stats))
        .route("/tournaments/:tournament_id/stats", get(get_tournament_stats));

    Router::new().nest("/api/tennis", tennis).with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::settings::CacheSettings;
    use crate::errors::UpstreamError;
    use crate::services::testing::FakeUpstream;
    use crate::services::{MatchStatsService, RankingsService};

    fn app(fake: &Arc<FakeUpstream>) -> Router {
        let state = Arc::new(AppState {
            rankings: RankingsService::new(fake.clone()),
            match_stats: MatchStatsService::new(fake.clone(), &CacheSettings::default()),
        });
        create_router(state)
    }

    async fn call(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn json_body(body: &[u8]) -> Value {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn rankings_are_returned_in_order() {
        let fake = Arc::new(FakeUpstream::new());
        fake.ok(
            "/tennis/rankings/wta/live",
            r#"[{"rank":1,"playerName":"X","country":"USA","points":100,
                "tournamentsPlayed":5,"pointsToDefend":"50"}]"#,
        );

        let (status, body) = call(&app(&fake), "/api/tennis/rankings/wta").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json_body(&body),
            json!([{
                "rank": 1,
                "playerName": "X",
                "country": "USA",
                "points": 100,
                "tournamentsPlayed": 5,
                "pointsToDefend": "50"
            }])
        );
    }

    #[tokio::test]
    async fn upstream_404_on_rankings_is_local_404() {
        let fake = Arc::new(FakeUpstream::new());
        fake.status("/tennis/rankings/wta/live", 404);

        let (status, body) = call(&app(&fake), "/api/tennis/rankings/wta").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let envelope = json_body(&body);
        assert_eq!(envelope["status"], 404);
        assert!(envelope["message"].as_str().unwrap().starts_with("API Error: "));
    }

    #[tokio::test]
    async fn empty_rankings_body_is_404() {
        let fake = Arc::new(FakeUpstream::new());
        fake.ok("/tennis/rankings/wta/live", "");

        let (status, body) = call(&app(&fake), "/api/tennis/rankings/wta").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn transport_failure_is_500_envelope() {
        let fake = Arc::new(FakeUpstream::new());
        fake.respond(
            "/tennis/calendar",
            Err(UpstreamError::Transport("operation timed out".to_string())),
        );

        let (status, body) = call(&app(&fake), "/api/tennis/calendar").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let envelope = json_body(&body);
        assert_eq!(envelope["status"], 500);
        assert!(!envelope["message"].as_str().unwrap().is_empty());
        assert!(envelope["timestamp"].is_string());
    }

    #[tokio::test]
    async fn every_route_maps_transport_failure_to_500() {
        let fake = Arc::new(FakeUpstream::new());
        let app = app(&fake);

        for uri in [
            "/api/tennis/rankings/wta",
            "/api/tennis/search?query=x",
            "/api/tennis/player/p1",
            "/api/tennis/calendar",
            "/api/tennis/matches/live",
            "/api/tennis/matches/m1",
            "/api/tennis/tournaments/t1/stats",
        ] {
            let (status, body) = call(&app, uri).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
            assert_eq!(json_body(&body)["status"], 500, "{}", uri);
        }
    }

    #[tokio::test]
    async fn search_forwards_query() {
        let fake = Arc::new(FakeUpstream::new());
        fake.ok("/tennis/search", r#"[{"type":"player","name":"Sabalenka"}]"#);

        let (status, body) = call(&app(&fake), "/api/tennis/search?query=sabalenka").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body)[0]["name"], "Sabalenka");
        assert_eq!(fake.last_query(), vec![("q".to_string(), "sabalenka".to_string())]);
    }

    #[tokio::test]
    async fn search_without_query_is_400() {
        let fake = Arc::new(FakeUpstream::new());

        let (status, body) = call(&app(&fake), "/api/tennis/search").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_body(&body)["status"], 400);
        assert_eq!(fake.total_calls(), 0);
    }

    #[tokio::test]
    async fn player_and_calendar_pass_through() {
        let fake = Arc::new(FakeUpstream::new());
        fake.ok("/tennis/player/42", r#"{"id":42,"name":"Rybakina"}"#);
        fake.ok("/tennis/calendar", r#"{"events":[{"name":"Australian Open"}]}"#);
        let app = app(&fake);

        let (status, body) = call(&app, "/api/tennis/player/42").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body), json!({"id":42,"name":"Rybakina"}));

        let (status, body) = call(&app, "/api/tennis/calendar").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body)["events"][0]["name"], "Australian Open");
    }

    #[tokio::test]
    async fn match_stats_served_from_cache_when_upstream_goes_away() {
        let fake = Arc::new(FakeUpstream::new());
        fake.ok(
            "/matches/abc123/stats",
            r#"{"matchId":"abc123","player1Score":2,"player2Score":1,"currentSet":"2"}"#,
        )
        .respond(
            "/matches/abc123/stats",
            Err(UpstreamError::Transport("connection refused".to_string())),
        );
        let app = app(&fake);

        let (first_status, first_body) = call(&app, "/api/tennis/matches/abc123").await;
        let (second_status, second_body) = call(&app, "/api/tennis/matches/abc123").await;

        assert_eq!(first_status, StatusCode::OK);
        assert_eq!(second_status, StatusCode::OK);
        assert_eq!(first_body, second_body);
        assert_eq!(json_body(&first_body)["matchId"], "abc123");
        assert_eq!(fake.calls_to("/matches/abc123/stats"), 1);
    }

    #[tokio::test]
    async fn live_matches_route_is_not_cached() {
        let fake = Arc::new(FakeUpstream::new());
        fake.ok("/matches/live", r#"[{"matchId":"a"},{"matchId":"b"}]"#);
        let app = app(&fake);

        for _ in 0..3 {
            let (status, body) = call(&app, "/api/tennis/matches/live").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(json_body(&body).as_array().unwrap().len(), 2);
        }
        assert_eq!(fake.calls_to("/matches/live"), 3);
    }

    #[tokio::test]
    async fn tournament_stats_route() {
        let fake = Arc::new(FakeUpstream::new());
        fake.ok(
            "/tournaments/rg-2025/stats",
            r#"[{"matchId":"qf1","tournamentName":"Roland Garros"}]"#,
        );
        let app = app(&fake);

        let (status, body) = call(&app, "/api/tennis/tournaments/rg-2025/stats").await;
        call(&app, "/api/tennis/tournaments/rg-2025/stats").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body)[0]["tournamentName"], "Roland Garros");
        assert_eq!(fake.calls_to("/tournaments/rg-2025/stats"), 1);
    }

    #[tokio::test]
    async fn match_with_null_fields_is_200() {
        let fake = Arc::new(FakeUpstream::new());
        fake.ok(
            "/matches/m1/stats",
            r#"{"matchId":"m1","currentGame":null,"player2Stats":null}"#,
        );

        let (status, body) = call(&app(&fake), "/api/tennis/matches/m1").await;

        assert_eq!(status, StatusCode::OK);
        let stats = json_body(&body);
        assert_eq!(stats["matchId"], "m1");
        assert_eq!(stats["currentGame"], "");
        assert_eq!(stats["player2Stats"]["aces"], 0);
    }

    #[tokio::test]
    async fn empty_match_bodies_are_200_without_body() {
        let fake = Arc::new(FakeUpstream::new());
        fake.ok("/matches/m1/stats", "");
        fake.ok("/matches/live", "");
        fake.ok("/tournaments/t1/stats", "");
        let app = app(&fake);

        for uri in [
            "/api/tennis/matches/m1",
            "/api/tennis/matches/live",
            "/api/tennis/tournaments/t1/stats",
        ] {
            let (status, body) = call(&app, uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert!(body.is_empty(), "{}", uri);
        }

        call(&app, "/api/tennis/matches/m1").await;
        assert_eq!(fake.calls_to("/matches/m1/stats"), 2);
    }

    #[tokio::test]
    async fn upstream_rate_limit_keeps_status() {
        let fake = Arc::new(FakeUpstream::new());
        fake.status("/matches/live", 429);

        let (status, body) = call(&app(&fake), "/api/tennis/matches/live").await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(json_body(&body)["status"], 429);
    }
}
