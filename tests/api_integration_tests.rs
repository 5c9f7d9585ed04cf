// API Integration Tests
//
// Purpose: Exercise every endpoint against the built-in catalog
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot
    use visionx::{create_router, AppState, Catalog, ServerConfig};

    // Helper: Create test app over the built-in catalog
    fn create_test_app() -> axum::Router {
        let state = AppState::with_catalog(Catalog::builtin(), &ServerConfig::default());
        create_router(state)
    }

    // Helper: Issue a GET and return (status, parsed body)
    async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        (status, json_response(response).await)
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    fn ids(body: &Value) -> Vec<u64> {
        body["data"]
            .as_array()
            .expect("data array")
            .iter()
            .map(|s| s["id"].as_u64().unwrap())
            .collect()
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get(create_test_app(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["scenarios"], 10);
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: Gallery - Filter, Sort, Search
    // =========================================================================

    #[tokio::test]
    async fn test_scenarios_default_view() {
        let (status, body) = get(create_test_app(), "/api/scenarios").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rows"], 10);
        assert_eq!(body["criteria"]["category"], "all");
        assert_eq!(body["criteria"]["sort"], "title");
        assert_eq!(body["summary"]["showing"], 10);
        assert_eq!(body["summary"]["total"], 10);
        assert_eq!(body["summary"]["has_active_filters"], false);
        // Title order
        assert_eq!(ids(&body), vec![8, 6, 10, 3, 2, 9, 7, 1, 5, 4]);
    }

    #[tokio::test]
    async fn test_scenarios_category_filter() {
        let (status, body) = get(create_test_app(), "/api/scenarios?category=Healthcare").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec![7, 1]);
        assert_eq!(body["summary"]["has_active_filters"], true);
    }

    #[tokio::test]
    async fn test_scenarios_combined_filters() {
        let (_, body) = get(
            create_test_app(),
            "/api/scenarios?category=Safety&difficulty=Hard&sort=rating",
        )
        .await;

        assert_eq!(ids(&body), vec![10, 4]);
    }

    #[tokio::test]
    async fn test_scenarios_sort_by_usage() {
        let (_, body) = get(create_test_app(), "/api/scenarios?sort=usage").await;
        assert_eq!(ids(&body), vec![4, 2, 8, 5, 3, 7, 1, 9, 6, 10]);
    }

    #[tokio::test]
    async fn test_scenarios_search_is_case_insensitive() {
        let (_, body) = get(create_test_app(), "/api/scenarios?q=NAVIGATION").await;

        assert_eq!(ids(&body), vec![9, 5, 4]);
        assert_eq!(body["criteria"]["q"], "navigation");
    }

    #[tokio::test]
    async fn test_cached_search_echo_ignores_first_caller_casing() {
        let app = create_test_app();

        let (_, first) = get(app.clone(), "/api/scenarios?q=EXIT").await;
        let (_, second) = get(app, "/api/scenarios?q=exit").await;

        assert_eq!(first["criteria"]["q"], "exit");
        assert_eq!(second["criteria"]["q"], "exit");
    }

    #[tokio::test]
    async fn test_scenarios_empty_result() {
        let (status, body) = get(create_test_app(), "/api/scenarios?q=submarine").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rows"], 0);
        assert_eq!(body["summary"]["total"], 10);
    }

    #[tokio::test]
    async fn test_scenarios_repeat_query_served_from_cache() {
        let state = AppState::with_catalog(Catalog::builtin(), &ServerConfig::default());
        let app = create_router(state.clone());

        let (_, first) = get(app.clone(), "/api/scenarios?sort=rating").await;
        let (_, second) = get(app, "/api/scenarios?sort=rating").await;

        assert_eq!(first, second);
        assert!(state.cache.get("gallery:all|all|rating|").await.is_some());
    }

    // =========================================================================
    // Section 3: Gallery - Strict Input
    // =========================================================================

    #[tokio::test]
    async fn test_unknown_category_rejected() {
        let (status, body) = get(create_test_app(), "/api/scenarios?category=Gardening").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Gardening"));
    }

    #[tokio::test]
    async fn test_unknown_sort_rejected() {
        let (status, _) = get(create_test_app(), "/api/scenarios?sort=popularity").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_category_values_are_case_sensitive() {
        let (status, _) = get(create_test_app(), "/api/scenarios?category=healthcare").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    // =========================================================================
    // Section 4: Scenario Detail, Stats, Narration
    // =========================================================================

    #[tokio::test]
    async fn test_get_scenario() {
        let (status, body) = get(create_test_app(), "/api/scenarios/8").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Currency & Money Recognition");
        assert_eq!(body["category"], "Shopping");
        assert_eq!(body["difficulty"], "Easy");
    }

    #[tokio::test]
    async fn test_get_scenario_not_found() {
        let (status, body) = get(create_test_app(), "/api/scenarios/99").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Scenario 99 not found");
    }

    #[tokio::test]
    async fn test_non_numeric_scenario_id_is_json_not_found() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/api/scenarios/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
        let body = json_response(response).await;
        assert_eq!(body["error"], "Scenario abc not found");
    }

    #[tokio::test]
    async fn test_non_numeric_narration_id_is_not_found() {
        let (status, body) = get(create_test_app(), "/api/scenarios/-1/narration").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_scenario_stats() {
        let (status, body) = get(create_test_app(), "/api/scenarios/stats").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scenario_count"], 10);
        assert_eq!(body["total_usage"], 173_200);
        let rating = body["average_rating"].as_f64().unwrap();
        approx::assert_relative_eq!(rating, 4.7, epsilon = 1e-9);
    }

    #[tokio::test]
    async fn test_scenario_narration() {
        let (status, body) = get(create_test_app(), "/api/scenarios/1/narration").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scenario_id"], 1);
        assert!(body["intro"]["text"]
            .as_str()
            .unwrap()
            .starts_with("Starting demonstration for Medicine Reading & Identification."));
        assert!(!body["steps"].as_array().unwrap().is_empty());
    }

    // =========================================================================
    // Section 5: Demo Player
    // =========================================================================

    #[tokio::test]
    async fn test_list_demos() {
        let (status, body) = get(create_test_app(), "/api/demos").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rows"], 5);
        assert_eq!(body["default"], "indoor-navigation");
        assert_eq!(body["data"][1]["key"], "outdoor-mobility");
    }

    #[tokio::test]
    async fn test_demo_detections_at_time() {
        let (status, body) =
            get(create_test_app(), "/api/demos/indoor-navigation/detections?t=6").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Indoor Navigation");
        assert_eq!(body["time"], "0:06");
        assert_eq!(body["stats"]["objects"], 3);
        assert_eq!(body["stats"]["average_confidence"], 89);
        assert_eq!(body["stats"]["high_confidence"], 1);
        assert_eq!(body["detections"][0]["label"], "Chair");
    }

    #[tokio::test]
    async fn test_demo_without_timeline_has_no_detections() {
        let (status, body) =
            get(create_test_app(), "/api/demos/face-recognition/detections").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stats"]["objects"], 0);
        assert!(body["detections"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_numeric_time_is_json_bad_request() {
        let (status, body) =
            get(create_test_app(), "/api/demos/indoor-navigation/detections?t=abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_demo_not_found() {
        let (status, _) = get(create_test_app(), "/api/demos/time-travel/detections").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    // =========================================================================
    // Section 6: Product Showcase
    // =========================================================================

    #[tokio::test]
    async fn test_list_hotspots() {
        let (status, body) = get(create_test_app(), "/api/hotspots").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rows"], 5);
        assert_eq!(body["data"][0]["id"], "camera");
    }

    #[tokio::test]
    async fn test_get_hotspot_with_narration() {
        let (status, body) = get(create_test_app(), "/api/hotspots/microphone").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hotspot"]["name"], "Voice Command Microphone");
        assert!(body["narration"]["text"]
            .as_str()
            .unwrap()
            .starts_with("Selected Voice Command Microphone."));
        approx::assert_relative_eq!(body["narration"]["voice"]["rate"].as_f64().unwrap(), 0.9, epsilon = 1e-6);
    }

    #[tokio::test]
    async fn test_unknown_hotspot_not_found() {
        let (status, body) = get(create_test_app(), "/api/hotspots/lens").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }
}
