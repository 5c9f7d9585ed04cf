// Axum API Server Module
//
// Purpose: JSON API over the scenario catalog, gallery pipeline, demo player
// data and showcase hotspots. Everything served is static mock data; the
// only mutable state is the gallery result cache.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use moka::future::Cache;

use std::sync::Arc;

use anyhow::Context;

use crate::catalog::{loader, Catalog, ParseError, Scenario};
use crate::config::ServerConfig;
use crate::demo::{format_time, DemoScenario, DetectionStats};
use crate::gallery::{filter_and_sort, CatalogStats, GalleryQuery, GallerySummary, NarrationScript};
use crate::showcase::{hotspots, HotspotId};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    /// Gallery responses keyed by normalized criteria
    pub cache: Cache<String, serde_json::Value>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading scenario catalog...");
        let catalog = loader::load_or_builtin(config.scenarios_path.as_deref())
            .context("failed to load scenario catalog")?;
        Ok(Self::with_catalog(catalog, config))
    }

    pub fn with_catalog(catalog: Catalog, config: &ServerConfig) -> Self {
        tracing::info!("Initializing Moka cache...");
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            catalog: Arc::new(catalog),
            cache,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Gallery
        .route("/api/scenarios", get(list_scenarios))
        .route("/api/scenarios/stats", get(scenario_stats))
        .route("/api/scenarios/:id", get(get_scenario))
        .route("/api/scenarios/:id/narration", get(get_scenario_narration))

        // Demo player
        .route("/api/demos", get(list_demos))
        .route("/api/demos/:key/detections", get(get_demo_detections))

        // Product showcase
        .route("/api/hotspots", get(list_hotspots))
        .route("/api/hotspots/:id", get(get_hotspot))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "scenarios": state.catalog.len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_scenarios(
    State(state): State<AppState>,
    query: Result<Query<GalleryQuery>, QueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Query(query) = query?;
    let criteria = query.into_criteria()?;
    let cache_key = criteria.cache_key();

    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for {}", cache_key);
        return Ok(Json(cached));
    }

    let start = std::time::Instant::now();
    let shown = filter_and_sort(state.catalog.scenarios(), &criteria);
    let summary = GallerySummary::new(&shown, &state.catalog, &criteria);
    let elapsed = start.elapsed();

    let result = serde_json::json!({
        "criteria": {
            "category": criteria.category.to_string(),
            "difficulty": criteria.difficulty.to_string(),
            "sort": criteria.sort.as_str(),
            // cached per lower-cased search, so echo that form
            "q": criteria.search.to_lowercase(),
        },
        "summary": summary,
        "rows": shown.len(),
        "data": shown,
        "query_time_us": elapsed.as_micros(),
    });

    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

async fn scenario_stats(State(state): State<AppState>) -> Json<CatalogStats> {
    Json(CatalogStats::compute(&state.catalog))
}

async fn get_scenario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let scenario = lookup_scenario(&state, &id)?;

    Ok(Json(serde_json::to_value(scenario).map_err(|e| {
        AppError::Internal(format!("JSON serialization error: {}", e))
    })?))
}

async fn get_scenario_narration(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NarrationScript>, AppError> {
    let scenario = lookup_scenario(&state, &id)?;
    Ok(Json(NarrationScript::for_scenario(scenario)))
}

/// Ids that do not parse name no scenario, same as unknown ids
fn lookup_scenario<'a>(state: &'a AppState, id: &str) -> Result<&'a Scenario, AppError> {
    id.parse::<u32>()
        .ok()
        .and_then(|n| state.catalog.get(n))
        .ok_or_else(|| AppError::NotFound(format!("Scenario {} not found", id)))
}

async fn list_demos() -> impl IntoResponse {
    let demos: Vec<_> = DemoScenario::ALL.iter().map(DemoScenario::info).collect();
    Json(serde_json::json!({
        "default": DemoScenario::default(),
        "rows": demos.len(),
        "data": demos,
    }))
}

async fn get_demo_detections(
    Path(key): Path<String>,
    query: Result<Query<DetectionQuery>, QueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Query(query) = query?;
    let demo: DemoScenario = key
        .parse()
        .map_err(|e: ParseError| AppError::NotFound(e.to_string()))?;

    let t = query.t.unwrap_or(0.0);
    if !t.is_finite() {
        return Err(AppError::BadRequest(format!("invalid time {}", t)));
    }

    let detections = demo.detections_at(t);
    Ok(Json(serde_json::json!({
        "scenario": demo,
        "title": demo.display_title(),
        "time": format_time(t),
        "stats": DetectionStats::of(detections),
        "detections": detections,
    })))
}

async fn list_hotspots() -> impl IntoResponse {
    let all = hotspots();
    Json(serde_json::json!({
        "rows": all.len(),
        "data": all,
    }))
}

async fn get_hotspot(Path(id): Path<String>) -> Result<Json<serde_json::Value>, AppError> {
    let id: HotspotId = id
        .parse()
        .map_err(|e: ParseError| AppError::NotFound(e.to_string()))?;

    let hotspot = id.hotspot();
    let narration = hotspot.selection_utterance();
    Ok(Json(serde_json::json!({
        "hotspot": hotspot,
        "narration": narration,
    })))
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(serde::Deserialize, Debug)]
struct DetectionQuery {
    /// Seconds into the clip
    t: Option<f64>,
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<ParseError> for AppError {
    fn from(e: ParseError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
