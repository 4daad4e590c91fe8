//! HTTP API for Fortuna
//!
//! Endpoints:
//! - GET    /health               - Health check
//! - GET    /fortune/daily        - Daily fortune for an identity
//! - GET    /fortune/luck         - Identity-free day luck
//! - POST   /compat               - Full couple compatibility report
//! - POST   /compat/mbti          - Type-only match
//! - POST   /lotto/generate       - Generate sets, optionally saving them
//! - GET    /lotto/history        - List saved sets
//! - POST   /lotto/history        - Save one set
//! - DELETE /lotto/history        - Clear the history
//! - DELETE /lotto/history/:id    - Delete one record
//! - PATCH  /lotto/history/:id    - Update memo / toggle favorite
//! - GET    /lotto/stats          - Aggregate statistics
//! - GET    /lotto/recommend      - Cold-number recommendation

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::core::{compat, fortune, lotto, stats, HistoryStore};
use crate::types::{
    CompatibilityReport, CoreError, DailyFortune, DayLuck, Element, LottoRecord, LottoSet,
    LottoStats, Mbti, MbtiMatch,
};
use crate::LOTTO_SET_SIZE;

/// App state
pub struct AppState {
    pub store: RwLock<HistoryStore>,
}

/// Error body for every non-2xx response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(msg: impl Into<String>) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: msg.into() }))
}

fn core_error(err: CoreError) -> ApiError {
    let status = match err {
        CoreError::RecordNotFound(_) => StatusCode::NOT_FOUND,
        CoreError::Storage(_) | CoreError::Corrupted(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    };
    (status, Json(ErrorResponse { error: err.to_string() }))
}

/// Parse an optional YYYY-MM-DD date, defaulting to today
fn resolve_date(raw: Option<&str>) -> Result<NaiveDate, ApiError> {
    match raw {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| bad_request(format!("invalid date: {}", s))),
        None => Ok(Local::now().date_naive()),
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub saved_sets: usize,
}

/// Daily fortune query
#[derive(Debug, Deserialize)]
pub struct DailyFortuneQuery {
    pub mbti: String,
    pub element: String,
    pub date: Option<String>,
}

/// Day luck query
#[derive(Debug, Deserialize)]
pub struct DayLuckQuery {
    pub date: Option<String>,
}

/// Couple compatibility request
#[derive(Debug, Deserialize)]
pub struct CompatRequest {
    pub my_mbti: String,
    pub my_element: String,
    pub partner_mbti: String,
    pub partner_element: String,
}

/// Type-only match request
#[derive(Debug, Deserialize)]
pub struct MbtiMatchRequest {
    pub mine: String,
    pub partner: String,
}

/// Lotto generation request
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub count: Option<usize>,
    #[serde(default)]
    pub include: Vec<u8>,
    #[serde(default)]
    pub exclude: Vec<u8>,
    #[serde(default)]
    pub save: bool,
}

/// Lotto generation response
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub sets: Vec<LottoSet>,
    /// Record ids, present only when the request asked to save
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_ids: Option<Vec<String>>,
}

/// Save-one-set request
#[derive(Debug, Deserialize)]
pub struct SaveSetRequest {
    pub numbers: Vec<u8>,
    pub memo: Option<String>,
}

/// Save-one-set response
#[derive(Debug, Serialize)]
pub struct SaveSetResponse {
    pub id: String,
}

/// History update request. An absent `memo` leaves the annotation
/// alone; `clear_memo` removes it.
#[derive(Debug, Deserialize)]
pub struct UpdateRecordRequest {
    pub memo: Option<String>,
    #[serde(default)]
    pub clear_memo: bool,
    #[serde(default)]
    pub toggle_favorite: bool,
}

/// History update response
#[derive(Debug, Serialize)]
pub struct UpdateRecordResponse {
    pub id: String,
    pub favorite: bool,
}

/// Stats query
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    #[serde(default)]
    pub favorites_only: bool,
}

/// Recommendation response
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub numbers: Vec<u8>,
    pub sets_counted: usize,
}

/// Create the API router over a history file
pub fn create_router(history_path: &std::path::Path) -> Result<Router, CoreError> {
    let store = HistoryStore::open(history_path)?;
    let state = Arc::new(AppState { store: RwLock::new(store) });

    Ok(Router::new()
        .route("/health", get(health))
        .route("/fortune/daily", get(daily_fortune))
        .route("/fortune/luck", get(day_luck))
        .route("/compat", post(compatibility))
        .route("/compat/mbti", post(mbti_match))
        .route("/lotto/generate", post(generate))
        .route("/lotto/history", get(list_history).post(save_set).delete(clear_history))
        .route("/lotto/history/:id", axum::routing::delete(delete_record).patch(update_record))
        .route("/lotto/stats", get(get_stats))
        .route("/lotto/recommend", get(get_recommendation))
        .with_state(state))
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let store = state.store.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        saved_sets: store.records().len(),
    })
}

/// Daily fortune for one identity
async fn daily_fortune(
    Query(query): Query<DailyFortuneQuery>,
) -> Result<Json<DailyFortune>, ApiError> {
    let mbti: Mbti = query.mbti.parse().map_err(core_error)?;
    let element: Element = query.element.parse().map_err(core_error)?;
    let date = resolve_date(query.date.as_deref())?;
    Ok(Json(fortune::daily_fortune(mbti, element, date)))
}

/// Identity-free day luck
async fn day_luck(Query(query): Query<DayLuckQuery>) -> Result<Json<DayLuck>, ApiError> {
    let date = resolve_date(query.date.as_deref())?;
    Ok(Json(fortune::day_luck(date)))
}

/// Full couple report
async fn compatibility(
    Json(req): Json<CompatRequest>,
) -> Result<Json<CompatibilityReport>, ApiError> {
    let my_mbti: Mbti = req.my_mbti.parse().map_err(core_error)?;
    let my_element: Element = req.my_element.parse().map_err(core_error)?;
    let partner_mbti: Mbti = req.partner_mbti.parse().map_err(core_error)?;
    let partner_element: Element = req.partner_element.parse().map_err(core_error)?;
    Ok(Json(compat::compatibility(my_mbti, my_element, partner_mbti, partner_element)))
}

/// Type-only match
async fn mbti_match(Json(req): Json<MbtiMatchRequest>) -> Result<Json<MbtiMatch>, ApiError> {
    let mine: Mbti = req.mine.parse().map_err(core_error)?;
    let partner: Mbti = req.partner.parse().map_err(core_error)?;
    Ok(Json(compat::mbti_match(mine, partner)))
}

/// Generate sets, optionally saving them as a batch
async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let count = req.count.unwrap_or(1);
    if count == 0 || count > 100 {
        return Err(bad_request("count must be between 1 and 100"));
    }

    let sets = lotto::generate_sets(count, &req.include, &req.exclude).map_err(core_error)?;

    let saved_ids = if req.save {
        let mut store = state.store.write().await;
        Some(store.append_batch(&sets).map_err(core_error)?)
    } else {
        None
    };

    info!(count, saved = req.save, "sets generated");
    Ok(Json(GenerateResponse { sets, saved_ids }))
}

/// List saved sets, newest first
async fn list_history(State(state): State<Arc<AppState>>) -> Json<Vec<LottoRecord>> {
    let store = state.store.read().await;
    Json(store.records().to_vec())
}

/// Save one hand-picked set
async fn save_set(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveSetRequest>,
) -> Result<Json<SaveSetResponse>, ApiError> {
    if req.numbers.len() != LOTTO_SET_SIZE {
        return Err(bad_request(format!("a set holds exactly {} numbers", LOTTO_SET_SIZE)));
    }
    let mut numbers = [0u8; LOTTO_SET_SIZE];
    numbers.copy_from_slice(&req.numbers);
    numbers.sort_unstable();
    if numbers.windows(2).any(|w| w[0] == w[1]) {
        return Err(bad_request("duplicate number in set"));
    }
    if numbers.iter().any(|&n| !(1..=45).contains(&n)) {
        return Err(bad_request("numbers must be between 1 and 45"));
    }

    let mut store = state.store.write().await;
    let id = store.append(LottoSet::from_unsorted(numbers), req.memo).map_err(core_error)?;
    Ok(Json(SaveSetResponse { id }))
}

/// Clear the whole history
async fn clear_history(State(state): State<Arc<AppState>>) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    store.clear().map_err(core_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete one record
async fn delete_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    store.delete(&id).map_err(core_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Update memo and/or toggle favorite on one record
async fn update_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateRecordRequest>,
) -> Result<Json<UpdateRecordResponse>, ApiError> {
    let mut store = state.store.write().await;

    if req.clear_memo {
        store.set_memo(&id, None).map_err(core_error)?;
    } else if req.memo.is_some() {
        store.set_memo(&id, req.memo).map_err(core_error)?;
    }
    let favorite = if req.toggle_favorite {
        store.toggle_favorite(&id).map_err(core_error)?
    } else {
        store
            .records()
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| core_error(CoreError::RecordNotFound(id.clone())))?
            .favorite
    };

    Ok(Json(UpdateRecordResponse { id, favorite }))
}

/// Aggregate statistics over the history
async fn get_stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StatsQuery>,
) -> Json<LottoStats> {
    let store = state.store.read().await;
    Json(stats::aggregate(store.records(), query.favorites_only))
}

/// Cold-number recommendation from the history
async fn get_recommendation(State(state): State<Arc<AppState>>) -> Json<RecommendResponse> {
    let store = state.store.read().await;
    let aggregated = stats::aggregate(store.records(), false);
    Json(RecommendResponse {
        numbers: stats::recommend(&aggregated),
        sets_counted: aggregated.sets_counted,
    })
}

/// Run the API server
pub async fn run_server(
    addr: &str,
    history_path: &std::path::Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(history_path)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr, history = %history_path.display(), "fortuna API running");
    println!("🔮 Fortuna API running on {}", addr);
    println!("  GET    /fortune/daily       - Daily fortune");
    println!("  GET    /fortune/luck        - Day luck");
    println!("  POST   /compat              - Couple report");
    println!("  POST   /compat/mbti         - Type match");
    println!("  POST   /lotto/generate      - Generate sets");
    println!("  GET    /lotto/history       - Saved sets");
    println!("  GET    /lotto/stats         - Statistics");
    println!("  GET    /lotto/recommend     - Recommendation");
    println!("  GET    /health              - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
