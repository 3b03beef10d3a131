use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::entry::Entry;
use crate::server::{AppState, ApiError};
use crate::window::{self, DayCount};

const ENTRY_OPTIONS: &str = "HTTP/1.1 200 OK\n\
Allow: GET,POST,OPTIONS\n\
Access-Control-Allow-Origin: http[s]://<host>[:<port>]\n\
Access-Control-Allow-Methods: GET,POST,OPTIONS\n\
Access-Control-Allow-Headers: Content-Type\n";

const CALORIES_OPTIONS: &str = "HTTP/1.1 200 OK\n\
Allow: GET,OPTIONS\n\
Access-Control-Allow-Origin: http[s]://<host>[:<port>]\n\
Access-Control-Allow-Methods: GET,OPTIONS\n\
Access-Control-Allow-Headers: Content-Type\n";

#[derive(Deserialize)]
pub struct AddEntryParams {
    pub food: String,
    pub calories: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Deserialize)]
pub struct CaloriesParams {
    pub days: Option<String>,
}

#[derive(Serialize)]
pub struct EntriesResponse {
    pub entries: Vec<Entry>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct CaloriesResponse {
    /// Echo of the requested day count, as sent
    pub days: String,
    pub avg_calories: i64,
}

/// Probe and fallback body
#[derive(Serialize)]
pub struct StatusResponse {
    pub message: &'static str,
    pub status: u16,
}

impl StatusResponse {
    fn reply(status: StatusCode, message: &'static str) -> (StatusCode, Json<Self>) {
        (
            status,
            Json(Self {
                message,
                status: status.as_u16(),
            }),
        )
    }
}

/// GET /api/v1/entry - all entries, no filtering or pagination
pub async fn get_entries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EntriesResponse>, ApiError> {
    let entries = state.registry.get_entries()?;
    Ok(Json(EntriesResponse { entries }))
}

/// POST /api/v1/entry/{food}/{calories}[/{timestamp}]
///
/// The timestamp falls back to the current time when missing or not an
/// integer.
pub async fn add_entry(
    State(state): State<Arc<AppState>>,
    Path(params): Path<AddEntryParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let timestamp = window::default_timestamp(params.timestamp.as_deref());
    let calories: i64 = params
        .calories
        .parse()
        .map_err(|_| ApiError::IllegalParameter)?;

    let entry = Entry::new(timestamp, params.food, calories);
    state.registry.add_entry(&entry)?;

    Ok(Json(MessageResponse {
        message: "entry added",
    }))
}

/// GET /api/v1/calories?days=N - average daily calories over the last N days
pub async fn get_calories(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CaloriesParams>,
) -> Result<Json<CaloriesResponse>, ApiError> {
    let raw = params.days.unwrap_or_else(|| DayCount::ONE.to_string());
    let days: DayCount = raw.parse().map_err(|_| ApiError::IllegalParameter)?;

    let avg_calories = state.registry.average_calories(days)?;

    Ok(Json(CaloriesResponse {
        days: raw,
        avg_calories,
    }))
}

/// OPTIONS /api/v1/entry
pub async fn entry_options() -> &'static str {
    ENTRY_OPTIONS
}

/// OPTIONS /api/v1/calories
pub async fn calories_options() -> &'static str {
    CALORIES_OPTIONS
}

/// GET /healthy - always alive; prefer /ready for traffic decisions
pub async fn liveness() -> (StatusCode, Json<StatusResponse>) {
    StatusResponse::reply(StatusCode::OK, "alive")
}

/// GET /ready - 200 once the registry can serve, 503 otherwise
pub async fn readiness(State(state): State<Arc<AppState>>) -> (StatusCode, Json<StatusResponse>) {
    if state.registry.is_ready() {
        StatusResponse::reply(StatusCode::OK, "ready")
    } else {
        StatusResponse::reply(StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    }
}

pub async fn not_found(uri: Uri) -> (StatusCode, Json<StatusResponse>) {
    tracing::info!("Not found, requested URL path: {}", uri.path());
    StatusResponse::reply(StatusCode::NOT_FOUND, "requested resource not found")
}
