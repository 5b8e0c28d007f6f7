use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::instrument;

use crate::error::ApiError;
use crate::logs::repo::{self, LogEntry};
use crate::state::AppState;

const LOG_VIEW_LIMIT: i64 = 200;

pub fn router() -> Router<AppState> {
    Router::new().route("/logs", get(list_logs))
}

#[instrument(skip(state))]
pub async fn list_logs(State(state): State<AppState>) -> Result<Json<Vec<LogEntry>>, ApiError> {
    let entries = repo::recent(&state.db, LOG_VIEW_LIMIT).await?;
    Ok(Json(entries))
}
