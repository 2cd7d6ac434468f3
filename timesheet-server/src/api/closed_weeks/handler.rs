//! Closed Week API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::ApiResponse;
use shared::models::ClosedWeekPayload;

use crate::core::ServerState;
use crate::db::repository::closed_week;
use crate::utils::{AppResult, ok};

#[derive(Deserialize)]
pub struct StatusQuery {
    /// Any date inside the week of interest
    pub date: NaiveDate,
}

/// GET /api/closed-weeks/status?date=YYYY-MM-DD - is that week closed?
pub async fn status(
    State(state): State<ServerState>,
    Query(query): Query<StatusQuery>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let closed = closed_week::is_closed(&state.pool, query.date).await?;
    let message = if closed { "Week is closed." } else { "Week is open." };
    Ok(ok(message, closed))
}

/// POST /api/closed-weeks/close - close the week containing the date (admin)
pub async fn close(
    State(state): State<ServerState>,
    Json(payload): Json<ClosedWeekPayload>,
) -> AppResult<Json<ApiResponse<NaiveDate>>> {
    let week_start = closed_week::close_week(&state.pool, payload.date).await?;
    Ok(ok("Week closed successfully.", week_start))
}

/// DELETE /api/closed-weeks/open - reopen the week containing the date (admin)
pub async fn open(
    State(state): State<ServerState>,
    Json(payload): Json<ClosedWeekPayload>,
) -> AppResult<Json<ApiResponse<NaiveDate>>> {
    let week_start = closed_week::open_week(&state.pool, payload.date).await?;
    Ok(ok("Week opened successfully.", week_start))
}
