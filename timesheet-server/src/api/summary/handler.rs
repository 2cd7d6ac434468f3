//! Summary API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::ApiResponse;
use shared::models::TimeOffSummaryDto;

use crate::core::ServerState;
use crate::db::repository::time_off_request;
use crate::utils::time::parse_month;
use crate::utils::{AppResult, ok};

#[derive(Deserialize)]
pub struct MonthQuery {
    /// Month of interest as YYYY-MM
    pub month: String,
}

/// GET /api/summary/time-off?month=YYYY-MM - per-user time-off hour totals
pub async fn monthly_time_off(
    State(state): State<ServerState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<ApiResponse<Vec<TimeOffSummaryDto>>>> {
    let month = parse_month(&query.month)?;
    let summaries = time_off_request::monthly_summary(&state.pool, month).await?;
    Ok(ok("Time-off summaries retrieved successfully", summaries))
}
