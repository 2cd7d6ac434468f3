//! Calendar API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Calendar router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/calendar/time-off", get(handler::time_off_feed))
}
