//! Task API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Task catalog router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/tasks", get(handler::list_active))
}
