//! Summary API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

/// Summary router - reporting is admin-only
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/summary/time-off", get(handler::monthly_time_off))
        .layer(middleware::from_fn(require_admin))
}
