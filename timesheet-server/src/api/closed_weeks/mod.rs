//! Closed Week API Module

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::auth::require_admin;
use crate::core::ServerState;

/// Closed week router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/closed-weeks", routes())
}

fn routes() -> Router<ServerState> {
    // Anyone may check a week's status
    let read_routes = Router::new().route("/status", get(handler::status));

    // Closing and opening weeks is admin-only
    let manage_routes = Router::new()
        .route("/close", post(handler::close))
        .route("/open", delete(handler::open))
        .layer(middleware::from_fn(require_admin));

    read_routes.merge(manage_routes)
}
