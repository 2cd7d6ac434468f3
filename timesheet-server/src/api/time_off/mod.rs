//! Time Off API Module

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::auth::require_admin;
use crate::core::ServerState;

/// Time off router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/time-off", routes())
}

fn routes() -> Router<ServerState> {
    // Self-service routes: a user's own requests
    let own_routes = Router::new()
        .route("/mine", get(handler::list_mine))
        .route("/{id}", delete(handler::delete_own));

    // Review routes: browsing and deciding requests is admin-only
    let review_routes = Router::new()
        .route("/filter", post(handler::filter))
        .route("/{id}/approve", post(handler::approve))
        .route("/{id}/reject", post(handler::reject))
        .layer(middleware::from_fn(require_admin));

    own_routes.merge(review_routes)
}
