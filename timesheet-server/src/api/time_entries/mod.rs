//! Time Entry API Module

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;

/// Time entry router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/time-entries", routes())
}

fn routes() -> Router<ServerState> {
    // Self-service routes: scoped to the caller's own entries
    let own_routes = Router::new()
        .route("/", get(handler::list_mine).post(handler::create_mine))
        .route("/{id}", put(handler::update_mine).delete(handler::delete_mine));

    // Administrative routes: act on any user's entries, still week-locked
    let admin_routes = Router::new()
        .route("/employee/{user_id}", get(handler::list_for_user))
        .route("/employee", post(handler::create_for_user))
        .route("/{id}/admin", put(handler::update_for_user))
        .route("/{id}/any", delete(handler::delete_any))
        .layer(middleware::from_fn(require_admin));

    own_routes.merge(admin_routes)
}
