//! API Routes Module
//!
//! # Structure
//!
//! - [`health`] - liveness check, no identity required
//! - [`time_entries`] - weekly time logging
//! - [`time_off`] - time-off requests and the approval workflow
//! - [`closed_weeks`] - week lock administration
//! - [`tasks`] - task catalog lookup
//! - [`calendar`] - company-wide time-off calendar feed
//! - [`summary`] - monthly time-off totals per user
//!
//! Everything except `health` sits behind the identity middleware; the
//! admin-only routes add [`crate::auth::require_admin`] per resource.

pub mod calendar;
pub mod closed_weeks;
pub mod health;
pub mod summary;
pub mod tasks;
pub mod time_entries;
pub mod time_off;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_identity;
use crate::core::ServerState;

/// Assemble the full application router
pub fn router(state: ServerState) -> Router {
    let protected = Router::new()
        .merge(time_entries::router())
        .merge(time_off::router())
        .merge(closed_weeks::router())
        .merge(tasks::router())
        .merge(calendar::router())
        .merge(summary::router())
        .layer(middleware::from_fn(require_identity));

    Router::new()
        .merge(health::router())
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
