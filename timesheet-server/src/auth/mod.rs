//! Identity Module
//!
//! Token validation happens upstream; by the time a request arrives here
//! the gateway has resolved it to a user id and an admin flag carried in
//! headers. The middleware parses those into [`CurrentUser`] and injects it
//! into request extensions for handlers to extract.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::utils::AppError;

/// Header carrying the resolved numeric user id
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header carrying the resolved admin flag ("1" or "true")
pub const USER_ADMIN_HEADER: &str = "x-user-admin";

/// Identity of the caller, resolved upstream
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub id: i64,
    pub is_admin: bool,
}

/// Identity middleware - requires the resolved identity headers
///
/// A missing or unparseable user id header is 401. The admin header is
/// optional and defaults to a standard user.
pub async fn require_identity(mut req: Request, next: Next) -> Result<Response, AppError> {
    // CORS preflight carries no identity
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let id = header_str(&req, USER_ID_HEADER)
        .and_then(|v| v.parse::<i64>().ok())
        .ok_or_else(AppError::unauthorized)?;

    let is_admin = header_str(&req, USER_ADMIN_HEADER)
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true"))
        .unwrap_or(false);

    req.extensions_mut().insert(CurrentUser { id, is_admin });
    Ok(next.run(req).await)
}

/// Admin middleware - requires the admin flag on the resolved identity
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or_else(AppError::unauthorized)?;

    if !user.is_admin {
        return Err(AppError::forbidden("Administrator role required"));
    }

    Ok(next.run(req).await)
}

fn header_str<'a>(req: &'a Request, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|h| h.to_str().ok())
}
