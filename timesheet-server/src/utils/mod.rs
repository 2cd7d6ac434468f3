//! Utility module - shared helpers and types
//!
//! - [`AppError`] / [`AppResult`] - application error type and alias
//! - [`time`] - week/month boundary helpers
//! - [`validation`] - input length guards
//! - [`logger`] - tracing setup

pub mod error;
pub mod logger;
pub mod result;
pub mod time;
pub mod validation;

pub use error::{AppError, ok};
pub use result::AppResult;
