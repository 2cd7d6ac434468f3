//! Shared types for the timesheet server
//!
//! Domain models, the uniform API envelope, and small utilities used by the
//! server and its integration tests.

pub mod models;
pub mod response;
pub mod util;

pub use response::ApiResponse;
