//! Timesheet Server
//!
//! HTTP server recording employee work and time-off hours, enforcing weekly
//! edit locks and running the time-off approval workflow.
//!
//! # Module structure
//!
//! ```text
//! timesheet-server/src/
//! ├── core/     # Configuration, state, server lifecycle
//! ├── auth/     # Resolved-identity middleware
//! ├── api/      # HTTP routes and handlers
//! ├── db/       # Pool setup, migrations, repositories
//! ├── notify/   # Fire-and-forget notification queue
//! └── utils/    # Errors, dates, validation, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod notify;
pub mod utils;

// Re-export common types
pub use auth::CurrentUser;
pub use core::{Config, Server, ServerState};
pub use notify::{LogMailer, Mailer, NotifyService};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Set up the process environment: dotenv, work directory, logging.
/// Call once before anything else.
pub fn setup_environment() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    let log_level = std::env::var("LOG_LEVEL").ok();
    if config.is_production() {
        init_logger_with_file(log_level.as_deref(), config.logs_dir().to_str());
    } else {
        init_logger_with_file(log_level.as_deref(), None);
    }

    Ok(())
}
