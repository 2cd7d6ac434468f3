use std::sync::Arc;

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::notify::{LogMailer, NotifyService};

/// Server state - shared by every request handler
///
/// Cheap to clone: the pool and the notification sender are both handles.
/// No workflow state is cached here; the database is re-read on every
/// operation.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Fire-and-forget notification queue
    pub notify: NotifyService,
}

impl ServerState {
    /// Assemble state from already-initialized parts (tests use this with an
    /// in-memory pool and a mock mailer)
    pub fn new(config: Config, pool: SqlitePool, notify: NotifyService) -> Self {
        Self {
            config,
            pool,
            notify,
        }
    }

    /// Initialize server state
    ///
    /// 1. Ensure the work directory layout exists
    /// 2. Open the database (work_dir/database/timesheet.db) and migrate
    /// 3. Start the notification worker
    pub async fn initialize(config: &Config) -> crate::core::Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_dir().join("timesheet.db");
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .map_err(|e| crate::core::ServerError::Database(e.to_string()))?;

        let notify = NotifyService::start(Arc::new(LogMailer), config.notify_queue_size);

        Ok(Self::new(config.clone(), db_service.pool, notify))
    }
}
