//! Best-effort log of every chat turn. Nothing in here ever returns
//! an error to the caller: failures are reported with `tracing` and
//! otherwise ignored so the chat keeps working.
pub mod db;
pub mod models;
pub use db::*;
pub use models::*;

use anyhow::{Error, Result};
use tokio_rusqlite::Connection;

use crate::core::db::{async_db, initialize_db};

/// Number of records returned by `AuditLog::recent`.
pub const RECENT_LOG_LIMIT: usize = 25;

/// Handle to the chat log store. Cheap to clone, all clones share
/// the same connection. A handle without a connection does nothing.
#[derive(Clone, Default)]
pub struct AuditLog {
    db: Option<Connection>,
}

impl AuditLog {
    /// Connect to the chat log database once at startup. Any problem
    /// is reported here a single time and results in a disabled log.
    pub async fn connect(db_path: Option<&str>) -> Self {
        let Some(path) = db_path else {
            tracing::warn!("No chat log database configured. Chat logs will not be saved.");
            return Self::disabled();
        };

        match open_store(path).await {
            Ok(db) => {
                tracing::info!("Saving chat logs to {}", path);
                Self { db: Some(db) }
            }
            Err(e) => {
                tracing::error!(
                    "Failed to connect to chat log database {}: {}. Chat logs will not be saved.",
                    path,
                    e
                );
                Self::disabled()
            }
        }
    }

    /// Use an already open connection, creating the table if needed.
    pub async fn with_connection(db: Connection) -> Result<Self, Error> {
        db.call(|conn| {
            initialize_db(conn)?;
            Ok(())
        })
        .await?;
        Ok(Self { db: Some(db) })
    }

    pub fn disabled() -> Self {
        Self { db: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.db.is_some()
    }

    /// Save a completed turn. One attempt, no retries.
    pub async fn log_turn(&self, user_prompt: &str, bot_response: &str) {
        let Some(db) = &self.db else {
            return;
        };

        let record = LogRecord::new(user_prompt, bot_response);
        if let Err(e) = insert_log_record(db, &record).await {
            tracing::error!("Could not save chat log: {}", e);
        }
    }

    /// The most recent records, newest first. Empty if there is no
    /// store or reading it failed.
    pub async fn recent(&self) -> Vec<LogRecord> {
        let Some(db) = &self.db else {
            return Vec::new();
        };

        find_recent_log_records(db, RECENT_LOG_LIMIT)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Could not fetch chat logs: {}", e);
                Vec::new()
            })
    }
}

async fn open_store(path: &str) -> Result<Connection, Error> {
    let db = async_db(path).await?;
    // Ping before use so a bad store is caught at startup
    db.call(|conn| {
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        initialize_db(conn)?;
        Ok(())
    })
    .await?;
    Ok(db)
}
