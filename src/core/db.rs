use anyhow::{Error, Result};
use tokio_rusqlite::Connection;

pub async fn async_db(db_path: &str) -> Result<Connection, Error> {
    let db = Connection::open(db_path).await?;
    Ok(db)
}

/// Create the chat log table if it doesn't already exist. Safe to run
/// on every startup.
pub fn initialize_db(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS chat_log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_prompt TEXT NOT NULL,
            bot_response TEXT NOT NULL,
            timestamp TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS chat_log_timestamp_idx ON chat_log (timestamp);
        "#,
    )
}
