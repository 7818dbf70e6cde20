use anyhow::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use tokio_rusqlite::{Connection, params};

use super::models::LogRecord;

// Fixed precision so that sorting the text column sorts by time
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub async fn insert_log_record(db: &Connection, record: &LogRecord) -> Result<usize, Error> {
    let user_prompt = record.user_prompt.clone();
    let bot_response = record.bot_response.clone();
    let timestamp = format_timestamp(&record.timestamp);
    let result = db
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "INSERT INTO chat_log (user_prompt, bot_response, timestamp) VALUES (?, ?, ?)",
            )?;
            let result = stmt.execute(params![user_prompt, bot_response, timestamp])?;
            Ok(result)
        })
        .await?;

    Ok(result)
}

pub async fn find_recent_log_records(db: &Connection, limit: usize) -> Result<Vec<LogRecord>, Error> {
    let records = db
        .call(move |conn| {
            let mut stmt = conn.prepare(
                r#"
                SELECT user_prompt, bot_response, timestamp
                FROM chat_log
                ORDER BY timestamp DESC, id DESC
                LIMIT ?
                "#,
            )?;
            let rows = stmt
                .query_map([limit as i64], |row| {
                    let ts: String = row.get(2)?;
                    let timestamp = DateTime::parse_from_rfc3339(&ts)
                        .map_err(|e| {
                            rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
                        })?
                        .with_timezone(&Utc);
                    Ok(LogRecord {
                        user_prompt: row.get(0)?,
                        bot_response: row.get(1)?,
                        timestamp,
                    })
                })?
                .filter_map(|r| r.ok())
                .collect::<Vec<LogRecord>>();
            Ok(rows)
        })
        .await?;

    Ok(records)
}
