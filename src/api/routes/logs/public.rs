//! Public types for the chat log API
use serde::{Deserialize, Serialize};

use crate::audit::LogRecord;

/// Response containing the most recent chat logs, newest first
#[derive(Serialize, Deserialize)]
pub struct LogsResponse {
    pub logs: Vec<LogRecord>,
}
