use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed chat turn as saved to the chat log.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct LogRecord {
    pub user_prompt: String,
    pub bot_response: String,
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    pub fn new(user_prompt: &str, bot_response: &str) -> Self {
        Self {
            user_prompt: user_prompt.to_string(),
            bot_response: bot_response.to_string(),
            timestamp: Utc::now(),
        }
    }
}
