use std::env;

use anyhow::{Result, anyhow};
use chrono::Utc;

use crate::ai::prompt;

pub const DEFAULT_LLM_HOST: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_LLM_MODEL: &str = "gemini-2.5-flash-preview-09-2025";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub gemini_api_hostname: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    // Chat logs are only saved when this is set
    pub db_path: Option<String>,
    // Replaces the built-in support prompt when set
    pub system_message: Option<String>,
}

impl AppConfig {
    /// Load the config from environment variables. A missing Gemini
    /// API key is an error since nothing works without it.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Treat empty values the same as unset ones
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let gemini_api_key = get("GEMINI_API_KEY").ok_or(anyhow!(
            "Gemini API key is not set. Set the GEMINI_API_KEY env var."
        ))?;
        let gemini_api_hostname =
            get("SUPPORTBOT_LLM_HOST").unwrap_or_else(|| DEFAULT_LLM_HOST.to_string());
        let gemini_model =
            get("SUPPORTBOT_LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string());

        Ok(Self {
            gemini_api_hostname,
            gemini_api_key,
            gemini_model,
            db_path: get("SUPPORTBOT_DB_PATH"),
            system_message: get("SUPPORTBOT_SYSTEM_MESSAGE"),
        })
    }

    /// Only the chat log location, for commands that never talk to
    /// the LLM.
    pub fn db_path_from_env() -> Option<String> {
        env::var("SUPPORTBOT_DB_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
    }

    /// The system instruction for a new chat session. Renders the
    /// support prompt with today's date unless it was overridden.
    pub fn system_instruction(&self) -> Result<String> {
        match &self.system_message {
            Some(msg) => Ok(msg.clone()),
            None => prompt::support_prompt(Utc::now().date_naive()),
        }
    }
}
