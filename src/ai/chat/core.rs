use std::time::Duration;

use crate::audit::AuditLog;
use crate::gemini::{GeminiClient, GenerationConfig, REQUEST_TIMEOUT};
use super::interpret::display_text;
use super::models::{Transcript, Turn};
use super::request::build_request;

/// A single chat session with the support bot using the Gemini API.
///
/// Each call to `next_msg` runs one full turn: the whole transcript
/// plus the prompt is sent to the LLM, then the prompt and the reply
/// (or an apology if something went wrong) are added to the transcript
/// together and the exchange is written to the audit log.
///
/// Use `ChatBuilder` to construct a valid `Chat`.
pub struct Chat {
    client: GeminiClient,
    system_instruction: String,
    generation_config: GenerationConfig,
    audit: AuditLog,
    transcript: Transcript,
}

impl Chat {
    /// Runs the next turn in the chat and returns the text to show
    /// the user. Never fails, errors become a canned message.
    pub async fn next_msg(&mut self, prompt: &str) -> String {
        // Work on a copy so a turn dropped before the reply arrives
        // leaves the transcript as it was
        let mut pending = self.transcript.clone();
        pending.push(Turn::user(prompt));

        let request = build_request(
            &pending,
            &self.system_instruction,
            &self.generation_config,
        );
        let result = self.client.generate(&request).await;
        let reply = display_text(&result);

        pending.push(Turn::assistant(&reply));
        self.transcript = pending;

        // Logging happens after the reply is in the transcript so it
        // can only delay saving, never the answer itself
        self.audit.log_turn(prompt, &reply).await;

        reply
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}

pub struct ChatBuilder {
    api_hostname: String,
    api_key: String,
    model: String,
    system_instruction: String,
    generation_config: GenerationConfig,
    audit: AuditLog,
    transcript: Transcript,
    timeout: Duration,
}

impl ChatBuilder {
    pub fn new(api_hostname: &str, api_key: &str, model: &str) -> Self {
        Self {
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            system_instruction: String::new(),
            generation_config: GenerationConfig::default(),
            audit: AuditLog::disabled(),
            transcript: Transcript::new(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn build(self) -> Chat {
        let client = GeminiClient::new(&self.api_hostname, &self.api_key, &self.model)
            .with_timeout(self.timeout);

        Chat {
            client,
            system_instruction: self.system_instruction,
            generation_config: self.generation_config,
            audit: self.audit,
            transcript: self.transcript,
        }
    }

    pub fn system_instruction(mut self, instruction: &str) -> Self {
        self.system_instruction = instruction.to_string();
        self
    }

    pub fn generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = config;
        self
    }

    pub fn audit_log(mut self, audit: &AuditLog) -> Self {
        self.audit = audit.clone();
        self
    }

    pub fn transcript(mut self, turns: Vec<Turn>) -> Self {
        self.transcript = Transcript::new_with_turns(turns);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
