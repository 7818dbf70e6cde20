//! The core models for managing a stateful chat with an LLM.
use serde::{Deserialize, Serialize};

use crate::gemini;

pub const DEFAULT_GREETING: &str = "Hello! How can I assist you today?";

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

impl Role {
    /// Gemini calls the assistant "model".
    pub fn to_wire(self) -> gemini::Role {
        match self {
            Role::User => gemini::Role::User,
            Role::Assistant => gemini::Role::Model,
        }
    }

    pub fn from_wire(role: &gemini::Role) -> Self {
        match role {
            gemini::Role::User => Role::User,
            gemini::Role::Model => Role::Assistant,
        }
    }
}

/// A single message in a chat. Fields are private so a turn can't
/// change after it's created.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn new(role: Role, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: &str) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Ordered, append-only history of a single chat session. Always
/// starts with at least one turn, the assistant greeting unless
/// other turns were provided.
#[derive(Clone, Debug)]
pub struct Transcript(Vec<Turn>);

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self(vec![Turn::assistant(DEFAULT_GREETING)])
    }

    pub fn new_with_turns(turns: Vec<Turn>) -> Self {
        if turns.is_empty() {
            return Self::new();
        }
        Self(turns)
    }

    pub fn turns(&self) -> &[Turn] {
        &self.0
    }

    pub fn push(&mut self, turn: Turn) {
        self.0.push(turn)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.0.iter()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
