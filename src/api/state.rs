use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::ai::chat::Chat;
use crate::audit::AuditLog;
use crate::core::AppConfig;

/// Sessions untouched for this long are dropped the next time a new
/// session starts.
pub const SESSION_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

// Each session gets its own lock so turns within a session run one
// at a time while other sessions proceed.
pub type SessionChat = Arc<Mutex<Chat>>;

pub struct Session {
    pub chat: SessionChat,
    pub last_active: Instant,
}

pub struct AppState {
    // Chat sessions live in memory only and are gone on restart
    pub sessions: HashMap<String, Session>,
    pub session_idle_timeout: Duration,
    pub audit: AuditLog,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(audit: AuditLog, config: AppConfig) -> Self {
        Self {
            sessions: HashMap::new(),
            session_idle_timeout: SESSION_IDLE_TIMEOUT,
            audit,
            config,
        }
    }

    /// Remove sessions idle for at least `session_idle_timeout`,
    /// returning how many were removed. A turn already running keeps
    /// its own handle to the chat and finishes normally.
    pub fn prune_idle_sessions(&mut self, now: Instant) -> usize {
        let timeout = self.session_idle_timeout;
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| now.saturating_duration_since(session.last_active) < timeout);
        before - self.sessions.len()
    }
}
