//! Router for the chat API

use std::sync::{Arc, RwLock};
use std::time::Instant;

use anyhow::{Error, Result};
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use tokio::sync::Mutex;

use super::public;
use crate::ai::chat::ChatBuilder;
use crate::api::state::{AppState, Session, SessionChat};
use crate::core::AppConfig;

type SharedState = Arc<RwLock<AppState>>;

/// Find the chat for a session or start a new one. Starting a session
/// also drops any that have gone idle.
fn get_or_create_session(state: &SharedState, session_id: &str) -> Result<SessionChat, Error> {
    let now = Instant::now();
    let mut shared_state = state.write().expect("Unable to write share state");

    if let Some(session) = shared_state.sessions.get_mut(session_id) {
        session.last_active = now;
        return Ok(Arc::clone(&session.chat));
    }

    let pruned = shared_state.prune_idle_sessions(now);
    if pruned > 0 {
        tracing::debug!("Removed {} idle chat sessions", pruned);
    }

    let AppState {
        sessions,
        audit,
        config,
        ..
    } = &mut *shared_state;

    let AppConfig {
        gemini_api_hostname,
        gemini_api_key,
        gemini_model,
        ..
    } = &*config;
    let chat = ChatBuilder::new(gemini_api_hostname, gemini_api_key, gemini_model)
        .system_instruction(&config.system_instruction()?)
        .audit_log(audit)
        .build();

    tracing::debug!("Starting chat session {}", session_id);
    let chat = Arc::new(Mutex::new(chat));
    sessions.insert(
        session_id.to_string(),
        Session {
            chat: Arc::clone(&chat),
            last_active: now,
        },
    );
    Ok(chat)
}

/// Get the transcript of a chat session by ID
async fn chat_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let chat = state
        .read()
        .expect("Unable to read share state")
        .sessions
        .get(&id)
        .map(|session| Arc::clone(&session.chat));

    let Some(chat) = chat else {
        return Ok((
            StatusCode::NOT_FOUND,
            format!("Chat session {} not found", id),
        )
            .into_response());
    };

    let transcript = chat.lock().await.transcript().turns().to_vec();
    Ok(Json(public::ChatTranscriptResponse { transcript }).into_response())
}

/// Start or continue a chat session and respond with the reply
async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::ChatRequest>,
) -> Result<Json<public::ChatResponse>, crate::api::public::ApiError> {
    let chat = get_or_create_session(&state, &payload.session_id)?;

    // Holding the session lock for the whole turn keeps turns in order
    let reply = chat.lock().await.next_msg(&payload.message).await;

    Ok(Json(public::ChatResponse::new(&reply)))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(chat_handler))
        .route("/{id}", get(chat_session))
}
