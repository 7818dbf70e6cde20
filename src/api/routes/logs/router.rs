//! Router for the chat log API

use std::sync::{Arc, RwLock};

use axum::{Router, extract::State, response::Json, routing::get};

use super::public;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

/// Get the most recent chat logs. Empty when logging is disabled.
async fn recent_logs(State(state): State<SharedState>) -> Json<public::LogsResponse> {
    let audit = state.read().expect("Unable to read share state").audit.clone();
    let logs = audit.recent().await;
    Json(public::LogsResponse { logs })
}

/// Create the chat log router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(recent_logs))
}
