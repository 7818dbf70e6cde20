//! Test utilities for integration tests
#![allow(dead_code)]
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};

use supportbot::api::AppState;
use supportbot::api::app;
use supportbot::audit::AuditLog;
use supportbot::core::AppConfig;

pub const GENERATE_PATH: &str = "/v1beta/models/gemini-test:generateContent";

pub fn test_config(gemini_api_hostname: &str) -> AppConfig {
    AppConfig {
        gemini_api_hostname: gemini_api_hostname.to_string(),
        gemini_api_key: String::from("test-api-key"),
        gemini_model: String::from("gemini-test"),
        db_path: None,
        system_message: Some(String::from("You are a helpful assistant.")),
    }
}

/// An audit log backed by an in-memory database.
pub async fn test_audit_log() -> AuditLog {
    let db = tokio_rusqlite::Connection::open_in_memory()
        .await
        .expect("Failed to open in-memory db");
    AuditLog::with_connection(db)
        .await
        .expect("Failed to initialize db")
}

/// Creates a test application router that sends completions to
/// `gemini_api_hostname`, usually a `mockito` server.
pub fn test_app(gemini_api_hostname: &str, audit: &AuditLog) -> Router {
    let app_state = AppState::new(audit.clone(), test_config(gemini_api_hostname));
    app(Arc::new(RwLock::new(app_state)))
}

pub fn candidate_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}
