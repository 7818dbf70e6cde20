//! Integration tests for the chat log API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use mockito::Matcher;
    use serde_json::json;
    use tower::util::ServiceExt;

    use supportbot::api::public::logs::LogsResponse;
    use supportbot::audit::AuditLog;

    use crate::test_utils::{
        GENERATE_PATH, body_to_string, candidate_body, test_app, test_audit_log,
    };

    fn logs_request() -> Request<Body> {
        Request::builder()
            .uri("/api/logs")
            .body(Body::empty())
            .unwrap()
    }

    /// Tests getting logs returns an empty list initially
    #[tokio::test]
    async fn it_gets_empty_logs() {
        let audit = test_audit_log().await;
        let app = test_app("http://127.0.0.1:1", &audit);

        let response = app.oneshot(logs_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_string(response.into_body()).await;
        assert_eq!(body, r#"{"logs":[]}"#);
    }

    /// Tests each chat turn shows up in the logs, newest first
    #[tokio::test]
    async fn it_gets_logged_turns() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", GENERATE_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(candidate_body("Sure!"))
            .create_async()
            .await;

        let audit = test_audit_log().await;
        let app = test_app(&server.url(), &audit);

        for message in ["first question", "second question"] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .uri("/api/chat")
                        .method("POST")
                        .header("content-type", "application/json")
                        .body(Body::from(
                            json!({"session_id": "logs-session", "message": message})
                                .to_string(),
                        ))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app.oneshot(logs_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_string(response.into_body()).await;
        let resp: LogsResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(resp.logs.len(), 2);
        assert_eq!(resp.logs[0].user_prompt, "second question");
        assert_eq!(resp.logs[1].user_prompt, "first question");
        assert!(resp.logs.iter().all(|l| l.bot_response == "Sure!"));
    }

    /// Tests logs are empty but still OK when logging is disabled
    #[tokio::test]
    async fn it_gets_empty_logs_when_disabled() {
        let app = test_app("http://127.0.0.1:1", &AuditLog::disabled());

        let response = app.oneshot(logs_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("\"logs\":[]"));
    }
}
