//! End to end chat turns against a mock Gemini server

mod test_utils;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockito::Matcher;
    use serde_json::json;

    use supportbot::ai::chat::{
        ChatBuilder, DEFAULT_GREETING, TRANSPORT_FAILURE_MESSAGE, Turn, build_request,
    };
    use supportbot::audit::AuditLog;
    use supportbot::gemini::{self, GenerationConfig};

    use crate::test_utils::{GENERATE_PATH, candidate_body, test_audit_log};

    #[tokio::test]
    async fn it_answers_a_first_question() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", GENERATE_PATH)
            .match_query(Matcher::UrlEncoded("key".into(), "test-api-key".into()))
            .with_status(200)
            .with_body(candidate_body("We are open 9-5."))
            .create_async()
            .await;

        let audit = test_audit_log().await;
        let mut chat = ChatBuilder::new(&server.url(), "test-api-key", "gemini-test")
            .system_instruction("You are SupportBot.")
            .audit_log(&audit)
            .build();

        // The payload for this turn has the greeting and the question
        let mut pending = chat.transcript().clone();
        pending.push(Turn::user("What are your hours?"));
        let request = build_request(&pending, "You are SupportBot.", &GenerationConfig::default());
        assert_eq!(request.contents.len(), 2);
        assert_eq!(request.contents[0].role, gemini::Role::Model);
        assert_eq!(request.contents[1].role, gemini::Role::User);
        assert_eq!(request.system_instruction.parts[0].text, "You are SupportBot.");

        let reply = chat.next_msg("What are your hours?").await;

        mock.assert_async().await;
        assert_eq!(reply, "We are open 9-5.");
        assert_eq!(
            chat.transcript().last(),
            Some(&Turn::assistant("We are open 9-5."))
        );
    }

    #[tokio::test]
    async fn it_shows_the_block_reason() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", GENERATE_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(json!({"candidates": [], "promptFeedback": {"blockReason": "SAFETY"}}).to_string())
            .create_async()
            .await;

        let mut chat = ChatBuilder::new(&server.url(), "test-api-key", "gemini-test").build();
        let reply = chat.next_msg("Tell me something bad").await;

        assert_eq!(
            reply,
            "I'm sorry, I couldn't generate a response. Reason: SAFETY"
        );
    }

    #[tokio::test]
    async fn it_shows_unknown_reason_without_feedback() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", GENERATE_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(json!({"candidates": []}).to_string())
            .create_async()
            .await;

        let mut chat = ChatBuilder::new(&server.url(), "test-api-key", "gemini-test").build();
        let reply = chat.next_msg("Hello?").await;

        assert_eq!(
            reply,
            "I'm sorry, I couldn't generate a response. Reason: Unknown reason"
        );
    }

    #[tokio::test]
    async fn it_apologizes_when_the_request_times_out() {
        // Accept connections but never respond
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut open = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                open.push(socket);
            }
        });

        let audit = test_audit_log().await;
        let mut chat = ChatBuilder::new(&format!("http://{}", addr), "test-api-key", "gemini-test")
            .audit_log(&audit)
            .timeout(Duration::from_millis(200))
            .build();

        let reply = chat.next_msg("Are you there?").await;
        assert_eq!(reply, TRANSPORT_FAILURE_MESSAGE);
        assert_eq!(chat.transcript().len(), 3);

        // The logged response is the message the user saw, never empty
        let records = audit.recent().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_prompt, "Are you there?");
        assert_eq!(records[0].bot_response, TRANSPORT_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn it_keeps_chatting_when_the_store_is_unreachable() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", GENERATE_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(candidate_body("Still here!"))
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("dir").join("chat.db");
        let audit = AuditLog::connect(path.to_str()).await;
        assert!(!audit.is_enabled());

        let mut chat = ChatBuilder::new(&server.url(), "test-api-key", "gemini-test")
            .audit_log(&audit)
            .build();

        assert_eq!(chat.next_msg("Hi").await, "Still here!");
        assert_eq!(chat.next_msg("Hi again").await, "Still here!");
        assert_eq!(chat.transcript().turns()[0], Turn::assistant(DEFAULT_GREETING));
        assert_eq!(chat.transcript().len(), 5);
        assert!(audit.recent().await.is_empty());
    }
}
