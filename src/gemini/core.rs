use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;

use super::models::{ErrorWrapper, GenerateContentRequest, GenerateContentResponse};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const UNKNOWN_BLOCK_REASON: &str = "Unknown reason";

/// The outcome of a single completion request. Exactly one variant
/// is returned per call and the caller decides what to show.
#[derive(Clone, Debug, PartialEq)]
pub enum CompletionResult {
    /// Text of the first candidate
    Success(String),
    /// The model declined to answer
    Blocked(String),
    /// Network error or non-2xx status
    TransportFailure(String),
    /// A 2xx response that couldn't be understood
    UnexpectedFailure(UnexpectedFailure),
}

#[derive(Clone, Debug, PartialEq)]
pub enum UnexpectedFailure {
    /// Body is not JSON or doesn't match the response schema
    MalformedBody(String),
    /// Valid response but the first candidate has no text
    MissingText(String),
}

impl fmt::Display for UnexpectedFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MalformedBody(detail) => write!(f, "Malformed response body: {}", detail),
            Self::MissingText(detail) => write!(f, "Response missing text: {}", detail),
        }
    }
}

/// Client for the Gemini `generateContent` endpoint. Never retries,
/// failures are returned to the caller as a `CompletionResult`.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_hostname: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(api_hostname: &str, api_key: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_hostname.trim_end_matches("/"),
            self.model
        )
    }

    pub async fn generate(&self, request: &GenerateContentRequest) -> CompletionResult {
        let response = match self
            .client
            .post(self.url())
            .query(&[("key", &self.api_key)])
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                // The URL carries the API key
                let e = e.without_url();
                tracing::warn!("Gemini request failed: {}", e);
                return CompletionResult::TransportFailure(format!(
                    "Gemini request failed: {}",
                    e
                ));
            }
        };

        let status = response.status();

        // Reading the body can still time out or drop the connection
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                let e = e.without_url();
                tracing::warn!("Reading Gemini response failed: {}", e);
                return CompletionResult::TransportFailure(format!(
                    "Reading Gemini response failed: {}",
                    e
                ));
            }
        };

        if !status.is_success() {
            let detail = describe_http_error(status, &body);
            tracing::warn!("Gemini returned an error status: {}", detail);
            return CompletionResult::TransportFailure(detail);
        }

        parse_completion(&body)
    }
}

/// Interpret the body of a 2xx response.
pub fn parse_completion(body: &str) -> CompletionResult {
    let resp = match serde_json::from_str::<GenerateContentResponse>(body) {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!("Parsing Gemini response failed: {}\nBody: {}", e, body);
            return CompletionResult::UnexpectedFailure(UnexpectedFailure::MalformedBody(
                e.to_string(),
            ));
        }
    };

    let Some(first) = resp.candidates.and_then(|c| c.into_iter().next()) else {
        let reason = resp
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| UNKNOWN_BLOCK_REASON.to_string());
        tracing::info!("Gemini returned no candidates. Block reason: {}", reason);
        return CompletionResult::Blocked(reason);
    };

    let text = first
        .content
        .and_then(|content| content.parts)
        .and_then(|parts| parts.into_iter().next())
        .and_then(|part| part.text);

    match text {
        Some(text) => CompletionResult::Success(text),
        None => {
            tracing::error!("First Gemini candidate has no text. Body: {}", body);
            CompletionResult::UnexpectedFailure(UnexpectedFailure::MissingText(String::from(
                "candidates[0].content.parts[0].text",
            )))
        }
    }
}

fn describe_http_error(status: StatusCode, body: &str) -> String {
    let message = serde_json::from_str::<ErrorWrapper>(body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.to_string());
            if status_text.is_empty() {
                msg
            } else {
                format!("{}: {}", status_text, msg)
            }
        })
        .unwrap_or_else(|_| body.to_string());

    format!("HTTP {}: {}", status.as_u16(), message)
}
