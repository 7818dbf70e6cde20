use crate::gemini::CompletionResult;

pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Failed to communicate with the AI service. Please try again later.";
pub const UNEXPECTED_FAILURE_MESSAGE: &str = "An internal server error occurred.";

/// The text shown to the user for a completion. Failure details are
/// only logged, never returned.
pub fn display_text(result: &CompletionResult) -> String {
    match result {
        CompletionResult::Success(text) => text.clone(),
        CompletionResult::Blocked(reason) => format!(
            "I'm sorry, I couldn't generate a response. Reason: {}",
            reason
        ),
        CompletionResult::TransportFailure(detail) => {
            tracing::error!("API request error: {}", detail);
            TRANSPORT_FAILURE_MESSAGE.to_string()
        }
        CompletionResult::UnexpectedFailure(failure) => {
            tracing::error!("An unexpected error occurred: {}", failure);
            UNEXPECTED_FAILURE_MESSAGE.to_string()
        }
    }
}
