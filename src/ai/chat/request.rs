use crate::gemini::{Content, GenerateContentRequest, GenerationConfig, SystemInstruction};

use super::models::Transcript;

/// Build the request for the next completion from the whole
/// transcript. The API is stateless so the full history is sent
/// every turn.
pub fn build_request(
    transcript: &Transcript,
    system_instruction: &str,
    generation_config: &GenerationConfig,
) -> GenerateContentRequest {
    let contents = transcript
        .iter()
        .map(|turn| Content::new(turn.role().to_wire(), turn.content()))
        .collect();

    GenerateContentRequest {
        contents,
        system_instruction: SystemInstruction::new(system_instruction),
        generation_config: generation_config.clone(),
    }
}
