use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use uuid::Uuid;

use crate::ai::chat::ChatBuilder;
use crate::audit::AuditLog;
use crate::core::AppConfig;

pub async fn run(config: AppConfig) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    let audit = AuditLog::connect(config.db_path.as_deref()).await;

    let session_id = Uuid::new_v4();
    tracing::debug!("Starting chat session {}", session_id);

    let mut chat = ChatBuilder::new(
        &config.gemini_api_hostname,
        &config.gemini_api_key,
        &config.gemini_model,
    )
    .system_instruction(&config.system_instruction()?)
    .audit_log(&audit)
    .build();

    // Show the greeting
    for turn in chat.transcript().iter() {
        println!("{}", turn.content());
    }

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                // Nothing to send
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                let reply = chat.next_msg(&line).await;
                println!("{}", reply);
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    tracing::debug!("Ended chat session {}", session_id);

    Ok(())
}
