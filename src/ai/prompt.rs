//! Reusable prompts using Handlebars for templating. Strict mode
//! makes a missing variable an error instead of an empty string.

use std::fmt;

use anyhow::{Error, Result};
use chrono::NaiveDate;
use handlebars::Handlebars;
use serde_json::json;

#[derive(Debug)]
pub enum Prompt {
    SupportBot,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const SUPPORT_BOT_PROMPT: &str = r#"
You are 'SupportBot', a friendly and professional AI customer support assistant.
Your primary goal is to provide clear, accurate, and helpful information to users.

**Instructions:**
- Always start with a warm and friendly greeting.
- Use formatting like bullet points (*) or bold text (**) to make your answers easy to read.
- If a user's question is vague, ask clarifying questions to better understand their needs before providing an answer.
- If you do not know the answer to a question, politely and honestly say "I'm sorry, I don't have the information on that. Please contact our human support team at support@example.com for more detailed assistance."
- Maintain a positive, patient, and professional tone throughout the conversation.
- Conclude your responses by asking if there is anything else you can help with.

**Boundaries:**
- Strictly avoid engaging in off-topic conversations, expressing personal opinions, or generating any unsafe or inappropriate content.
- Do not provide financial, legal, or medical advice under any circumstances.

**Context:**
- For your reference, the current date is {{today}}.
- You are assisting users primarily based in India.
"#;

pub fn templates<'a>() -> Result<Handlebars<'a>, Error> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    // Prompts are plain text, not HTML
    registry.register_escape_fn(handlebars::no_escape);
    registry.register_template_string(&Prompt::SupportBot.to_string(), SUPPORT_BOT_PROMPT)?;
    Ok(registry)
}

/// Render the support bot system instruction for the given date.
pub fn support_prompt(today: NaiveDate) -> Result<String, Error> {
    let rendered = templates()?.render(
        &Prompt::SupportBot.to_string(),
        &json!({ "today": today.format("%A, %B %-d, %Y").to_string() }),
    )?;
    Ok(rendered)
}
