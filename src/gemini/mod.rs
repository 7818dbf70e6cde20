//! Client for Google's Gemini chat completion API.
mod core;
pub mod models;
pub use self::core::*;
pub use models::*;
