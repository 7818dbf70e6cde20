pub mod ai;
pub mod api;
pub mod audit;
pub mod cli;
pub mod core;
pub mod gemini;
