pub mod config;
pub mod gemini_client;
