//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.
//! Every variant maps to one stage of the generation pipeline; none of them
//! escape the pipeline boundary, which converts them into fallback results.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no GEMINI_API_KEY or GOOGLE_GENERATIVE_AI_API_KEY found in environment")]
    MissingApiKey,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI provider error: {0}")]
    AiProvider(String),

    #[error("AI request timed out after {0} seconds")]
    Timeout(u64),

    #[error("no JSON array found in AI response")]
    Extraction,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid response shape: {0}")]
    InvalidFormat(String),

    #[error("first gift idea is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Generic error: {0}")]
    Generic(String),
}

pub type Result<T> = std::result::Result<T, Error>;
