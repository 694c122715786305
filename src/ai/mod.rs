//! AI service integration for gift idea generation
//!
//! Provides the text-generation seam the pipeline calls through, a Gemini
//! implementation, and a scripted mock for tests.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiTextClient;
pub use mock::MockTextClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TextGenerationService: Send + Sync {
    async fn generate_text(&self, prompt: &str, max_output_tokens: u32) -> Result<String>;
}
