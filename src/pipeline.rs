//! Orchestrates one generation request from prompt to result envelope.
//!
//! The pipeline is linear with no retries: build the prompt, race the AI
//! call against a timer, extract a JSON array from the reply, validate it.
//! Every failure converges on [`GenerationResult::fallback`] at a single
//! boundary, so callers always receive usable gift data.

use crate::ai::{GeminiTextClient, TextGenerationService};
use crate::models::{Config, GenerationResult, GiftIdea, RecipientProfile};
use crate::{extract, prompts, validate, Error, Result};
use std::time::Duration;
use tracing::{error, info};

/// Wall-clock bound on the AI call. The losing request future is dropped,
/// not cancelled at the provider.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Token budget for the completion request.
pub const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Inbound contract for the presentation layer: profile plus regenerate
/// flag in, result envelope out. Never returns an error; a missing API key
/// surfaces as a fallback result like every other failure.
pub async fn generate_gift_ideas(
    profile: &RecipientProfile,
    is_regenerate: bool,
) -> GenerationResult {
    match GiftIdeaGenerator::from_env() {
        Ok(generator) => generator.generate(profile, is_regenerate).await,
        Err(e) => {
            error!("Failed to initialize gift idea generator: {}", e);
            GenerationResult::fallback(failure_message(&e))
        }
    }
}

/// Runs the generation pipeline against an injected text-generation service.
pub struct GiftIdeaGenerator {
    text: Box<dyn TextGenerationService>,
    timeout: Duration,
}

impl GiftIdeaGenerator {
    /// Construct from environment configuration with the real Gemini client.
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env()?;
        info!("Gift idea model: {}", config.model);

        Ok(Self::with_service(
            Box::new(GeminiTextClient::new(config.api_key, config.model)),
            REQUEST_TIMEOUT,
        ))
    }

    /// Build a generator from a concrete service dependency. Primarily
    /// useful for tests and harnesses that need to inject mocks.
    pub fn with_service(text: Box<dyn TextGenerationService>, timeout: Duration) -> Self {
        Self { text, timeout }
    }

    /// Single outermost error boundary: any stage failure becomes a fallback
    /// envelope with a stage-specific message.
    pub async fn generate(
        &self,
        profile: &RecipientProfile,
        is_regenerate: bool,
    ) -> GenerationResult {
        match self.run(profile, is_regenerate).await {
            Ok(ideas) => GenerationResult::ok(ideas),
            Err(e) => {
                error!("Gift idea generation failed: {}", e);
                GenerationResult::fallback(failure_message(&e))
            }
        }
    }

    async fn run(&self, profile: &RecipientProfile, is_regenerate: bool) -> Result<Vec<GiftIdea>> {
        let prompt = prompts::build_gift_prompt(profile, is_regenerate);
        info!("Sending gift idea request ({} chars)", prompt.len());

        // First-settled-wins race between the AI call and the timer.
        let reply = match tokio::time::timeout(
            self.timeout,
            self.text.generate_text(&prompt, MAX_OUTPUT_TOKENS),
        )
        .await
        {
            Ok(result) => result?,
            Err(_) => return Err(Error::Timeout(self.timeout.as_secs())),
        };

        let sample: String = reply.chars().take(200).collect();
        info!("Received AI reply, sample: {}...", sample);

        let candidate = extract::extract_json_array(&reply).ok_or_else(|| {
            error!("Failed to extract JSON from reply: {}", reply);
            Error::Extraction
        })?;

        validate::parse_gift_ideas(candidate)
    }
}

/// User-facing explanation for each failure kind, distinguishing
/// credential, transport, timeout, extraction, and parsing problems.
fn failure_message(err: &Error) -> String {
    match err {
        Error::MissingApiKey => {
            "API key not configured. Please check your environment variables.".to_string()
        }
        Error::Timeout(secs) => format!(
            "The AI request timed out after {} seconds. Please try again.",
            secs
        ),
        Error::Http(e) => format!("API Error: {}", e),
        Error::AiProvider(msg) => format!("API Error: {}", msg),
        Error::Extraction => {
            "Failed to parse gift ideas from AI response. The response format was unexpected."
                .to_string()
        }
        Error::Parse(_) => "Failed to parse the AI response. Please try again.".to_string(),
        Error::InvalidFormat(_) => {
            "The AI generated an invalid response format. Please try again.".to_string()
        }
        Error::MissingField(_) => {
            "The AI response is missing required information. Please try again.".to_string()
        }
        Error::Generic(_) => {
            "An unexpected error occurred while generating gift ideas. Please try again."
                .to_string()
        }
    }
}
