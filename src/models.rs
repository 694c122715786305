//! Data models and structures
//!
//! Defines the recipient profile supplied by the caller, the gift idea
//! records produced by the pipeline, the result envelope handed back to the
//! presentation layer, and environment-driven configuration.

use serde::{Deserialize, Serialize};

/// Recipient details collected from the form. All fields are opaque free
/// text; the pipeline performs no validation beyond passing them through.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientProfile {
    pub recipient_name: String,
    pub age: String,
    pub gender: String,
    pub relationship: String,
    pub interests: String,
    pub budget: String,
    pub preferred_gift_type: String,
}

/// A single gift suggestion, either AI-sourced or from the fallback catalog.
///
/// Only `name`, `description`, `reason`, and `price_range` are required on
/// the first element of an AI reply; everything defaults so that elements
/// beyond index 0 are accepted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftIdea {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub price_range: String,
    #[serde(default)]
    pub where_to_buy: Vec<String>,
    #[serde(default)]
    pub recommended_brands: Vec<String>,
}

/// The sole contract between the pipeline and its caller. Either a
/// successful AI-sourced list, or the fallback catalog plus a
/// human-readable stage-specific error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub success: bool,
    pub data: Vec<GiftIdea>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
}

impl GenerationResult {
    pub fn ok(data: Vec<GiftIdea>) -> Self {
        Self {
            success: true,
            data,
            error: None,
            fallback: None,
        }
    }

    /// Failure envelope: always carries the complete fallback catalog so the
    /// caller has usable data regardless of which stage failed.
    pub fn fallback(error: String) -> Self {
        Self {
            success: false,
            data: crate::fallback::catalog(),
            error: Some(error),
            fallback: Some(true),
        }
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
}

impl Config {
    /// Resolve configuration from the environment. The API key is looked up
    /// under `GEMINI_API_KEY` first, then `GOOGLE_GENERATIVE_AI_API_KEY`.
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = match std::env::var("GEMINI_API_KEY") {
            Ok(key) => {
                tracing::info!("Using API key from GEMINI_API_KEY");
                key
            }
            Err(_) => {
                let key = std::env::var("GOOGLE_GENERATIVE_AI_API_KEY")
                    .map_err(|_| crate::Error::MissingApiKey)?;
                tracing::info!("Using API key from GOOGLE_GENERATIVE_AI_API_KEY");
                key
            }
        };

        Ok(Self {
            api_key,
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-pro".to_string()),
        })
    }
}
