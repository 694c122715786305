//! Gift idea generator - turns recipient details into AI-suggested gifts
//!
//! Builds a prompt from a recipient profile, sends it to the Gemini text
//! generation API with a bounded wait, recovers a JSON array from the
//! free-text reply, and falls back to a fixed catalog whenever any stage
//! of that pipeline fails.

pub mod ai;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod validate;

pub use error::{Error, Result};
pub use pipeline::{generate_gift_ideas, GiftIdeaGenerator};
