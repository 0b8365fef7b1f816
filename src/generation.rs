//! Text-generation capability trait and sampling options.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Sampling parameters passed through to the generation capability.
///
/// The pipeline never computes or adjusts these; they travel from the caller's
/// configuration to the backend untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationOptions {
    /// Sampling temperature.
    pub temperature: f32,
    /// Nucleus-sampling threshold.
    pub top_p: f32,
    /// Maximum number of new tokens to generate.
    pub max_new_tokens: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self { temperature: 0.7, top_p: 0.9, max_new_tokens: 512 }
    }
}

/// A capability that generates text from a prompt.
///
/// Implementations wrap a specific backend (a local model, an HTTP API, a
/// test stub) and return decoded text with no structural reformatting. A
/// backend failure surfaces as
/// [`RagError::Generation`](crate::RagError::Generation); the pipeline never
/// retries or alters sampling on failure.
///
/// A loaded model is typically a single exclusive resource. Callers running
/// concurrent queries against one instance are responsible for serializing
/// access to it.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt` using the given sampling options.
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String>;
}
