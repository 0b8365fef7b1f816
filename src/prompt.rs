//! Grounded prompt construction.
//!
//! The prompt template instructs the generator to answer only from the
//! retrieved context and to fall back to a fixed phrase when the context does
//! not contain the answer. Construction is a pure function of its inputs, so
//! prompt shape is testable without invoking any model.

use crate::document::RetrievedContext;

/// The fallback phrase the generator is instructed to emit when the answer
/// is not present in the supplied context.
pub const FALLBACK_PHRASE: &str = "I could not find an answer in the provided documents.";

/// Delimiter placed between retrieved context blocks.
const CONTEXT_DELIMITER: &str = "\n---\n";

/// Assembles a grounded prompt from retrieved context and a question.
///
/// Deterministic: the same `(context, query)` pair always yields
/// byte-identical output. Holds no state beyond the fallback phrase.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    fallback_phrase: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self { fallback_phrase: FALLBACK_PHRASE.to_string() }
    }
}

impl PromptBuilder {
    /// Create a builder with the default fallback phrase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the fallback phrase the generator is told to use.
    pub fn with_fallback_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.fallback_phrase = phrase.into();
        self
    }

    /// Build the prompt: numbered, source-labelled context blocks in ranked
    /// order, followed by the literal question, under a fixed grounding
    /// instruction.
    ///
    /// Empty context produces a prompt with an explicitly empty context
    /// section; given the instruction, a well-behaved generator then emits
    /// the fallback phrase.
    pub fn build(&self, context: &RetrievedContext, query: &str) -> String {
        let context_section = if context.is_empty() {
            "(no context available)".to_string()
        } else {
            context
                .iter()
                .enumerate()
                .map(|(i, result)| {
                    format!("[{}] ({})\n{}", i + 1, result.chunk.source, result.chunk.text)
                })
                .collect::<Vec<_>>()
                .join(CONTEXT_DELIMITER)
        };

        format!(
            "You are an assistant that answers questions using only the context below.\n\
             If the context does not contain the answer, reply exactly: \"{fallback}\"\n\
             Do not use outside knowledge.\n\
             \n\
             Context:\n\
             {context}\n\
             \n\
             Question: {query}\n\
             Answer:",
            fallback = self.fallback_phrase,
            context = context_section,
            query = query,
        )
    }
}
