//! Embedding capability trait.

use async_trait::async_trait;

use crate::error::Result;

/// A capability that turns text into a fixed-length numeric vector.
///
/// The pipeline accepts an already-constructed provider rather than loading
/// models itself, so tests and callers can substitute stub implementations.
/// The same provider must be used at index-build time and at query time;
/// mixing providers with different dimensionalities surfaces as
/// [`RagError::DimensionMismatch`](crate::RagError::DimensionMismatch) at the
/// vector store.
///
/// # Example
///
/// ```rust,ignore
/// use ragdoc::EmbeddingProvider;
///
/// let embedding = provider.embed("hello world").await?;
/// assert_eq!(embedding.len(), provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding vector for a single text input.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embedding vectors for a batch of text inputs.
    ///
    /// The default implementation calls [`embed`](EmbeddingProvider::embed)
    /// sequentially for each input. Override this method if the backend
    /// supports native batch embedding for better throughput.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed(text).await?);
        }
        Ok(results)
    }

    /// Return the dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;
}
