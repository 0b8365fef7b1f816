//! Index builds: embed chunks and persist them as a named collection.

use std::sync::Arc;

use tracing::{error, info};

use crate::document::Chunk;
use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};
use crate::vectorstore::VectorStore;

/// Builds a vector collection from chunks.
///
/// A build embeds every chunk up front and only then touches the store, via
/// one [`replace_collection`](VectorStore::replace_collection) call. Two
/// consequences: a failed embedding leaves the previous collection intact
/// (no partial index), and a rebuild under the same name replaces the prior
/// contents entirely, with concurrent readers seeing old-or-new but never a
/// mix.
///
/// Chunks are embedded one at a time rather than batched so that a failure
/// can name the offending chunk's source.
pub struct Indexer {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStore>,
}

impl Indexer {
    /// Create an indexer over the given capabilities.
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_store: Arc<dyn VectorStore>,
    ) -> Self {
        Self { embedding_provider, vector_store }
    }

    /// Embed `chunks` and replace the contents of `collection` with them.
    ///
    /// Returns the chunks with embeddings attached. An empty `chunks` slice
    /// still replaces the collection, leaving it present but empty.
    ///
    /// # Errors
    ///
    /// - [`RagError::IndexBuild`] if embedding any chunk fails, naming that
    ///   chunk's source identifier. Nothing is written in that case.
    /// - [`RagError::DimensionMismatch`] if the provider returns a vector
    ///   that disagrees with its declared dimensionality.
    /// - [`RagError::VectorStore`] if the persistence step fails.
    pub async fn build(&self, collection: &str, chunks: Vec<Chunk>) -> Result<Vec<Chunk>> {
        let dimensions = self.embedding_provider.dimensions();

        let mut embedded = Vec::with_capacity(chunks.len());
        for mut chunk in chunks {
            let embedding = self.embedding_provider.embed(&chunk.text).await.map_err(|e| {
                error!(source = %chunk.source, error = %e, "embedding failed during index build");
                RagError::IndexBuild { source_id: chunk.source.to_string(), message: e.to_string() }
            })?;

            if embedding.len() != dimensions {
                return Err(RagError::DimensionMismatch {
                    expected: dimensions,
                    actual: embedding.len(),
                });
            }

            chunk.embedding = embedding;
            embedded.push(chunk);
        }

        self.vector_store.replace_collection(collection, dimensions, &embedded).await?;

        info!(collection, chunk_count = embedded.len(), "index built");
        Ok(embedded)
    }
}
