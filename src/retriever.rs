//! Query-time retrieval: embed a query and rank stored chunks against it.

use std::sync::Arc;

use tracing::{debug, info};

use crate::document::RetrievedContext;
use crate::embedding::EmbeddingProvider;
use crate::error::Result;
use crate::vectorstore::VectorStore;

/// Retrieves the `k` most similar chunks for a query.
///
/// Must be constructed with the same embedding provider used to build the
/// collection; a provider with a different dimensionality fails at search
/// with [`RagError::DimensionMismatch`](crate::RagError::DimensionMismatch).
pub struct Retriever {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStore>,
}

impl Retriever {
    /// Create a retriever over the given capabilities.
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_store: Arc<dyn VectorStore>,
    ) -> Self {
        Self { embedding_provider, vector_store }
    }

    /// Embed `query` and return up to `k` chunks ranked by descending
    /// similarity, ties broken by insertion order.
    ///
    /// A collection with fewer than `k` records returns all of them; an
    /// empty collection returns an empty context — "no documents yet" is a
    /// valid state, not an error.
    pub async fn retrieve(
        &self,
        collection: &str,
        query: &str,
        k: usize,
    ) -> Result<RetrievedContext> {
        debug!(collection, k, query_len = query.len(), "retrieving context");

        let query_embedding = self.embedding_provider.embed(query).await?;
        let results = self.vector_store.search(collection, &query_embedding, k).await?;

        info!(collection, result_count = results.len(), "retrieval completed");
        Ok(results)
    }
}
