//! Vector store trait for persisting and searching embedded chunks.

use async_trait::async_trait;

use crate::document::{Chunk, SearchResult};
use crate::error::Result;

/// A storage backend for embedded chunks with similarity search.
///
/// Implementations manage named collections. A collection's dimensionality is
/// fixed at creation; records and queries that disagree with it must fail
/// with [`RagError::DimensionMismatch`](crate::RagError::DimensionMismatch)
/// rather than silently returning garbage.
///
/// Collections change contents only wholesale, through
/// [`replace_collection`](VectorStore::replace_collection): readers observe
/// either the previous contents or the new ones, never a mix.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Create a named empty collection. No-op if it already exists.
    async fn create_collection(&self, name: &str, dimensions: usize) -> Result<()>;

    /// Delete a named collection and all its data.
    async fn delete_collection(&self, name: &str) -> Result<()>;

    /// Whether a collection with this name exists.
    async fn collection_exists(&self, name: &str) -> bool;

    /// Insert chunks into a collection, preserving their order. Chunks must
    /// have embeddings of the collection's dimensionality.
    async fn upsert(&self, collection: &str, chunks: &[Chunk]) -> Result<()>;

    /// Atomically replace a collection's entire contents.
    ///
    /// Creates the collection if it does not exist. The swap is the
    /// visibility point for index rebuilds: a concurrent
    /// [`search`](VectorStore::search) sees the old records or the new ones,
    /// never a partial write.
    async fn replace_collection(
        &self,
        name: &str,
        dimensions: usize,
        chunks: &[Chunk],
    ) -> Result<()>;

    /// Search for the `k` most similar chunks to the given embedding.
    ///
    /// Returns results ordered by descending similarity, ties broken by
    /// insertion order. Fewer than `k` records returns all of them; an empty
    /// collection returns an empty `Vec`, not an error.
    async fn search(&self, collection: &str, embedding: &[f32], k: usize)
        -> Result<Vec<SearchResult>>;
}
