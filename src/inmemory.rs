//! In-memory vector store using cosine similarity.
//!
//! This module provides [`InMemoryVectorStore`], a vector store backed by a
//! `HashMap` of record lists behind a `tokio::sync::RwLock`. It is suitable
//! for development, testing, and small corpora.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::document::{Chunk, SearchResult};
use crate::error::{RagError, Result};
use crate::vectorstore::VectorStore;

/// One named collection: a fixed dimensionality plus records in insertion
/// order. Insertion order is what makes tie-breaking stable during search.
#[derive(Debug)]
struct Collection {
    dimensions: usize,
    records: Vec<Chunk>,
}

/// An in-memory vector store using cosine similarity for search.
///
/// All operations are async-safe via `tokio::sync::RwLock`; arbitrarily many
/// searches may run while no replace is in progress, and
/// [`replace_collection`](VectorStore::replace_collection) swaps contents
/// under a single write-lock acquisition.
///
/// # Example
///
/// ```rust,ignore
/// use ragdoc::{InMemoryVectorStore, VectorStore};
///
/// let store = InMemoryVectorStore::new();
/// store.create_collection("docs", 384).await?;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryVectorStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl InMemoryVectorStore {
    /// Create a new empty in-memory vector store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn missing_collection(name: &str) -> RagError {
    RagError::VectorStore {
        backend: "InMemory".to_string(),
        message: format!("collection '{name}' does not exist"),
    }
}

fn check_dimensions(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(RagError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn create_collection(&self, name: &str, dimensions: usize) -> Result<()> {
        let mut collections = self.collections.write().await;
        collections
            .entry(name.to_string())
            .or_insert_with(|| Collection { dimensions, records: Vec::new() });
        Ok(())
    }

    async fn delete_collection(&self, name: &str) -> Result<()> {
        let mut collections = self.collections.write().await;
        collections.remove(name);
        Ok(())
    }

    async fn collection_exists(&self, name: &str) -> bool {
        let collections = self.collections.read().await;
        collections.contains_key(name)
    }

    async fn upsert(&self, collection: &str, chunks: &[Chunk]) -> Result<()> {
        let mut collections = self.collections.write().await;
        let store = collections.get_mut(collection).ok_or_else(|| missing_collection(collection))?;
        for chunk in chunks {
            check_dimensions(store.dimensions, chunk.embedding.len())?;
        }
        store.records.extend_from_slice(chunks);
        Ok(())
    }

    async fn replace_collection(
        &self,
        name: &str,
        dimensions: usize,
        chunks: &[Chunk],
    ) -> Result<()> {
        for chunk in chunks {
            check_dimensions(dimensions, chunk.embedding.len())?;
        }

        // Materialize the new record list before taking the lock, so the
        // write section is a plain swap.
        let fresh = Collection { dimensions, records: chunks.to_vec() };

        let mut collections = self.collections.write().await;
        collections.insert(name.to_string(), fresh);
        Ok(())
    }

    async fn search(
        &self,
        collection: &str,
        embedding: &[f32],
        k: usize,
    ) -> Result<Vec<SearchResult>> {
        let collections = self.collections.read().await;
        let store = collections.get(collection).ok_or_else(|| missing_collection(collection))?;

        check_dimensions(store.dimensions, embedding.len())?;

        let mut scored: Vec<SearchResult> = store
            .records
            .iter()
            .map(|chunk| {
                let score = cosine_similarity(&chunk.embedding, embedding);
                SearchResult { chunk: chunk.clone(), score }
            })
            .collect();

        // sort_by is stable: equal scores keep insertion order.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);
        Ok(scored)
    }
}
