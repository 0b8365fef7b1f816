//! Document chunking.
//!
//! This module provides the [`Chunker`] trait and [`FixedSizeChunker`], which
//! slides a fixed-size character window with configurable overlap across each
//! page of a document independently.

use crate::document::{Chunk, Document};
use crate::error::{RagError, Result};

/// A strategy for splitting documents into chunks.
///
/// Implementations produce [`Chunk`]s with text and metadata but no
/// embeddings. Embeddings are attached later by the indexer.
pub trait Chunker: Send + Sync {
    /// Split a document into chunks.
    ///
    /// Returns an empty `Vec` if every page is empty. Each returned chunk has
    /// an empty embedding vector.
    fn chunk(&self, document: &Document) -> Vec<Chunk>;
}

/// Splits each page into fixed-size character windows with overlap.
///
/// Window `i` of a page starts at character offset
/// `i * (chunk_size - chunk_overlap)` and spans `chunk_size` characters (the
/// last window is truncated to the remaining text). Pages are chunked
/// independently and never merged, even when a page yields an undersized
/// final chunk, so every chunk traces back to exactly one page.
///
/// Window arithmetic counts Unicode scalar values, not bytes, so a boundary
/// never lands inside a multi-byte character.
///
/// Chunk IDs are generated as `{document_id}_{chunk_index}`, with
/// `chunk_index` running across the whole document. Each chunk inherits the
/// parent document's metadata plus a `chunk_index` field.
///
/// # Example
///
/// ```rust,ignore
/// use ragdoc::FixedSizeChunker;
///
/// let chunker = FixedSizeChunker::new(1000, 50)?;
/// let chunks = chunker.chunk(&document);
/// ```
#[derive(Debug, Clone)]
pub struct FixedSizeChunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl FixedSizeChunker {
    /// Create a new `FixedSizeChunker`.
    ///
    /// # Arguments
    ///
    /// * `chunk_size` — maximum number of characters per chunk
    /// * `chunk_overlap` — characters shared between consecutive chunks
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Config`] if `chunk_size` is zero or
    /// `chunk_overlap >= chunk_size`. Validating here keeps the window step
    /// strictly positive, so [`chunk`](Chunker::chunk) can never loop or
    /// emit duplicate windows.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(RagError::Config("chunk_size must be greater than zero".to_string()));
        }
        if chunk_overlap >= chunk_size {
            return Err(RagError::Config(format!(
                "chunk_overlap ({chunk_overlap}) must be less than chunk_size ({chunk_size})"
            )));
        }
        Ok(Self { chunk_size, chunk_overlap })
    }

    /// Cut one page's text into owned window strings.
    fn windows(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        // Byte offset of every character, plus the end sentinel, so windows
        // can be sliced without landing mid-codepoint.
        let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        offsets.push(text.len());
        let char_len = offsets.len() - 1;

        let step = self.chunk_size - self.chunk_overlap;
        let mut windows = Vec::new();
        let mut start = 0;
        while start < char_len {
            let end = (start + self.chunk_size).min(char_len);
            windows.push(text[offsets[start]..offsets[end]].to_string());
            start += step;
        }
        windows
    }
}

impl Chunker for FixedSizeChunker {
    fn chunk(&self, document: &Document) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut chunk_index = 0;

        for page in &document.pages {
            for text in self.windows(&page.text) {
                let mut metadata = document.metadata.clone();
                metadata.insert("chunk_index".to_string(), chunk_index.to_string());

                chunks.push(Chunk {
                    id: format!("{}_{chunk_index}", document.id),
                    text,
                    embedding: Vec::new(),
                    source: page.source.clone(),
                    metadata,
                    document_id: document.id.clone(),
                });
                chunk_index += 1;
            }
        }

        chunks
    }
}
