//! Data types for documents, pages, chunks, and search results.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies where a piece of text came from: a file and a page within it.
///
/// Carried from extraction through chunking into the vector store, so every
/// retrieved passage can be traced back to its origin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SourceRef {
    /// Name of the source file.
    pub file: String,
    /// Zero-based page index within the file.
    pub page: usize,
}

impl SourceRef {
    /// Create a new source reference.
    pub fn new(file: impl Into<String>, page: usize) -> Self {
        Self { file: file.into(), page }
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, page {}", self.file, self.page + 1)
    }
}

/// One page of extracted text with its source reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page {
    /// Raw text content of the page.
    pub text: String,
    /// Where the page came from.
    pub source: SourceRef,
}

/// A source document: an ordered sequence of pages plus metadata.
///
/// Documents exist only at ingestion time. They are immutable once built and
/// are discarded after chunking; only chunks are persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique identifier for the document.
    pub id: String,
    /// Ordered pages of extracted text.
    pub pages: Vec<Page>,
    /// Key-value metadata associated with the document.
    pub metadata: HashMap<String, String>,
}

impl Document {
    /// Build a document from ordered page texts of a single file.
    ///
    /// The file name doubles as the document id; each page gets a
    /// [`SourceRef`] with its index.
    pub fn from_pages(file: impl Into<String>, page_texts: Vec<String>) -> Self {
        let file = file.into();
        let pages = page_texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Page { text, source: SourceRef::new(file.clone(), i) })
            .collect();
        Self { id: file, pages, metadata: HashMap::new() }
    }
}

/// A segment of one page's text, the unit of embedding and retrieval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    /// Unique identifier for the chunk (`{document_id}_{chunk_index}`).
    pub id: String,
    /// The text content of the chunk.
    pub text: String,
    /// The vector embedding for this chunk's text. Empty until embedded.
    pub embedding: Vec<f32>,
    /// The page this chunk was cut from.
    pub source: SourceRef,
    /// Metadata inherited from the parent document plus chunk-specific fields.
    pub metadata: HashMap<String, String>,
    /// The ID of the parent [`Document`].
    pub document_id: String,
}

/// A retrieved [`Chunk`] paired with a relevance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The retrieved chunk.
    pub chunk: Chunk,
    /// The similarity score (higher is more relevant).
    pub score: f32,
}

/// Up to `k` chunks retrieved for one query, ranked by descending similarity.
///
/// Transient: exists only for the duration of one pipeline invocation.
pub type RetrievedContext = Vec<SearchResult>;
