//! Error types for the `ragdoc` crate.

use thiserror::Error;

/// Errors that can occur across the retrieval-augmented answer pipeline.
#[derive(Debug, Error)]
pub enum RagError {
    /// A configuration validation error (e.g. `chunk_overlap >= chunk_size`).
    #[error("Configuration error: {0}")]
    Config(String),

    /// An index build failed. No partial index is left behind.
    #[error("Index build failed at {source_id}: {message}")]
    IndexBuild {
        /// Source identifier (file name + page) of the chunk that failed.
        source_id: String,
        /// A description of the failure.
        message: String,
    },

    /// A query or record embedding does not match the collection's
    /// dimensionality.
    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimensionality the collection was created with.
        expected: usize,
        /// Dimensionality actually supplied.
        actual: usize,
    },

    /// The embedding capability failed.
    #[error("Embedding error ({provider}): {message}")]
    Embedding {
        /// The embedding provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// The text-generation capability failed.
    #[error("Generation error ({provider}): {message}")]
    Generation {
        /// The generation provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// An error occurred in the vector store backend.
    #[error("Vector store error ({backend}): {message}")]
    VectorStore {
        /// The vector store backend that produced the error.
        backend: String,
        /// A description of the failure.
        message: String,
    },

    /// Text extraction from a source file failed.
    #[error("Extraction error ({source_id}): {message}")]
    Extraction {
        /// The file the extractor was reading.
        source_id: String,
        /// A description of the failure.
        message: String,
    },
}

/// A convenience result type for pipeline operations.
pub type Result<T> = std::result::Result<T, RagError>;
