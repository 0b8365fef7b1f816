//! # ragdoc
//!
//! Retrieval-augmented generation over document corpora: ingest documents,
//! index them for semantic search, and answer natural-language questions by
//! retrieving relevant passages and conditioning a text-generation capability
//! on them.
//!
//! ## Overview
//!
//! The crate is built around capability traits that callers supply
//! already-constructed (dependency injection, so tests run against stubs):
//!
//! - [`EmbeddingProvider`] — text → fixed-length vector
//! - [`TextGenerator`] — prompt → text, with [`GenerationOptions`] passed through
//! - [`TextExtractor`] — file → ordered pages of text
//! - [`VectorStore`] — named collections with similarity search
//!
//! and components composed by [`RagPipeline`]:
//!
//! - [`FixedSizeChunker`] — per-page sliding character windows with overlap
//! - [`Indexer`] — embed chunks, atomically replace a collection
//! - [`Retriever`] — embed a query, return the top-k ranked chunks
//! - [`PromptBuilder`] — deterministic grounded prompt construction
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ragdoc::{
//!     Document, FixedSizeChunker, InMemoryVectorStore, RagConfig, RagPipeline,
//! };
//!
//! # async fn run(
//! #     embedder: Arc<dyn ragdoc::EmbeddingProvider>,
//! #     generator: Arc<dyn ragdoc::TextGenerator>,
//! # ) -> ragdoc::Result<()> {
//! let config = RagConfig::default();
//! let chunker = FixedSizeChunker::new(config.chunk_size, config.chunk_overlap)?;
//!
//! let pipeline = RagPipeline::builder()
//!     .config(config)
//!     .embedding_provider(embedder)
//!     .vector_store(Arc::new(InMemoryVectorStore::new()))
//!     .chunker(Arc::new(chunker))
//!     .generator(generator)
//!     .build()?;
//!
//! let doc = Document::from_pages("notes.txt", vec!["The capital of France is Paris.".into()]);
//! pipeline.index_documents(&[doc]).await?;
//!
//! let answer = pipeline.answer("What is the capital of France?").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Each query is a single start-to-finish request/response; suspension points
//! are the embedding, store, and generation calls. The collection is
//! read-shared, and rebuilds swap contents atomically, so independent
//! pipeline invocations may run in separate tasks against one store. The
//! core adds no timeouts or cancellation; wrap capabilities at their boundary
//! if you need them.

pub mod chunking;
pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod extract;
pub mod generation;
pub mod indexer;
pub mod inmemory;
#[cfg(feature = "openai")]
pub mod openai;
pub mod pipeline;
pub mod prompt;
pub mod retriever;
pub mod session;
pub mod vectorstore;

pub use chunking::{Chunker, FixedSizeChunker};
pub use config::{RagConfig, RagConfigBuilder};
pub use document::{Chunk, Document, Page, RetrievedContext, SearchResult, SourceRef};
pub use embedding::EmbeddingProvider;
pub use error::{RagError, Result};
pub use extract::{PlainTextExtractor, TextExtractor};
pub use generation::{GenerationOptions, TextGenerator};
pub use indexer::Indexer;
pub use inmemory::InMemoryVectorStore;
#[cfg(feature = "openai")]
pub use openai::{OpenAIChatGenerator, OpenAIEmbeddingProvider};
pub use pipeline::{RagPipeline, RagPipelineBuilder};
pub use prompt::{PromptBuilder, FALLBACK_PHRASE};
pub use retriever::Retriever;
pub use session::{ChatHistory, ConversationTurn};
pub use vectorstore::VectorStore;
