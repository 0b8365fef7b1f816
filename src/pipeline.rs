//! Pipeline orchestrator.
//!
//! [`RagPipeline`] composes the components into two workflows: ingestion
//! (extract → chunk → embed → store) and answering (retrieve → build prompt →
//! generate). It holds no per-query state; the only lifecycle state is the
//! vector collection itself, which is either absent (build it first) or
//! present (queryable, rebuildable).
//!
//! # Example
//!
//! ```rust,ignore
//! use ragdoc::{RagPipeline, RagConfig, InMemoryVectorStore, FixedSizeChunker};
//!
//! let config = RagConfig::default();
//! let pipeline = RagPipeline::builder()
//!     .config(config.clone())
//!     .embedding_provider(Arc::new(my_embedder))
//!     .vector_store(Arc::new(InMemoryVectorStore::new()))
//!     .chunker(Arc::new(FixedSizeChunker::new(config.chunk_size, config.chunk_overlap)?))
//!     .generator(Arc::new(my_generator))
//!     .build()?;
//!
//! pipeline.index_documents(&documents).await?;
//! let answer = pipeline.answer("What is the capital of France?").await?;
//! ```

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::chunking::Chunker;
use crate::config::RagConfig;
use crate::document::{Chunk, Document, RetrievedContext};
use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};
use crate::extract::TextExtractor;
use crate::generation::TextGenerator;
use crate::indexer::Indexer;
use crate::prompt::PromptBuilder;
use crate::retriever::Retriever;
use crate::vectorstore::VectorStore;

/// The retrieval-augmented answer pipeline.
///
/// Construct one via [`RagPipeline::builder()`]. Capabilities (embedding,
/// generation, extraction, storage) are injected already-constructed, so
/// tests substitute stubs through the same seams production code uses.
///
/// Each call to [`answer`](RagPipeline::answer) is an independent
/// request/response transform: the pipeline never consults conversation
/// history, which callers hold separately (see
/// [`ChatHistory`](crate::session::ChatHistory)).
pub struct RagPipeline {
    config: RagConfig,
    chunker: Arc<dyn Chunker>,
    indexer: Indexer,
    retriever: Retriever,
    generator: Arc<dyn TextGenerator>,
    prompt_builder: PromptBuilder,
    extractor: Option<Arc<dyn TextExtractor>>,
    vector_store: Arc<dyn VectorStore>,
}

impl RagPipeline {
    /// Create a new [`RagPipelineBuilder`].
    pub fn builder() -> RagPipelineBuilder {
        RagPipelineBuilder::default()
    }

    /// Return a reference to the pipeline configuration.
    pub fn config(&self) -> &RagConfig {
        &self.config
    }

    /// Whether the configured collection has been built.
    pub async fn has_index(&self) -> bool {
        self.vector_store.collection_exists(&self.config.collection).await
    }

    /// Chunk `documents` and (re)build the configured collection from the
    /// result.
    ///
    /// A rebuild replaces the collection's prior contents entirely; stale
    /// records are never mixed with new ones under the same name. Concurrent
    /// readers see the old contents until the swap, then the new ones.
    ///
    /// Returns the stored chunks with embeddings attached.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::IndexBuild`] if embedding fails for any chunk
    /// (naming its source; nothing is written), or
    /// [`RagError::VectorStore`] if persistence fails.
    pub async fn index_documents(&self, documents: &[Document]) -> Result<Vec<Chunk>> {
        let mut chunks = Vec::new();
        for document in documents {
            let document_chunks = self.chunker.chunk(document);
            debug!(document.id = %document.id, chunk_count = document_chunks.len(), "chunked document");
            chunks.extend(document_chunks);
        }

        let stored = self.indexer.build(&self.config.collection, chunks).await?;
        info!(
            collection = %self.config.collection,
            document_count = documents.len(),
            chunk_count = stored.len(),
            "indexed documents"
        );
        Ok(stored)
    }

    /// Extract every file in `paths` and rebuild the collection from them.
    ///
    /// Requires an extractor to have been configured on the builder.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Config`] if no extractor is configured,
    /// [`RagError::Extraction`] if any file fails to extract, or any
    /// [`index_documents`](RagPipeline::index_documents) error.
    pub async fn ingest_files(&self, paths: &[&Path]) -> Result<Vec<Chunk>> {
        let extractor = self.extractor.as_ref().ok_or_else(|| {
            RagError::Config("no text extractor configured on this pipeline".to_string())
        })?;

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            documents.push(extractor.extract(path).await?);
        }
        self.index_documents(&documents).await
    }

    /// Retrieve context for `query` without generating an answer.
    ///
    /// Uses the configured `top_k`. Exposed for callers that want to show
    /// sources or inspect grounding.
    pub async fn retrieve(&self, query: &str) -> Result<RetrievedContext> {
        self.retriever.retrieve(&self.config.collection, query, self.config.top_k).await
    }

    /// Answer `query` against the configured collection.
    ///
    /// Composes retrieve → build prompt → generate. Stateless per call;
    /// deterministic when the injected capabilities are deterministic. An
    /// empty collection is not an error: the prompt then carries no context
    /// and a well-behaved generator emits the fallback phrase.
    ///
    /// # Errors
    ///
    /// Retrieval errors ([`RagError::VectorStore`],
    /// [`RagError::DimensionMismatch`], [`RagError::Embedding`]) and
    /// [`RagError::Generation`] propagate unmodified — masking them would
    /// return confidently wrong answers.
    pub async fn answer(&self, query: &str) -> Result<String> {
        let context = self.retrieve(query).await?;
        let prompt = self.prompt_builder.build(&context, query);
        debug!(context_count = context.len(), prompt_len = prompt.len(), "built prompt");

        let answer = self.generator.generate(&prompt, &self.config.generation).await?;
        info!(query_len = query.len(), answer_len = answer.len(), "answered query");
        Ok(answer)
    }
}

/// Builder for constructing a [`RagPipeline`].
///
/// `config`, `embedding_provider`, `vector_store`, `chunker`, and
/// `generator` are required; `extractor` and `prompt_builder` are optional.
/// Call [`build()`](RagPipelineBuilder::build) to validate and produce the
/// pipeline.
#[derive(Default)]
pub struct RagPipelineBuilder {
    config: Option<RagConfig>,
    embedding_provider: Option<Arc<dyn EmbeddingProvider>>,
    vector_store: Option<Arc<dyn VectorStore>>,
    chunker: Option<Arc<dyn Chunker>>,
    generator: Option<Arc<dyn TextGenerator>>,
    prompt_builder: Option<PromptBuilder>,
    extractor: Option<Arc<dyn TextExtractor>>,
}

impl RagPipelineBuilder {
    /// Set the pipeline configuration.
    pub fn config(mut self, config: RagConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the embedding capability.
    pub fn embedding_provider(mut self, provider: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedding_provider = Some(provider);
        self
    }

    /// Set the vector store backend.
    pub fn vector_store(mut self, store: Arc<dyn VectorStore>) -> Self {
        self.vector_store = Some(store);
        self
    }

    /// Set the document chunker.
    pub fn chunker(mut self, chunker: Arc<dyn Chunker>) -> Self {
        self.chunker = Some(chunker);
        self
    }

    /// Set the text-generation capability.
    pub fn generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Set a custom prompt builder. Defaults to [`PromptBuilder::default()`].
    pub fn prompt_builder(mut self, prompt_builder: PromptBuilder) -> Self {
        self.prompt_builder = Some(prompt_builder);
        self
    }

    /// Set an optional text extractor for
    /// [`ingest_files`](RagPipeline::ingest_files).
    pub fn extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Build the [`RagPipeline`], validating that all required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Config`] if any required field is missing.
    pub fn build(self) -> Result<RagPipeline> {
        let config =
            self.config.ok_or_else(|| RagError::Config("config is required".to_string()))?;
        let embedding_provider = self
            .embedding_provider
            .ok_or_else(|| RagError::Config("embedding_provider is required".to_string()))?;
        let vector_store = self
            .vector_store
            .ok_or_else(|| RagError::Config("vector_store is required".to_string()))?;
        let chunker =
            self.chunker.ok_or_else(|| RagError::Config("chunker is required".to_string()))?;
        let generator =
            self.generator.ok_or_else(|| RagError::Config("generator is required".to_string()))?;

        let indexer = Indexer::new(Arc::clone(&embedding_provider), Arc::clone(&vector_store));
        let retriever = Retriever::new(embedding_provider, Arc::clone(&vector_store));

        Ok(RagPipeline {
            config,
            chunker,
            indexer,
            retriever,
            generator,
            prompt_builder: self.prompt_builder.unwrap_or_default(),
            extractor: self.extractor,
            vector_store,
        })
    }
}
