//! Text-extraction capability trait.
//!
//! PDF (or other format) parsing is a collaborator concern, not implemented
//! here. The pipeline only needs "ordered pages of text for a file"; this
//! module defines that seam plus a plain-text implementation for tests and
//! small corpora.

use std::path::Path;

use async_trait::async_trait;

use crate::document::Document;
use crate::error::{RagError, Result};

/// A capability that extracts a [`Document`] of ordered page texts from a
/// file.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract the file at `path` into a document of ordered pages.
    async fn extract(&self, path: &Path) -> Result<Document>;
}

/// Reads plain-text files, treating form feeds (`\x0c`) as page breaks.
///
/// A file without form feeds extracts as a single page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<Document> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let content = tokio::fs::read_to_string(path).await.map_err(|e| RagError::Extraction {
            source_id: name.clone(),
            message: format!("failed to read file: {e}"),
        })?;

        let pages: Vec<String> = content.split('\x0c').map(str::to_string).collect();
        Ok(Document::from_pages(name, pages))
    }
}
