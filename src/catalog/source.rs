//! Where catalog text comes from.
//!
//! Fetching is the only asynchronous step in loading the menu. Sources return
//! raw text; parsing happens afterwards in [`parse`](super::parse).

use super::CatalogError;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// A provider of raw catalog text.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<String, CatalogError>;
}

/// Reads the catalog from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> Result<String, CatalogError> {
        debug!("Reading catalog file");
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;
        if text.trim().is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(text)
    }
}

/// Catalog text held in memory, e.g. embedded with `include_str!`.
#[derive(Debug, Clone)]
pub struct StaticSource(pub String);

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch(&self) -> Result<String, CatalogError> {
        if self.0.trim().is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(self.0.clone())
    }
}
