//! Error types for catalog loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching the catalog text.
///
/// These never reach the cart or the presentation layer:
/// [`load_catalog`](crate::catalog::load_catalog) logs them and falls back to an
/// empty catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source returned no text at all.
    #[error("Catalog source is empty")]
    Empty,

    /// The source is unavailable for a reason other than I/O.
    #[error("Catalog source unavailable: {0}")]
    Unavailable(String),
}
