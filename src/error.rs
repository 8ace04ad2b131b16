//! Errors raised at the edges of the crate.
//!
//! Extraction itself never fails; these cover reading documents, writing snapshots, decoding
//! snapshots loaded back from disk and watching pages for changes.

use std::path::PathBuf;

/// Errors that can occur while reading input or publishing an outline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading a page or writing a snapshot failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An outline could not be encoded as JSON.
    #[error("Failed to encode outline: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored snapshot could not be decoded.
    #[error("Invalid outline snapshot {path}: {source}")]
    Snapshot {
        /// File the snapshot was read from.
        path: PathBuf,
        /// Decoding failure.
        source: serde_json::Error,
    },

    /// The filesystem watcher could not be set up or stopped delivering events.
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),
}

/// Result alias used across the crate's fallible edges.
pub type Result<T> = std::result::Result<T, Error>;
