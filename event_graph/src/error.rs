//! Errors from building, querying and persisting event graphs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from graph operations.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("graph is already built; create a new builder to rebuild")]
    AlreadyBuilt,

    #[error("graph is empty; build or load a graph first")]
    Empty,

    #[error("graph file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("file {path} does not have the .{expected} extension")]
    FormatMismatch { path: PathBuf, expected: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GEXF error: {0}")]
    Gexf(#[from] quick_xml::DeError),

    #[error("native encoding error: {0}")]
    Native(#[from] bincode::Error),

    #[error("invalid graph file: {0}")]
    InvalidFormat(String),

    #[error("version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}
