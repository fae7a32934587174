//! Graph persistence in two interchangeable formats.
//!
//! - **Native** (`.bin`): a versioned bincode snapshot of nodes, edges and
//!   graph kind. Only plain data is decoded.
//! - **Exchange** (`.gexf`): a GEXF 1.2 document with a `frequency` node
//!   attribute and weighted edges, for Gephi, networkx and similar tools.

mod exchange;
mod native;

pub use exchange::*;
pub use native::*;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::{EventGraph, GraphError};

/// On-disk graph formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Native,
    Exchange,
}

impl GraphFormat {
    /// File extension required for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            GraphFormat::Native => "bin",
            GraphFormat::Exchange => "gexf",
        }
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == self.extension())
    }
}

impl std::fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphFormat::Native => write!(f, "native"),
            GraphFormat::Exchange => write!(f, "exchange"),
        }
    }
}

/// Write a graph to `path`, appending the format's extension when the path
/// has none. Parent directories are created. Returns the written path.
pub fn save_graph(
    graph: &EventGraph,
    path: &Path,
    format: GraphFormat,
) -> Result<PathBuf, GraphError> {
    if graph.is_empty() {
        return Err(GraphError::Empty);
    }

    let path = match path.extension() {
        None => path.with_extension(format.extension()),
        Some(_) if format.matches(path) => path.to_path_buf(),
        Some(_) => {
            return Err(GraphError::FormatMismatch {
                path: path.to_path_buf(),
                expected: format.extension(),
            })
        }
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let bytes = match format {
        GraphFormat::Native => encode_native(graph)?,
        GraphFormat::Exchange => encode_exchange(graph)?,
    };
    fs::write(&path, bytes)?;

    info!(
        path = %path.display(),
        %format,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph saved"
    );
    Ok(path)
}

/// Read a graph previously written with [`save_graph`].
pub fn load_graph(path: &Path, format: GraphFormat) -> Result<EventGraph, GraphError> {
    if !path.exists() {
        return Err(GraphError::FileNotFound(path.to_path_buf()));
    }
    if !format.matches(path) {
        return Err(GraphError::FormatMismatch {
            path: path.to_path_buf(),
            expected: format.extension(),
        });
    }

    let bytes = fs::read(path)?;
    let graph = match format {
        GraphFormat::Native => decode_native(&bytes)?,
        GraphFormat::Exchange => decode_exchange(&bytes)?,
    };

    info!(
        path = %path.display(),
        %format,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EventGraphBuilder, GraphKind};
    use tempfile::TempDir;

    fn sample_graph(kind: GraphKind) -> EventGraph {
        let mut builder = EventGraphBuilder::new(kind);
        builder
            .build(vec![vec!["A", "B", "A"], vec!["A", "C"], vec!["C", "C"]])
            .unwrap();
        builder.into_graph().unwrap()
    }

    #[test]
    fn test_native_round_trip() {
        let dir = TempDir::new().unwrap();
        for kind in [GraphKind::Directed, GraphKind::Undirected] {
            let graph = sample_graph(kind);
            let path = dir.path().join("events.bin");
            let path = save_graph(&graph, &path, GraphFormat::Native).unwrap();

            let loaded = load_graph(&path, GraphFormat::Native).unwrap();
            assert_eq!(loaded, graph);
            assert_eq!(loaded.kind(), kind);
        }
    }

    #[test]
    fn test_exchange_round_trip() {
        let dir = TempDir::new().unwrap();
        for kind in [GraphKind::Directed, GraphKind::Undirected] {
            let graph = sample_graph(kind);
            let path = dir.path().join("events.gexf");
            let path = save_graph(&graph, &path, GraphFormat::Exchange).unwrap();

            let loaded = load_graph(&path, GraphFormat::Exchange).unwrap();
            assert_eq!(loaded, graph);
            assert_eq!(loaded.kind(), kind);
        }
    }

    #[test]
    fn test_save_appends_extension_and_creates_dirs() {
        let dir = TempDir::new().unwrap();
        let graph = sample_graph(GraphKind::Directed);

        let nested = dir.path().join("nested/graph");
        let path = save_graph(&graph, &nested, GraphFormat::Native).unwrap();
        assert_eq!(path, dir.path().join("nested/graph.bin"));
        assert!(path.exists());

        let path = save_graph(&graph, &dir.path().join("graph"), GraphFormat::Exchange).unwrap();
        assert_eq!(path, dir.path().join("graph.gexf"));
        assert!(path.exists());
    }

    #[test]
    fn test_save_empty_graph() {
        let dir = TempDir::new().unwrap();
        let graph = EventGraph::new(GraphKind::Directed);

        let result = save_graph(&graph, &dir.path().join("empty.bin"), GraphFormat::Native);
        assert!(matches!(result, Err(GraphError::Empty)));
        assert!(!dir.path().join("empty.bin").exists());
    }

    #[test]
    fn test_save_wrong_extension() {
        let dir = TempDir::new().unwrap();
        let graph = sample_graph(GraphKind::Directed);

        let result = save_graph(&graph, &dir.path().join("graph.gexf"), GraphFormat::Native);
        assert!(matches!(result, Err(GraphError::FormatMismatch { expected: "bin", .. })));

        let result = save_graph(&graph, &dir.path().join("graph.json"), GraphFormat::Exchange);
        assert!(matches!(result, Err(GraphError::FormatMismatch { expected: "gexf", .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_graph(&dir.path().join("missing.bin"), GraphFormat::Native);
        assert!(matches!(result, Err(GraphError::FileNotFound(_))));
    }

    #[test]
    fn test_load_wrong_extension() {
        let dir = TempDir::new().unwrap();
        let graph = sample_graph(GraphKind::Directed);
        let path = dir.path().join("graph.gexf");
        let path = save_graph(&graph, &path, GraphFormat::Exchange).unwrap();

        let result = load_graph(&path, GraphFormat::Native);
        assert!(matches!(result, Err(GraphError::FormatMismatch { expected: "bin", .. })));

        let native = save_graph(&graph, &dir.path().join("graph"), GraphFormat::Native).unwrap();
        let result = load_graph(&native, GraphFormat::Exchange);
        assert!(matches!(result, Err(GraphError::FormatMismatch { expected: "gexf", .. })));
    }

    #[test]
    fn test_load_garbage_native() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.bin");
        fs::write(&path, b"not a graph").unwrap();

        assert!(load_graph(&path, GraphFormat::Native).is_err());
    }
}
