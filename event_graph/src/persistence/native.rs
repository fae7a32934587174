//! Native binary snapshots.

use serde::{Deserialize, Serialize};

use crate::{EventGraph, EventNode, GraphError, GraphKind, TransitionEdge};

const NATIVE_MAGIC: &str = "EVGRAPH";

/// Current native snapshot version.
pub const NATIVE_VERSION: u32 = 1;

/// Leading fields of every snapshot, readable before the body.
#[derive(Debug, Serialize, Deserialize)]
struct NativeHeader {
    magic: String,
    version: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct NativeSnapshot {
    magic: String,
    version: u32,
    kind: GraphKind,
    nodes: Vec<EventNode>,
    edges: Vec<TransitionEdge>,
}

/// Encode a graph as a native snapshot.
pub fn encode_native(graph: &EventGraph) -> Result<Vec<u8>, GraphError> {
    let snapshot = NativeSnapshot {
        magic: NATIVE_MAGIC.to_string(),
        version: NATIVE_VERSION,
        kind: graph.kind(),
        nodes: graph.nodes().cloned().collect(),
        edges: graph.raw_edges().to_vec(),
    };
    Ok(bincode::serialize(&snapshot)?)
}

/// Decode a native snapshot, checking magic, version and edge endpoints.
pub fn decode_native(bytes: &[u8]) -> Result<EventGraph, GraphError> {
    let header: NativeHeader = bincode::deserialize(bytes)?;
    if header.magic != NATIVE_MAGIC {
        return Err(GraphError::InvalidFormat(
            "missing native graph header".to_string(),
        ));
    }
    if header.version != NATIVE_VERSION {
        return Err(GraphError::VersionMismatch {
            expected: NATIVE_VERSION,
            found: header.version,
        });
    }

    let snapshot: NativeSnapshot = bincode::deserialize(bytes)?;
    EventGraph::from_parts(snapshot.kind, snapshot.nodes, snapshot.edges)
}
