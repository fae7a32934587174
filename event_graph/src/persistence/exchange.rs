//! Exchange documents: GEXF 1.2, readable by Gephi and networkx.
//!
//! ```xml
//! <gexf xmlns="http://www.gexf.net/1.2draft" version="1.2">
//!   <graph mode="static" defaultedgetype="directed">
//!     <attributes class="node" mode="static">
//!       <attribute id="0" title="frequency" type="long"/>
//!     </attributes>
//!     <nodes>
//!       <node id="cat sleeps" label="cat sleeps">
//!         <attvalues><attvalue for="0" value="3"/></attvalues>
//!       </node>
//!     </nodes>
//!     <edges>
//!       <edge id="0" source="cat sleeps" target="dog barks" weight="1"/>
//!     </edges>
//!   </graph>
//! </gexf>
//! ```
//!
//! Nodes are identified by their event text. On import a node `label`, when
//! present, is taken as the event text so that documents re-exported with
//! numeric ids still load.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{EventGraph, EventNode, GraphError, GraphKind, TransitionEdge};

const GEXF_NAMESPACE: &str = "http://www.gexf.net/1.2draft";
const GEXF_VERSION: &str = "1.2";
const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

const FREQUENCY_TITLE: &str = "frequency";
const FREQUENCY_ID: &str = "0";

/// Root `<gexf>` element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "gexf")]
pub struct GexfDocument {
    #[serde(rename = "@xmlns", default)]
    pub xmlns: String,
    #[serde(rename = "@version", default)]
    pub version: String,
    pub graph: GexfGraph,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GexfGraph {
    #[serde(rename = "@mode", default)]
    pub mode: String,
    /// `directed`, `undirected` or `mutual`; GEXF defaults to undirected.
    #[serde(rename = "@defaultedgetype", default)]
    pub default_edge_type: Option<String>,
    #[serde(default)]
    pub attributes: Vec<GexfAttributes>,
    pub nodes: GexfNodes,
    #[serde(default)]
    pub edges: GexfEdges,
}

/// Attribute declarations for one element class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GexfAttributes {
    #[serde(rename = "@class")]
    pub class: String,
    #[serde(rename = "@mode", default)]
    pub mode: String,
    #[serde(default)]
    pub attribute: Vec<GexfAttribute>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GexfAttribute {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@title")]
    pub title: String,
    #[serde(rename = "@type", default)]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GexfNodes {
    #[serde(default)]
    pub node: Vec<GexfNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GexfNode {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@label", default)]
    pub label: Option<String>,
    #[serde(default)]
    pub attvalues: GexfAttValues,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GexfAttValues {
    #[serde(default)]
    pub attvalue: Vec<GexfAttValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GexfAttValue {
    #[serde(rename = "@for")]
    pub key: String,
    #[serde(rename = "@value")]
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GexfEdges {
    #[serde(default)]
    pub edge: Vec<GexfEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GexfEdge {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@source")]
    pub source: String,
    #[serde(rename = "@target")]
    pub target: String,
    #[serde(rename = "@weight", default)]
    pub weight: Option<String>,
}

impl GexfDocument {
    /// Export a graph.
    pub fn from_graph(graph: &EventGraph) -> Self {
        let edge_type = if graph.is_directed() {
            "directed"
        } else {
            "undirected"
        };

        let nodes = graph
            .nodes()
            .map(|n| GexfNode {
                id: n.event.clone(),
                label: Some(n.event.clone()),
                attvalues: GexfAttValues {
                    attvalue: vec![GexfAttValue {
                        key: FREQUENCY_ID.to_string(),
                        value: n.frequency.to_string(),
                    }],
                },
            })
            .collect();

        let edges = graph
            .edges()
            .enumerate()
            .map(|(i, (source, target, weight))| GexfEdge {
                id: i.to_string(),
                source: source.to_string(),
                target: target.to_string(),
                weight: Some(weight.to_string()),
            })
            .collect();

        Self {
            xmlns: GEXF_NAMESPACE.to_string(),
            version: GEXF_VERSION.to_string(),
            graph: GexfGraph {
                mode: "static".to_string(),
                default_edge_type: Some(edge_type.to_string()),
                attributes: vec![GexfAttributes {
                    class: "node".to_string(),
                    mode: "static".to_string(),
                    attribute: vec![GexfAttribute {
                        id: FREQUENCY_ID.to_string(),
                        title: FREQUENCY_TITLE.to_string(),
                        kind: "long".to_string(),
                    }],
                }],
                nodes: GexfNodes { node: nodes },
                edges: GexfEdges { edge: edges },
            },
        }
    }

    /// Import a graph. Every node needs a `frequency` value; edges without a
    /// `weight` count once.
    pub fn into_graph(self) -> Result<EventGraph, GraphError> {
        let graph = self.graph;
        let kind = match graph.default_edge_type.as_deref() {
            Some("directed") => GraphKind::Directed,
            Some("undirected") | Some("mutual") | None => GraphKind::Undirected,
            Some(other) => {
                return Err(GraphError::InvalidFormat(format!(
                    "unknown edge type `{other}`"
                )))
            }
        };

        let frequency_key = graph
            .attributes
            .iter()
            .filter(|a| a.class == "node")
            .flat_map(|a| a.attribute.iter())
            .find(|a| a.title == FREQUENCY_TITLE)
            .map(|a| a.id.clone())
            .unwrap_or_else(|| FREQUENCY_TITLE.to_string());

        let positions: HashMap<&str, usize> = graph
            .nodes
            .node
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.as_str(), i))
            .collect();
        let resolve = |id: &str| {
            positions.get(id).copied().ok_or_else(|| {
                GraphError::InvalidFormat(format!("edge references unknown node `{id}`"))
            })
        };

        let edges = graph
            .edges
            .edge
            .iter()
            .map(|e| {
                Ok(TransitionEdge {
                    source: resolve(&e.source)?,
                    target: resolve(&e.target)?,
                    weight: match &e.weight {
                        Some(weight) => parse_count(weight)?,
                        None => 1,
                    },
                })
            })
            .collect::<Result<Vec<_>, GraphError>>()?;

        let nodes = graph
            .nodes
            .node
            .iter()
            .map(|n| {
                let value = n
                    .attvalues
                    .attvalue
                    .iter()
                    .find(|v| v.key == frequency_key)
                    .ok_or_else(|| {
                        GraphError::InvalidFormat(format!(
                            "node `{}` has no frequency value",
                            n.id
                        ))
                    })?;
                Ok(EventNode {
                    event: n.label.clone().unwrap_or_else(|| n.id.clone()),
                    frequency: parse_count(&value.value)?,
                })
            })
            .collect::<Result<Vec<_>, GraphError>>()?;

        EventGraph::from_parts(kind, nodes, edges)
    }
}

/// Parse a non-negative whole count written either as an integer or as a
/// float such as `2.0`.
fn parse_count(text: &str) -> Result<u64, GraphError> {
    let text = text.trim();
    if let Ok(count) = text.parse::<u64>() {
        return Ok(count);
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 && value.fract() == 0.0 => {
            Ok(value as u64)
        }
        _ => Err(GraphError::InvalidFormat(format!(
            "`{text}` is not a whole non-negative count"
        ))),
    }
}

/// Encode a graph as an indented GEXF document.
pub fn encode_exchange(graph: &EventGraph) -> Result<Vec<u8>, GraphError> {
    let mut xml = String::from(XML_DECLARATION);
    let mut serializer = quick_xml::se::Serializer::new(&mut xml);
    serializer.indent(' ', 2);
    GexfDocument::from_graph(graph).serialize(serializer)?;
    xml.push('\n');
    Ok(xml.into_bytes())
}

/// Decode a GEXF document.
pub fn decode_exchange(bytes: &[u8]) -> Result<EventGraph, GraphError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| GraphError::InvalidFormat(format!("GEXF is not UTF-8: {e}")))?;
    let document: GexfDocument = quick_xml::de::from_str(text)?;
    document.into_graph()
}
