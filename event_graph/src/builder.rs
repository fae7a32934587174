//! Event Graph Builder - build-once aggregation of event stories.

use event_extraction::EventFormatter;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::{load_graph, save_graph, EventGraph, GraphError, GraphFormat, GraphKind};

/// Counts gathered during one build pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildStats {
    /// Stories offered to the builder.
    pub stories: usize,
    /// Stories with no non-empty events.
    pub skipped_stories: usize,
    /// Events counted into node frequencies.
    pub events: usize,
    /// Transitions counted into edge weights.
    pub transitions: usize,
}

/// Owns one event graph and populates it from event stories.
#[derive(Debug, Clone, Default)]
pub struct EventGraphBuilder {
    graph: EventGraph,
}

impl EventGraphBuilder {
    /// Create a builder with an empty graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            graph: EventGraph::new(kind),
        }
    }

    pub fn kind(&self) -> GraphKind {
        self.graph.kind()
    }

    /// Populate the graph from per-story event sequences.
    ///
    /// Blank events are dropped; a story left with no events contributes
    /// nothing. Each event bumps its node frequency and each consecutive
    /// pair bumps its edge weight. Fails with [`GraphError::AlreadyBuilt`]
    /// without touching the graph if it already has nodes.
    pub fn build<I, E, S>(&mut self, stories: I) -> Result<BuildStats, GraphError>
    where
        I: IntoIterator<Item = E>,
        E: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !self.graph.is_empty() {
            warn!(
                nodes = self.graph.node_count(),
                "rejecting build on a populated graph"
            );
            return Err(GraphError::AlreadyBuilt);
        }

        let mut stats = BuildStats::default();
        for story in stories {
            stats.stories += 1;

            let events: Vec<S> = story
                .into_iter()
                .filter(|e| !e.as_ref().trim().is_empty())
                .collect();
            if events.is_empty() {
                stats.skipped_stories += 1;
                debug!(story = stats.stories - 1, "story has no events, skipping");
                continue;
            }

            let mut previous = None;
            for event in &events {
                if previous.is_some() {
                    stats.transitions += 1;
                }
                previous = Some(self.graph.record(previous, event.as_ref().trim()));
                stats.events += 1;
            }
        }

        info!(
            stories = stats.stories,
            skipped = stats.skipped_stories,
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "event graph built"
        );
        Ok(stats)
    }

    /// Populate the graph from serialized event-story lines.
    pub fn build_from_serialized<I, S>(
        &mut self,
        rows: I,
        formatter: &EventFormatter,
    ) -> Result<BuildStats, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.build(rows.into_iter().map(|row| formatter.parse_story(row.as_ref())))
    }

    /// The built graph.
    pub fn get(&self) -> Result<&EventGraph, GraphError> {
        if self.graph.is_empty() {
            return Err(GraphError::Empty);
        }
        Ok(&self.graph)
    }

    /// Take the built graph out of the builder.
    pub fn into_graph(self) -> Result<EventGraph, GraphError> {
        if self.graph.is_empty() {
            return Err(GraphError::Empty);
        }
        Ok(self.graph)
    }

    /// Save the graph. Returns the path actually written.
    pub fn save(
        &self,
        path: impl AsRef<Path>,
        format: GraphFormat,
    ) -> Result<PathBuf, GraphError> {
        save_graph(&self.graph, path.as_ref(), format)
    }

    /// Replace the graph with one read from disk.
    ///
    /// This bypasses the build-once guard; the builder adopts the loaded
    /// graph's kind.
    pub fn load(
        &mut self,
        path: impl AsRef<Path>,
        format: GraphFormat,
    ) -> Result<&EventGraph, GraphError> {
        self.graph = load_graph(path.as_ref(), format)?;
        Ok(&self.graph)
    }
}
