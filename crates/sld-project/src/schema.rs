//! Diagram document schema.

use serde::{Deserialize, Serialize};
use sld_graph::{Component, Connection, EngineConfig, Graph};

/// On-disk form of one single-line diagram.
///
/// Positions are stored in percent-of-container units and IDs are stable
/// strings, so a document renders the same at any surface size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagramDocument {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineConfig>,
}

impl DiagramDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: crate::migrate::LATEST_VERSION,
            name: name.into(),
            components: Vec::new(),
            connections: Vec::new(),
            engine: None,
        }
    }

    /// Copy of the diagram contents as an engine graph.
    pub fn graph(&self) -> Graph {
        Graph::new(self.components.clone(), self.connections.clone())
    }

    /// Replace the diagram contents with an edited graph.
    pub fn set_graph(&mut self, graph: Graph) {
        self.components = graph.components;
        self.connections = graph.connections;
    }

    /// Engine settings, falling back to defaults when the document has none.
    pub fn engine_config(&self) -> EngineConfig {
        self.engine.unwrap_or_default()
    }
}
