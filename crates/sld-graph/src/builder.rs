//! Incremental graph builder.

use std::collections::HashMap;

use sld_core::Position;

use crate::error::GraphResult;
use crate::model::{Component, ComponentKind, Connection, Graph, Port, Status};
use crate::validate;

/// Builder for assembling a diagram by hand (tests, fixtures, importers).
///
/// Component IDs are derived from the kind tag (`meter-1`, `breaker-2`, ...),
/// connection IDs are `wire-N`. Call `build()` to validate and produce a
/// `Graph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    components: Vec<Component>,
    connections: Vec<Connection>,
    next_per_kind: HashMap<String, u32>,
    next_wire: u32,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a component and return its ID.
    pub fn add_component(
        &mut self,
        kind: ComponentKind,
        name: impl Into<String>,
        position: Position,
    ) -> String {
        let id = self.next_component_id(&kind);
        let component = if kind == ComponentKind::Junction {
            Component::junction(id.clone(), position)
        } else {
            Component::new(id.clone(), kind, name, position)
        };
        self.components.push(component);
        id
    }

    /// Place a junction and return its ID.
    pub fn add_junction(&mut self, position: Position) -> String {
        self.add_component(ComponentKind::Junction, "", position)
    }

    /// Wire two component ports together and return the connection ID.
    pub fn connect(&mut self, from: &str, from_port: Port, to: &str, to_port: Port) -> String {
        self.next_wire += 1;
        let id = format!("wire-{}", self.next_wire);
        self.connections
            .push(Connection::new(id.clone(), from, from_port, to, to_port));
        id
    }

    /// Set the live status of a component (no-op for unknown IDs).
    pub fn set_status(&mut self, id: &str, status: Status) {
        if let Some(component) = self.components.iter_mut().find(|c| c.id == id) {
            component.status = status;
        }
    }

    /// Validate and return the graph.
    pub fn build(self) -> GraphResult<Graph> {
        let graph = Graph::new(self.components, self.connections);
        validate::validate_graph(&graph)?;
        Ok(graph)
    }

    fn next_component_id(&mut self, kind: &ComponentKind) -> String {
        let prefix = kind.tag().to_ascii_lowercase().replace('_', "-");
        let counter = self.next_per_kind.entry(prefix.clone()).or_insert(0);
        *counter += 1;
        format!("{}-{}", prefix, counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::new();
        let m1 = builder.add_component(ComponentKind::Meter, "M1", Position::new(10.0, 10.0));
        let m2 = builder.add_component(ComponentKind::Meter, "M2", Position::new(20.0, 10.0));
        let pv = builder.add_component(ComponentKind::SolarArray, "PV", Position::new(30.0, 10.0));
        let w = builder.connect(&m1, Port::Right, &m2, Port::Left);

        assert_eq!(m1, "meter-1");
        assert_eq!(m2, "meter-2");
        assert_eq!(pv, "solar-array-1");
        assert_eq!(w, "wire-1");

        let graph = builder.build().unwrap();
        assert_eq!(graph.components.len(), 3);
        assert_eq!(graph.connections.len(), 1);
    }

    #[test]
    fn builder_junction_is_flagged() {
        let mut builder = GraphBuilder::new();
        let j = builder.add_junction(Position::new(50.0, 50.0));
        let graph = builder.build().unwrap();
        let junction = graph.component(&j).unwrap();
        assert!(junction.has_junction_flag());
        assert!(junction.name.is_empty());
    }

    #[test]
    fn builder_sets_status() {
        let mut builder = GraphBuilder::new();
        let b = builder.add_component(ComponentKind::Breaker, "Q1", Position::new(0.0, 0.0));
        builder.set_status(&b, Status::Desligado);
        builder.set_status("missing", Status::Falha);
        let graph = builder.build().unwrap();
        assert_eq!(graph.components[0].status, Status::Desligado);
    }

    #[test]
    fn builder_rejects_dangling_wire() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_component(ComponentKind::Load, "A", Position::new(0.0, 0.0));
        builder.connect(&a, Port::Bottom, "nowhere", Port::Top);
        assert!(matches!(
            builder.build(),
            Err(GraphError::MissingEndpoint { .. })
        ));
    }
}
