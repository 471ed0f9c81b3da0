//! Graph validation logic.

use std::collections::HashSet;

use crate::error::{GraphError, GraphResult};
use crate::model::Graph;

/// Check the structural invariants of a host-supplied graph.
///
/// Engine operations tolerate graphs that fail this; loaders and authoring
/// tools use it to reject them up front.
pub fn validate_graph(graph: &Graph) -> GraphResult<()> {
    let mut component_ids = HashSet::new();
    for component in &graph.components {
        if !component_ids.insert(component.id.as_str()) {
            return Err(GraphError::DuplicateComponent {
                id: component.id.clone(),
            });
        }

        if component.is_junction() {
            if !component.name.is_empty() {
                return Err(GraphError::MalformedJunction {
                    id: component.id.clone(),
                    reason: "junction name must be empty",
                });
            }
            if !component.has_junction_flag() {
                return Err(GraphError::MalformedJunction {
                    id: component.id.clone(),
                    reason: "junction payload must carry isJunction = true",
                });
            }
        }
    }

    let mut connection_ids = HashSet::new();
    for (idx, connection) in graph.connections.iter().enumerate() {
        if !connection_ids.insert(connection.id.as_str()) {
            return Err(GraphError::DuplicateConnection {
                id: connection.id.clone(),
            });
        }

        for endpoint in [&connection.from, &connection.to] {
            if !component_ids.contains(endpoint.as_str()) {
                return Err(GraphError::MissingEndpoint {
                    connection: connection.id.clone(),
                    component: endpoint.clone(),
                });
            }
        }

        if connection.is_self_loop() {
            return Err(GraphError::SelfLoop {
                connection: connection.id.clone(),
                component: connection.from.clone(),
            });
        }

        if let Some(existing) = graph.connections[..idx].iter().find(|c| {
            c.joins(
                &connection.from,
                connection.from_port,
                &connection.to,
                connection.to_port,
            )
        }) {
            return Err(GraphError::ParallelConnection {
                connection: connection.id.clone(),
                existing: existing.id.clone(),
            });
        }
    }

    Ok(())
}
