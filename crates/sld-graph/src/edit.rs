//! Host authoring edits, in the same `(&Graph, edit) -> Graph` style as the
//! junction engine.

use sld_core::{IdKind, IdSource};
use tracing::debug;

use crate::error::{EditError, EditResult};
use crate::junction::fresh_id;
use crate::model::{Connection, Graph, Port};

/// Draw a wire between two component ports.
///
/// Rejects unknown endpoints, self-connections, and wires that duplicate an
/// existing one between the same two ports. Returns the new graph and the
/// new connection's ID.
pub fn connect(
    graph: &Graph,
    from: &str,
    from_port: Port,
    to: &str,
    to_port: Port,
    ids: &mut dyn IdSource,
) -> EditResult<(Graph, String)> {
    for id in [from, to] {
        if !graph.contains_component(id) {
            return Err(EditError::ComponentNotFound { id: id.to_string() });
        }
    }
    if from == to {
        return Err(EditError::SelfConnection {
            id: from.to_string(),
        });
    }
    if graph.has_equivalent(from, from_port, to, to_port) {
        return Err(EditError::AlreadyConnected {
            from: from.to_string(),
            from_port,
            to: to.to_string(),
            to_port,
        });
    }

    let id = fresh_id(ids, IdKind::Connection, graph, &[]);
    let mut next = graph.clone();
    next.connections
        .push(Connection::new(id.clone(), from, from_port, to, to_port));
    Ok((next, id))
}

/// Drop a single connection. Unknown IDs leave the graph as is.
pub fn remove_connection(graph: &Graph, connection_id: &str) -> Graph {
    let mut next = graph.clone();
    next.connections.retain(|c| c.id != connection_id);
    next
}

/// Remove connections whose endpoints no longer exist, e.g. after the host
/// deleted a component. Returns the pruned graph and the removed IDs.
pub fn prune_dangling(graph: &Graph) -> (Graph, Vec<String>) {
    let mut next = graph.clone();
    let mut removed = Vec::new();
    next.connections.retain(|c| {
        let keep = graph.contains_component(&c.from) && graph.contains_component(&c.to);
        if !keep {
            removed.push(c.id.clone());
        }
        keep
    });
    if !removed.is_empty() {
        debug!(count = removed.len(), "pruned dangling connections");
    }
    (next, removed)
}
