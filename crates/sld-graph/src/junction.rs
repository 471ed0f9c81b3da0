//! Junction insertion and removal.
//!
//! A junction is a pass-through component that lets one logical wire bend or
//! branch. Splitting a connection inserts one; removing a junction with
//! exactly two edges merges them back into a single connection.

use sld_core::{ContainerRect, IdKind, IdSource, Point};
use tracing::{debug, warn};

use crate::coords::to_percent_clamped;
use crate::hit_test::projection_param;
use crate::model::{Component, Connection, Graph, Port};
use crate::ports::connection_anchors;

/// Result of [`split_at`].
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub graph: Graph,
    /// `None` when nothing was split (unknown connection or missing endpoint).
    pub junction_id: Option<String>,
    /// IDs of the two connections replacing the split one, source side first.
    pub new_connection_ids: Vec<String>,
}

impl Split {
    fn unchanged(graph: &Graph) -> Self {
        Self {
            graph: graph.clone(),
            junction_id: None,
            new_connection_ids: Vec::new(),
        }
    }
}

/// Result of [`remove_junction`].
#[derive(Debug, Clone, PartialEq)]
pub struct Removal {
    pub graph: Graph,
    /// Every connection that left the graph, in graph order.
    pub removed_connection_ids: Vec<String>,
    /// The connection joining the junction's two neighbours, if a merge happened.
    pub merged_connection_id: Option<String>,
}

impl Removal {
    fn unchanged(graph: &Graph) -> Self {
        Self {
            graph: graph.clone(),
            removed_connection_ids: Vec::new(),
            merged_connection_id: None,
        }
    }
}

/// Insert a junction into `connection_id` at the point of the wire closest to
/// `point` (pixel space).
///
/// The original connection `A:pa -> B:pb` is replaced by `A:pa -> J:opposite(pa)`
/// and `J:pa -> B:pb`. The outbound half reuses the source port as the
/// junction's emitting port regardless of where B sits.
pub fn split_at(
    graph: &Graph,
    connection_id: &str,
    point: Point,
    rect: ContainerRect,
    ids: &mut dyn IdSource,
) -> Split {
    let Some(original) = graph.connection(connection_id) else {
        warn!(connection = connection_id, "split requested for unknown connection");
        return Split::unchanged(graph);
    };
    let Some((a, b)) = connection_anchors(original, graph, rect) else {
        warn!(
            connection = connection_id,
            "split requested for connection with a missing endpoint"
        );
        return Split::unchanged(graph);
    };

    let t = projection_param(point, a, b);
    let at = a + (b - a) * t;
    let position = to_percent_clamped(at, rect);

    let junction_id = fresh_id(ids, IdKind::Junction, graph, &[]);
    let inbound_id = fresh_id(ids, IdKind::Connection, graph, &[junction_id.as_str()]);
    let outbound_id = fresh_id(
        ids,
        IdKind::Connection,
        graph,
        &[junction_id.as_str(), inbound_id.as_str()],
    );

    let inbound = Connection::new(
        inbound_id.clone(),
        original.from.clone(),
        original.from_port,
        junction_id.clone(),
        original.from_port.opposite(),
    );
    let outbound = Connection::new(
        outbound_id.clone(),
        junction_id.clone(),
        original.from_port,
        original.to.clone(),
        original.to_port,
    );

    debug!(
        connection = connection_id,
        junction = %junction_id,
        t,
        x = position.x,
        y = position.y,
        "split connection at junction"
    );

    let mut next = graph.clone();
    // Keep the replacement pair where the original sat so render order is stable.
    let idx = next
        .connections
        .iter()
        .position(|c| c.id == connection_id)
        .unwrap_or(next.connections.len());
    next.connections.retain(|c| c.id != connection_id);
    let idx = idx.min(next.connections.len());
    next.connections.insert(idx, outbound);
    next.connections.insert(idx, inbound);
    next.components.push(Component::junction(junction_id.clone(), position));

    Split {
        graph: next,
        junction_id: Some(junction_id),
        new_connection_ids: vec![inbound_id, outbound_id],
    }
}

/// Remove a junction, merging its two edges back into one connection.
///
/// With exactly two edges the two far endpoints are joined directly, each
/// keeping its original port. With any other edge count (or edges that can't
/// be merged cleanly) the junction and all its edges are dropped. Ids that
/// don't name a junction leave the graph untouched.
pub fn remove_junction(graph: &Graph, junction_id: &str, ids: &mut dyn IdSource) -> Removal {
    match graph.component(junction_id) {
        Some(c) if c.is_junction() => {}
        Some(_) => {
            warn!(component = junction_id, "refusing to remove non-junction component");
            return Removal::unchanged(graph);
        }
        None => return Removal::unchanged(graph),
    }

    let edges: Vec<&Connection> = graph.connections_of(junction_id).collect();
    let merged = match edges.as_slice() {
        [first, second] => merge_edges(graph, junction_id, first, second, ids),
        _ => None,
    };

    let removed_connection_ids: Vec<String> = edges.iter().map(|c| c.id.clone()).collect();
    if merged.is_none() {
        debug!(
            junction = junction_id,
            edges = edges.len(),
            "removing junction without merge"
        );
    }

    let mut next = graph.clone();
    next.components.retain(|c| c.id != junction_id);
    let merge_idx = next.connections.iter().position(|c| c.involves(junction_id));
    next.connections.retain(|c| !c.involves(junction_id));

    let merged_connection_id = merged.map(|connection| {
        let id = connection.id.clone();
        debug!(
            junction = junction_id,
            merged = %id,
            from = %connection.from,
            to = %connection.to,
            "merged junction edges"
        );
        let idx = merge_idx
            .unwrap_or(next.connections.len())
            .min(next.connections.len());
        next.connections.insert(idx, connection);
        id
    });

    Removal {
        graph: next,
        removed_connection_ids,
        merged_connection_id,
    }
}

/// Join the far ends of a junction's two edges.
///
/// An inbound edge (ending at the junction) supplies the merged `from` side.
/// When both edges point the same way, graph order decides. Returns `None`
/// when the merge would produce a self-loop, a dangling endpoint, or a
/// duplicate of an existing connection.
fn merge_edges(
    graph: &Graph,
    junction_id: &str,
    first: &Connection,
    second: &Connection,
    ids: &mut dyn IdSource,
) -> Option<Connection> {
    if first.is_self_loop() || second.is_self_loop() {
        return None;
    }

    let (source, sink) = if second.to == junction_id && first.from == junction_id {
        (second, first)
    } else {
        (first, second)
    };

    let (from, from_port) = source.far_end(junction_id)?;
    let (to, to_port) = sink.far_end(junction_id)?;

    if from == to {
        debug!(junction = junction_id, component = from, "merge would self-loop");
        return None;
    }
    if !graph.contains_component(from) || !graph.contains_component(to) {
        warn!(junction = junction_id, "junction neighbour missing, dropping edges");
        return None;
    }
    if has_equivalent_outside(graph, junction_id, from, from_port, to, to_port) {
        debug!(junction = junction_id, "merge would duplicate an existing connection");
        return None;
    }

    let id = fresh_id(ids, IdKind::Connection, graph, &[]);
    Some(Connection::new(id, from, from_port, to, to_port))
}

fn has_equivalent_outside(
    graph: &Graph,
    junction_id: &str,
    from: &str,
    from_port: Port,
    to: &str,
    to_port: Port,
) -> bool {
    graph
        .connections
        .iter()
        .filter(|c| !c.involves(junction_id))
        .any(|c| c.joins(from, from_port, to, to_port))
}

/// Draw IDs from `ids` until one is unused by `graph` and not in `reserved`.
pub(crate) fn fresh_id(
    ids: &mut dyn IdSource,
    kind: IdKind,
    graph: &Graph,
    reserved: &[&str],
) -> String {
    loop {
        let id = ids.next_id(kind);
        if !graph.id_in_use(&id) && !reserved.contains(&id.as_str()) {
            return id;
        }
    }
}
