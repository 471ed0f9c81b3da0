//! Absolute anchor points for component ports.

use sld_core::{ContainerRect, Point};

use crate::catalog::offset_for;
use crate::coords::to_pixels;
use crate::model::{Component, Connection, Graph, Port};

/// Pixel position of `port` on `component` for the given container.
///
/// Rotation is not applied; ports stay on the unrotated box.
pub fn anchor_for(component: &Component, port: Port, rect: ContainerRect) -> Point {
    to_pixels(component.position, rect) + offset_for(&component.kind, port)
}

/// Anchor of `port` on the component with `id`, if it exists.
pub fn anchor_of(graph: &Graph, id: &str, port: Port, rect: ContainerRect) -> Option<Point> {
    graph.component(id).map(|c| anchor_for(c, port, rect))
}

/// Both end anchors of a connection. `None` when either endpoint is missing.
pub fn connection_anchors(
    connection: &Connection,
    graph: &Graph,
    rect: ContainerRect,
) -> Option<(Point, Point)> {
    let from = anchor_of(graph, &connection.from, connection.from_port, rect)?;
    let to = anchor_of(graph, &connection.to, connection.to_port, rect)?;
    Some((from, to))
}
