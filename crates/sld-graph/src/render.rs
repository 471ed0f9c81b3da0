//! Per-frame outputs for the host renderer.

use serde::{Deserialize, Serialize};
use sld_core::{ContainerRect, Point, Real};

use crate::hit_test::{hit_connection, is_hit};
use crate::model::{Connection, Graph};
use crate::ports::connection_anchors;
use crate::severity::{LineStyle, Severity, classify};

/// Everything needed to draw one wire: a line, two end markers and a
/// direction marker picked by severity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedConnection {
    pub connection_id: String,
    pub from_anchor: Point,
    pub to_anchor: Point,
    pub severity: Severity,
    pub style: LineStyle,
}

/// Whether the host is showing the diagram or letting the user edit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    #[default]
    ReadOnly,
    Editing,
}

pub fn render_connection(
    connection: &Connection,
    graph: &Graph,
    rect: ContainerRect,
) -> Option<RenderedConnection> {
    let from = graph.component(&connection.from)?;
    let to = graph.component(&connection.to)?;
    let (from_anchor, to_anchor) = connection_anchors(connection, graph, rect)?;
    let severity = classify(from, to);
    Some(RenderedConnection {
        connection_id: connection.id.clone(),
        from_anchor,
        to_anchor,
        severity,
        style: severity.line_style(),
    })
}

/// Render instructions for every connection whose endpoints both exist,
/// in graph order.
pub fn render_connections(graph: &Graph, rect: ContainerRect) -> Vec<RenderedConnection> {
    graph
        .connections
        .iter()
        .filter_map(|c| render_connection(c, graph, rect))
        .collect()
}

/// One flag per connection (graph order): is `pointer` within `threshold`?
pub fn hover_flags(
    pointer: Point,
    graph: &Graph,
    rect: ContainerRect,
    threshold: Real,
) -> Vec<bool> {
    graph
        .connections
        .iter()
        .map(|c| is_hit(pointer, c, graph, rect, threshold))
        .collect()
}

/// The connection an edit gesture at `pointer` targets. Always `None` while
/// the host is in read-only mode.
pub fn pick_for_edit<'g>(
    mode: ViewMode,
    pointer: Point,
    graph: &'g Graph,
    rect: ContainerRect,
    threshold: Real,
) -> Option<&'g Connection> {
    match mode {
        ViewMode::ReadOnly => None,
        ViewMode::Editing => hit_connection(pointer, graph, rect, threshold),
    }
}
