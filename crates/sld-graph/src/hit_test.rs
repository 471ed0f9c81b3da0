//! Pointer hit-testing against rendered wires.

use sld_core::{ContainerRect, Point, Real};

use crate::model::{Connection, Graph};
use crate::ports::connection_anchors;

/// Projection parameter of `p` onto segment `[a, b]`, clamped to `[0, 1]`.
///
/// A zero-length segment yields 0.
pub fn projection_param(p: Point, a: Point, b: Point) -> Real {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq <= Real::EPSILON {
        return 0.0;
    }
    ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
}

/// Closest point to `p` on segment `[a, b]`.
pub fn closest_point(p: Point, a: Point, b: Point) -> Point {
    a + (b - a) * projection_param(p, a, b)
}

/// Distance from `p` to segment `[a, b]`; beyond either end it is the
/// distance to that end.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> Real {
    p.distance_to(closest_point(p, a, b))
}

/// Whether `p` lands within `threshold` of the rendered connection.
///
/// A connection with a missing endpoint is never hit.
pub fn is_hit(
    p: Point,
    connection: &Connection,
    graph: &Graph,
    rect: ContainerRect,
    threshold: Real,
) -> bool {
    match connection_anchors(connection, graph, rect) {
        Some((a, b)) => distance_to_segment(p, a, b) <= threshold,
        None => false,
    }
}

/// The connection nearest to `p` within `threshold`. Ties go to graph order.
pub fn hit_connection<'g>(
    p: Point,
    graph: &'g Graph,
    rect: ContainerRect,
    threshold: Real,
) -> Option<&'g Connection> {
    let mut best: Option<(&Connection, Real)> = None;
    for connection in &graph.connections {
        let Some((a, b)) = connection_anchors(connection, graph, rect) else {
            continue;
        };
        let d = distance_to_segment(p, a, b);
        if d <= threshold && best.is_none_or(|(_, bd)| d < bd) {
            best = Some((connection, d));
        }
    }
    best.map(|(c, _)| c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Component, ComponentKind, Port};
    use sld_core::Position;

    #[test]
    fn distance_inside_and_beyond_segment() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 0.0);
        assert_eq!(distance_to_segment(Point::new(50.0, 7.0), a, b), 7.0);
        assert_eq!(distance_to_segment(Point::new(-3.0, 4.0), a, b), 5.0);
        assert_eq!(distance_to_segment(Point::new(106.0, 8.0), a, b), 10.0);
    }

    #[test]
    fn degenerate_segment_measures_to_endpoint() {
        let a = Point::new(10.0, 10.0);
        assert_eq!(projection_param(Point::new(50.0, 50.0), a, a), 0.0);
        assert_eq!(distance_to_segment(Point::new(13.0, 14.0), a, a), 5.0);
    }

    #[test]
    fn threshold_boundary() {
        let a = Point::new(0.0, 50.0);
        let b = Point::new(100.0, 50.0);
        assert!(distance_to_segment(Point::new(50.0, 59.0), a, b) <= 10.0);
        assert!(distance_to_segment(Point::new(50.0, 61.0), a, b) > 10.0);
    }

    fn two_loads() -> Graph {
        Graph::new(
            vec![
                Component::new("a", ComponentKind::Load, "A", Position::new(10.0, 50.0)),
                Component::new("b", ComponentKind::Load, "B", Position::new(90.0, 50.0)),
            ],
            vec![Connection::new("c1", "a", Port::Right, "b", Port::Left)],
        )
    }

    #[test]
    fn is_hit_uses_port_anchors() {
        let graph = two_loads();
        let rect = ContainerRect::new(1000.0, 100.0);
        // a.Right = (120, 50), b.Left = (880, 50)
        let c = &graph.connections[0];
        assert!(is_hit(Point::new(500.0, 58.0), c, &graph, rect, 10.0));
        assert!(!is_hit(Point::new(500.0, 62.0), c, &graph, rect, 10.0));
        assert!(!is_hit(Point::new(100.0, 50.0), c, &graph, rect, 10.0));
    }

    #[test]
    fn missing_component_is_never_hit() {
        let mut graph = two_loads();
        graph.components.retain(|c| c.id != "b");
        let rect = ContainerRect::new(1000.0, 100.0);
        let c = graph.connections[0].clone();
        assert!(!is_hit(Point::new(120.0, 50.0), &c, &graph, rect, 1000.0));
        assert!(hit_connection(Point::new(120.0, 50.0), &graph, rect, 1000.0).is_none());
    }

    #[test]
    fn nearest_connection_wins() {
        let mut graph = two_loads();
        graph.components.push(Component::new(
            "c",
            ComponentKind::Load,
            "C",
            Position::new(90.0, 80.0),
        ));
        graph
            .connections
            .push(Connection::new("c2", "a", Port::Right, "c", Port::Left));
        let rect = ContainerRect::new(1000.0, 100.0);
        // Within threshold of both wires, ~1px from c1 and ~8px from c2.
        let hit = hit_connection(Point::new(300.0, 49.0), &graph, rect, 10.0);
        assert_eq!(hit.map(|c| c.id.as_str()), Some("c1"));
        assert!(hit_connection(Point::new(500.0, 20.0), &graph, rect, 10.0).is_none());
    }
}
