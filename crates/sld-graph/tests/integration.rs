//! Integration tests for sld-graph.

use sld_core::{ContainerRect, Point, Position, SequentialIds};
use sld_graph::hit_test::closest_point;
use sld_graph::{
    ComponentKind, CoordinateAdapter, EngineConfig, GraphBuilder, InputKind, Port, Severity,
    Status, anchor_for, hit_connection, is_hit, remove_junction, render_connections, split_at,
    validate_graph,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn interpolation_is_clamped_to_segment() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(100.0, 0.0);
    assert_eq!(closest_point(Point::new(-50.0, 0.0), a, b).x, 0.0);
    assert_eq!(closest_point(Point::new(150.0, 0.0), a, b).x, 100.0);
    let mid = closest_point(Point::new(25.0, 10.0), a, b);
    assert_eq!((mid.x, mid.y), (25.0, 0.0));
}

#[test]
fn split_position_follows_clamped_projection() {
    // Default 32x32 boxes: wire runs from (50, 50) to (150, 50) in a 200x100 surface.
    let mut builder = GraphBuilder::new();
    let a = builder.add_component(
        ComponentKind::Other("RTU".into()),
        "RTU",
        Position::new(17.0, 50.0),
    );
    let b = builder.add_component(
        ComponentKind::Other("RTU".into()),
        "RTU 2",
        Position::new(83.0, 50.0),
    );
    let wire = builder.connect(&a, Port::Right, &b, Port::Left);
    let graph = builder.build().unwrap();
    let rect = ContainerRect::new(200.0, 100.0);
    let adapter = CoordinateAdapter::new(rect);

    for (click, expected_x) in [
        (Point::new(0.0, 50.0), 50.0),
        (Point::new(250.0, 50.0), 150.0),
        (Point::new(75.0, 60.0), 75.0),
    ] {
        let split = split_at(&graph, &wire, click, rect, &mut SequentialIds::new());
        let junction = split
            .graph
            .component(split.junction_id.as_deref().unwrap())
            .unwrap();
        let px = adapter.to_pixels(junction.position);
        assert!(approx(px.x, expected_x), "x = {} for click {:?}", px.x, click);
        assert!(approx(px.y, 50.0));
    }
}

#[test]
fn hit_threshold_boundary_on_rendered_wire() {
    // Wire from (0, 50) to (100, 50).
    let mut builder = GraphBuilder::new();
    let a = builder.add_component(
        ComponentKind::Other("X".into()),
        "",
        Position::new(-16.0, 50.0),
    );
    let b = builder.add_component(
        ComponentKind::Other("X".into()),
        "",
        Position::new(116.0, 50.0),
    );
    builder.connect(&a, Port::Right, &b, Port::Left);
    let graph = builder.build().unwrap();
    let rect = ContainerRect::new(100.0, 100.0);
    let wire = &graph.connections[0];

    assert!(is_hit(Point::new(50.0, 59.0), wire, &graph, rect, 10.0));
    assert!(!is_hit(Point::new(50.0, 61.0), wire, &graph, rect, 10.0));

    let cfg = EngineConfig::default();
    let touch = cfg.threshold_for(InputKind::Touch);
    assert!(is_hit(Point::new(50.0, 70.0), wire, &graph, rect, touch));
    assert!(hit_connection(Point::new(50.0, 70.0), &graph, rect, cfg.hit_threshold_px).is_none());
}

#[test]
fn anchors_track_container_resize() {
    let mut builder = GraphBuilder::new();
    let t = builder.add_component(ComponentKind::Transformer, "T1", Position::new(50.0, 50.0));
    let graph = builder.build().unwrap();
    let component = graph.component(&t).unwrap();

    let mut adapter = CoordinateAdapter::new(ContainerRect::new(800.0, 600.0));
    let before = anchor_for(component, Port::Bottom, adapter.rect());
    assert_eq!(before, Point::new(400.0, 332.0));

    adapter.resize(ContainerRect::new(1600.0, 1200.0));
    let after = anchor_for(component, Port::Bottom, adapter.rect());
    assert_eq!(after, Point::new(800.0, 632.0));
    // Offsets are in pixels; only the center scales.
    assert_eq!(anchor_for(component, Port::Bottom, adapter.rect()), after);
}

#[test]
fn chain_of_splits_and_removals_stays_consistent() {
    let mut builder = GraphBuilder::new();
    let pv = builder.add_component(ComponentKind::SolarArray, "PV", Position::new(10.0, 20.0));
    let inv = builder.add_component(ComponentKind::Inverter, "INV", Position::new(50.0, 20.0));
    let bus = builder.add_component(ComponentKind::Busbar, "BUS", Position::new(50.0, 80.0));
    let w1 = builder.connect(&pv, Port::Right, &inv, Port::Left);
    builder.connect(&inv, Port::Bottom, &bus, Port::Top);
    builder.set_status(&inv, Status::Alarme);
    let graph = builder.build().unwrap();
    let rect = ContainerRect::new(1200.0, 800.0);
    let mut ids = SequentialIds::after(graph.connections.iter().map(|c| c.id.as_str()));

    let first = split_at(&graph, &w1, Point::new(300.0, 160.0), rect, &mut ids);
    let j1 = first.junction_id.clone().unwrap();
    let second_target = first.new_connection_ids[1].clone();
    let second = split_at(&first.graph, &second_target, Point::new(400.0, 160.0), rect, &mut ids);
    let j2 = second.junction_id.clone().unwrap();
    validate_graph(&second.graph).unwrap();
    assert_eq!(second.graph.connections.len(), 4);
    assert_eq!(second.graph.junctions().count(), 2);

    // Every wire still renders; severities come from the real endpoints.
    let rendered = render_connections(&second.graph, rect);
    assert_eq!(rendered.len(), 4);
    assert!(rendered.iter().all(|r| r.severity != Severity::Error));

    let after_j1 = remove_junction(&second.graph, &j1, &mut ids);
    validate_graph(&after_j1.graph).unwrap();
    let after_j2 = remove_junction(&after_j1.graph, &j2, &mut ids);
    validate_graph(&after_j2.graph).unwrap();

    assert_eq!(after_j2.graph.components, graph.components);
    assert_eq!(after_j2.graph.connections.len(), 2);
    let restored = after_j2
        .graph
        .connections
        .iter()
        .find(|c| c.involves(&pv))
        .unwrap();
    assert_eq!(
        (restored.from.as_str(), restored.from_port, restored.to.as_str(), restored.to_port),
        (pv.as_str(), Port::Right, inv.as_str(), Port::Left)
    );
}
