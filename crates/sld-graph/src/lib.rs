//! sld-graph: connection/junction geometry engine for single-line diagrams.
//!
//! Provides:
//! - Diagram data structures (Component, Connection, Port, Graph)
//! - Per-kind bounding boxes and port anchor resolution
//! - Severity classification and render instructions
//! - Pointer hit-testing against wires
//! - Junction insertion (split) and removal (merge)
//! - Percent <-> pixel coordinate conversion
//!
//! Every operation takes the graph and the current container rectangle as
//! parameters and returns a new graph; nothing is cached between calls.
//!
//! # Example
//!
//! ```
//! use sld_core::{ContainerRect, Point, Position, SequentialIds};
//! use sld_graph::{ComponentKind, GraphBuilder, Port, remove_junction, split_at};
//!
//! let mut builder = GraphBuilder::new();
//! let meter = builder.add_component(ComponentKind::Meter, "M1", Position::new(20.0, 50.0));
//! let breaker = builder.add_component(ComponentKind::Breaker, "Q1", Position::new(80.0, 50.0));
//! let wire = builder.connect(&meter, Port::Right, &breaker, Port::Left);
//! let graph = builder.build().unwrap();
//!
//! let rect = ContainerRect::new(1000.0, 500.0);
//! let mut ids = SequentialIds::new();
//! let split = split_at(&graph, &wire, Point::new(500.0, 250.0), rect, &mut ids);
//! assert_eq!(split.graph.connections.len(), 2);
//!
//! let junction = split.junction_id.unwrap();
//! let removal = remove_junction(&split.graph, &junction, &mut ids);
//! assert_eq!(removal.graph.connections.len(), 1);
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod coords;
pub mod edit;
pub mod error;
pub mod hit_test;
pub mod junction;
pub mod model;
pub mod ports;
pub mod render;
pub mod severity;
pub mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use catalog::{BoxSize, DEFAULT_BOX, box_for, offset_for};
pub use config::{EngineConfig, InputKind};
pub use coords::CoordinateAdapter;
pub use edit::{connect, prune_dangling, remove_connection};
pub use error::{EditError, GraphError, ParsePortError};
pub use hit_test::{distance_to_segment, hit_connection, is_hit};
pub use junction::{Removal, Split, remove_junction, split_at};
pub use model::{Component, ComponentKind, Connection, Graph, Port, Status};
pub use ports::{anchor_for, connection_anchors};
pub use render::{RenderedConnection, ViewMode, hover_flags, pick_for_edit, render_connections};
pub use severity::{LineStyle, MarkerGlyph, Severity, classify};
pub use validate::validate_graph;
