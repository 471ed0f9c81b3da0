//! Core diagram data structures.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sld_core::Position;

use crate::error::ParsePortError;

/// Payload key marking a component as a junction.
pub const JUNCTION_FLAG: &str = "isJunction";

/// Opaque per-component payload (live-data bindings, labels, host metadata).
pub type Payload = BTreeMap<String, serde_json::Value>;

/// Equipment kind of a placed component.
///
/// Serialized as an upper-case tag (`"METER"`, `"SOLAR_ARRAY"`, ...). Tags the
/// catalog doesn't know are kept verbatim in `Other` so documents round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentKind {
    Meter,
    Breaker,
    Switch,
    Fuse,
    Relay,
    Inverter,
    Transformer,
    Generator,
    Battery,
    SolarArray,
    Load,
    Busbar,
    Panel,
    /// Reserved pass-through node created by the junction engine.
    Junction,
    Other(String),
}

impl ComponentKind {
    /// Every catalog kind, `Other` excluded.
    pub const CATALOG: [ComponentKind; 14] = [
        ComponentKind::Meter,
        ComponentKind::Breaker,
        ComponentKind::Switch,
        ComponentKind::Fuse,
        ComponentKind::Relay,
        ComponentKind::Inverter,
        ComponentKind::Transformer,
        ComponentKind::Generator,
        ComponentKind::Battery,
        ComponentKind::SolarArray,
        ComponentKind::Load,
        ComponentKind::Busbar,
        ComponentKind::Panel,
        ComponentKind::Junction,
    ];

    pub fn tag(&self) -> &str {
        match self {
            ComponentKind::Meter => "METER",
            ComponentKind::Breaker => "BREAKER",
            ComponentKind::Switch => "SWITCH",
            ComponentKind::Fuse => "FUSE",
            ComponentKind::Relay => "RELAY",
            ComponentKind::Inverter => "INVERTER",
            ComponentKind::Transformer => "TRANSFORMER",
            ComponentKind::Generator => "GENERATOR",
            ComponentKind::Battery => "BATTERY",
            ComponentKind::SolarArray => "SOLAR_ARRAY",
            ComponentKind::Load => "LOAD",
            ComponentKind::Busbar => "BUSBAR",
            ComponentKind::Panel => "PANEL",
            ComponentKind::Junction => "JUNCTION",
            ComponentKind::Other(tag) => tag,
        }
    }
}

impl From<String> for ComponentKind {
    fn from(tag: String) -> Self {
        ComponentKind::CATALOG
            .iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(&tag))
            .cloned()
            .unwrap_or(ComponentKind::Other(tag))
    }
}

impl From<ComponentKind> for String {
    fn from(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Other(tag) => tag,
            known => known.tag().to_string(),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Live status reported for a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Normal,
    /// Alarm raised, equipment still running.
    Alarme,
    /// Failure.
    Falha,
    /// Switched off.
    Desligado,
}

/// One of the four fixed anchor points on a component's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Port {
    Top,
    Bottom,
    Left,
    Right,
}

impl Port {
    pub const ALL: [Port; 4] = [Port::Top, Port::Bottom, Port::Left, Port::Right];

    /// The port facing the other way (TOP<->BOTTOM, LEFT<->RIGHT).
    pub fn opposite(self) -> Port {
        match self {
            Port::Top => Port::Bottom,
            Port::Bottom => Port::Top,
            Port::Left => Port::Right,
            Port::Right => Port::Left,
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Port::Top => "TOP",
            Port::Bottom => "BOTTOM",
            Port::Left => "LEFT",
            Port::Right => "RIGHT",
        };
        f.write_str(s)
    }
}

impl FromStr for Port {
    type Err = ParsePortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Port::ALL
            .into_iter()
            .find(|p| p.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParsePortError(s.to_string()))
    }
}

/// A placed component (or junction) on the diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    #[serde(default)]
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Payload::is_empty")]
    pub data: Payload,
}

impl Component {
    pub fn new(
        id: impl Into<String>,
        kind: ComponentKind,
        name: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            position,
            rotation: 0.0,
            status: Status::Normal,
            data: Payload::new(),
        }
    }

    /// A junction: empty name, flagged payload.
    pub fn junction(id: impl Into<String>, position: Position) -> Self {
        let mut data = Payload::new();
        data.insert(JUNCTION_FLAG.to_string(), serde_json::Value::Bool(true));
        Self {
            data,
            ..Self::new(id, ComponentKind::Junction, "", position)
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn is_junction(&self) -> bool {
        self.kind == ComponentKind::Junction
    }

    /// Whether the payload carries `isJunction = true`.
    pub fn has_junction_flag(&self) -> bool {
        matches!(
            self.data.get(JUNCTION_FLAG),
            Some(serde_json::Value::Bool(true))
        )
    }
}

/// A wire between two component ports.
///
/// Logically undirected for rendering; `from`/`to` and the ports are kept so
/// routing survives splits and merges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: String,
    pub from: String,
    pub to: String,
    pub from_port: Port,
    pub to_port: Port,
}

impl Connection {
    pub fn new(
        id: impl Into<String>,
        from: impl Into<String>,
        from_port: Port,
        to: impl Into<String>,
        to_port: Port,
    ) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            from_port,
            to_port,
        }
    }

    /// Check if this connection touches a specific component.
    pub fn involves(&self, component_id: &str) -> bool {
        self.from == component_id || self.to == component_id
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// The endpoint away from `component_id`, with its port.
    ///
    /// Returns `None` if the connection doesn't touch `component_id`.
    pub fn far_end(&self, component_id: &str) -> Option<(&str, Port)> {
        if self.to == component_id {
            Some((self.from.as_str(), self.from_port))
        } else if self.from == component_id {
            Some((self.to.as_str(), self.to_port))
        } else {
            None
        }
    }

    /// Whether `self` joins the same two (component, port) pairs as the given
    /// endpoints, in either direction.
    pub fn joins(&self, a: &str, a_port: Port, b: &str, b_port: Port) -> bool {
        let forward =
            self.from == a && self.from_port == a_port && self.to == b && self.to_port == b_port;
        let backward =
            self.from == b && self.from_port == b_port && self.to == a && self.to_port == a_port;
        forward || backward
    }
}

/// Components plus connections, owned by the host as one unit.
///
/// Engine operations take a `&Graph` and hand back a new one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Graph {
    pub fn new(components: Vec<Component>, connections: Vec<Connection>) -> Self {
        Self {
            components,
            connections,
        }
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn connection(&self, id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == id)
    }

    pub fn contains_component(&self, id: &str) -> bool {
        self.component(id).is_some()
    }

    /// Iterate over connections touching a component, in graph order.
    pub fn connections_of<'a>(
        &'a self,
        id: &'a str,
    ) -> impl Iterator<Item = &'a Connection> + 'a {
        self.connections.iter().filter(move |c| c.involves(id))
    }

    /// Whether any connection already joins these two (component, port) pairs.
    pub fn has_equivalent(&self, a: &str, a_port: Port, b: &str, b_port: Port) -> bool {
        self.connections
            .iter()
            .any(|c| c.joins(a, a_port, b, b_port))
    }

    /// Whether `id` is used by any component or connection.
    pub fn id_in_use(&self, id: &str) -> bool {
        self.components.iter().any(|c| c.id == id) || self.connections.iter().any(|c| c.id == id)
    }

    pub fn junctions(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(|c| c.is_junction())
    }
}
