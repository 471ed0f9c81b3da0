//! Static bounding boxes per component kind.

use sld_core::{Real, Vector};

use crate::model::{ComponentKind, Port};

/// Width/height of a component's symbol, in pixels, centered on its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSize {
    pub width: Real,
    pub height: Real,
}

impl BoxSize {
    pub const fn new(width: Real, height: Real) -> Self {
        Self { width, height }
    }
}

/// Box used for kinds the catalog doesn't list.
pub const DEFAULT_BOX: BoxSize = BoxSize::new(32.0, 32.0);

pub fn box_for(kind: &ComponentKind) -> BoxSize {
    match kind {
        ComponentKind::Meter => BoxSize::new(48.0, 48.0),
        ComponentKind::Breaker => BoxSize::new(32.0, 48.0),
        ComponentKind::Switch => BoxSize::new(32.0, 48.0),
        ComponentKind::Fuse => BoxSize::new(24.0, 40.0),
        ComponentKind::Relay => BoxSize::new(40.0, 40.0),
        ComponentKind::Inverter => BoxSize::new(56.0, 56.0),
        ComponentKind::Transformer => BoxSize::new(56.0, 64.0),
        ComponentKind::Generator => BoxSize::new(56.0, 56.0),
        ComponentKind::Battery => BoxSize::new(48.0, 40.0),
        ComponentKind::SolarArray => BoxSize::new(64.0, 48.0),
        ComponentKind::Load => BoxSize::new(40.0, 40.0),
        ComponentKind::Busbar => BoxSize::new(120.0, 12.0),
        ComponentKind::Panel => BoxSize::new(64.0, 80.0),
        ComponentKind::Junction => BoxSize::new(12.0, 12.0),
        ComponentKind::Other(_) => DEFAULT_BOX,
    }
}

/// Offset of `port` from the component's center.
pub fn offset_for(kind: &ComponentKind, port: Port) -> Vector {
    let size = box_for(kind);
    match port {
        Port::Top => Vector::new(0.0, -size.height / 2.0),
        Port::Bottom => Vector::new(0.0, size.height / 2.0),
        Port::Left => Vector::new(-size.width / 2.0, 0.0),
        Port::Right => Vector::new(size.width / 2.0, 0.0),
    }
}
