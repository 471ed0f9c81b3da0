//! Percent <-> pixel conversion for the current container size.

use sld_core::{ContainerRect, Point, Position, Real, clamp_percent};
use tracing::trace;

/// Maps persisted percent positions onto the drawing surface and back.
///
/// Holds only the latest rectangle. Every other engine entry point takes the
/// rectangle as a parameter, so there is nothing else to invalidate on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateAdapter {
    rect: ContainerRect,
}

impl CoordinateAdapter {
    pub fn new(rect: ContainerRect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> ContainerRect {
        self.rect
    }

    /// Record a newly observed container size.
    ///
    /// Returns `true` if the size actually changed; calling it again with the
    /// same rectangle is a no-op.
    pub fn resize(&mut self, rect: ContainerRect) -> bool {
        if self.rect == rect {
            return false;
        }
        trace!(
            width = rect.width,
            height = rect.height,
            "container resized"
        );
        self.rect = rect;
        true
    }

    pub fn to_pixels(&self, position: Position) -> Point {
        to_pixels(position, self.rect)
    }

    pub fn to_percent(&self, point: Point) -> Position {
        to_percent(point, self.rect)
    }
}

pub fn to_pixels(position: Position, rect: ContainerRect) -> Point {
    Point::new(
        position.x / 100.0 * rect.width,
        position.y / 100.0 * rect.height,
    )
}

/// Inverse of [`to_pixels`]. A zero-size axis maps to 0%.
pub fn to_percent(point: Point, rect: ContainerRect) -> Position {
    Position::new(
        axis_percent(point.x, rect.width),
        axis_percent(point.y, rect.height),
    )
}

/// Same as [`to_percent`], clamped into `[0, 100]` on both axes.
pub fn to_percent_clamped(point: Point, rect: ContainerRect) -> Position {
    let p = to_percent(point, rect);
    Position::new(clamp_percent(p.x), clamp_percent(p.y))
}

fn axis_percent(pixels: Real, extent: Real) -> Real {
    if extent <= 0.0 {
        return 0.0;
    }
    pixels / extent * 100.0
}
