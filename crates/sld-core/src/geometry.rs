//! 2-D primitives shared by the engine.
//!
//! Two coordinate spaces are in play:
//! - pixel space (`Point`, `Vector`), relative to the drawing surface origin
//! - percent-of-container space (`Position`), the persisted form
//!
//! `ContainerRect` carries the current surface size needed to move between them.

use core::ops::{Add, Mul, Sub};

use crate::{Real, SldError, SldResult, ensure_finite};

/// Absolute point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: Real,
    pub y: Real,
}

impl Point {
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> Real {
        (other - self).length()
    }
}

/// Displacement in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub dx: Real,
    pub dy: Real,
}

impl Vector {
    pub const fn new(dx: Real, dy: Real) -> Self {
        Self { dx, dy }
    }

    pub fn dot(self, other: Vector) -> Real {
        self.dx * other.dx + self.dy * other.dy
    }

    pub fn length_sq(self) -> Real {
        self.dot(self)
    }

    pub fn length(self) -> Real {
        self.length_sq().sqrt()
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Mul<Real> for Vector {
    type Output = Vector;

    fn mul(self, rhs: Real) -> Vector {
        Vector::new(self.dx * rhs, self.dy * rhs)
    }
}

/// Position in percent-of-container units, each axis nominally in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: Real,
    pub y: Real,
}

impl Position {
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }
}

/// Current pixel size of the drawing surface.
///
/// Fields are public so hosts can build one from whatever their resize
/// observer reports; `try_new` is the checked constructor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerRect {
    pub width: Real,
    pub height: Real,
}

impl ContainerRect {
    pub const fn new(width: Real, height: Real) -> Self {
        Self { width, height }
    }

    /// Build a rectangle, rejecting non-finite or negative extents.
    pub fn try_new(width: Real, height: Real) -> SldResult<Self> {
        let width = ensure_finite(width, "container width")?;
        let height = ensure_finite(height, "container height")?;
        if width < 0.0 {
            return Err(SldError::NegativeExtent {
                what: "container width",
                value: width,
            });
        }
        if height < 0.0 {
            return Err(SldError::NegativeExtent {
                what: "container height",
                value: height,
            });
        }
        Ok(Self { width, height })
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
