//! sld-core: stable foundation for the single-line diagram engine.
//!
//! Contains:
//! - numeric (Real, percent bounds, float helpers)
//! - geometry (pixel points/vectors, percent positions, container rectangle)
//! - ids (fresh string IDs for engine-created components and connections)
//! - error (shared error types)

pub mod error;
pub mod geometry;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SldError, SldResult};
pub use geometry::*;
pub use ids::*;
pub use numeric::*;
