//! Pure math/data for tagcloud layout and styling
//!
//! Geometry primitives and color definitions used by the layout engine and
//! the tag cloud composer. Nothing in here draws.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;
