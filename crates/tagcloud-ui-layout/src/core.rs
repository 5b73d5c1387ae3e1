//! Core layout traits and types shared by tagcloud content and policies.

use crate::constraints::Constraints;
use tagcloud_ui_graphics::Size;

/// Object capable of measuring a layout child and exposing intrinsic sizes.
///
/// This is the seam to the host's measurement service: the flow engine never
/// looks inside content, it only asks for a size.
pub trait Measurable {
    /// Measures the child with the provided constraints, returning a [`Placeable`].
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable>;

    /// Returns the minimum width achievable for the given height.
    fn min_intrinsic_width(&self, height: f32) -> f32;

    /// Returns the maximum width achievable for the given height.
    fn max_intrinsic_width(&self, height: f32) -> f32;

    /// Returns the minimum height achievable for the given width.
    fn min_intrinsic_height(&self, width: f32) -> f32;

    /// Returns the maximum height achievable for the given width.
    fn max_intrinsic_height(&self, width: f32) -> f32;
}

/// Result of running a measurement pass for a single child.
pub trait Placeable {
    /// Places the child at the provided coordinates relative to its parent.
    fn place(&self, x: f32, y: f32);

    /// Returns the measured width of the child.
    fn width(&self) -> f32;

    /// Returns the measured height of the child.
    fn height(&self) -> f32;

    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// Policy responsible for measuring and placing children.
pub trait MeasurePolicy {
    /// Runs the measurement pass with the provided children and constraints.
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> MeasureResult;

    /// Computes the minimum intrinsic width of this policy.
    fn min_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], height: f32) -> f32;

    /// Computes the maximum intrinsic width of this policy.
    fn max_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], height: f32) -> f32;

    /// Computes the minimum intrinsic height of this policy.
    fn min_intrinsic_height(&self, measurables: &[Box<dyn Measurable>], width: f32) -> f32;

    /// Computes the maximum intrinsic height of this policy.
    fn max_intrinsic_height(&self, measurables: &[Box<dyn Measurable>], width: f32) -> f32;

    fn debug_name(&self) -> &str;
}

/// Result of a measurement operation.
#[derive(Clone, Debug)]
pub struct MeasureResult {
    pub size: Size,
    pub placements: Vec<Placement>,
}

impl MeasureResult {
    pub fn new(size: Size, placements: Vec<Placement>) -> Self {
        Self { size, placements }
    }
}

/// Placement of one measured child, addressed by its position in the
/// `measurables` slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub x: f32,
    pub y: f32,
}

impl Placement {
    pub fn new(index: usize, x: f32, y: f32) -> Self {
        Self { index, x, y }
    }
}
