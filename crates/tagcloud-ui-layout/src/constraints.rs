//! Layout constraints system

use tagcloud_ui_graphics::{sanitize_length, Size};

/// Constraints used during layout measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Creates constraints with exact width and height.
    pub fn tight(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    /// Constraints that accept any size.
    pub fn unbounded() -> Self {
        Self::loose(f32::INFINITY, f32::INFINITY)
    }

    /// Returns true if the width is bounded (max_width is finite).
    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    /// Constrains the provided size to fit within these constraints.
    ///
    /// NaN bounds are ignored instead of poisoning the result.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            clamp_axis(size.width, self.min_width, self.max_width),
            clamp_axis(size.height, self.min_height, self.max_height),
        )
    }

    /// Deflates constraints by the given amount on all sides.
    /// This is useful for applying padding before measuring children.
    pub fn deflate(self, horizontal: f32, vertical: f32) -> Self {
        Self {
            min_width: (self.min_width - horizontal).max(0.0),
            max_width: (self.max_width - horizontal).max(0.0),
            min_height: (self.min_height - vertical).max(0.0),
            max_height: (self.max_height - vertical).max(0.0),
        }
    }
}

fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    let min = sanitize_length(min);
    let value = sanitize_length(value).max(min);
    if max.is_nan() || max < min {
        value
    } else {
        value.min(max)
    }
}
