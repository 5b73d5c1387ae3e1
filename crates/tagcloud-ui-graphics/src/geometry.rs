//! Geometric primitives: Point, Size, Rect, EdgeInsets, CornerRadii

/// Replaces negative, NaN and infinite lengths with zero.
///
/// Layout code must never propagate a poisoned length into placement math.
#[inline]
pub fn sanitize_length(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Both dimensions are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.width >= 0.0 && self.height.is_finite() && self.height >= 0.0
    }

    /// Copy of this size with invalid dimensions clamped to zero.
    pub fn sanitized(self) -> Self {
        Self {
            width: sanitize_length(self.width),
            height: sanitize_length(self.height),
        }
    }

    /// Grows the size by the insets on every edge.
    pub fn inflate(self, insets: EdgeInsets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Padding values for each edge of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }

    pub fn horizontal_sum(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_sum(&self) -> f32 {
        self.top + self.bottom
    }

    /// Copy of these insets with every invalid edge clamped to zero.
    pub fn sanitized(self) -> Self {
        Self {
            left: sanitize_length(self.left),
            top: sanitize_length(self.top),
            right: sanitize_length(self.right),
            bottom: sanitize_length(self.bottom),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Clamps every radius so opposite corners cannot overlap inside `size`.
    pub fn resolve(&self, size: Size) -> CornerRadii {
        let max_width = (size.width / 2.0).max(0.0);
        let max_height = (size.height / 2.0).max(0.0);
        let clamp = |radius: f32| sanitize_length(radius).min(max_width).min(max_height);
        CornerRadii {
            top_left: clamp(self.top_left),
            top_right: clamp(self.top_right),
            bottom_right: clamp(self.bottom_right),
            bottom_left: clamp(self.bottom_left),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_size_clamps_invalid_dimensions() {
        assert_eq!(Size::new(-3.0, f32::NAN).sanitized(), Size::ZERO);
        assert_eq!(Size::new(f32::INFINITY, 4.0).sanitized(), Size::new(0.0, 4.0));
        assert!(!Size::new(1.0, -1.0).is_valid());
        assert!(Size::new(1.0, 0.0).is_valid());
    }

    #[test]
    fn inflate_adds_both_edges() {
        let size = Size::new(40.0, 20.0).inflate(EdgeInsets::symmetric(10.0, 5.0));
        assert_eq!(size, Size::new(60.0, 30.0));
    }

    #[test]
    fn corner_radii_resolve_to_half_the_short_side() {
        let radii = CornerRadii::uniform(10.0).resolve(Size::new(60.0, 12.0));
        assert_eq!(radii, CornerRadii::uniform(6.0));
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = Rect::from_origin_size(Point::ZERO, Size::new(50.0, 30.0));
        let b = Rect::from_origin_size(Point::new(50.0, 0.0), Size::new(50.0, 30.0));
        assert!(!a.intersects(&b));
        assert!(a.intersects(&b.translate(-1.0, 0.0)));
    }
}
