use std::cell::Cell;
use std::rc::Rc;

use tagcloud_ui_graphics::{Color, CornerRadii, EdgeInsets, Point, Rect, Size};
use tagcloud_ui_layout::{Constraints, Measurable, Placeable};

use crate::tag_cloud::Identifiable;
use crate::text::measure_text;

/// Space between a chip's label and its outline.
pub const CHIP_CONTENT_PADDING: EdgeInsets = EdgeInsets {
    left: 10.0,
    top: 5.0,
    right: 10.0,
    bottom: 5.0,
};

/// Visual style shared by every chip of a convenience-mode tag cloud.
///
/// Only the chip's fixed content padding affects layout; everything here is
/// carried through for the rendering surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChipStyle {
    pub text_color: Color,
    pub fill_color: Color,
    pub border_width: f32,
    pub border_color: Color,
    pub corner_radius: f32,
}

impl Default for ChipStyle {
    fn default() -> Self {
        Self {
            text_color: Color::BLACK,
            fill_color: Color::WHITE,
            border_width: 1.0,
            border_color: Color::BLACK,
            corner_radius: 10.0,
        }
    }
}

impl ChipStyle {
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn has_border(&self) -> bool {
        self.border_width > 0.0 && !self.border_color.is_transparent()
    }

    /// Corner radii a chip of `size` should be drawn with.
    pub fn corner_radii(&self, size: Size) -> CornerRadii {
        CornerRadii::uniform(self.corner_radius).resolve(size)
    }
}

/// A text tag drawn as a rounded, outlined chip.
///
/// Clones share their placement, so the copy handed to layout and the copy a
/// host keeps for drawing report the same [`Chip::frame`].
#[derive(Clone, Debug)]
pub struct Chip {
    text: String,
    style: ChipStyle,
    frame: Rc<Cell<Option<Rect>>>,
}

impl Chip {
    pub fn new(text: impl Into<String>, style: ChipStyle) -> Self {
        Self {
            text: text.into(),
            style,
            frame: Rc::new(Cell::new(None)),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &ChipStyle {
        &self.style
    }

    /// Bounds from the most recent layout pass, relative to the cloud origin.
    pub fn frame(&self) -> Option<Rect> {
        self.frame.get()
    }

    /// Label size plus the fixed content padding.
    pub fn content_size(&self) -> Size {
        let metrics = measure_text(&self.text);
        Size::new(metrics.width, metrics.height)
            .sanitized()
            .inflate(CHIP_CONTENT_PADDING)
    }
}

impl Identifiable for Chip {
    type Id = String;

    fn id(&self) -> String {
        self.text.clone()
    }
}

impl Measurable for Chip {
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable> {
        Box::new(ChipPlaceable {
            size: constraints.constrain(self.content_size()),
            frame: self.frame.clone(),
        })
    }

    fn min_intrinsic_width(&self, _height: f32) -> f32 {
        self.content_size().width
    }

    fn max_intrinsic_width(&self, _height: f32) -> f32 {
        self.content_size().width
    }

    fn min_intrinsic_height(&self, _width: f32) -> f32 {
        self.content_size().height
    }

    fn max_intrinsic_height(&self, _width: f32) -> f32 {
        self.content_size().height
    }
}

struct ChipPlaceable {
    size: Size,
    frame: Rc<Cell<Option<Rect>>>,
}

impl Placeable for ChipPlaceable {
    fn place(&self, x: f32, y: f32) {
        self.frame
            .set(Some(Rect::from_origin_size(Point::new(x, y), self.size)));
    }

    fn width(&self) -> f32 {
        self.size.width
    }

    fn height(&self) -> f32 {
        self.size.height
    }
}
