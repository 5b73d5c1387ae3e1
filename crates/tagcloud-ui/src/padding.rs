use tagcloud_ui_graphics::{EdgeInsets, Size};
use tagcloud_ui_layout::{Constraints, Measurable, Placeable};

/// Wraps content so its measured box includes the given insets.
///
/// The flow engine is spacing-agnostic; `TagCloud` uses this wrapper to bake
/// inter-item spacing into every item's measured size.
pub struct Padding {
    insets: EdgeInsets,
    content: Box<dyn Measurable>,
}

impl Padding {
    pub fn new(insets: EdgeInsets, content: Box<dyn Measurable>) -> Self {
        Self {
            insets: insets.sanitized(),
            content,
        }
    }

    pub fn insets(&self) -> EdgeInsets {
        self.insets
    }
}

impl Measurable for Padding {
    fn measure(&self, constraints: Constraints) -> Box<dyn Placeable> {
        let inner = self.content.measure(
            constraints.deflate(self.insets.horizontal_sum(), self.insets.vertical_sum()),
        );
        let size = constraints.constrain(inner.size().sanitized().inflate(self.insets));
        Box::new(PaddedPlaceable {
            insets: self.insets,
            inner,
            size,
        })
    }

    fn min_intrinsic_width(&self, height: f32) -> f32 {
        let inner_height = (height - self.insets.vertical_sum()).max(0.0);
        self.content.min_intrinsic_width(inner_height) + self.insets.horizontal_sum()
    }

    fn max_intrinsic_width(&self, height: f32) -> f32 {
        let inner_height = (height - self.insets.vertical_sum()).max(0.0);
        self.content.max_intrinsic_width(inner_height) + self.insets.horizontal_sum()
    }

    fn min_intrinsic_height(&self, width: f32) -> f32 {
        let inner_width = (width - self.insets.horizontal_sum()).max(0.0);
        self.content.min_intrinsic_height(inner_width) + self.insets.vertical_sum()
    }

    fn max_intrinsic_height(&self, width: f32) -> f32 {
        let inner_width = (width - self.insets.horizontal_sum()).max(0.0);
        self.content.max_intrinsic_height(inner_width) + self.insets.vertical_sum()
    }
}

struct PaddedPlaceable {
    insets: EdgeInsets,
    inner: Box<dyn Placeable>,
    size: Size,
}

impl Placeable for PaddedPlaceable {
    fn place(&self, x: f32, y: f32) {
        self.inner.place(x + self.insets.left, y + self.insets.top);
    }

    fn width(&self) -> f32 {
        self.size.width
    }

    fn height(&self) -> f32 {
        self.size.height
    }
}
