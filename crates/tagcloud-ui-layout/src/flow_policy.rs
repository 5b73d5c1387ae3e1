use crate::constraints::Constraints;
use crate::core::{Measurable, MeasurePolicy, MeasureResult, Placeable, Placement};
use crate::flow::{self, FlowItem};
use tagcloud_ui_graphics::Size;

/// MeasurePolicy that wraps children into rows with the flow engine.
///
/// Measures, places and sizes in a single pass, so the parent learns the
/// final height from the same call that discovered the width. Use it when the
/// host can hand down a bounded width up front; `TagCloud` covers hosts that
/// only learn the width after a first layout.
///
/// Children are measured unbounded and are never split or shrunk to fit a
/// row; a child wider than the container gets a row of its own at x = 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlowMeasurePolicy;

impl FlowMeasurePolicy {
    pub fn new() -> Self {
        Self
    }

    fn child_sizes(measurables: &[Box<dyn Measurable>], height: f32) -> Vec<FlowItem<usize>> {
        measurables
            .iter()
            .enumerate()
            .map(|(index, measurable)| {
                let width = measurable.max_intrinsic_width(height);
                let child_height = measurable.max_intrinsic_height(width);
                FlowItem::new(index, Size::new(width, child_height))
            })
            .collect()
    }

    fn height_for_width(measurables: &[Box<dyn Measurable>], width: f32) -> f32 {
        let items = Self::child_sizes(measurables, f32::INFINITY);
        flow::layout(items, width).total_height()
    }
}

impl MeasurePolicy for FlowMeasurePolicy {
    fn measure(
        &self,
        measurables: &[Box<dyn Measurable>],
        constraints: Constraints,
    ) -> MeasureResult {
        let placeables: Vec<Box<dyn Placeable>> = measurables
            .iter()
            .map(|measurable| measurable.measure(Constraints::unbounded()))
            .collect();

        let result = flow::layout(
            placeables
                .iter()
                .enumerate()
                .map(|(index, placeable)| FlowItem::new(index, placeable.size())),
            constraints.max_width,
        );

        let mut placements = Vec::with_capacity(placeables.len());
        for (placeable, placement) in placeables.iter().zip(result.iter()) {
            placeable.place(placement.offset.x, placement.offset.y);
            placements.push(Placement::new(
                placement.key,
                placement.offset.x,
                placement.offset.y,
            ));
        }

        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            result.content_width()
        };
        let size = constraints.constrain(Size::new(width, result.total_height()));
        MeasureResult::new(size, placements)
    }

    fn min_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], height: f32) -> f32 {
        // Children never split, so the narrowest flow is as wide as its widest child.
        measurables
            .iter()
            .map(|m| m.max_intrinsic_width(height))
            .fold(0.0, f32::max)
    }

    fn max_intrinsic_width(&self, measurables: &[Box<dyn Measurable>], height: f32) -> f32 {
        measurables
            .iter()
            .map(|m| m.max_intrinsic_width(height))
            .sum()
    }

    fn min_intrinsic_height(&self, measurables: &[Box<dyn Measurable>], width: f32) -> f32 {
        Self::height_for_width(measurables, width)
    }

    fn max_intrinsic_height(&self, measurables: &[Box<dyn Measurable>], width: f32) -> f32 {
        Self::height_for_width(measurables, width)
    }

    fn debug_name(&self) -> &str {
        "FlowMeasurePolicy"
    }
}

#[cfg(test)]
#[path = "tests/flow_policy_tests.rs"]
mod tests;
