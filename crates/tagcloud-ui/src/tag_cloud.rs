//! Tag cloud composer.
//!
//! [`TagCloud`] owns the data, turns every element into measurable content,
//! pads it by the configured spacing and lets the flow engine place it. The
//! height it reports upward goes through [`ReportedHeight`], so a host sees:
//!
//! 1. first pass, width unknown: items parked at the origin, no height yet;
//! 2. second pass, width known: items placed, height requested;
//! 3. next frame: the requested height becomes the reported height.
//!
//! Further passes with an unchanged width and data do not request anything new.
//! Replacing the data asks the host for another turn so the new items get laid
//! out.
//!
//! A pass whose width is unknown never requests a height. If the width drops
//! back to unknown after a height was reported, the last reported height is
//! kept, so [`TagCloud::size`] reports `(0, previous height)` until a pass
//! with a known width runs again.

use std::cell::Cell;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use tagcloud_core::{FrameClock, RuntimeHandle};
use tagcloud_ui_graphics::{sanitize_length, EdgeInsets, Point, Size};
use tagcloud_ui_layout::flow::{self, FlowItem, FlowPlacement, LayoutResult};
use tagcloud_ui_layout::{Constraints, Measurable, Placeable};

use crate::chip::{Chip, ChipStyle};
use crate::height::ReportedHeight;
use crate::padding::Padding;

/// Default gap, applied on each side of every item.
pub const DEFAULT_SPACING: f32 = 4.0;

/// A value with an identity that stays stable across layout passes.
pub trait Identifiable {
    type Id: Hash + Eq + Clone + fmt::Debug;

    fn id(&self) -> Self::Id;
}

impl Identifiable for String {
    type Id = String;

    fn id(&self) -> String {
        self.clone()
    }
}

type RenderItem<T> = Rc<dyn Fn(&T) -> Box<dyn Measurable>>;

/// Outcome of one [`TagCloud::compose`] pass.
#[derive(Clone, Debug)]
pub struct TagCloudLayout<K: Hash + Eq> {
    /// Size the cloud reports to its parent: the known container width and
    /// the currently reported height, zero where still unknown.
    pub size: Size,
    result: LayoutResult<K>,
    width_known: bool,
}

impl<K: Hash + Eq> TagCloudLayout<K> {
    /// Placed items, including spacing, in data order.
    pub fn placements(&self) -> &[FlowPlacement<K>] {
        self.result.placements()
    }

    pub fn offset(&self, key: &K) -> Option<Point> {
        self.result.offset(key)
    }

    /// Height this pass computed, before it has been reported upward.
    ///
    /// `None` when the container width was unknown.
    pub fn content_height(&self) -> Option<f32> {
        self.width_known.then(|| self.result.total_height())
    }

    pub fn row_count(&self) -> usize {
        self.result.row_count()
    }

    pub fn layout_result(&self) -> &LayoutResult<K> {
        &self.result
    }
}

/// Flow-wrapping container for an ordered collection of tags.
pub struct TagCloud<T: Identifiable> {
    data: Vec<T>,
    vertical_spacing: f32,
    horizontal_spacing: f32,
    render_item: RenderItem<T>,
    container_width: Cell<Option<f32>>,
    height: ReportedHeight,
    runtime: RuntimeHandle,
}

impl<T: Identifiable> TagCloud<T> {
    /// Custom mode: `render_item` turns each element into measurable content.
    pub fn new<I, F>(clock: FrameClock, data: I, render_item: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> Box<dyn Measurable> + 'static,
    {
        Self {
            data: data.into_iter().collect(),
            vertical_spacing: DEFAULT_SPACING,
            horizontal_spacing: DEFAULT_SPACING,
            render_item: Rc::new(render_item),
            container_width: Cell::new(None),
            runtime: clock.runtime_handle(),
            height: ReportedHeight::new(clock),
        }
    }

    /// Sets the gap added above/below and left/right of every item.
    ///
    /// Negative or invalid values become zero.
    pub fn spacing(mut self, vertical: f32, horizontal: f32) -> Self {
        self.vertical_spacing = sanitize_length(vertical);
        self.horizontal_spacing = sanitize_length(horizontal);
        self
    }

    pub fn vertical_spacing(&self) -> f32 {
        self.vertical_spacing
    }

    pub fn horizontal_spacing(&self) -> f32 {
        self.horizontal_spacing
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Replaces the collection and asks the host for a fresh layout pass.
    pub fn set_data(&mut self, data: impl IntoIterator<Item = T>) {
        self.data = data.into_iter().collect();
        self.runtime.schedule();
    }

    /// Width seen by the most recent pass, `None` while unknown.
    pub fn container_width(&self) -> Option<f32> {
        self.container_width.get()
    }

    /// Height reported to the parent, `None` until the first update lands.
    pub fn reported_height(&self) -> Option<f32> {
        self.height.current()
    }

    /// True while a height update waits for the next frame.
    pub fn has_pending_height(&self) -> bool {
        self.height.has_pending()
    }

    pub fn size(&self) -> Size {
        Size::new(
            self.container_width().unwrap_or(0.0),
            self.reported_height().unwrap_or(0.0),
        )
    }

    /// Runs one measure-and-place pass against `constraints.max_width`.
    ///
    /// A non-finite or non-positive max width counts as unknown. Items are
    /// measured unconstrained so nothing is truncated; an item wider than the
    /// container gets a row of its own.
    pub fn compose(&self, constraints: Constraints) -> TagCloudLayout<T::Id> {
        let width = Some(constraints.max_width).filter(|w| w.is_finite() && *w > 0.0);
        self.container_width.set(width);

        let spacing = EdgeInsets::symmetric(self.horizontal_spacing, self.vertical_spacing);
        let measured: Vec<(T::Id, Box<dyn Placeable>)> = self
            .data
            .iter()
            .map(|item| {
                let content = Padding::new(spacing, (self.render_item)(item));
                (item.id(), content.measure(Constraints::unbounded()))
            })
            .collect();

        let result = flow::layout(
            measured
                .iter()
                .map(|(id, placeable)| FlowItem::new(id.clone(), placeable.size())),
            width.unwrap_or(0.0),
        );
        for ((_, placeable), placement) in measured.iter().zip(result.iter()) {
            placeable.place(placement.offset.x, placement.offset.y);
        }

        if width.is_some() {
            self.height.request_update(result.total_height());
        }

        TagCloudLayout {
            size: self.size(),
            result,
            width_known: width.is_some(),
        }
    }
}

impl TagCloud<Chip> {
    /// Convenience mode: every string becomes a [`Chip`] drawn with `style`.
    pub fn from_tags<I, S>(clock: FrameClock, tags: I, style: ChipStyle) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            clock,
            tags.into_iter().map(|tag| Chip::new(tag, style)),
            |chip: &Chip| Box::new(chip.clone()) as Box<dyn Measurable>,
        )
    }

    pub fn from_tags_default<I, S>(clock: FrameClock, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_tags(clock, tags, ChipStyle::default())
    }

    pub fn chips(&self) -> &[Chip] {
        self.data()
    }
}

#[cfg(test)]
#[path = "tests/tag_cloud_tests.rs"]
mod tests;
