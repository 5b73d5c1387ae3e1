//! Row-wrapping flow layout.
//!
//! Items are packed left to right and wrap onto a new row when the next item
//! would cross the container's right edge. Placement is greedy and keeps input
//! order; the engine never reorders items to pack rows tighter.
//!
//! ## Wrap rule
//!
//! An item wraps when the pen is past the row start (`x > 0`) and
//! `x + width > container_width`. Two consequences:
//!
//! - an item that ends exactly on the right edge stays on the current row;
//! - an item wider than the container is accepted onto an empty row at
//!   `x = 0` instead of being deferred forever, and the next item starts a
//!   fresh row after it.
//!
//! Spacing between items is not an engine concept. Callers bake it into each
//! item's measured size (see `TagCloud` padding in `tagcloud-ui`).
//!
//! ## Unknown width
//!
//! A container width that is zero, negative or NaN means the host has not
//! reported a size yet. Every item is then placed at the origin and the total
//! height is zero; the caller lays out again once the width is known.
//! An infinite width is a valid unbounded row.

use std::hash::Hash;

use tagcloud_core::map::HashMap;
use tagcloud_ui_graphics::{Point, Rect, Size};

/// One element to place: a stable identity plus its measured size.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowItem<K> {
    pub key: K,
    pub size: Size,
}

impl<K> FlowItem<K> {
    pub fn new(key: K, size: Size) -> Self {
        Self { key, size }
    }
}

/// Where a single item ended up.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowPlacement<K> {
    pub key: K,
    /// Offset relative to the flow's own origin.
    pub offset: Point,
    /// The (sanitized) size the item was placed with.
    pub size: Size,
    /// Zero-based row index.
    pub row: usize,
}

impl<K> FlowPlacement<K> {
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.offset, self.size)
    }
}

/// Output of one layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutResult<K: Hash + Eq> {
    placements: Vec<FlowPlacement<K>>,
    index: HashMap<K, usize>,
    total_height: f32,
    content_width: f32,
    row_count: usize,
}

impl<K: Hash + Eq> LayoutResult<K> {
    fn empty() -> Self {
        Self {
            placements: Vec::new(),
            index: HashMap::default(),
            total_height: 0.0,
            content_width: 0.0,
            row_count: 0,
        }
    }

    /// One placement per input item, in input order.
    pub fn placements(&self) -> &[FlowPlacement<K>] {
        &self.placements
    }

    /// Looks up an item's offset by identity.
    ///
    /// With duplicate identities the first occurrence wins.
    pub fn offset(&self, key: &K) -> Option<Point> {
        self.placement(key).map(|placement| placement.offset)
    }

    pub fn placement(&self, key: &K) -> Option<&FlowPlacement<K>> {
        self.index
            .get(key)
            .and_then(|&position| self.placements.get(position))
    }

    /// Bottom edge of the last row: its starting y plus its height.
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Right edge of the widest row.
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Rows used. Zero for empty input and for an unknown container width.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlowPlacement<K>> {
        self.placements.iter()
    }
}

/// Placement pen for one pass.
#[derive(Default)]
struct RowCursor {
    x: f32,
    y: f32,
    row_height: f32,
    row: usize,
}

impl RowCursor {
    fn should_wrap(&self, width: f32, container_width: f32) -> bool {
        self.x > 0.0 && self.x + width > container_width
    }

    fn wrap(&mut self) {
        self.y += self.row_height;
        self.x = 0.0;
        self.row_height = 0.0;
        self.row += 1;
    }

    fn advance(&mut self, size: Size) {
        self.x += size.width;
        self.row_height = self.row_height.max(size.height);
    }

    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Stateless handle on [`layout`] for callers that want a named engine value.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlowLayoutEngine;

impl FlowLayoutEngine {
    pub fn layout<K, I>(&self, items: I, container_width: f32) -> LayoutResult<K>
    where
        K: Hash + Eq + Clone,
        I: IntoIterator<Item = FlowItem<K>>,
    {
        layout(items, container_width)
    }
}

/// Lays `items` out in rows no wider than `container_width`.
///
/// Pure and re-entrant: the same input always yields the same result.
pub fn layout<K, I>(items: I, container_width: f32) -> LayoutResult<K>
where
    K: Hash + Eq + Clone,
    I: IntoIterator<Item = FlowItem<K>>,
{
    let mut result = LayoutResult::empty();
    let width_known = container_width > 0.0;
    let mut cursor = RowCursor::default();
    let mut clamped = 0usize;
    let mut duplicates = 0usize;

    let mut items = items.into_iter().peekable();
    while let Some(item) = items.next() {
        if !item.size.is_valid() {
            clamped += 1;
        }
        let size = item.size.sanitized();

        let offset = if width_known {
            if cursor.should_wrap(size.width, container_width) {
                cursor.wrap();
            }
            let offset = cursor.position();
            cursor.advance(size);
            result.content_width = result.content_width.max(cursor.x);
            if items.peek().is_none() {
                // Nothing follows; the pen does not carry over into another pass.
                cursor.x = 0.0;
            }
            offset
        } else {
            Point::ZERO
        };

        let position = result.placements.len();
        if result.index.contains_key(&item.key) {
            duplicates += 1;
        } else {
            result.index.insert(item.key.clone(), position);
        }
        result.placements.push(FlowPlacement {
            key: item.key,
            offset,
            size,
            row: if width_known { cursor.row } else { 0 },
        });
    }

    if clamped > 0 {
        log::warn!("flow layout clamped {clamped} invalid item size(s) to zero");
    }
    if duplicates > 0 {
        log::warn!("flow layout saw {duplicates} duplicate item identities; lookups return the first");
    }

    if !width_known {
        if !result.is_empty() {
            log::debug!(
                "flow layout with unknown container width {container_width}; {} item(s) parked at origin",
                result.len()
            );
        }
        return result;
    }

    if !result.is_empty() {
        result.total_height = cursor.y + cursor.row_height;
        result.row_count = cursor.row + 1;
    }
    log::trace!(
        "flow layout: {} item(s) in {} row(s), width {container_width}, height {}",
        result.len(),
        result.row_count,
        result.total_height
    );
    result
}

#[cfg(test)]
#[path = "tests/flow_tests.rs"]
mod tests;
