//! Tag cloud composer for tagcloud
//!
//! [`TagCloud`] bridges an ordered collection of caller-defined tags to the
//! flow layout engine in `tagcloud-ui-layout`. [`TagCloud::from_tags`] is the
//! convenience path that renders plain strings as styled [`Chip`]s.

mod chip;
mod height;
mod padding;
mod tag_cloud;
mod text;

pub use chip::*;
pub use height::*;
pub use padding::*;
pub use tag_cloud::*;
pub use text::*;

pub use tagcloud_core::{FrameClock, Runtime, RuntimeHandle};
pub use tagcloud_ui_graphics::{Color, EdgeInsets, Point, Rect, Size};
pub use tagcloud_ui_layout::{Constraints, Measurable, Placeable};
