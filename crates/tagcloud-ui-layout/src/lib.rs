//! Layout contracts & the flow layout engine for tagcloud

mod constraints;
mod core;
pub mod flow;
mod flow_policy;

pub use constraints::*;
pub use core::*;
pub use flow::{layout as flow_layout, FlowItem, FlowLayoutEngine, FlowPlacement, LayoutResult};
pub use flow_policy::*;
