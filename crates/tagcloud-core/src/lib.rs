//! Single-threaded runtime services for tagcloud
//!
//! Layout adapters use this crate to defer state changes to the host's next
//! UI turn instead of mutating layout state mid-pass.

mod collections;
mod frame_clock;
mod platform;
mod runtime;

pub use collections::map;
pub use frame_clock::*;
pub use platform::*;
pub use runtime::*;

/// Identifier handed out for every registered frame callback.
pub type FrameCallbackId = u64;
