//! Platform abstraction traits for the tagcloud runtime.
//!
//! The host owns the UI loop. The runtime only asks it for another turn
//! through [`RuntimeScheduler`] and never drives frames on its own.

/// Schedules work for the tagcloud runtime.
///
/// Implementations forward the request to the host loop (a window redraw
/// request, an event-loop wakeup, a test counter). They must be safe to use
/// from multiple threads.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}
