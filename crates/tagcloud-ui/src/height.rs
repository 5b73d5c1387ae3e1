//! Deferred, coalesced height reporting.
//!
//! A flow only knows its height after it has been laid out against a width,
//! and the parent asks for that height during the same layout. Writing the
//! new height straight back would mutate layout state mid-pass and can cycle.
//! [`ReportedHeight`] instead parks the value and applies it on the host's
//! next UI turn through the [`FrameClock`]:
//!
//! - at most one frame callback is outstanding per instance;
//! - requests made before that frame overwrite each other, the last one wins;
//! - values within [`HEIGHT_EPSILON`] of the current height are ignored.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tagcloud_core::{FrameCallbackRegistration, FrameClock};
use tagcloud_ui_graphics::sanitize_length;

/// Smallest height change worth another layout.
pub const HEIGHT_EPSILON: f32 = 0.5;

#[derive(Default)]
struct HeightState {
    current: Option<f32>,
    pending: Option<f32>,
    registration: Option<FrameCallbackRegistration>,
    updates: u64,
}

impl HeightState {
    fn differs(&self, height: f32) -> bool {
        self.current
            .map_or(true, |current| (current - height).abs() > HEIGHT_EPSILON)
    }

    fn apply(state: &Weak<RefCell<HeightState>>, frame_time_nanos: u64) {
        let Some(state) = state.upgrade() else {
            return;
        };
        let registration = {
            let mut state = state.borrow_mut();
            if let Some(height) = state.pending.take() {
                if state.differs(height) {
                    log::debug!(
                        "reported height {:?} -> {height} at {frame_time_nanos}ns",
                        state.current
                    );
                    state.current = Some(height);
                    state.updates += 1;
                }
            }
            state.registration.take()
        };
        // Dropped outside the borrow: cancelling touches the runtime queue.
        drop(registration);
    }
}

/// Height a layout adapter reports to its parent.
///
/// `None` until the first update has been applied.
pub struct ReportedHeight {
    clock: FrameClock,
    state: Rc<RefCell<HeightState>>,
}

impl ReportedHeight {
    pub fn new(clock: FrameClock) -> Self {
        Self {
            clock,
            state: Rc::new(RefCell::new(HeightState::default())),
        }
    }

    pub fn current(&self) -> Option<f32> {
        self.state.borrow().current
    }

    /// Value waiting for the next frame, if any.
    pub fn pending(&self) -> Option<f32> {
        self.state.borrow().pending
    }

    pub fn has_pending(&self) -> bool {
        self.state.borrow().registration.is_some()
    }

    /// Number of times the reported height actually changed.
    pub fn update_count(&self) -> u64 {
        self.state.borrow().updates
    }

    /// Asks for the reported height to become `height` on the next frame.
    ///
    /// Invalid heights are treated as zero.
    pub fn request_update(&self, height: f32) {
        self.clock.runtime_handle().assert_ui_thread();
        let height = sanitize_length(height);
        {
            let mut state = self.state.borrow_mut();
            if state.registration.is_some() {
                state.pending = Some(height);
                return;
            }
            if !state.differs(height) {
                return;
            }
            state.pending = Some(height);
        }

        let weak = Rc::downgrade(&self.state);
        let registration = self
            .clock
            .with_frame_nanos(move |time| HeightState::apply(&weak, time));
        let mut state = self.state.borrow_mut();
        if registration.is_active() {
            state.registration = Some(registration);
        } else {
            log::warn!("runtime is gone; dropping height update to {height}");
            state.pending = None;
        }
    }
}

#[cfg(test)]
#[path = "tests/height_tests.rs"]
mod tests;
