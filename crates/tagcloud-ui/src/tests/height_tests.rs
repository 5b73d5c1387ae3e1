use super::*;
use std::sync::Arc;
use tagcloud_core::{DefaultScheduler, Runtime};

fn runtime() -> Runtime {
    Runtime::new(Arc::new(DefaultScheduler))
}

#[test]
fn request_is_not_applied_until_next_frame() {
    let runtime = runtime();
    let height = ReportedHeight::new(runtime.frame_clock());

    height.request_update(42.0);
    assert_eq!(height.current(), None);
    assert_eq!(height.pending(), Some(42.0));
    assert!(runtime.needs_frame());

    runtime.handle().drain_frame_callbacks(0);
    assert_eq!(height.current(), Some(42.0));
    assert!(!height.has_pending());
    assert_eq!(height.update_count(), 1);
}

#[test]
fn repeated_requests_coalesce_into_one_callback() {
    let runtime = runtime();
    let handle = runtime.handle();
    let height = ReportedHeight::new(runtime.frame_clock());

    height.request_update(10.0);
    height.request_update(20.0);
    height.request_update(30.0);
    assert!(handle.has_frame_callbacks());

    handle.drain_frame_callbacks(0);
    assert_eq!(height.current(), Some(30.0));
    assert_eq!(height.update_count(), 1);
    assert!(!handle.has_frame_callbacks());
}

#[test]
fn small_changes_are_ignored() {
    let runtime = runtime();
    let handle = runtime.handle();
    let height = ReportedHeight::new(runtime.frame_clock());

    height.request_update(100.0);
    handle.drain_frame_callbacks(0);

    height.request_update(100.0 + HEIGHT_EPSILON / 2.0);
    assert!(!height.has_pending());
    assert!(!handle.has_frame_callbacks());
    assert_eq!(height.current(), Some(100.0));
}

#[test]
fn coalesced_request_back_to_current_value_is_a_noop() {
    let runtime = runtime();
    let handle = runtime.handle();
    let height = ReportedHeight::new(runtime.frame_clock());

    height.request_update(60.0);
    handle.drain_frame_callbacks(0);

    height.request_update(90.0);
    height.request_update(60.0);
    handle.drain_frame_callbacks(16);

    assert_eq!(height.current(), Some(60.0));
    assert_eq!(height.update_count(), 1);
}

#[test]
fn invalid_heights_report_zero() {
    let runtime = runtime();
    let height = ReportedHeight::new(runtime.frame_clock());

    height.request_update(f32::NAN);
    runtime.handle().drain_frame_callbacks(0);
    assert_eq!(height.current(), Some(0.0));
}

#[test]
fn dropping_reported_height_cancels_its_callback() {
    let runtime = runtime();
    let handle = runtime.handle();
    let height = ReportedHeight::new(runtime.frame_clock());

    height.request_update(12.0);
    assert!(handle.has_frame_callbacks());
    drop(height);

    assert!(!handle.has_frame_callbacks());
    handle.drain_frame_callbacks(0);
}

#[test]
fn request_after_runtime_drop_is_discarded() {
    let runtime = runtime();
    let height = ReportedHeight::new(runtime.frame_clock());
    drop(runtime);

    height.request_update(24.0);
    assert_eq!(height.pending(), None);
    assert!(!height.has_pending());
    assert_eq!(height.current(), None);
}
