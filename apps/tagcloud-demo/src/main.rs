use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{bail, Context};
use tagcloud_core::RuntimeScheduler;
use tagcloud_ui::{ChipStyle, Color, Constraints, Runtime, TagCloud};

const FRAME_NANOS: u64 = 16_666_667;
const MAX_FRAMES: u64 = 8;

/// Counts wakeups instead of waking a real event loop.
#[derive(Default)]
struct HeadlessScheduler {
    requested: AtomicUsize,
}

impl RuntimeScheduler for HeadlessScheduler {
    fn schedule_frame(&self) {
        self.requested.fetch_add(1, Ordering::SeqCst);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let width: f32 = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("container width must be a number, got {arg:?}"))?,
        None => 240.0,
    };

    println!("=== tagcloud headless demo ===");
    println!("container width: {width}");
    println!();

    let scheduler = Arc::new(HeadlessScheduler::default());
    let runtime = Runtime::new(scheduler.clone());
    let style = ChipStyle::default()
        .fill_color(Color::from_rgb_u8(0xEE, 0xF2, 0xFF))
        .border_color(Color::from_rgb_u8(0x44, 0x4C, 0xE7));
    let cloud = TagCloud::from_tags(
        runtime.frame_clock(),
        ["Hello", "World", "I", "love", "Rust", "flow", "layout", "tag", "cloud"],
        style,
    );

    // The host learns its width only after the first pass, like a real UI.
    cloud.compose(Constraints::unbounded());
    let mut frame = 0;
    loop {
        let layout = cloud.compose(Constraints::loose(width, f32::INFINITY));
        if !runtime.needs_frame() {
            log::info!(
                "settled after {frame} frame(s), {} scheduler wakeup(s)",
                scheduler.requested.load(Ordering::SeqCst)
            );
            println!("reported size: {:?}", layout.size);
            break;
        }
        if frame == MAX_FRAMES {
            bail!("layout did not settle within {MAX_FRAMES} frames");
        }
        frame += 1;
        runtime.handle().drain_frame_callbacks(frame * FRAME_NANOS);
    }

    for chip in cloud.chips() {
        match chip.frame() {
            Some(rect) => println!(
                "{:>8}  x={:>6.1} y={:>6.1} w={:>5.1} h={:>5.1}",
                chip.text(),
                rect.x,
                rect.y,
                rect.width,
                rect.height
            ),
            None => println!("{:>8}  (not placed)", chip.text()),
        }
    }
    Ok(())
}
