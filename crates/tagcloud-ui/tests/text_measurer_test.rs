//! Installing a host text measurer changes chip sizes.
//!
//! Lives in its own test binary: the measurer is process-wide.

use std::sync::Arc;

use tagcloud_core::DefaultScheduler;
use tagcloud_ui::*;

struct ProportionalMeasurer;

impl TextMeasurer for ProportionalMeasurer {
    fn measure(&self, text: &str) -> TextMetrics {
        let width: f32 = text
            .chars()
            .map(|c| if c.is_uppercase() { 12.0 } else { 6.0 })
            .sum();
        TextMetrics {
            width,
            height: 16.0,
            line_height: 16.0,
            line_count: 1,
        }
    }
}

#[test]
fn chips_are_sized_by_the_installed_measurer() {
    set_text_measurer(ProportionalMeasurer);
    assert_eq!(measure_text("Ab").width, 18.0);

    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let cloud = TagCloud::from_tags_default(runtime.frame_clock(), ["Ab", "cd"]).spacing(0.0, 0.0);
    let layout = cloud.compose(Constraints::loose(200.0, f32::INFINITY));

    let sizes: Vec<Size> = layout.placements().iter().map(|p| p.size).collect();
    assert_eq!(sizes, vec![Size::new(38.0, 26.0), Size::new(32.0, 26.0)]);
    assert_eq!(layout.offset(&"cd".to_string()), Some(Point::new(38.0, 0.0)));
}
