use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tagcloud_ui_graphics::Size;
use tagcloud_ui_layout::{flow_layout, FlowItem};

const CONTAINER_WIDTH: f32 = 390.0;
const ITEM_COUNT_SAMPLES: &[usize] = &[16, 256, 4096];

fn chip_items(count: usize) -> Vec<FlowItem<usize>> {
    (0..count)
        .map(|index| {
            // Widths cycle through short and long tags so rows wrap irregularly.
            let width = 40.0 + (index % 7) as f32 * 18.0;
            FlowItem::new(index, Size::new(width, 38.0))
        })
        .collect()
}

fn bench_flow_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("flow_layout");
    for &count in ITEM_COUNT_SAMPLES {
        let items = chip_items(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &items, |b, items| {
            b.iter(|| {
                let result = flow_layout(black_box(items.clone()), black_box(CONTAINER_WIDTH));
                black_box(result.total_height())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flow_layout);
criterion_main!(benches);
