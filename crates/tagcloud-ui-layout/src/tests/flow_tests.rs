use super::*;

fn items(sizes: &[(f32, f32)]) -> Vec<FlowItem<usize>> {
    sizes
        .iter()
        .enumerate()
        .map(|(index, &(width, height))| FlowItem::new(index, Size::new(width, height)))
        .collect()
}

fn offsets(result: &LayoutResult<usize>) -> Vec<(f32, f32)> {
    result
        .iter()
        .map(|placement| (placement.offset.x, placement.offset.y))
        .collect()
}

#[test]
fn empty_input_has_no_height() {
    let result = layout(Vec::<FlowItem<usize>>::new(), 120.0);
    assert!(result.is_empty());
    assert_eq!(result.total_height(), 0.0);
    assert_eq!(result.row_count(), 0);
}

#[test]
fn third_item_wraps_when_row_overflows() {
    let result = layout(items(&[(50.0, 20.0), (50.0, 20.0), (50.0, 20.0)]), 120.0);
    assert_eq!(offsets(&result), vec![(0.0, 0.0), (50.0, 0.0), (0.0, 20.0)]);
    assert_eq!(result.total_height(), 40.0);
    assert_eq!(result.row_count(), 2);
    assert_eq!(result.offset(&2), Some(Point::new(0.0, 20.0)));
}

#[test]
fn oversized_item_sits_alone_at_row_start() {
    let result = layout(items(&[(200.0, 35.0)]), 100.0);
    assert_eq!(offsets(&result), vec![(0.0, 0.0)]);
    assert_eq!(result.total_height(), 35.0);
    assert_eq!(result.row_count(), 1);
}

#[test]
fn oversized_item_in_the_middle_gets_its_own_row() {
    let result = layout(
        items(&[(40.0, 10.0), (200.0, 30.0), (40.0, 10.0), (40.0, 10.0)]),
        100.0,
    );
    assert_eq!(
        offsets(&result),
        vec![(0.0, 0.0), (0.0, 10.0), (0.0, 40.0), (40.0, 40.0)]
    );
    assert_eq!(result.total_height(), 50.0);
    let rows: Vec<usize> = result.iter().map(|placement| placement.row).collect();
    assert_eq!(rows, vec![0, 1, 2, 2]);
}

#[test]
fn item_flush_with_right_edge_does_not_wrap() {
    let result = layout(items(&[(60.0, 20.0), (40.0, 20.0), (1.0, 20.0)]), 100.0);
    assert_eq!(offsets(&result), vec![(0.0, 0.0), (60.0, 0.0), (0.0, 20.0)]);
}

#[test]
fn row_height_is_tallest_item_in_row() {
    let result = layout(items(&[(30.0, 10.0), (30.0, 25.0), (30.0, 15.0), (30.0, 5.0)]), 70.0);
    assert_eq!(
        offsets(&result),
        vec![(0.0, 0.0), (30.0, 0.0), (0.0, 25.0), (30.0, 25.0)]
    );
    assert_eq!(result.total_height(), 40.0);
    assert_eq!(result.content_width(), 60.0);
}

#[test]
fn five_equal_chips_fill_two_rows() {
    let result = layout(items(&[(60.0, 30.0); 5]), 190.0);
    assert_eq!(
        offsets(&result),
        vec![
            (0.0, 0.0),
            (60.0, 0.0),
            (120.0, 0.0),
            (0.0, 30.0),
            (60.0, 30.0)
        ]
    );
    assert_eq!(result.total_height(), 60.0);
}

#[test]
fn unknown_width_parks_everything_at_origin() {
    for width in [0.0, -10.0, f32::NAN] {
        let result = layout(items(&[(50.0, 20.0), (50.0, 20.0)]), width);
        assert_eq!(offsets(&result), vec![(0.0, 0.0), (0.0, 0.0)]);
        assert_eq!(result.total_height(), 0.0);
        assert_eq!(result.row_count(), 0);
        assert_eq!(result.len(), 2);
    }
}

#[test]
fn infinite_width_keeps_a_single_row() {
    let result = layout(items(&[(500.0, 10.0), (500.0, 12.0)]), f32::INFINITY);
    assert_eq!(offsets(&result), vec![(0.0, 0.0), (500.0, 0.0)]);
    assert_eq!(result.total_height(), 12.0);
}

#[test]
fn invalid_sizes_are_clamped_to_zero() {
    let result = layout(
        items(&[(f32::NAN, 10.0), (-5.0, f32::INFINITY), (40.0, 10.0)]),
        100.0,
    );
    assert_eq!(offsets(&result), vec![(0.0, 0.0), (0.0, 0.0), (0.0, 0.0)]);
    assert_eq!(result.placements()[1].size, Size::ZERO);
    assert_eq!(result.total_height(), 10.0);
}

#[test]
fn duplicate_keys_are_all_placed() {
    let duplicated = vec![
        FlowItem::new("crabs", Size::new(50.0, 20.0)),
        FlowItem::new("crabs", Size::new(50.0, 20.0)),
    ];
    let result = layout(duplicated, 80.0);
    assert_eq!(result.len(), 2);
    assert_eq!(result.placements()[1].offset, Point::new(0.0, 20.0));
    assert_eq!(result.offset(&"crabs"), Some(Point::ZERO));
}

#[test]
fn layout_is_idempotent() {
    let input = items(&[(33.0, 12.0), (71.5, 18.0), (12.0, 9.0), (90.0, 14.0)]);
    assert_eq!(layout(input.clone(), 110.0), layout(input, 110.0));
}

#[test]
fn engine_handle_matches_free_function() {
    let input = items(&[(50.0, 20.0), (50.0, 20.0), (50.0, 20.0)]);
    assert_eq!(
        FlowLayoutEngine.layout(input.clone(), 120.0),
        layout(input, 120.0)
    );
}
