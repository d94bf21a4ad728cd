use super::*;

#[test]
fn row_count_is_integer_division_plus_one() {
    for columns in 1..=7 {
        for items in 0..=50 {
            assert_eq!(compute_row_count(items, columns), items / columns + 1);
        }
    }
}

#[test]
fn full_rows_hold_active_columns_and_last_holds_remainder() {
    for columns in 1..=6 {
        for items in 0..=40 {
            let metrics = GridMetrics::new(items, columns);
            let last = metrics.row_count() - 1;
            for row in 0..last {
                assert_eq!(metrics.items_in_row(row), columns);
            }
            assert_eq!(metrics.items_in_row(last), items % columns);
        }
    }
}

#[test]
fn occupied_slots_cover_every_item_exactly_once() {
    for columns in 1..=5 {
        for items in 0..=30 {
            let metrics = GridMetrics::new(items, columns);
            let indices: Vec<usize> = metrics
                .all_slots()
                .filter_map(|slot| slot.flat_index)
                .collect();
            assert_eq!(indices, (0..items).collect::<Vec<_>>());
            for slot in metrics.all_slots() {
                if let Some(index) = slot.flat_index {
                    assert_eq!(index, slot.row * columns + slot.column);
                    assert!(index < items);
                }
            }
        }
    }
}

#[test]
fn ten_items_in_three_columns() {
    let metrics = GridMetrics::new(10, 3);
    assert_eq!(metrics.row_count(), 4);
    assert_eq!(metrics.items_in_row(0), 3);
    assert_eq!(metrics.items_in_row(2), 3);
    assert_eq!(metrics.items_in_row(3), 1);

    let last: Vec<CellSlot> = metrics.slots(3).collect();
    assert_eq!(last.len(), 3);
    assert_eq!(last[0].flat_index, Some(9));
    assert!(last[1].is_empty());
    assert!(last[2].is_empty());
}

#[test]
fn empty_collection_renders_one_empty_row() {
    let metrics = GridMetrics::new(0, 3);
    assert_eq!(metrics.row_count(), 1);
    assert_eq!(metrics.items_in_row(0), 0);
    assert!(metrics.slots(0).all(|slot| slot.is_empty()));
    assert_eq!(metrics.slots(0).count(), 3);
}

#[test]
fn exact_multiple_keeps_trailing_empty_row() {
    let metrics = GridMetrics::new(9, 3);
    assert_eq!(metrics.row_count(), 4);
    assert_eq!(metrics.items_in_row(3), 0);
    assert!(metrics.is_last_row(3));
    assert!(metrics.slots(3).all(|slot| slot.is_empty()));
}

#[test]
fn non_positive_columns_clamp_to_one() {
    assert_eq!(clamp_columns(0), 1);
    assert_eq!(clamp_columns(-4), 1);
    assert_eq!(clamp_columns(4), 4);

    let counts = ColumnCounts::new(0, None);
    assert_eq!(counts.active(Orientation::Portrait), 1);
    assert_eq!(counts.active(Orientation::Landscape), 1);

    let counts = ColumnCounts::new(3, Some(-2));
    assert_eq!(counts.landscape(), 1);
}

#[test]
fn landscape_defaults_to_portrait_count() {
    let counts = ColumnCounts::new(3, None);
    assert_eq!(counts.active(Orientation::Landscape), 3);

    let counts = ColumnCounts::new(3, Some(5));
    assert_eq!(counts.portrait(), 3);
    assert_eq!(counts.active(Orientation::Portrait), 3);
    assert_eq!(counts.active(Orientation::Landscape), 5);

    let metrics = GridMetrics::for_orientation(10, counts, Orientation::Landscape);
    assert_eq!(metrics.row_count(), 3);
    assert_eq!(metrics.items_in_row(2), 0);
}

#[test]
fn flat_index_outside_grid_is_none() {
    let metrics = GridMetrics::new(4, 3);
    assert_eq!(metrics.flat_index(1, 0), Some(3));
    assert_eq!(metrics.flat_index(1, 1), None);
    assert_eq!(metrics.flat_index(2, 0), None);
}
