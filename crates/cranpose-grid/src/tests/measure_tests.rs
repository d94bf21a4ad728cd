use super::*;
use crate::grid::GridLayout;
use crate::spec::GridSpec;
use cranpose_grid_layout::{Dp, Orientation};

const ITEM: Size = Size::new(50.0, 40.0);
const VIEWPORT: Size = Size::new(332.0, 400.0);

fn fixed_grid(count: usize, spec: GridSpec) -> GridLayout<usize, Size, impl Fn(&usize) -> Size> {
    GridLayout::new(0..count, spec, |_| ITEM)
}

#[test]
fn slots_share_width_and_step_by_spacing() {
    let grid = fixed_grid(10, GridSpec::new(3).scrollable(false));
    let layout = measure(&grid.render(Orientation::Portrait), VIEWPORT, 1.0);

    assert_eq!(layout.cells.len(), 12);
    let first_row: Vec<Rect> = layout.row(0).map(|cell| cell.rect).collect();
    assert_eq!(
        first_row,
        vec![
            Rect::new(0.0, 0.0, 100.0, 40.0),
            Rect::new(116.0, 0.0, 100.0, 40.0),
            Rect::new(232.0, 0.0, 100.0, 40.0),
        ]
    );
    let last = layout.cell_for_index(9).expect("item 9");
    assert_eq!(last.rect, Rect::new(0.0, 168.0, 100.0, 40.0));
    assert_eq!(last.slot.row, 3);

    let placeholders: Vec<&PlacedCell> = layout
        .row(3)
        .filter(|cell| cell.slot.is_empty())
        .collect();
    assert_eq!(placeholders.len(), 2);
    assert_eq!(placeholders[0].rect, Rect::new(116.0, 168.0, 100.0, 40.0));

    assert_eq!(layout.content_size, Size::new(332.0, 208.0));
    assert_eq!(layout.size, Size::new(332.0, 208.0));
    assert!(layout.scroll.is_none());
}

#[test]
fn trailing_empty_row_has_no_height() {
    let grid = fixed_grid(9, GridSpec::new(3).scrollable(false));
    let layout = measure(&grid.render(Orientation::Portrait), VIEWPORT, 1.0);
    assert_eq!(layout.content_size.height, 3.0 * 40.0 + 3.0 * 16.0);
    assert!(layout.row(3).all(|cell| cell.slot.is_empty() && cell.rect.height == 0.0));
}

#[test]
fn density_scales_spacing() {
    let grid = fixed_grid(2, GridSpec::new(2).scrollable(false).spacing(Dp(8.0)));
    let layout = measure(&grid.render(Orientation::Portrait), Size::new(216.0, 400.0), 2.0);
    let second = layout.cell_for_index(1).expect("item 1");
    assert_eq!(second.rect.x, 116.0);
    assert_eq!(second.rect.width, 100.0);
}

#[test]
fn rows_take_tallest_item_and_center_the_rest() {
    let grid = GridLayout::new(
        0..3usize,
        GridSpec::new(3).scrollable(false).spacing(Dp(0.0)),
        |index| Size::new(10.0, if *index == 1 { 60.0 } else { 20.0 }),
    );
    let layout = measure(&grid.render(Orientation::Portrait), Size::new(300.0, 400.0), 1.0);
    assert_eq!(layout.cell_for_index(1).expect("tall").rect.y, 0.0);
    assert_eq!(layout.cell_for_index(0).expect("short").rect.y, 20.0);
    assert_eq!(layout.row(1).next().expect("trailing").rect.y, 60.0);
}

#[test]
fn scrollable_grid_fills_viewport_and_scrolls_overflow() {
    let grid = fixed_grid(10, GridSpec::new(3).show_scroll_indicators(true));
    let layout = measure(&grid.render(Orientation::Portrait), Size::new(332.0, 100.0), 1.0);

    assert_eq!(layout.size, Size::new(332.0, 100.0));
    assert_eq!(layout.content_size.height, 208.0);
    let scroll = layout.scroll.expect("scroll viewport");
    assert_eq!(scroll.max_offset(), 108.0);
    assert!(scroll.shows_indicators());
}

#[test]
fn non_scrollable_grid_is_clipped_to_viewport() {
    let grid = fixed_grid(10, GridSpec::new(3).scrollable(false));
    let layout = measure(&grid.render(Orientation::Portrait), Size::new(332.0, 100.0), 1.0);
    assert_eq!(layout.size.height, 100.0);
    assert_eq!(layout.content_size.height, 208.0);
    let visible: Vec<usize> = layout
        .visible_cells()
        .filter_map(|cell| cell.slot.flat_index)
        .collect();
    assert_eq!(visible, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn landscape_layout_uses_landscape_columns() {
    let grid = fixed_grid(10, GridSpec::new(3).columns_in_landscape(5).scrollable(false));
    let viewport = Size::new(564.0, 300.0);
    let orientation = Orientation::from_size(viewport);
    let layout = measure(&grid.render(orientation), viewport, 1.0);
    assert_eq!(layout.row(0).count(), 5);
    assert_eq!(layout.cell_for_index(4).expect("item 4").rect.x, 4.0 * (100.0 + 16.0));
    assert_eq!(layout.cell_for_index(5).expect("item 5").slot.row, 1);
}

#[test]
fn oversized_spacing_is_shrunk_to_keep_row_in_viewport() {
    let grid = fixed_grid(9, GridSpec::new(9).scrollable(false));
    let viewport = Size::new(320.0, 400.0);
    let layout = measure(&grid.render(Orientation::Portrait), viewport, 2.625);

    let first_row: Vec<&PlacedCell> = layout.row(0).collect();
    assert_eq!(first_row.len(), 9);
    assert!(first_row.iter().all(|cell| cell.rect.width == 0.0));
    assert_eq!(first_row[1].rect.x, 40.0);
    let right = first_row
        .iter()
        .map(|cell| cell.rect.right())
        .fold(0.0, f32::max);
    assert!(right <= viewport.width);
}
