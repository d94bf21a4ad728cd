//! Grid component

use crate::node::GridNode;
use crate::spec::GridSpec;
use cranpose_grid_layout::{CellSlot, ColumnCounts, Dp, GridMetrics, Orientation};
use smallvec::SmallVec;
use std::fmt;
use std::marker::PhantomData;

/// Cells of one rendered row.
pub type RowCells<N> = SmallVec<[GridNode<N>; 4]>;

/// Arranges `items` into a grid of fixed column count.
///
/// Items and configuration are fixed at construction. Each render pass
/// takes the orientation and recomputes everything else from scratch.
pub struct GridLayout<T, N, F>
where
    F: Fn(&T) -> N,
{
    items: Vec<T>,
    columns: ColumnCounts,
    vertical_spacing: Dp,
    horizontal_spacing: Dp,
    scrollable: bool,
    show_scroll_indicators: bool,
    render_item: F,
    _node: PhantomData<fn() -> N>,
}

impl<T, N, F> GridLayout<T, N, F>
where
    F: Fn(&T) -> N,
{
    pub fn new(items: impl IntoIterator<Item = T>, spec: GridSpec, render_item: F) -> Self {
        let (vertical_spacing, horizontal_spacing) = spec.resolved_spacing();
        Self {
            items: items.into_iter().collect(),
            columns: spec.column_counts(),
            vertical_spacing,
            horizontal_spacing,
            scrollable: spec.scrollable,
            show_scroll_indicators: spec.show_scroll_indicators,
            render_item,
            _node: PhantomData,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn column_counts(&self) -> ColumnCounts {
        self.columns
    }

    pub fn vertical_spacing(&self) -> Dp {
        self.vertical_spacing
    }

    pub fn horizontal_spacing(&self) -> Dp {
        self.horizontal_spacing
    }

    pub fn is_scrollable(&self) -> bool {
        self.scrollable
    }

    pub fn shows_scroll_indicators(&self) -> bool {
        self.scrollable && self.show_scroll_indicators
    }

    pub fn active_columns(&self, orientation: Orientation) -> usize {
        self.columns.active(orientation)
    }

    pub fn metrics(&self, orientation: Orientation) -> GridMetrics {
        GridMetrics::for_orientation(self.items.len(), self.columns, orientation)
    }

    /// Renders the item at `flat_index`, if it exists.
    pub fn render_item_at(&self, flat_index: usize) -> Option<N> {
        self.items.get(flat_index).map(&self.render_item)
    }

    /// Renders one row: an item per occupied slot, a spacer per empty one.
    pub fn render_row(&self, row_index: usize, orientation: Orientation) -> RowCells<N> {
        let metrics = self.metrics(orientation);
        self.row_cells(&metrics, row_index)
    }

    /// Renders the whole grid.
    pub fn render(&self, orientation: Orientation) -> GridNode<N> {
        let metrics = self.metrics(orientation);
        log::trace!(
            "grid render: {:?}, {} items, {} columns, {} rows",
            orientation,
            metrics.item_count(),
            metrics.active_columns(),
            metrics.row_count()
        );

        let rows = (0..metrics.row_count())
            .map(|row_index| GridNode::Row {
                index: row_index,
                spacing: self.horizontal_spacing,
                children: self.row_cells(&metrics, row_index).into_vec(),
            })
            .collect();
        let grid = GridNode::Column {
            spacing: self.vertical_spacing,
            children: rows,
        };

        if self.scrollable {
            GridNode::VerticalScroll {
                show_indicators: self.show_scroll_indicators,
                content: Box::new(grid),
            }
        } else {
            grid
        }
    }

    fn row_cells(&self, metrics: &GridMetrics, row_index: usize) -> RowCells<N> {
        metrics
            .slots(row_index)
            .map(|slot| self.cell(slot))
            .collect()
    }

    fn cell(&self, slot: CellSlot) -> GridNode<N> {
        let Some(flat_index) = slot.flat_index else {
            return GridNode::Spacer { slot };
        };
        match self.render_item_at(flat_index) {
            Some(content) => GridNode::Item { slot, content },
            None => {
                log::warn!(
                    "grid slot ({}, {}) maps to index {} past {} items",
                    slot.row,
                    slot.column,
                    flat_index,
                    self.items.len()
                );
                GridNode::Spacer {
                    slot: CellSlot {
                        flat_index: None,
                        ..slot
                    },
                }
            }
        }
    }
}

impl<T, N, F> fmt::Debug for GridLayout<T, N, F>
where
    T: fmt::Debug,
    F: Fn(&T) -> N,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridLayout")
            .field("items", &self.items)
            .field("columns", &self.columns)
            .field("vertical_spacing", &self.vertical_spacing)
            .field("horizontal_spacing", &self.horizontal_spacing)
            .field("scrollable", &self.scrollable)
            .field("show_scroll_indicators", &self.show_scroll_indicators)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/grid_tests.rs"]
mod tests;
