//! Row/column index mapping for a fixed-column grid.
//!
//! A grid of `item_count` items over `active_columns` columns always has
//! `item_count / active_columns + 1` rows. When the item count is an exact
//! multiple of the column count (zero included) the last row is therefore
//! entirely empty. Existing layouts depend on that trailing row, so it is
//! kept.

use crate::orientation::Orientation;

/// Raises a requested column count to at least one.
pub fn clamp_columns(requested: i32) -> usize {
    if requested < 1 {
        log::debug!("grid column count {requested} raised to 1");
        1
    } else {
        requested as usize
    }
}

/// Column counts for both orientations, each at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColumnCounts {
    portrait: usize,
    landscape: usize,
}

impl ColumnCounts {
    /// Landscape falls back to the portrait count when not given.
    pub fn new(portrait: i32, landscape: Option<i32>) -> Self {
        let portrait = clamp_columns(portrait);
        let landscape = landscape.map(clamp_columns).unwrap_or(portrait);
        Self {
            portrait,
            landscape,
        }
    }

    pub fn portrait(&self) -> usize {
        self.portrait
    }

    pub fn landscape(&self) -> usize {
        self.landscape
    }

    /// Column count in effect for `orientation`.
    pub fn active(&self, orientation: Orientation) -> usize {
        if orientation.is_landscape() {
            self.landscape
        } else {
            self.portrait
        }
    }
}

/// Number of rows the grid renders.
pub fn compute_row_count(item_count: usize, active_columns: usize) -> usize {
    debug_assert!(active_columns >= 1);
    item_count / active_columns + 1
}

/// Number of occupied slots in `row_index`; the last row holds the remainder.
pub fn compute_items_in_row(
    row_index: usize,
    row_count: usize,
    item_count: usize,
    active_columns: usize,
) -> usize {
    debug_assert!(active_columns >= 1);
    if row_index + 1 == row_count {
        item_count % active_columns
    } else {
        active_columns
    }
}

/// One (row, column) position in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellSlot {
    pub row: usize,
    pub column: usize,
    /// Index into the item collection, `None` for an empty slot.
    pub flat_index: Option<usize>,
}

impl CellSlot {
    pub fn is_empty(&self) -> bool {
        self.flat_index.is_none()
    }
}

/// Derived shape of one layout pass. Recomputed on every pass, never stored
/// on the component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridMetrics {
    item_count: usize,
    active_columns: usize,
    row_count: usize,
}

impl GridMetrics {
    pub fn new(item_count: usize, active_columns: usize) -> Self {
        let active_columns = active_columns.max(1);
        Self {
            item_count,
            active_columns,
            row_count: compute_row_count(item_count, active_columns),
        }
    }

    pub fn for_orientation(
        item_count: usize,
        columns: ColumnCounts,
        orientation: Orientation,
    ) -> Self {
        Self::new(item_count, columns.active(orientation))
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn active_columns(&self) -> usize {
        self.active_columns
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_last_row(&self, row_index: usize) -> bool {
        row_index + 1 == self.row_count
    }

    pub fn items_in_row(&self, row_index: usize) -> usize {
        compute_items_in_row(
            row_index,
            self.row_count,
            self.item_count,
            self.active_columns,
        )
    }

    /// Flat index of the item at (`row_index`, `column_index`), if the slot is occupied.
    pub fn flat_index(&self, row_index: usize, column_index: usize) -> Option<usize> {
        if row_index >= self.row_count || column_index >= self.items_in_row(row_index) {
            return None;
        }
        Some(row_index * self.active_columns + column_index)
    }

    /// Every slot of `row_index`, in column order.
    pub fn slots(&self, row_index: usize) -> impl Iterator<Item = CellSlot> + '_ {
        (0..self.active_columns).map(move |column| CellSlot {
            row: row_index,
            column,
            flat_index: self.flat_index(row_index, column),
        })
    }

    /// Every slot of the grid, row by row.
    pub fn all_slots(&self) -> impl Iterator<Item = CellSlot> + '_ {
        (0..self.row_count).flat_map(move |row| self.slots(row))
    }
}

#[cfg(test)]
#[path = "tests/metrics_tests.rs"]
mod tests;
