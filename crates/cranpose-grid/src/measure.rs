//! Measure and place pass over a rendered grid
//!
//! Every slot of a row is given the same width, whether it holds an item or
//! a placeholder, so columns line up across rows. Items are measured with
//! that width pinned and are centered vertically in their row. Rows are as
//! tall as their tallest item and are stacked with the vertical spacing.

use crate::node::GridNode;
use crate::scroll::ScrollViewport;
use cranpose_grid_layout::{
    equal_extents, fitted_gap, Arrangement, CellSlot, Constraints, Point, Rect, Size, SpacedBy,
};
use smallvec::SmallVec;

/// Implemented by rendered item content so the grid can size it.
pub trait MeasureItem {
    /// Returns the size the content wants under `constraints`.
    fn measure(&self, constraints: Constraints) -> Size;
}

/// Fixed-size content.
impl MeasureItem for Size {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(*self)
    }
}

impl<M: MeasureItem + ?Sized> MeasureItem for Box<M> {
    fn measure(&self, constraints: Constraints) -> Size {
        (**self).measure(constraints)
    }
}

/// A slot with its final bounds in content coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedCell {
    pub slot: CellSlot,
    pub rect: Rect,
}

/// Result of laying out a grid in a viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayoutResult {
    /// Size the grid occupies in its parent.
    pub size: Size,
    /// Full extent of the rows, which may exceed `size` when scrolling.
    pub content_size: Size,
    /// Every slot, row by row.
    pub cells: Vec<PlacedCell>,
    /// Present when the grid is wrapped in a scroll container.
    pub scroll: Option<ScrollViewport>,
}

impl GridLayoutResult {
    pub fn cell_for_index(&self, flat_index: usize) -> Option<&PlacedCell> {
        self.cells
            .iter()
            .find(|cell| cell.slot.flat_index == Some(flat_index))
    }

    pub fn row(&self, row_index: usize) -> impl Iterator<Item = &PlacedCell> {
        self.cells
            .iter()
            .filter(move |cell| cell.slot.row == row_index)
    }

    /// Cells intersecting the visible area, in content coordinates.
    pub fn visible_cells(&self) -> impl Iterator<Item = &PlacedCell> {
        let visible = match &self.scroll {
            Some(scroll) => scroll.visible_rect(),
            None => Rect::from_origin_size(Point::ZERO, self.size),
        };
        self.cells
            .iter()
            .filter(move |cell| cell.rect.intersects(&visible))
    }
}

/// Lays out `root` inside `viewport`. Spacing is converted with `density`.
pub fn measure<N: MeasureItem>(
    root: &GridNode<N>,
    viewport: Size,
    density: f32,
) -> GridLayoutResult {
    let mut measurer = GridMeasurer {
        density,
        cells: Vec::new(),
        scroll: None,
    };
    let constraints = Constraints::from_viewport(viewport);
    let (size, content_size) = measurer.measure_node(root, constraints);
    GridLayoutResult {
        size,
        content_size,
        cells: measurer.cells,
        scroll: measurer.scroll,
    }
}

struct GridMeasurer {
    density: f32,
    cells: Vec<PlacedCell>,
    scroll: Option<ScrollViewport>,
}

struct MeasuredRow {
    height: f32,
    cells: SmallVec<[PlacedCell; 4]>,
}

impl GridMeasurer {
    /// Returns the node's own size and the size of its content.
    fn measure_node<N: MeasureItem>(
        &mut self,
        node: &GridNode<N>,
        constraints: Constraints,
    ) -> (Size, Size) {
        match node {
            GridNode::VerticalScroll {
                show_indicators,
                content,
            } => {
                let (content_size, _) =
                    self.measure_node(content, constraints.unbounded_height());
                let height = if constraints.has_bounded_height() {
                    constraints.max_height
                } else {
                    content_size.height
                };
                let size = constraints.constrain(Size::new(content_size.width, height));
                self.scroll = Some(ScrollViewport::new(size, content_size, *show_indicators));
                (size, content_size)
            }
            GridNode::Column { spacing, children } => {
                let spacing = spacing.to_px(self.density);
                let content_size = self.measure_column(children, spacing, constraints);
                (constraints.constrain(content_size), content_size)
            }
            GridNode::Row { .. } => {
                let row = self.measure_row(node, constraints);
                let width = row
                    .cells
                    .iter()
                    .map(|cell| cell.rect.right())
                    .fold(0.0, f32::max);
                self.cells.extend(row.cells);
                let size = Size::new(width, row.height);
                (constraints.constrain(size), size)
            }
            GridNode::Item { slot, content } => {
                let size = content.measure(constraints);
                self.cells.push(PlacedCell {
                    slot: *slot,
                    rect: Rect::from_origin_size(Point::ZERO, size),
                });
                (size, size)
            }
            GridNode::Spacer { slot } => {
                self.cells.push(PlacedCell {
                    slot: *slot,
                    rect: Rect::default(),
                });
                (Size::ZERO, Size::ZERO)
            }
        }
    }

    fn measure_column<N: MeasureItem>(
        &mut self,
        rows: &[GridNode<N>],
        spacing: f32,
        constraints: Constraints,
    ) -> Size {
        let row_constraints = constraints.unbounded_height();
        let measured: Vec<MeasuredRow> = rows
            .iter()
            .map(|row| self.measure_row(row, row_constraints))
            .collect();

        let heights: SmallVec<[f32; 16]> = measured.iter().map(|row| row.height).collect();
        let mut offsets: SmallVec<[f32; 16]> = smallvec::smallvec![0.0; heights.len()];
        let arrangement = SpacedBy(spacing);
        let total_height = arrangement.total_extent(&heights);
        arrangement.arrange(total_height, &heights, &mut offsets);

        let mut widest: f32 = 0.0;
        for (row, offset) in measured.into_iter().zip(offsets) {
            for cell in row.cells {
                widest = widest.max(cell.rect.right());
                self.cells.push(PlacedCell {
                    rect: cell.rect.translate(0.0, offset),
                    ..cell
                });
            }
        }
        let width = if constraints.max_width.is_finite() {
            constraints.max_width
        } else {
            widest
        };
        Size::new(width, total_height)
    }

    fn measure_row<N: MeasureItem>(
        &self,
        row: &GridNode<N>,
        constraints: Constraints,
    ) -> MeasuredRow {
        let (spacing, children) = match row {
            GridNode::Row {
                spacing, children, ..
            } => (spacing.to_px(self.density), children.as_slice()),
            other => {
                log::warn!("grid column child is not a row: {:?}", other.slot());
                return MeasuredRow {
                    height: 0.0,
                    cells: SmallVec::new(),
                };
            }
        };

        let spacing = fitted_gap(constraints.max_width, children.len(), spacing);
        let widths = self.slot_widths(children, spacing, constraints);
        let sizes: SmallVec<[Size; 8]> = children
            .iter()
            .zip(widths.iter())
            .map(|(child, width)| match child {
                GridNode::Item { content, .. } => {
                    content.measure(constraints.tighten_width(*width))
                }
                _ => Size::new(*width, 0.0),
            })
            .collect();
        let height = sizes.iter().map(|size| size.height).fold(0.0, f32::max);

        let mut xs: SmallVec<[f32; 8]> = smallvec::smallvec![0.0; widths.len()];
        SpacedBy(spacing).arrange(constraints.max_width, &widths, &mut xs);

        let cells = children
            .iter()
            .zip(sizes.iter().zip(xs.iter().zip(widths.iter())))
            .filter_map(|(child, (size, (x, width)))| {
                let slot = child.slot()?;
                let rect = if slot.is_empty() {
                    Rect::new(*x, 0.0, *width, height)
                } else {
                    Rect::new(*x, (height - size.height) / 2.0, *width, size.height)
                };
                Some(PlacedCell { slot, rect })
            })
            .collect();

        MeasuredRow { height, cells }
    }

    /// Equal share of the row for every slot. Without a width bound the
    /// widest item sets the share.
    fn slot_widths<N: MeasureItem>(
        &self,
        children: &[GridNode<N>],
        spacing: f32,
        constraints: Constraints,
    ) -> SmallVec<[f32; 8]> {
        if constraints.max_width.is_finite() {
            return equal_extents(constraints.max_width, children.len(), spacing);
        }
        let widest = children
            .iter()
            .filter_map(|child| match child {
                GridNode::Item { content, .. } => Some(content.measure(constraints).width),
                _ => None,
            })
            .fold(0.0, f32::max);
        smallvec::smallvec![widest; children.len()]
    }
}

#[cfg(test)]
#[path = "tests/measure_tests.rs"]
mod tests;
