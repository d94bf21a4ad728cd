//! Headless renderer turning a laid-out grid into draw operations

use crate::measure::GridLayoutResult;
use cranpose_grid_layout::Rect;

pub const DEFAULT_INDICATOR_THICKNESS: f32 = 4.0;

#[derive(Clone, Debug, PartialEq)]
pub enum RenderOp {
    Item { flat_index: usize, rect: Rect },
    Placeholder { row: usize, column: usize, rect: Rect },
    ScrollIndicator { rect: Rect },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    operations: Vec<RenderOp>,
}

impl Scene {
    pub fn operations(&self) -> &[RenderOp] {
        &self.operations
    }

    /// Flat indices of the drawn items, in draw order.
    pub fn item_indices(&self) -> Vec<usize> {
        self.operations
            .iter()
            .filter_map(|op| match op {
                RenderOp::Item { flat_index, .. } => Some(*flat_index),
                _ => None,
            })
            .collect()
    }
}

/// Emits viewport-space operations for the cells currently on screen.
#[derive(Clone, Copy, Debug)]
pub struct HeadlessRenderer {
    indicator_thickness: f32,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self {
            indicator_thickness: DEFAULT_INDICATOR_THICKNESS,
        }
    }

    pub fn with_indicator_thickness(mut self, thickness: f32) -> Self {
        self.indicator_thickness = thickness;
        self
    }

    pub fn render(&self, layout: &GridLayoutResult) -> Scene {
        let scroll_offset = layout.scroll.map_or(0.0, |scroll| scroll.offset());
        let mut operations: Vec<RenderOp> = layout
            .visible_cells()
            .map(|cell| {
                let rect = cell.rect.translate(0.0, -scroll_offset);
                match cell.slot.flat_index {
                    Some(flat_index) => RenderOp::Item { flat_index, rect },
                    None => RenderOp::Placeholder {
                        row: cell.slot.row,
                        column: cell.slot.column,
                        rect,
                    },
                }
            })
            .collect();

        if let Some(rect) = layout
            .scroll
            .and_then(|scroll| scroll.indicator_rect(self.indicator_thickness))
        {
            operations.push(RenderOp::ScrollIndicator { rect });
        }
        log::trace!("headless grid scene: {} operations", operations.len());
        Scene { operations }
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}
