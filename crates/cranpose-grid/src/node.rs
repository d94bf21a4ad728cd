//! Node tree produced by a grid render pass

use cranpose_grid_layout::{CellSlot, Dp};

/// Output of [`GridLayout::render`](crate::GridLayout::render).
///
/// The tree has a fixed shape: an optional `VerticalScroll` around a
/// `Column` of `Row`s, each row holding one `Item` or `Spacer` per column.
/// `N` is whatever the caller's render function returns.
#[derive(Clone, Debug, PartialEq)]
pub enum GridNode<N> {
    /// Scrolling viewport around the grid.
    VerticalScroll {
        show_indicators: bool,
        content: Box<GridNode<N>>,
    },
    /// Rows stacked top to bottom.
    Column {
        spacing: Dp,
        children: Vec<GridNode<N>>,
    },
    /// Cells placed left to right, each filling an equal share of the width.
    Row {
        index: usize,
        spacing: Dp,
        children: Vec<GridNode<N>>,
    },
    /// A rendered item.
    Item { slot: CellSlot, content: N },
    /// Flexible placeholder holding an empty slot.
    Spacer { slot: CellSlot },
}

impl<N> GridNode<N> {
    pub fn children(&self) -> &[GridNode<N>] {
        match self {
            GridNode::VerticalScroll { content, .. } => std::slice::from_ref(&**content),
            GridNode::Column { children, .. } | GridNode::Row { children, .. } => children,
            GridNode::Item { .. } | GridNode::Spacer { .. } => &[],
        }
    }

    pub fn is_scroll(&self) -> bool {
        matches!(self, GridNode::VerticalScroll { .. })
    }

    /// Slot of a leaf node.
    pub fn slot(&self) -> Option<CellSlot> {
        match self {
            GridNode::Item { slot, .. } | GridNode::Spacer { slot } => Some(*slot),
            _ => None,
        }
    }

    /// Rows of the grid, looking through a scroll wrapper.
    pub fn rows(&self) -> &[GridNode<N>] {
        match self {
            GridNode::VerticalScroll { content, .. } => content.rows(),
            GridNode::Column { children, .. } => children,
            _ => &[],
        }
    }

    /// Calls `f` on every node, parents before children.
    pub fn visit(&self, f: &mut impl FnMut(&GridNode<N>)) {
        f(self);
        for child in self.children() {
            child.visit(f);
        }
    }

    /// Rendered items with their flat index, in grid order.
    pub fn items(&self) -> Vec<(usize, &N)> {
        let mut items = Vec::new();
        self.collect_items(&mut items);
        items
    }

    fn collect_items<'a>(&'a self, out: &mut Vec<(usize, &'a N)>) {
        match self {
            GridNode::Item {
                slot:
                    CellSlot {
                        flat_index: Some(index),
                        ..
                    },
                content,
            } => out.push((*index, content)),
            _ => {
                for child in self.children() {
                    child.collect_items(out);
                }
            }
        }
    }

    pub fn item_count(&self) -> usize {
        let mut count = 0;
        self.visit(&mut |node| {
            if matches!(node, GridNode::Item { .. }) {
                count += 1;
            }
        });
        count
    }

    pub fn spacer_count(&self) -> usize {
        let mut count = 0;
        self.visit(&mut |node| {
            if matches!(node, GridNode::Spacer { .. }) {
                count += 1;
            }
        });
        count
    }
}
