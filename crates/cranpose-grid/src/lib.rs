//! Fixed-column grid component for Cranpose
//!
//! [`GridLayout`] maps a flat collection of items into rows of a fixed
//! column count, rendering each item through a caller-supplied function and
//! padding the trailing row with placeholders. Orientation is passed into
//! every pass so the same grid can show a different column count in
//! landscape.
//!
//! ```
//! use cranpose_grid::prelude::*;
//!
//! let grid = GridLayout::new(1..=10, GridSpec::new(3), |n: &i32| n.to_string());
//! let root = grid.render(Orientation::Portrait);
//! assert_eq!(grid.metrics(Orientation::Portrait).row_count(), 4);
//! assert_eq!(root.item_count(), 10);
//! ```

mod grid;
mod measure;
mod node;
mod renderer;
mod scroll;
mod spec;

pub use cranpose_grid_layout::{
    CellSlot, ColumnCounts, Constraints, Dp, GridMetrics, Orientation, Point, Rect, Size,
};
pub use grid::*;
pub use measure::*;
pub use node::*;
pub use renderer::*;
pub use scroll::*;
pub use spec::*;

pub mod prelude {
    pub use crate::grid::GridLayout;
    pub use crate::measure::{measure, GridLayoutResult, MeasureItem, PlacedCell};
    pub use crate::node::GridNode;
    pub use crate::renderer::{HeadlessRenderer, RenderOp, Scene};
    pub use crate::scroll::ScrollViewport;
    pub use crate::spec::GridSpec;
    pub use cranpose_grid_layout::prelude::*;
}
