//! Layout math for the Cranpose grid
//!
//! Pure data and arithmetic: units, geometry, orientation, constraints,
//! arrangement and the mapping between flat item indices and grid slots.

mod arrangement;
mod constraints;
mod geometry;
mod metrics;
mod orientation;
mod unit;

pub use arrangement::*;
pub use constraints::*;
pub use geometry::*;
pub use metrics::*;
pub use orientation::*;
pub use unit::*;

pub mod prelude {
    pub use crate::arrangement::{Arrangement, SpacedBy};
    pub use crate::constraints::Constraints;
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::metrics::{CellSlot, ColumnCounts, GridMetrics};
    pub use crate::orientation::Orientation;
    pub use crate::unit::Dp;
}
