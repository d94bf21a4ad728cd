//! Measurement constraints handed from the grid to its cells

use crate::geometry::Size;

/// Bounds a cell must satisfy when it is measured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    /// Loose constraints for a viewport.
    pub fn from_viewport(viewport: Size) -> Self {
        Self::loose(viewport.width, viewport.height)
    }

    /// Clamps a size into these bounds.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }

    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max_height.is_finite()
    }

    /// Pins the width to a single value, keeping the height bounds.
    pub fn tighten_width(self, width: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            ..self
        }
    }

    /// Drops the height bound, as a scroll container does for its content.
    pub fn unbounded_height(self) -> Self {
        Self {
            min_height: 0.0,
            max_height: f32::INFINITY,
            ..self
        }
    }
}
