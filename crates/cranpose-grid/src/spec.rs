//! Grid configuration

use cranpose_grid_layout::{ColumnCounts, Dp};

pub const DEFAULT_GRID_SPACING: Dp = Dp(16.0);

/// Specification for Grid layout behavior.
///
/// Column counts are range-corrected rather than rejected: anything below
/// one becomes one. Negative spacing becomes zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub columns: i32,
    pub columns_in_landscape: Option<i32>,
    pub vertical_spacing: Dp,
    pub horizontal_spacing: Dp,
    pub scrollable: bool,
    pub show_scroll_indicators: bool,
}

impl GridSpec {
    pub fn new(columns: i32) -> Self {
        Self {
            columns,
            columns_in_landscape: None,
            vertical_spacing: DEFAULT_GRID_SPACING,
            horizontal_spacing: DEFAULT_GRID_SPACING,
            scrollable: true,
            show_scroll_indicators: false,
        }
    }

    pub fn columns_in_landscape(mut self, columns: i32) -> Self {
        self.columns_in_landscape = Some(columns);
        self
    }

    pub fn vertical_spacing(mut self, spacing: impl Into<Dp>) -> Self {
        self.vertical_spacing = spacing.into();
        self
    }

    pub fn horizontal_spacing(mut self, spacing: impl Into<Dp>) -> Self {
        self.horizontal_spacing = spacing.into();
        self
    }

    /// Sets both spacings at once.
    pub fn spacing(self, spacing: impl Into<Dp>) -> Self {
        let spacing = spacing.into();
        self.vertical_spacing(spacing).horizontal_spacing(spacing)
    }

    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    /// Only has an effect on a scrollable grid.
    pub fn show_scroll_indicators(mut self, show: bool) -> Self {
        self.show_scroll_indicators = show;
        self
    }

    pub fn column_counts(&self) -> ColumnCounts {
        ColumnCounts::new(self.columns, self.columns_in_landscape)
    }

    pub(crate) fn resolved_spacing(&self) -> (Dp, Dp) {
        let vertical = self.vertical_spacing.non_negative();
        let horizontal = self.horizontal_spacing.non_negative();
        if vertical != self.vertical_spacing || horizontal != self.horizontal_spacing {
            log::debug!(
                "grid spacing ({:?}, {:?}) clamped to ({:?}, {:?})",
                self.vertical_spacing,
                self.horizontal_spacing,
                vertical,
                horizontal
            );
        }
        (vertical, horizontal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_in_optional_parameters() {
        let spec = GridSpec::new(3);
        assert_eq!(spec.columns, 3);
        assert_eq!(spec.columns_in_landscape, None);
        assert_eq!(spec.vertical_spacing, DEFAULT_GRID_SPACING);
        assert_eq!(spec.horizontal_spacing, DEFAULT_GRID_SPACING);
        assert!(spec.scrollable);
        assert!(!spec.show_scroll_indicators);
    }

    #[test]
    fn column_counts_are_clamped() {
        let counts = GridSpec::new(-1).columns_in_landscape(0).column_counts();
        assert_eq!(counts.portrait(), 1);
        assert_eq!(counts.landscape(), 1);
    }
}
