use crate::geometry::Size;

/// Device orientation the grid is laid out for.
///
/// The host passes this into every layout pass; the grid never queries
/// device state on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Classifies a viewport: strictly wider than tall is landscape.
    pub fn from_size(size: Size) -> Self {
        if size.width > size.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    #[inline]
    pub fn is_landscape(self) -> bool {
        matches!(self, Orientation::Landscape)
    }

    #[inline]
    pub fn is_portrait(self) -> bool {
        matches!(self, Orientation::Portrait)
    }
}
