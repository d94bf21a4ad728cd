//! Density-independent distances

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Dp(pub f32);

impl Dp {
    pub const ZERO: Dp = Dp(0.0);

    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    /// Clamps negative (and NaN) distances to zero.
    pub fn non_negative(self) -> Self {
        if self.0 > 0.0 {
            self
        } else {
            Self::ZERO
        }
    }
}

impl From<f32> for Dp {
    fn from(value: f32) -> Self {
        Dp(value)
    }
}
