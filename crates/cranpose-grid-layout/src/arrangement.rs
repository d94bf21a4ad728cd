//! Distributing rows and cells along an axis

use smallvec::SmallVec;

/// Trait implemented by arrangement strategies that distribute children on an axis.
pub trait Arrangement {
    /// Computes the position for each child given the available space and their sizes.
    fn arrange(&self, total_size: f32, sizes: &[f32], out_positions: &mut [f32]);
}

/// Places children consecutively from the leading edge with a fixed gap between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacedBy(pub f32);

impl SpacedBy {
    /// Total extent of `sizes` laid out with this gap.
    pub fn total_extent(&self, sizes: &[f32]) -> f32 {
        let gaps = sizes.len().saturating_sub(1) as f32;
        sizes.iter().copied().sum::<f32>() + gaps * self.0
    }
}

impl Arrangement for SpacedBy {
    fn arrange(&self, _total_size: f32, sizes: &[f32], out_positions: &mut [f32]) {
        debug_assert_eq!(sizes.len(), out_positions.len());
        let mut cursor = 0.0;
        for (size, position) in sizes.iter().zip(out_positions.iter_mut()) {
            *position = cursor;
            cursor += size + self.0;
        }
    }
}

/// Gap between `count` slots, shrunk so the gaps alone never overrun `total`.
///
/// When the gaps do not fit, every slot collapses to zero width and the gaps
/// share the whole extent.
pub fn fitted_gap(total: f32, count: usize, gap: f32) -> f32 {
    if count < 2 || !total.is_finite() {
        return gap;
    }
    let gaps = (count - 1) as f32;
    if gap * gaps <= total {
        return gap;
    }
    let fitted = (total / gaps).max(0.0);
    log::debug!("grid spacing {gap} over {count} slots exceeds {total}, shrunk to {fitted}");
    fitted
}

/// Splits `total` into `count` equal extents separated by `gap`.
///
/// Every slot of a grid row gets one of these, whether it holds an item or
/// a placeholder, so columns line up across rows. Never negative.
pub fn equal_extents(total: f32, count: usize, gap: f32) -> SmallVec<[f32; 8]> {
    if count == 0 {
        return SmallVec::new();
    }
    let gaps = (count - 1) as f32 * gap;
    let extent = ((total - gaps) / count as f32).max(0.0);
    smallvec::smallvec![extent; count]
}

#[cfg(test)]
#[path = "tests/arrangement_tests.rs"]
mod tests;
