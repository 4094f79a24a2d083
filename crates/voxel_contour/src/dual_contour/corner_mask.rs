//! 8-bit corner configuration of a cell.

/// Build the corner mask from the 8 corner samples (cell corner order).
///
/// Bit `i` is set when sample `i` is not negative. Zero counts as outside,
/// and so does NaN, which keeps the mask consistent with the edge solver.
#[inline]
pub fn build(samples: &[f32; 8]) -> u8 {
  samples
    .iter()
    .enumerate()
    .fold(0u8, |mask, (i, &value)| if value < 0.0 { mask } else { mask | (1 << i) })
}

/// True when the surface passes through the cell.
#[inline]
pub fn has_vertex(mask: u8) -> bool {
  mask != 0 && mask != 0xFF
}

#[cfg(test)]
#[path = "corner_mask_test.rs"]
mod corner_mask_test;
