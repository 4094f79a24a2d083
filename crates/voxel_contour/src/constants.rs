//! Numeric constants and cube topology tables shared by the extraction
//! passes.
//!
//! # Coordinate System
//!
//! ```text
//!         +Y
//!          │
//!          │
//!          │
//!          └───────── +X
//!         /
//!        /
//!       +Z
//! ```
//!
//! # Two Corner Orders
//!
//! The cell processor and the octree builder number the 8 corners of a cube
//! differently. Both orders are consumed downstream and must stay distinct.
//!
//! ```text
//! Cell corners (bit0 = X, bit1 = Y, bit2 = Z):
//!   0 = (0,0,0)    4 = (0,0,1)
//!   1 = (1,0,0)    5 = (1,0,1)
//!   2 = (0,1,0)    6 = (0,1,1)
//!   3 = (1,1,0)    7 = (1,1,1)
//!
//! Octree children (bit0 = X, bit1 = Z, bit2 = Y):
//!   0 = (0,0,0)    4 = (0,1,0)
//!   1 = (1,0,0)    5 = (1,1,0)
//!   2 = (0,0,1)    6 = (0,1,1)
//!   3 = (1,0,1)    7 = (1,1,1)
//! ```

use glam::IVec3;

/// Diagonal regularization added to `AᵀA` so that rank-deficient systems
/// (parallel or coincident normals) stay solvable.
pub const QEF_REGULARIZATION: f32 = 0.001;

/// Pivot and back-substitution guard for the 3×3 elimination.
pub const QEF_PIVOT_EPSILON: f32 = 1e-10;

/// Solved vertices farther than this many cell sizes from the mass point are
/// discarded in favor of the mass point.
pub const VERTEX_DRIFT_LIMIT: f32 = 2.0;

/// Central-difference step as a fraction of the field cell size.
pub const GRADIENT_EPSILON_FACTOR: f32 = 0.1;

/// Gradients with magnitude at or below this are treated as degenerate.
pub const GRADIENT_DEGENERATE_THRESHOLD: f32 = 1e-4;

/// Normal returned when no meaningful direction can be computed.
pub const FALLBACK_NORMAL: [f32; 3] = [0.0, 1.0, 0.0];

/// Corner offsets of a unit cell, indexed by cell corner bit
/// (`bit0 = X, bit1 = Y, bit2 = Z`).
pub const CORNER_OFFSETS: [IVec3; 8] = [
  IVec3::new(0, 0, 0), // 0b000
  IVec3::new(1, 0, 0), // 0b001
  IVec3::new(0, 1, 0), // 0b010
  IVec3::new(1, 1, 0), // 0b011
  IVec3::new(0, 0, 1), // 0b100
  IVec3::new(1, 0, 1), // 0b101
  IVec3::new(0, 1, 1), // 0b110
  IVec3::new(1, 1, 1), // 0b111
];

/// The 12 cube edges as corner pairs, grouped by axis: 4 parallel to X,
/// then 4 parallel to Y, then 4 parallel to Z.
///
/// ```text
/// Edge  Axis  Corners
/// ────  ────  ───────
///  0-3   X    [0,1] [2,3] [4,5] [6,7]
///  4-7   Y    [0,2] [1,3] [4,6] [5,7]
///  8-11  Z    [0,4] [1,5] [2,6] [3,7]
/// ```
pub const CELL_EDGES: [[usize; 2]; 12] = [
  [0, 1],
  [2, 3],
  [4, 5],
  [6, 7],
  [0, 2],
  [1, 3],
  [4, 6],
  [5, 7],
  [0, 4],
  [1, 5],
  [2, 6],
  [3, 7],
];

/// Offset of octree child `octant` in units of the child size.
///
/// Octant bits: X (bit 0), Z (bit 1), Y (bit 2).
#[inline(always)]
pub const fn octree_child_offset(octant: u32) -> IVec3 {
  IVec3::new(
    (octant & 1) as i32,
    ((octant >> 2) & 1) as i32,
    ((octant >> 1) & 1) as i32,
  )
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
