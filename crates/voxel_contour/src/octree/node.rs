//! OctreeNode - one entry of the flat node arena.
//!
//! Children are never stored by pointer: a subdivided node records the arena
//! index of its first child, and its 8 children occupy that slot and the 7
//! following ones.

use glam::IVec3;

use crate::constants::octree_child_offset;

/// Octree node stored in [`Octree`](super::Octree)'s arena.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct OctreeNode {
  /// Mean of the node's 8 corner samples (clipped to the grid).
  pub value: f32,

  /// Arena index of the first of 8 contiguous children, `None` for leaves.
  pub first_child: Option<u32>,

  /// Min-corner voxel coordinate.
  pub position: IVec3,

  /// Depth below the root (root = 0).
  pub depth: u32,
}

impl OctreeNode {
  /// Create a leaf node.
  pub fn leaf(position: IVec3, depth: u32, value: f32) -> Self {
    Self {
      value,
      first_child: None,
      position,
      depth,
    }
  }

  /// True if the node has no children.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.first_child.is_none()
  }

  /// Arena index of child `octant` (0-7), `None` for leaves.
  #[inline]
  pub fn child_index(&self, octant: u32) -> Option<usize> {
    debug_assert!(octant < 8);
    self.first_child.map(|first| (first + octant) as usize)
  }

  /// Min-corner voxel coordinate of child `octant` for a node of `size`
  /// voxels.
  ///
  /// Octant bits: X (bit 0), Z (bit 1), Y (bit 2).
  #[inline]
  pub fn child_position(&self, octant: u32, size: u32) -> IVec3 {
    self.position + octree_child_offset(octant) * (size / 2) as i32
  }

  /// True if voxel `coord` lies in `[position, position + size)`.
  #[inline]
  pub fn contains(&self, coord: IVec3, size: u32) -> bool {
    let max = self.position + IVec3::splat(size as i32);
    coord.cmpge(self.position).all() && coord.cmplt(max).all()
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
