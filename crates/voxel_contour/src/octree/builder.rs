//! Adaptive octree construction over a [`ScalarField`].
//!
//! # Algorithm
//!
//! ```text
//! root = whole grid (voxel_dim³), depth 0
//! stack = [root]
//! while let Some(node) = stack.pop():
//!   terminal (depth == max_depth, size == 1, size <= min_node_size) → leaf
//!   no sign change among ALL samples in the node's range       → leaf
//!   otherwise:
//!     append 8 children (contiguous), value = mean of 8 corners
//!     push children
//! ```
//!
//! Scanning every contained sample rather than the 8 corners lets surfaces
//! smaller than a child still trigger subdivision.
//!
//! The tree is rebuilt from scratch whenever the field changes.

use glam::IVec3;

use super::{OctreeConfig, OctreeNode};
use crate::constants::octree_child_offset;
use crate::error::OctreeError;
use crate::field::ScalarField;

/// Flat octree: node 0 is the root, children are stored as 8 contiguous
/// slots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Octree {
  nodes: Vec<OctreeNode>,
  voxel_dim: u32,
  max_depth: u32,
}

impl Octree {
  /// Tree with no nodes.
  pub fn empty() -> Self {
    Self::default()
  }

  /// Build the tree, logging and returning an empty tree if the field shape
  /// cannot back an octree.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::build"))]
  pub fn build(field: &ScalarField, config: &OctreeConfig) -> Self {
    match Self::try_build(field, config) {
      Ok(tree) => tree,
      Err(err) => {
        log::warn!("octree construction skipped: {}", err);
        Self::empty()
      }
    }
  }

  /// Build the tree, reporting why the field shape was rejected.
  pub fn try_build(field: &ScalarField, config: &OctreeConfig) -> Result<Self, OctreeError> {
    let voxel_dim = OctreeConfig::voxel_dim(field.dims())?;
    let max_depth = config.effective_max_depth(voxel_dim);

    let root_value = corner_mean(field, IVec3::ZERO, voxel_dim);
    let mut nodes = vec![OctreeNode::leaf(IVec3::ZERO, 0, root_value)];
    let mut stack = vec![0usize];

    while let Some(idx) = stack.pop() {
      let node = nodes[idx];
      let size = voxel_dim >> node.depth;

      if config.is_terminal(node.depth, size, max_depth) {
        continue;
      }
      if !region_has_sign_change(field, node.position, size) {
        continue;
      }

      let first = nodes.len();
      let child_size = size / 2;
      for octant in 0..8 {
        let position = node.child_position(octant, size);
        let value = corner_mean(field, position, child_size);
        nodes.push(OctreeNode::leaf(position, node.depth + 1, value));
      }
      nodes[idx].first_child = Some(first as u32);

      // Reverse so octant 0 is visited first.
      stack.extend((first..first + 8).rev());
    }

    log::debug!(
      "octree built: {} nodes, voxel_dim {}, max_depth {}",
      nodes.len(),
      voxel_dim,
      max_depth
    );

    Ok(Self {
      nodes,
      voxel_dim,
      max_depth,
    })
  }

  /// All nodes; index 0 is the root.
  #[inline]
  pub fn nodes(&self) -> &[OctreeNode] {
    &self.nodes
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// The root node, `None` for an empty tree.
  #[inline]
  pub fn root(&self) -> Option<&OctreeNode> {
    self.nodes.first()
  }

  /// Node at an arena index, `None` if out of range.
  #[inline]
  pub fn get(&self, idx: usize) -> Option<&OctreeNode> {
    self.nodes.get(idx)
  }

  /// Root edge length in voxels.
  #[inline]
  pub fn voxel_dim(&self) -> u32 {
    self.voxel_dim
  }

  /// Deepest level subdivision was allowed to reach.
  #[inline]
  pub fn max_depth(&self) -> u32 {
    self.max_depth
  }

  /// Edge length in voxels of a node at `depth`.
  #[inline]
  pub fn node_size(&self, depth: u32) -> u32 {
    self.voxel_dim >> depth
  }

  /// The 8 children of `node`, `None` for leaves.
  pub fn children(&self, node: &OctreeNode) -> Option<&[OctreeNode]> {
    let first = node.first_child? as usize;
    self.nodes.get(first..first + 8)
  }
}

/// Mean of the 8 corner samples of a `size`-voxel cube, clipped to the grid.
fn corner_mean(field: &ScalarField, position: IVec3, size: u32) -> f32 {
  let span = size as i32;
  let sum: f32 = (0..8)
    .map(|octant| field.value_clamped(position + octree_child_offset(octant) * span))
    .sum();
  sum / 8.0
}

/// True if the samples in `[position, position + size]` (clipped to the
/// grid) include both a negative and a non-negative value.
fn region_has_sign_change(field: &ScalarField, position: IVec3, size: u32) -> bool {
  let max_coord = field.dims().as_ivec3() - IVec3::ONE;
  let lo = position.clamp(IVec3::ZERO, max_coord);
  let hi = (position + IVec3::splat(size as i32)).clamp(IVec3::ZERO, max_coord);

  let mut has_inside = false;
  let mut has_outside = false;

  for y in lo.y..=hi.y {
    for z in lo.z..=hi.z {
      for x in lo.x..=hi.x {
        let Some(v) = field.value_at(IVec3::new(x, y, z)) else {
          continue;
        };
        if v < 0.0 {
          has_inside = true;
        } else {
          has_outside = true;
        }
        if has_inside && has_outside {
          return true;
        }
      }
    }
  }

  false
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
