//! OctreeConfig - construction parameters for the adaptive octree.

use glam::UVec3;

use crate::error::OctreeError;

/// Octree construction parameters.
///
/// The tree always spans the whole (cubic, power-of-two) field. These
/// settings only limit how far subdivision may go.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OctreeConfig {
  /// Deepest level allowed. `None` subdivides down to unit cells
  /// (`log2(voxel_dim)`); larger values are capped to that.
  pub max_depth: Option<u32>,

  /// Nodes of this size (in voxels) or smaller are never subdivided.
  pub min_node_size: u32,
}

impl Default for OctreeConfig {
  fn default() -> Self {
    Self {
      max_depth: None,
      min_node_size: 1,
    }
  }
}

impl OctreeConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_max_depth(mut self, depth: u32) -> Self {
    self.max_depth = Some(depth);
    self
  }

  pub fn with_min_node_size(mut self, size: u32) -> Self {
    self.min_node_size = size;
    self
  }

  /// Root size in voxels for a field with `dims` samples per axis.
  ///
  /// The grid must be cubic with a power-of-two dimension.
  pub fn voxel_dim(dims: UVec3) -> Result<u32, OctreeError> {
    if dims.x != dims.y || dims.x != dims.z {
      return Err(OctreeError::NotCubic(dims));
    }
    if !dims.x.is_power_of_two() {
      return Err(OctreeError::NotPowerOfTwo(dims.x));
    }
    Ok(dims.x)
  }

  /// Effective maximum depth for a root of `voxel_dim` voxels.
  #[inline]
  pub fn effective_max_depth(&self, voxel_dim: u32) -> u32 {
    let derived = voxel_dim.trailing_zeros();
    self.max_depth.map_or(derived, |depth| depth.min(derived))
  }

  /// True if a node of `size` voxels at `depth` must stay a leaf.
  #[inline]
  pub fn is_terminal(&self, depth: u32, size: u32, max_depth: u32) -> bool {
    depth >= max_depth || size <= 1 || size <= self.min_node_size
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
