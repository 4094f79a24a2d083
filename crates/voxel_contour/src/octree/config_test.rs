use glam::UVec3;

use super::*;

#[test]
fn test_voxel_dim_accepts_cubic_power_of_two() {
  assert_eq!(OctreeConfig::voxel_dim(UVec3::splat(2)), Ok(2));
  assert_eq!(OctreeConfig::voxel_dim(UVec3::splat(8)), Ok(8));
  assert_eq!(OctreeConfig::voxel_dim(UVec3::splat(64)), Ok(64));
}

#[test]
fn test_voxel_dim_rejects_non_power_of_two() {
  assert_eq!(
    OctreeConfig::voxel_dim(UVec3::splat(6)),
    Err(OctreeError::NotPowerOfTwo(6))
  );
  assert_eq!(
    OctreeConfig::voxel_dim(UVec3::splat(3)),
    Err(OctreeError::NotPowerOfTwo(3))
  );
}

#[test]
fn test_voxel_dim_rejects_non_cubic() {
  let dims = UVec3::new(8, 8, 4);
  assert_eq!(
    OctreeConfig::voxel_dim(dims),
    Err(OctreeError::NotCubic(dims))
  );
}

/// Max depth is log2(voxel_dim) unless capped lower.
#[test]
fn test_effective_max_depth() {
  let config = OctreeConfig::default();
  assert_eq!(config.effective_max_depth(8), 3);
  assert_eq!(config.effective_max_depth(32), 5);

  let capped = OctreeConfig::new().with_max_depth(2);
  assert_eq!(capped.effective_max_depth(32), 2);

  let too_deep = OctreeConfig::new().with_max_depth(10);
  assert_eq!(too_deep.effective_max_depth(8), 3);
}

#[test]
fn test_terminal_conditions() {
  let config = OctreeConfig::default();
  assert!(config.is_terminal(3, 4, 3), "depth limit");
  assert!(config.is_terminal(0, 1, 3), "unit size");
  assert!(!config.is_terminal(1, 4, 3));

  let coarse = OctreeConfig::new().with_min_node_size(4);
  assert!(coarse.is_terminal(1, 4, 3), "min node size");
  assert!(!coarse.is_terminal(0, 8, 3));
}
