use glam::{IVec3, UVec3};

use super::*;
use crate::octree::OctreeConfig;
use crate::test_utils::{constant_field, sphere_field};

#[test]
fn test_empty_tree_has_no_leaves() {
  let tree = Octree::empty();
  assert!(tree.leaf_indices().is_empty());
  assert_eq!(tree.leaf_count(), 0);
  assert_eq!(tree.find_leaf(IVec3::ZERO), None);
}

#[test]
fn test_homogeneous_tree_root_is_only_leaf() {
  let tree = Octree::build(&constant_field(UVec3::splat(4), 1.0), &OctreeConfig::default());
  assert_eq!(tree.leaf_indices(), vec![0]);
  assert_eq!(tree.find_leaf(IVec3::new(3, 3, 3)), Some(0));
}

/// Leaves tile the root exactly: their volumes sum to voxel_dim³.
#[test]
fn test_leaves_tile_the_root() {
  let tree = Octree::build(&sphere_field(16, 5.0), &OctreeConfig::default());
  let leaves: Vec<_> = tree.leaves().collect();

  assert_eq!(leaves.len(), tree.leaf_count());
  assert!(leaves.iter().all(|leaf| leaf.is_leaf()));

  let volume: u64 = leaves
    .iter()
    .map(|leaf| (tree.node_size(leaf.depth) as u64).pow(3))
    .sum();
  assert_eq!(volume, 16u64.pow(3));
}

#[test]
fn test_leaf_order_is_depth_first() {
  let tree = Octree::build(&sphere_field(8, 2.5), &OctreeConfig::new().with_max_depth(1));
  // Root subdivided once: leaves are its children in octant order.
  assert_eq!(tree.leaf_indices(), (1..9).collect::<Vec<_>>());
}

#[test]
fn test_find_leaf_contains_coord() {
  let tree = Octree::build(&sphere_field(8, 2.5), &OctreeConfig::default());

  for y in 0..8 {
    for z in 0..8 {
      for x in 0..8 {
        let coord = IVec3::new(x, y, z);
        let idx = tree.find_leaf(coord).expect("every voxel has a leaf");
        let leaf = tree.get(idx).unwrap();
        assert!(leaf.is_leaf());
        assert!(
          leaf.contains(coord, tree.node_size(leaf.depth)),
          "leaf {:?} should contain {}",
          leaf,
          coord
        );
      }
    }
  }

  assert_eq!(tree.find_leaf(IVec3::new(8, 0, 0)), None);
  assert_eq!(tree.find_leaf(IVec3::new(0, -1, 0)), None);
}
