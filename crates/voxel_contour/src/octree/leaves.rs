//! Leaf traversal over a built [`Octree`].
//!
//! Leaves are what the cell processor consumes in octree mode. Traversal is
//! depth-first from the root, children in octant order, so the output order
//! is deterministic for a given field.

use glam::IVec3;

use super::{Octree, OctreeNode};

impl Octree {
  /// Arena indices of all leaves, in depth-first octant order.
  pub fn leaf_indices(&self) -> Vec<usize> {
    let mut leaves = Vec::new();
    if self.is_empty() {
      return leaves;
    }

    let mut stack = vec![0usize];
    while let Some(idx) = stack.pop() {
      let Some(node) = self.get(idx) else {
        continue;
      };
      match node.first_child {
        None => leaves.push(idx),
        Some(first) => {
          let first = first as usize;
          stack.extend((first..first + 8).rev().filter(|&child| child < self.len()));
        }
      }
    }

    leaves
  }

  /// All leaf nodes, in depth-first octant order.
  pub fn leaves(&self) -> impl Iterator<Item = &OctreeNode> + '_ {
    self.leaf_indices().into_iter().filter_map(move |idx| self.get(idx))
  }

  /// Number of leaves.
  pub fn leaf_count(&self) -> usize {
    self.nodes().iter().filter(|node| node.is_leaf()).count()
  }

  /// Arena index of the leaf containing voxel `coord`, `None` if the tree is
  /// empty or `coord` lies outside the root.
  pub fn find_leaf(&self, coord: IVec3) -> Option<usize> {
    let root = self.root()?;
    if !root.contains(coord, self.voxel_dim()) {
      return None;
    }

    let mut idx = 0usize;
    loop {
      let node = self.get(idx)?;
      if node.is_leaf() {
        return Some(idx);
      }
      let size = self.node_size(node.depth);
      let octant = (0..8).find(|&octant| {
        let child_pos = node.child_position(octant, size);
        OctreeNode::leaf(child_pos, node.depth + 1, 0.0).contains(coord, size / 2)
      })?;
      idx = node.child_index(octant)?;
    }
  }
}

#[cfg(test)]
#[path = "leaves_test.rs"]
mod leaves_test;
