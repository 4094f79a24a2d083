use glam::{IVec3, UVec3, Vec3};

use super::*;
use crate::octree::OctreeConfig;
use crate::test_utils::{assert_indices_valid, constant_field, single_positive_field, sphere_field};

fn octree_config() -> ExtractionConfig {
  ExtractionConfig::new().with_mode(ExtractionMode::Octree)
}

#[test]
fn test_homogeneous_field_yields_empty_mesh() {
  for value in [-2.0, 0.0, 2.0] {
    let field = constant_field(UVec3::splat(8), value);
    for config in [ExtractionConfig::default(), octree_config()] {
      let result = extract(&field, &config);
      assert!(result.mesh.is_empty());
      assert_eq!(result.vertex_cells().count(), 0);
      assert!(result.intersections.is_empty());
    }
  }
}

/// One positive sample on the grid corner: a single active cell and nothing
/// to stitch it to.
#[test]
fn test_isolated_cell() {
  let field = single_positive_field(UVec3::splat(3), IVec3::ZERO);
  let result = extract(&field, &ExtractionConfig::default());

  let active: Vec<_> = result.vertex_cells().collect();
  assert_eq!(active.len(), 1);
  assert!(active[0].contains(active[0].vertex));
  assert_eq!(result.mesh.vertices.len(), 1);
  assert_eq!(result.mesh.triangle_count(), 0);
}

#[test]
fn test_interior_sample_shell() {
  let field = single_positive_field(UVec3::splat(3), IVec3::ONE);
  let result = extract(&field, &ExtractionConfig::default());

  assert_eq!(result.vertex_cells().count(), 8);
  assert_eq!(result.mesh.triangle_count(), 12);
  assert_indices_valid(&result.mesh);
}

#[test]
fn test_sphere_mesh() {
  let result = extract(&sphere_field(16, 5.0), &ExtractionConfig::default());
  let stats = result.stats();

  assert!(stats.triangles > 0);
  assert_eq!(stats.vertices, stats.vertex_cells);
  assert_eq!(stats.cells, 15 * 15 * 15);
  assert_eq!(stats.octree_nodes, 0);
  assert!(result.octree.is_none());
  assert_indices_valid(&result.mesh);

  let bounds = result.mesh.bounds;
  assert!(bounds.is_valid());
  for axis in 0..3 {
    assert!(bounds.min[axis] > 1.5 && bounds.max[axis] < 13.5);
  }
}

/// Away from the grid boundary every active uniform cell is also a unit
/// octree leaf, so both modes produce the same surface.
#[test]
fn test_octree_matches_uniform_on_sphere() {
  let field = sphere_field(16, 5.0);
  let uniform = extract(&field, &ExtractionConfig::default());
  let octree = extract(&field, &octree_config());

  let tree = octree.octree.as_ref().expect("octree mode keeps its tree");
  assert!(!tree.is_empty());
  assert!(octree.cells.len() < uniform.cells.len());

  assert_eq!(octree.vertex_cells().count(), uniform.vertex_cells().count());
  assert_eq!(octree.mesh.triangle_count(), uniform.mesh.triangle_count());

  for cell in octree.vertex_cells() {
    let twin = uniform.cell_at(cell.grid_position).unwrap();
    assert_eq!(twin.corner_mask, cell.corner_mask);
    assert!((twin.vertex - cell.vertex).length() < 1e-5);
  }
}

#[test]
fn test_octree_mode_rejects_non_power_of_two() {
  let result = extract(&sphere_field(12, 4.0), &octree_config());

  assert!(result.cells.is_empty());
  assert!(result.mesh.is_empty());
  assert!(result.octree.as_ref().is_some_and(Octree::is_empty));
  assert_eq!(result.stats(), ExtractionStats::default());
}

#[test]
fn test_octree_depth_limit_still_meshes() {
  let config = octree_config().with_octree(OctreeConfig::new().with_max_depth(3));
  let result = extract(&sphere_field(16, 5.0), &config);

  // Depth 3 leaves in a 16³ tree are 2 samples wide.
  assert!(result.vertex_cells().all(|cell| cell.span >= 2));
  assert!(result.mesh.triangle_count() > 0);
  assert_indices_valid(&result.mesh);
}

#[test]
fn test_cell_size_sets_stride() {
  let field = sphere_field(17, 5.0);

  let coarse = extract(&field, &ExtractionConfig::new().with_cell_size(2.0));
  assert_eq!(coarse.cells.len(), 8 * 8 * 8);
  assert!(coarse.cells.iter().all(|cell| cell.size == 2.0 && cell.span == 2));
  assert!(coarse.mesh.triangle_count() > 0);

  // Anything finer than the field falls back to the field's own cells.
  let fine = extract(&field, &ExtractionConfig::new().with_cell_size(0.25));
  assert_eq!(fine.cells.len(), 16 * 16 * 16);
}

#[test]
fn test_cell_size_larger_than_field_yields_empty_mesh() {
  let field = sphere_field(8, 2.5);
  for cell_size in [8.0, 1e12, f32::MAX] {
    let result = extract(&field, &ExtractionConfig::new().with_cell_size(cell_size));
    assert!(result.cells.is_empty(), "cell size {cell_size}");
    assert!(result.intersections.is_empty());
    assert!(result.mesh.is_empty());
  }
}

#[test]
fn test_cell_view_groups_intersections() {
  let field = single_positive_field(UVec3::splat(3), IVec3::ZERO);
  let result = extract(&field, &ExtractionConfig::default());

  let view = result.cell_view(0).unwrap();
  assert_eq!(view.index, 0);
  assert!(view.cell.has_vertex);
  assert_eq!(view.intersections.len(), 3);

  let idle = result.cell_view(1).unwrap();
  assert!(!idle.cell.has_vertex);
  assert!(idle.intersections.is_empty());

  assert!(result.cell_view(result.cells.len()).is_none());
}

#[test]
fn test_cell_view_covers_every_intersection() {
  let result = extract(&sphere_field(12, 4.0), &ExtractionConfig::default());
  let total: usize = (0..result.cells.len())
    .filter_map(|idx| result.cell_view(idx))
    .map(|view| view.intersections.len())
    .sum();
  assert_eq!(total, result.intersections.len());
}

#[test]
fn test_cell_at() {
  let result = extract(&sphere_field(8, 2.5), &ExtractionConfig::default());
  let cell = result.cell_at(IVec3::new(2, 3, 4)).unwrap();
  assert_eq!(cell.position, Vec3::new(2.0, 3.0, 4.0));
  assert!(result.cell_at(IVec3::new(7, 0, 0)).is_none());
}

#[test]
fn test_extraction_is_deterministic() {
  let field = sphere_field(12, 4.0);
  let a = extract(&field, &ExtractionConfig::default());
  let b = extract(&field, &ExtractionConfig::default());

  assert_eq!(a.cells, b.cells);
  assert_eq!(a.intersections, b.intersections);
  assert_eq!(a.mesh.vertices, b.mesh.vertices);
  assert_eq!(a.mesh.indices, b.mesh.indices);
}

#[test]
fn test_offset_translates_mesh() {
  let base = sphere_field(12, 4.0);
  let offset = Vec3::new(10.0, -4.0, 2.5);
  let moved = ScalarField::new(base.dims(), base.cell_size(), offset, base.samples().to_vec()).unwrap();

  let a = extract(&base, &ExtractionConfig::default());
  let b = extract(&moved, &ExtractionConfig::default());

  assert_eq!(a.mesh.vertices.len(), b.mesh.vertices.len());
  assert_eq!(a.mesh.triangle_count(), b.mesh.triangle_count());
  for (va, vb) in a.mesh.vertices.iter().zip(&b.mesh.vertices) {
    let shifted = Vec3::from_array(va.position) + offset;
    assert!((shifted - Vec3::from_array(vb.position)).length() < 1e-3);
  }
}
