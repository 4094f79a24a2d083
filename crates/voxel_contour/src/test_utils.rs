//! Test utilities: field fixtures and mesh checks shared by unit tests.

use glam::{IVec3, UVec3, Vec3};

use crate::sdf::{GroundPlane, Sphere};
use crate::types::{Cell, MeshOutput};
use crate::ScalarField;

/// Every sample set to `value`, unit cell size, zero offset.
pub fn constant_field(dims: UVec3, value: f32) -> ScalarField {
  ScalarField::filled(dims, 1.0, Vec3::ZERO, value).expect("valid fixture dims")
}

/// Sphere of `radius` centered in a `dim³` grid with unit cell size.
pub fn sphere_field(dim: u32, radius: f32) -> ScalarField {
  let center = Vec3::splat((dim as f32 - 1.0) * 0.5);
  let sphere = Sphere::new(radius).with_center(center);
  ScalarField::from_sdf(UVec3::splat(dim), 1.0, Vec3::ZERO, &sphere).expect("valid fixture dims")
}

/// Horizontal plane at `height` in a `dim³` grid with unit cell size.
pub fn plane_field(dim: u32, height: f32) -> ScalarField {
  ScalarField::from_sdf(
    UVec3::splat(dim),
    1.0,
    Vec3::ZERO,
    &GroundPlane::new(height),
  )
  .expect("valid fixture dims")
}

/// All samples strongly negative except one strongly positive sample.
pub fn single_positive_field(dims: UVec3, coord: IVec3) -> ScalarField {
  let mut field = constant_field(dims, -1.0);
  assert!(field.set(coord, 10.0), "fixture coord out of range");
  field
}

/// Every index references an existing vertex and the buffer holds whole
/// triangles.
pub fn assert_indices_valid(mesh: &MeshOutput) {
  assert_eq!(mesh.indices.len() % 3, 0, "Index count must be multiple of 3");
  for &idx in &mesh.indices {
    assert!(
      (idx as usize) < mesh.vertices.len(),
      "Invalid index {} with {} vertices",
      idx,
      mesh.vertices.len()
    );
  }
}

/// Cells that produced a vertex.
pub fn vertex_cells(cells: &[Cell]) -> Vec<&Cell> {
  cells.iter().filter(|cell| cell.has_vertex).collect()
}
