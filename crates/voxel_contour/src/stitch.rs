//! Mesh stitching: connects per-cell dual vertices into triangles.
//!
//! Every active cell contributes one vertex. Four active cells of equal span
//! that share an edge along some axis form a quad, emitted as two triangles.
//!
//! ```text
//! Quad around an edge along `axis` (t1 = axis + 1, t2 = axis + 2, mod 3):
//!
//!   c + t2 ────── c + t1 + t2
//!     │          ╱   │
//!     │       ╱      │
//!     │    ╱         │
//!     c  ──────── c + t1
//!
//!   triangles: (c, c+t1, c+t1+t2) and (c, c+t1+t2, c+t2)
//! ```
//!
//! Each triangle is wound so its geometric normal agrees with the summed
//! vertex normals. Cells of different spans are never connected.

use std::collections::HashMap;

use glam::{IVec3, Vec3};

use crate::types::{Cell, MeshOutput, Vertex};

/// Lattice coordinate plus span; only cells with the same span connect.
type LatticeKey = (IVec3, u32);

const AXES: [IVec3; 3] = [IVec3::X, IVec3::Y, IVec3::Z];

/// Stitch `cells` into a new mesh.
pub fn stitch(cells: &[Cell]) -> MeshOutput {
  let mut output = MeshOutput::new();
  stitch_into(cells, &mut output);
  output
}

/// Stitch `cells` into `output`, replacing its contents but keeping its
/// buffer capacity.
///
/// Vertices follow the order of active cells. If two active cells share a
/// lattice key the first one owns it and the second is skipped. Each quad is
/// anchored at its min-corner cell and each key is walked once, so no quad is
/// emitted twice.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "stitch"))]
pub fn stitch_into(cells: &[Cell], output: &mut MeshOutput) {
  output.clear();

  let mut slots: HashMap<LatticeKey, u32> = HashMap::new();
  let mut active: Vec<LatticeKey> = Vec::new();

  for cell in cells.iter().filter(|cell| cell.has_vertex) {
    let key = (cell.grid_position, cell.span);
    if slots.contains_key(&key) {
      log::debug!("duplicate cell at lattice {} (span {}), skipped", key.0, key.1);
      continue;
    }

    slots.insert(key, output.vertices.len() as u32);
    active.push(key);

    let position = cell.vertex.to_array();
    output.vertices.push(Vertex {
      position,
      normal: cell.normal.to_array(),
      cell_position: cell.grid_position.to_array(),
    });
    output.bounds.encapsulate(position);
  }

  for &(base, span) in &active {
    for axis in 0..3 {
      let t1 = AXES[(axis + 1) % 3];
      let t2 = AXES[(axis + 2) % 3];
      let slot = |offset: IVec3| slots.get(&(base + offset, span)).copied();

      let (Some(v0), Some(v1), Some(v2), Some(v3)) =
        (slot(IVec3::ZERO), slot(t1), slot(t1 + t2), slot(t2))
      else {
        continue;
      };

      emit_triangle(output, [v0, v1, v2]);
      emit_triangle(output, [v0, v2, v3]);
    }
  }

  log::trace!(
    "stitched {} vertices into {} triangles",
    output.vertices.len(),
    output.triangle_count()
  );
}

/// Push one triangle, flipping it when its geometric normal opposes the
/// summed vertex normals.
fn emit_triangle(output: &mut MeshOutput, [i0, i1, i2]: [u32; 3]) {
  let v0 = &output.vertices[i0 as usize];
  let v1 = &output.vertices[i1 as usize];
  let v2 = &output.vertices[i2 as usize];

  let p0 = Vec3::from_array(v0.position);
  let geometric = (Vec3::from_array(v1.position) - p0).cross(Vec3::from_array(v2.position) - p0);
  let shading = Vec3::from_array(v0.normal) + Vec3::from_array(v1.normal) + Vec3::from_array(v2.normal);

  if shading.dot(geometric) > 0.0 {
    output.indices.extend_from_slice(&[i0, i1, i2]);
  } else {
    output.indices.extend_from_slice(&[i0, i2, i1]);
  }
}

#[cfg(test)]
#[path = "stitch_test.rs"]
mod stitch_test;
