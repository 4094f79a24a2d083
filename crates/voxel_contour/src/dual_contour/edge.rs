//! Surface crossing on a single cell edge.

use glam::{IVec3, Vec3};

use crate::ScalarField;

/// Crossing point and field gradient at that point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeHit {
  pub position: Vec3,
  pub normal: Vec3,
}

/// Find where the surface crosses the edge between grid samples `a` and `b`.
///
/// Returns `None` when either endpoint lies outside the field or both
/// endpoints are on the same side (negative vs. not negative). The crossing
/// is linearly interpolated at `t = |va| / (|va| + |vb|)` between the world
/// positions of the endpoints; its normal is the normalized field gradient.
pub fn try_intersect(field: &ScalarField, a: IVec3, b: IVec3) -> Option<EdgeHit> {
  let va = field.value_at(a)?;
  let vb = field.value_at(b)?;

  if (va < 0.0) == (vb < 0.0) {
    return None;
  }

  let t = va.abs() / (va.abs() + vb.abs());
  if !t.is_finite() {
    return None;
  }

  let position = field.grid_to_world(a).lerp(field.grid_to_world(b), t);
  Some(EdgeHit {
    position,
    normal: field.gradient(position),
  })
}

#[cfg(test)]
#[path = "edge_test.rs"]
mod edge_test;
