//! Continuous sampling over a [`ScalarField`]: trilinear interpolation and
//! central-difference gradients.

use glam::{IVec3, Vec3};

use super::ScalarField;
use crate::constants::{
  FALLBACK_NORMAL, GRADIENT_DEGENERATE_THRESHOLD, GRADIENT_EPSILON_FACTOR,
};

impl ScalarField {
  /// Trilinear interpolation of the 8 samples around a world position.
  ///
  /// The base cell is clamped to `[0, dim - 2]` per axis and the fractional
  /// part to `[0, 1]`, so positions outside the grid read the nearest
  /// boundary value instead of failing.
  pub fn sample(&self, position: Vec3) -> f32 {
    let grid = self.world_to_grid(position);
    let max_base = (self.dims().as_ivec3() - IVec3::splat(2)).as_vec3();
    let base = grid.floor().clamp(Vec3::ZERO, max_base);
    let t = (grid - base).clamp(Vec3::ZERO, Vec3::ONE);
    let b = base.as_ivec3();

    let v = |dx: i32, dy: i32, dz: i32| self.value_clamped(b + IVec3::new(dx, dy, dz));

    let c00 = lerp(v(0, 0, 0), v(1, 0, 0), t.x);
    let c10 = lerp(v(0, 1, 0), v(1, 1, 0), t.x);
    let c01 = lerp(v(0, 0, 1), v(1, 0, 1), t.x);
    let c11 = lerp(v(0, 1, 1), v(1, 1, 1), t.x);

    let c0 = lerp(c00, c10, t.y);
    let c1 = lerp(c01, c11, t.y);

    lerp(c0, c1, t.z)
  }

  /// Normalized gradient at a world position via central differences of
  /// [`ScalarField::sample`] with a step of `0.1 × cell_size`.
  ///
  /// Returns `(0, 1, 0)` when the gradient magnitude is at or below `1e-4`.
  pub fn gradient(&self, position: Vec3) -> Vec3 {
    let eps = GRADIENT_EPSILON_FACTOR * self.cell_size();
    let dx = Vec3::new(eps, 0.0, 0.0);
    let dy = Vec3::new(0.0, eps, 0.0);
    let dz = Vec3::new(0.0, 0.0, eps);

    let gradient = Vec3::new(
      self.sample(position + dx) - self.sample(position - dx),
      self.sample(position + dy) - self.sample(position - dy),
      self.sample(position + dz) - self.sample(position - dz),
    ) / (2.0 * eps);

    let len = gradient.length();
    if !(len > GRADIENT_DEGENERATE_THRESHOLD) {
      return Vec3::from_array(FALLBACK_NORMAL);
    }

    gradient / len
  }
}

#[inline(always)]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
  a + (b - a) * t
}

#[cfg(test)]
#[path = "sampler_test.rs"]
mod sampler_test;
