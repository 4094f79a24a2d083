//! Analytic SDF shapes for authoring scalar fields.
//!
//! These are deterministic mathematical SDFs that are easy to verify
//! visually. Hosts use them to seed fields; tests and benches use them as
//! fixtures. Fill a field with [`ScalarField::from_sdf`].
//!
//! [`ScalarField::from_sdf`]: crate::ScalarField::from_sdf

use glam::Vec3;

/// A signed distance function: negative inside, positive outside.
pub trait Sdf: Sync {
  /// Signed distance from `p` to the surface.
  fn distance(&self, p: Vec3) -> f32;
}

impl<F> Sdf for F
where
  F: Fn(Vec3) -> f32 + Sync,
{
  #[inline]
  fn distance(&self, p: Vec3) -> f32 {
    self(p)
  }
}

/// Sphere SDF: `|p - center| - radius`.
#[derive(Clone, Debug)]
pub struct Sphere {
  pub center: Vec3,
  pub radius: f32,
}

impl Default for Sphere {
  fn default() -> Self {
    Self {
      center: Vec3::ZERO,
      radius: 1.0,
    }
  }
}

impl Sphere {
  pub fn new(radius: f32) -> Self {
    Self {
      center: Vec3::ZERO,
      radius,
    }
  }

  pub fn with_center(mut self, center: Vec3) -> Self {
    self.center = center;
    self
  }
}

impl Sdf for Sphere {
  #[inline]
  fn distance(&self, p: Vec3) -> f32 {
    (p - self.center).length() - self.radius
  }
}

/// Axis-aligned box SDF.
#[derive(Clone, Debug)]
pub struct Cuboid {
  pub center: Vec3,
  pub half_extents: Vec3,
}

impl Cuboid {
  pub fn new(half_extents: Vec3) -> Self {
    Self {
      center: Vec3::ZERO,
      half_extents,
    }
  }

  pub fn with_center(mut self, center: Vec3) -> Self {
    self.center = center;
    self
  }
}

impl Sdf for Cuboid {
  fn distance(&self, p: Vec3) -> f32 {
    let d = (p - self.center).abs() - self.half_extents;
    let outside = d.max(Vec3::ZERO).length();
    let inside = d.max_element().min(0.0);
    outside + inside
  }
}

/// Horizontal plane: positive above `height`, negative below.
#[derive(Clone, Debug, Default)]
pub struct GroundPlane {
  pub height: f32,
}

impl GroundPlane {
  pub fn new(height: f32) -> Self {
    Self { height }
  }
}

impl Sdf for GroundPlane {
  #[inline]
  fn distance(&self, p: Vec3) -> f32 {
    p.y - self.height
  }
}

/// Plane tilted around the Z axis.
///
/// SDF: `(y - height) * cos(angle) - x * sin(angle)`. Useful for checking
/// vertex placement against a surface that crosses cells at a known slope.
#[derive(Clone, Debug)]
pub struct TiltedPlane {
  pub height: f32,
  /// Tilt angle in radians.
  pub angle: f32,
}

impl Default for TiltedPlane {
  fn default() -> Self {
    Self {
      height: 0.0,
      angle: std::f32::consts::FRAC_PI_4,
    }
  }
}

impl TiltedPlane {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_height(mut self, height: f32) -> Self {
    self.height = height;
    self
  }

  pub fn with_angle_degrees(mut self, degrees: f32) -> Self {
    self.angle = degrees.to_radians();
    self
  }
}

impl Sdf for TiltedPlane {
  #[inline]
  fn distance(&self, p: Vec3) -> f32 {
    (p.y - self.height) * self.angle.cos() - p.x * self.angle.sin()
  }
}

/// Metaball (blobby) field.
///
/// Each ball contributes `strength * r² / d²`; the surface sits where the
/// sum equals `threshold`. Not a true distance, but sign-correct.
#[derive(Clone, Debug)]
pub struct Metaballs {
  pub balls: Vec<Metaball>,
  pub threshold: f32,
}

/// A single metaball influence.
#[derive(Clone, Copy, Debug)]
pub struct Metaball {
  pub center: Vec3,
  pub radius: f32,
  pub strength: f32,
}

impl Metaballs {
  pub fn new(balls: Vec<Metaball>, threshold: f32) -> Self {
    Self { balls, threshold }
  }

  /// Scatter `count` balls within `[center - extent, center + extent]`.
  /// The same seed always yields the same arrangement.
  pub fn random(seed: u32, count: usize, center: Vec3, extent: f32) -> Self {
    let mut rng = XorShift32::new(seed);
    let balls = (0..count)
      .map(|_| {
        let offset = Vec3::new(
          rng.next_f32() * 2.0 - 1.0,
          rng.next_f32() * 2.0 - 1.0,
          rng.next_f32() * 2.0 - 1.0,
        ) * extent;
        Metaball {
          center: center + offset,
          radius: extent * (0.1 + rng.next_f32() * 0.3),
          strength: 1.0,
        }
      })
      .collect();

    Self {
      balls,
      threshold: 1.0,
    }
  }
}

impl Sdf for Metaballs {
  fn distance(&self, p: Vec3) -> f32 {
    let mut field = 0.0;
    for ball in &self.balls {
      let dist_sq = p.distance_squared(ball.center);
      let r_sq = ball.radius * ball.radius;
      if dist_sq < r_sq * 0.01 {
        field += ball.strength * 100.0;
      } else {
        field += ball.strength * r_sq / dist_sq;
      }
    }
    self.threshold - field
  }
}

/// Simple xorshift32 PRNG for deterministic scattering.
struct XorShift32 {
  state: u32,
}

impl XorShift32 {
  fn new(seed: u32) -> Self {
    Self {
      state: if seed == 0 { 1 } else { seed },
    }
  }

  fn next(&mut self) -> u32 {
    let mut x = self.state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    self.state = x;
    x
  }

  fn next_f32(&mut self) -> f32 {
    (self.next() as f64 / u32::MAX as f64) as f32
  }
}

#[cfg(test)]
#[path = "sdf_test.rs"]
mod sdf_test;
