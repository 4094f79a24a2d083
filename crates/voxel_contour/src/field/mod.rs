//! Dense scalar field - the signed samples every extraction pass reads.
//!
//! # Memory Layout
//!
//! ```text
//! index = x + z * dim_x + y * dim_x * dim_z
//!
//! X is the minor axis (stride 1), Z is the middle axis (stride dim_x),
//! Y is the major axis (stride dim_x * dim_z).
//! ```
//!
//! The Y-major order is part of the data contract with field authors and
//! must not be changed.
//!
//! Sample values follow the SDF convention: negative = inside/solid,
//! zero or positive = outside.

pub mod sampler;

use glam::{IVec3, UVec3, Vec3};

use crate::error::FieldError;
use crate::sdf::Sdf;

/// Largest sample count a field may hold.
pub const MAX_SAMPLES: usize = u32::MAX as usize;

/// Dense 3D grid of signed samples plus its world placement.
///
/// Immutable for the duration of an extraction pass. Authoring systems
/// mutate it between passes through [`ScalarField::set`].
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
  dims: UVec3,
  cell_size: f32,
  offset: Vec3,
  samples: Vec<f32>,
}

impl ScalarField {
  /// Create a field from an existing sample buffer.
  pub fn new(
    dims: UVec3,
    cell_size: f32,
    offset: Vec3,
    samples: Vec<f32>,
  ) -> Result<Self, FieldError> {
    let expected = Self::validate(dims, cell_size)?;
    if samples.len() != expected {
      return Err(FieldError::SampleCountMismatch {
        expected,
        actual: samples.len(),
      });
    }

    Ok(Self {
      dims,
      cell_size,
      offset,
      samples,
    })
  }

  /// Create a field with every sample set to `value`.
  pub fn filled(dims: UVec3, cell_size: f32, offset: Vec3, value: f32) -> Result<Self, FieldError> {
    let count = Self::validate(dims, cell_size)?;
    Ok(Self {
      dims,
      cell_size,
      offset,
      samples: vec![value; count],
    })
  }

  /// Create a field by evaluating `f` at every grid coordinate.
  pub fn from_fn(
    dims: UVec3,
    cell_size: f32,
    offset: Vec3,
    mut f: impl FnMut(IVec3) -> f32,
  ) -> Result<Self, FieldError> {
    let mut field = Self::filled(dims, cell_size, offset, 0.0)?;
    for (idx, sample) in field.samples.iter_mut().enumerate() {
      *sample = f(index_to_coord(dims, idx));
    }
    Ok(field)
  }

  /// Create a field by sampling an analytic SDF at every grid point's world
  /// position.
  pub fn from_sdf<S: Sdf + ?Sized>(
    dims: UVec3,
    cell_size: f32,
    offset: Vec3,
    sdf: &S,
  ) -> Result<Self, FieldError> {
    Self::from_fn(dims, cell_size, offset, |coord| {
      sdf.distance(offset + coord.as_vec3() * cell_size)
    })
  }

  /// Check the field shape and return its sample count.
  fn validate(dims: UVec3, cell_size: f32) -> Result<usize, FieldError> {
    if dims.cmplt(UVec3::splat(2)).any() {
      return Err(FieldError::InvalidDimensions(dims));
    }
    if !cell_size.is_finite() || cell_size <= 0.0 {
      return Err(FieldError::InvalidCellSize(cell_size));
    }
    // Grid indices and mesh indices are u32 downstream.
    (dims.x as usize)
      .checked_mul(dims.y as usize)
      .and_then(|n| n.checked_mul(dims.z as usize))
      .filter(|&n| n <= MAX_SAMPLES)
      .ok_or(FieldError::TooManySamples(dims))
  }

  /// Samples per axis.
  #[inline]
  pub fn dims(&self) -> UVec3 {
    self.dims
  }

  /// World distance between adjacent samples.
  #[inline]
  pub fn cell_size(&self) -> f32 {
    self.cell_size
  }

  /// World position of sample (0, 0, 0).
  #[inline]
  pub fn offset(&self) -> Vec3 {
    self.offset
  }

  /// Raw sample buffer in `x + z*dim_x + y*dim_x*dim_z` order.
  #[inline]
  pub fn samples(&self) -> &[f32] {
    &self.samples
  }

  /// Linear index of a grid coordinate, `None` if any component is negative
  /// or out of range.
  #[inline]
  pub fn coord_to_index(&self, coord: IVec3) -> Option<usize> {
    coord_to_index(self.dims, coord)
  }

  /// Grid coordinate of a linear index.
  #[inline]
  pub fn index_to_coord(&self, idx: usize) -> IVec3 {
    index_to_coord(self.dims, idx)
  }

  /// Sample at a grid coordinate, `None` if out of range.
  #[inline]
  pub fn value_at(&self, coord: IVec3) -> Option<f32> {
    self.coord_to_index(coord).map(|idx| self.samples[idx])
  }

  /// Sample at a grid coordinate clipped to the grid bounds.
  #[inline]
  pub fn value_clamped(&self, coord: IVec3) -> f32 {
    let max = self.dims.as_ivec3() - IVec3::ONE;
    let clamped = coord.clamp(IVec3::ZERO, max);
    let idx = self.coord_to_index(clamped).unwrap_or(0);
    self.samples[idx]
  }

  /// Overwrite one sample. Returns false if `coord` is out of range.
  pub fn set(&mut self, coord: IVec3, value: f32) -> bool {
    match self.coord_to_index(coord) {
      Some(idx) => {
        self.samples[idx] = value;
        true
      }
      None => false,
    }
  }

  /// World position of a grid coordinate.
  #[inline]
  pub fn grid_to_world(&self, coord: IVec3) -> Vec3 {
    self.offset + coord.as_vec3() * self.cell_size
  }

  /// Continuous grid-space position of a world point.
  #[inline]
  pub fn world_to_grid(&self, position: Vec3) -> Vec3 {
    (position - self.offset) / self.cell_size
  }

  /// True if the field holds at least one negative and one non-negative
  /// sample.
  pub fn has_sign_change(&self) -> bool {
    let mut has_inside = false;
    let mut has_outside = false;
    for &v in &self.samples {
      if v < 0.0 {
        has_inside = true;
      } else {
        has_outside = true;
      }
      if has_inside && has_outside {
        return true;
      }
    }
    false
  }
}

/// Convert a grid coordinate to a linear index for the given dimensions.
///
/// Layout: Y is major, then Z, then X.
#[inline(always)]
pub fn coord_to_index(dims: UVec3, coord: IVec3) -> Option<usize> {
  if coord.cmplt(IVec3::ZERO).any() || coord.as_uvec3().cmpge(dims).any() {
    return None;
  }
  let c = coord.as_uvec3();
  let (dim_x, dim_z) = (dims.x as usize, dims.z as usize);
  Some(c.x as usize + c.z as usize * dim_x + c.y as usize * dim_x * dim_z)
}

/// Convert a linear index back to a grid coordinate.
#[inline(always)]
pub fn index_to_coord(dims: UVec3, idx: usize) -> IVec3 {
  let (dim_x, dim_z) = (dims.x as usize, dims.z as usize);
  let x = idx % dim_x;
  let z = (idx / dim_x) % dim_z;
  let y = idx / (dim_x * dim_z);
  IVec3::new(x as i32, y as i32, z as i32)
}
