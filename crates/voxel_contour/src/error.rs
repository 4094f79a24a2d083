//! Error types for field construction, octree configuration and config
//! loading.
//!
//! Extraction itself never fails: degenerate cells fall back to safe values.
//! These errors only cover inputs that cannot describe a field or tree at
//! all.

use glam::UVec3;
use thiserror::Error;

/// Invalid scalar field description.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
  #[error("field dimensions must be at least 2 per axis, got {0}")]
  InvalidDimensions(UVec3),

  #[error("cell size must be finite and positive, got {0}")]
  InvalidCellSize(f32),

  #[error("expected {expected} samples for the given dimensions, got {actual}")]
  SampleCountMismatch { expected: usize, actual: usize },

  #[error("field dimensions {0} exceed the maximum sample count")]
  TooManySamples(UVec3),
}

/// Field shape that cannot back an octree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OctreeError {
  #[error("octree requires a cubic grid, got {0}")]
  NotCubic(UVec3),

  #[error("octree grid dimension must be a power of two, got {0}")]
  NotPowerOfTwo(u32),
}

/// Failure loading an [`ExtractionConfig`](crate::ExtractionConfig) from
/// TOML.
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to parse extraction config: {0}")]
  Parse(#[from] toml::de::Error),
}
