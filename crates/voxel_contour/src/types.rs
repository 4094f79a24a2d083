//! Core data types for Dual Contouring extraction.

use glam::{IVec3, Vec3};

use crate::octree::OctreeConfig;

/// Which traversal produces the cells for an extraction pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ExtractionMode {
  /// Sweep every cell of the dense grid (optionally at a coarser stride).
  #[default]
  Uniform,

  /// Build an adaptive octree and process its leaves.
  Octree,
}

/// One processed cell: a uniform grid cell or an octree leaf.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
  /// World-space min corner.
  pub position: Vec3,

  /// World-space edge length.
  pub size: f32,

  /// True iff the corner configuration is neither all inside nor all
  /// outside.
  pub has_vertex: bool,

  /// Dual vertex position (meaningful only when `has_vertex`).
  pub vertex: Vec3,

  /// Vertex normal (meaningful only when `has_vertex`).
  pub normal: Vec3,

  /// Field linear index of the cell's min-corner sample.
  pub grid_index: usize,

  /// Coordinate on the cell's own lattice (`min corner sample / span`).
  /// Adjacent cells of equal span differ by one along an axis.
  pub grid_position: IVec3,

  /// Edge length in field samples: the uniform stride or the octree leaf
  /// size. Only cells of equal span are stitched together.
  pub span: u32,

  /// 8-bit corner configuration (bit set = sample `>= 0`).
  pub corner_mask: u8,
}

impl Cell {
  /// World-space max corner.
  #[inline]
  pub fn max(&self) -> Vec3 {
    self.position + Vec3::splat(self.size)
  }

  /// World-space center.
  #[inline]
  pub fn center(&self) -> Vec3 {
    self.position + Vec3::splat(self.size * 0.5)
  }

  /// True if `p` lies inside the cell's closed bounding box.
  #[inline]
  pub fn contains(&self, p: Vec3) -> bool {
    p.cmpge(self.position).all() && p.cmple(self.max()).all()
  }
}

/// Surface crossing found on a cell edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeIntersection {
  /// World-space crossing point.
  pub position: Vec3,

  /// Field gradient at the crossing.
  pub normal: Vec3,

  /// Index of the owning cell in [`Extraction::cells`](crate::Extraction).
  pub cell_index: usize,
}

/// Output vertex, laid out for direct upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
  /// World-space position.
  pub position: [f32; 3],

  /// Surface normal (unit vector).
  pub normal: [f32; 3],

  /// Lattice coordinate of the originating cell, for debugging.
  pub cell_position: [i32; 3],
}

impl Default for Vertex {
  fn default() -> Self {
    Self {
      position: [0.0; 3],
      normal: [0.0, 1.0, 0.0],
      cell_position: [0; 3],
    }
  }
}

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Create AABB from min/max corners.
  pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
    Self { min, max }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Stitched triangle mesh.
#[derive(Clone, Debug, Default)]
pub struct MeshOutput {
  /// One vertex per cell with a surface crossing.
  pub vertices: Vec<Vertex>,

  /// Triangle indices (3 indices per triangle).
  pub indices: Vec<u32>,

  /// Bounding box encompassing all vertices.
  pub bounds: MinMaxAABB,
}

impl MeshOutput {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.indices.clear();
    self.bounds = MinMaxAABB::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }
}

/// Configuration for one extraction pass.
///
/// Passed explicitly to every call; there is no global configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtractionConfig {
  /// Uniform sweep or octree-driven extraction.
  pub mode: ExtractionMode,

  /// Target cell size for the uniform sweep. `None` uses the field's own
  /// cell size. Larger values sample a fine field with a coarser stride.
  pub cell_size: Option<f32>,

  /// Octree construction parameters (octree mode only).
  pub octree: OctreeConfig,
}

impl ExtractionConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_mode(mut self, mode: ExtractionMode) -> Self {
    self.mode = mode;
    self
  }

  pub fn with_cell_size(mut self, cell_size: f32) -> Self {
    self.cell_size = Some(cell_size);
    self
  }

  pub fn with_octree(mut self, octree: OctreeConfig) -> Self {
    self.octree = octree;
    self
  }

  /// Sample stride for uniform cells over a field with `base_cell_size`.
  ///
  /// `round(cell_size / base_cell_size)`, at least 1. Saturates at
  /// `i32::MAX`; a stride wider than the field yields no cells.
  pub fn stride(&self, base_cell_size: f32) -> i32 {
    match self.cell_size {
      Some(size) if size.is_finite() && base_cell_size > 0.0 => {
        ((size / base_cell_size).round() as i32).max(1)
      }
      _ => 1,
    }
  }

  /// Parse a configuration from TOML. Missing keys take their defaults.
  ///
  /// ```toml
  /// mode = "octree"
  ///
  /// [octree]
  /// max_depth = 4
  /// min_node_size = 1
  /// ```
  #[cfg(feature = "serde")]
  pub fn from_toml_str(source: &str) -> Result<Self, crate::error::ConfigError> {
    Ok(toml::from_str(source)?)
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
