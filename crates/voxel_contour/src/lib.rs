//! voxel_contour - Dual Contouring isosurface extraction
//!
//! This crate turns a dense signed scalar field into a triangle mesh. Each
//! cell whose corners straddle the surface gets one dual vertex, placed by a
//! least-squares (QEF) fit to the surface planes crossing its edges, so sharp
//! edges and corners are preserved. Neighbouring cells are then stitched into
//! quads.
//!
//! # Features
//!
//! - **Uniform sweep**: every cell of the grid, optionally at a coarser
//!   stride
//! - **Adaptive octree**: skips regions without a sign change and processes
//!   only the leaves
//! - **Diagnostics**: per-cell vertices, normals and edge crossings are kept
//!   alongside the mesh
//! - **Batching**: independent fields extract in parallel on rayon
//!
//! Sign convention: samples `< 0` are inside, samples `>= 0` are outside.
//!
//! # Example
//!
//! ```ignore
//! use glam::{UVec3, Vec3};
//! use voxel_contour::{extract, sdf::Sphere, ExtractionConfig, ScalarField};
//!
//! let sphere = Sphere::new(5.0).with_center(Vec3::splat(8.0));
//! let field = ScalarField::from_sdf(UVec3::splat(17), 1.0, Vec3::ZERO, &sphere)?;
//!
//! let result = extract(&field, &ExtractionConfig::default());
//! println!("Generated {} vertices, {} triangles",
//!     result.mesh.vertices.len(), result.mesh.triangle_count());
//! ```

pub mod constants;
pub mod error;
pub mod field;
pub mod sdf;
pub mod types;

// Re-export commonly used items
pub use error::{FieldError, OctreeError};
#[cfg(feature = "serde")]
pub use error::ConfigError;
pub use field::ScalarField;
pub use types::{
  Cell, EdgeIntersection, ExtractionConfig, ExtractionMode, MeshOutput, MinMaxAABB, Vertex,
};

// Adaptive octree over the field
pub mod octree;
pub use octree::{Octree, OctreeConfig, OctreeNode};

// Cell processing: corner masks, edge crossings, QEF vertex placement
pub mod dual_contour;

// Mesh stitching
pub mod stitch;

// Top-level extraction pass
pub mod extract;
pub use extract::{extract, CellView, Extraction, ExtractionStats};

// Task queue for parallel extraction of independent fields
pub mod task_queue;
pub use task_queue::{
  extract_batch, BackgroundExtraction, ExtractionCompletion, ExtractionRequest, ExtractionStage,
};

// Engine-agnostic metrics
pub mod metrics;

#[cfg(test)]
mod test_utils;
