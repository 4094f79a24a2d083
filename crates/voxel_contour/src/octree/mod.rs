//! Adaptive octree over a scalar field.
//!
//! The tree is an arena: a flat `Vec<OctreeNode>` where node 0 is the root
//! and a subdivided node points at the first of its 8 contiguous children.
//! Regions without a sign change stay coarse leaves; regions with one are
//! subdivided down to unit cells (or the configured depth limit).
//!
//! # Module Structure
//!
//! - [`node`]: `OctreeNode` - arena entry
//! - [`config`]: `OctreeConfig` - depth and size limits, grid validation
//! - [`builder`]: `Octree` - construction
//! - [`leaves`]: leaf traversal and point lookup

pub mod builder;
pub mod config;
pub mod leaves;
pub mod node;

// Re-exports
pub use builder::Octree;
pub use config::OctreeConfig;
pub use node::OctreeNode;
