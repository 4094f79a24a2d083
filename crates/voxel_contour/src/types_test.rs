use glam::{IVec3, Vec3};

use super::*;

#[test]
fn test_aabb_encapsulate() {
  let mut aabb = MinMaxAABB::empty();
  assert!(!aabb.is_valid());

  aabb.encapsulate([1.0, 2.0, 3.0]);
  aabb.encapsulate([-1.0, -2.0, -3.0]);

  assert_eq!(aabb.min, [-1.0, -2.0, -3.0]);
  assert_eq!(aabb.max, [1.0, 2.0, 3.0]);
  assert!(aabb.is_valid());
}

#[test]
fn test_mesh_output_clear() {
  let mut output = MeshOutput::new();
  output.vertices.push(Vertex::default());
  output.indices.extend_from_slice(&[0, 0, 0]);
  assert_eq!(output.triangle_count(), 1);

  output.clear();

  assert!(output.is_empty());
  assert_eq!(output.triangle_count(), 0);
  assert!(!output.bounds.is_valid());
}

#[test]
fn test_cell_bounds() {
  let cell = Cell {
    position: Vec3::new(1.0, 2.0, 3.0),
    size: 2.0,
    has_vertex: false,
    vertex: Vec3::ZERO,
    normal: Vec3::Y,
    grid_index: 0,
    grid_position: IVec3::ZERO,
    span: 2,
    corner_mask: 0,
  };

  assert_eq!(cell.max(), Vec3::new(3.0, 4.0, 5.0));
  assert_eq!(cell.center(), Vec3::new(2.0, 3.0, 4.0));
  assert!(cell.contains(Vec3::new(3.0, 2.0, 4.5)));
  assert!(!cell.contains(Vec3::new(3.01, 2.0, 4.5)));
}

#[test]
fn test_extraction_config_builder() {
  let config = ExtractionConfig::new()
    .with_mode(ExtractionMode::Octree)
    .with_cell_size(2.0);

  assert_eq!(config.mode, ExtractionMode::Octree);
  assert_eq!(config.cell_size, Some(2.0));
}

#[test]
fn test_stride_from_cell_size() {
  assert_eq!(ExtractionConfig::new().stride(0.5), 1);
  assert_eq!(ExtractionConfig::new().with_cell_size(1.0).stride(0.5), 2);
  assert_eq!(ExtractionConfig::new().with_cell_size(1.4).stride(0.5), 3);
  assert_eq!(ExtractionConfig::new().with_cell_size(0.1).stride(0.5), 1);
  assert_eq!(ExtractionConfig::new().with_cell_size(f32::NAN).stride(0.5), 1);
  // The float to int cast saturates.
  assert_eq!(ExtractionConfig::new().with_cell_size(1e12).stride(1.0), i32::MAX);
}

#[cfg(feature = "serde")]
#[test]
fn test_config_from_toml() {
  let config = ExtractionConfig::from_toml_str(
    r#"
mode = "octree"
cell_size = 2.0

[octree]
max_depth = 3
min_node_size = 2
"#,
  )
  .unwrap();

  assert_eq!(config.mode, ExtractionMode::Octree);
  assert_eq!(config.cell_size, Some(2.0));
  assert_eq!(config.octree.max_depth, Some(3));
  assert_eq!(config.octree.min_node_size, 2);
}

#[cfg(feature = "serde")]
#[test]
fn test_config_from_toml_defaults_and_errors() {
  let config = ExtractionConfig::from_toml_str("").unwrap();
  assert_eq!(config, ExtractionConfig::default());

  assert!(ExtractionConfig::from_toml_str("mode = \"sideways\"").is_err());
}
