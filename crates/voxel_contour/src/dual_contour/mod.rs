//! Dual Contouring cell processing.
//!
//! Turns a scalar field into a list of [`Cell`]s, each carrying at most one
//! dual vertex, plus every edge crossing found along the way. Unlike a
//! centroid-only dual method, the vertex is placed by minimizing a quadratic
//! error function over the crossing planes, so sharp edges and corners
//! survive.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  field: ScalarField     - Y-major samples, cell size, offset    │
//! │  cells: uniform sweep (stride) or octree leaves (node size)     │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                PHASE 1: Corner Classification                   │
//! │    Load 8 corner samples spaced `span` apart                    │
//! │    Build 8-bit corner mask (bit set = not negative)             │
//! │    Early-out if homogeneous (mask == 0 or mask == 255)          │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                PHASE 2: Edge Crossings                          │
//! │    For each of the 12 edges with a sign change:                 │
//! │      Interpolate crossing, sample gradient as normal            │
//! │      Record EdgeIntersection tagged with the cell index         │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                PHASE 3: Vertex Placement                        │
//! │    Mass point = mean crossing position                          │
//! │    QEF solve, fall back to mass point on drift                  │
//! │    Clamp to cell bounds; normal = -normalize(Σ gradients)       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Triangulation happens afterwards in [`crate::stitch`].
//!
//! # Module Structure
//!
//! - [`corner_mask`]: 8-bit corner configuration
//! - [`edge`]: crossing on a single edge
//! - [`qef`]: vertex placement

pub mod corner_mask;
pub mod edge;
pub mod qef;

use glam::{IVec3, Vec3};
use smallvec::SmallVec;

use crate::constants::{CELL_EDGES, CORNER_OFFSETS, FALLBACK_NORMAL};
use crate::octree::Octree;
use crate::types::{Cell, EdgeIntersection};
use crate::ScalarField;

use self::edge::EdgeHit;

/// Cells and edge crossings from one processing pass.
///
/// Every `EdgeIntersection::cell_index` points into `cells`.
#[derive(Clone, Debug, Default)]
pub struct CellPass {
  pub cells: Vec<Cell>,
  pub intersections: Vec<EdgeIntersection>,
}

impl CellPass {
  fn with_capacity(cells: usize) -> Self {
    Self {
      cells: Vec::with_capacity(cells),
      intersections: Vec::new(),
    }
  }

  fn push(&mut self, field: &ScalarField, origin: IVec3, span: i32) {
    let cell_index = self.cells.len();
    let cell = process_cell(field, origin, span, cell_index, &mut self.intersections);
    self.cells.push(cell);
  }
}

/// Sweep the dense grid with cells `stride` samples wide.
///
/// Cells start at every multiple of `stride` whose far corner still lies in
/// the field, so a stride larger than the grid yields no cells. Cells are
/// ordered Y, then Z, then X.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "dual_contour::uniform"))]
pub fn process_uniform(field: &ScalarField, stride: i32) -> CellPass {
  let stride = stride.max(1);
  let dims = field.dims().as_ivec3();
  if dims.min_element() <= stride {
    return CellPass::default();
  }
  let last = dims - IVec3::splat(stride + 1);

  let per_axis = (last / stride + IVec3::ONE).as_uvec3();
  let mut pass = CellPass::with_capacity(per_axis.x as usize * per_axis.y as usize * per_axis.z as usize);

  for y in (0..=last.y).step_by(stride as usize) {
    for z in (0..=last.z).step_by(stride as usize) {
      for x in (0..=last.x).step_by(stride as usize) {
        pass.push(field, IVec3::new(x, y, z), stride);
      }
    }
  }

  pass
}

/// Process every leaf of `tree` as one cell spanning the leaf's node size.
///
/// An empty tree yields no cells. Cells follow the tree's depth-first leaf
/// order.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "dual_contour::octree"))]
pub fn process_octree(field: &ScalarField, tree: &Octree) -> CellPass {
  let mut pass = CellPass::with_capacity(tree.leaf_count());

  for leaf in tree.leaves() {
    pass.push(field, leaf.position, tree.node_size(leaf.depth) as i32);
  }

  pass
}

/// Classify one cell and place its vertex.
///
/// `origin` is the min corner sample and `span` the edge length in samples.
/// Corners beyond the grid read the nearest boundary sample for the corner
/// mask; edges touching them yield no crossing. Crossings are appended to
/// `intersections` tagged with `cell_index`.
pub fn process_cell(
  field: &ScalarField,
  origin: IVec3,
  span: i32,
  cell_index: usize,
  intersections: &mut Vec<EdgeIntersection>,
) -> Cell {
  let corner = |i: usize| origin + CORNER_OFFSETS[i] * span;
  let samples: [f32; 8] = std::array::from_fn(|i| field.value_clamped(corner(i)));
  let mask = corner_mask::build(&samples);

  let position = field.grid_to_world(origin);
  let size = span as f32 * field.cell_size();
  let mut cell = Cell {
    position,
    size,
    has_vertex: corner_mask::has_vertex(mask),
    vertex: position + Vec3::splat(size * 0.5),
    normal: Vec3::from_array(FALLBACK_NORMAL),
    grid_index: field.coord_to_index(origin).unwrap_or_default(),
    grid_position: origin / span,
    span: span as u32,
    corner_mask: mask,
  };

  if !cell.has_vertex {
    return cell;
  }

  let mut hits: SmallVec<[EdgeHit; 12]> = SmallVec::new();
  for [a, b] in CELL_EDGES {
    if let Some(hit) = edge::try_intersect(field, corner(a), corner(b)) {
      intersections.push(EdgeIntersection {
        position: hit.position,
        normal: hit.normal,
        cell_index,
      });
      hits.push(hit);
    }
  }

  if hits.is_empty() {
    // Mixed corner mask but every crossing edge leaves the grid.
    log::trace!("cell at {} has no in-range crossings, using center", origin);
    return cell;
  }

  let positions: SmallVec<[Vec3; 12]> = hits.iter().map(|hit| hit.position).collect();
  let normals: SmallVec<[Vec3; 12]> = hits.iter().map(|hit| hit.normal).collect();
  let mass_point = positions.iter().copied().sum::<Vec3>() / positions.len() as f32;

  cell.vertex = qef::place_vertex(&positions, &normals, mass_point, position, cell.max());
  cell.normal = (-normals.iter().copied().sum::<Vec3>())
    .try_normalize()
    .unwrap_or(Vec3::from_array(FALLBACK_NORMAL));

  cell
}
