//! Top-level extraction: mode selection, cell processing and stitching.

use glam::IVec3;

use crate::dual_contour::{process_octree, process_uniform, CellPass};
use crate::octree::Octree;
use crate::stitch::stitch;
use crate::types::{Cell, EdgeIntersection, ExtractionConfig, ExtractionMode, MeshOutput};
use crate::ScalarField;

/// Everything one extraction pass produced.
///
/// Rebuilt from scratch on every call; nothing carries over between passes.
#[derive(Clone, Debug, Default)]
pub struct Extraction {
  /// Mode the pass ran in.
  pub mode: ExtractionMode,

  /// Every processed cell, active or not, in traversal order.
  pub cells: Vec<Cell>,

  /// Edge crossings, grouped by ascending `cell_index`.
  pub intersections: Vec<EdgeIntersection>,

  /// Stitched triangle mesh.
  pub mesh: MeshOutput,

  /// The tree the cells came from (octree mode only). Empty when the field
  /// dimensions could not be subdivided.
  pub octree: Option<Octree>,
}

/// A single cell together with the crossings found on its edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellView<'a> {
  pub index: usize,
  pub cell: &'a Cell,
  pub intersections: &'a [EdgeIntersection],
}

/// Summary counts for one pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractionStats {
  pub cells: usize,
  pub vertex_cells: usize,
  pub intersections: usize,
  pub vertices: usize,
  pub triangles: usize,
  pub octree_nodes: usize,
}

/// Extract the isosurface of `field`.
///
/// Uniform mode sweeps the grid at the stride implied by
/// [`ExtractionConfig::cell_size`]. Octree mode builds an adaptive tree and
/// processes its leaves; a field whose dimensions are not a cubic power of
/// two yields an empty result. Never fails: degenerate cells fall back to
/// safe vertex placements.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "extract"))]
pub fn extract(field: &ScalarField, config: &ExtractionConfig) -> Extraction {
  let (pass, octree) = match config.mode {
    ExtractionMode::Uniform => {
      let stride = config.stride(field.cell_size());
      (process_uniform(field, stride), None)
    }
    ExtractionMode::Octree => {
      let tree = Octree::build(field, &config.octree);
      (process_octree(field, &tree), Some(tree))
    }
  };

  let CellPass {
    cells,
    intersections,
  } = pass;
  let mesh = stitch(&cells);

  let extraction = Extraction {
    mode: config.mode,
    cells,
    intersections,
    mesh,
    octree,
  };

  let stats = extraction.stats();
  log::debug!(
    "{:?} extraction: {} cells ({} active), {} intersections, {} triangles",
    extraction.mode,
    stats.cells,
    stats.vertex_cells,
    stats.intersections,
    stats.triangles
  );

  extraction
}

impl Extraction {
  /// Cells that carry a dual vertex.
  pub fn vertex_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
    self.cells.iter().filter(|cell| cell.has_vertex)
  }

  /// First cell at `grid_position` on its own lattice.
  pub fn cell_at(&self, grid_position: IVec3) -> Option<&Cell> {
    self.cells.iter().find(|cell| cell.grid_position == grid_position)
  }

  /// The cell at `index` with its edge crossings.
  pub fn cell_view(&self, index: usize) -> Option<CellView<'_>> {
    let cell = self.cells.get(index)?;
    let start = self.intersections.partition_point(|hit| hit.cell_index < index);
    let end = self.intersections.partition_point(|hit| hit.cell_index <= index);
    Some(CellView {
      index,
      cell,
      intersections: &self.intersections[start..end],
    })
  }

  pub fn stats(&self) -> ExtractionStats {
    ExtractionStats {
      cells: self.cells.len(),
      vertex_cells: self.vertex_cells().count(),
      intersections: self.intersections.len(),
      vertices: self.mesh.vertices.len(),
      triangles: self.mesh.triangle_count(),
      octree_nodes: self.octree.as_ref().map_or(0, Octree::len),
    }
  }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;
