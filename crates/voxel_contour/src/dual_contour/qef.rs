//! Quadratic error function minimization for dual vertex placement.
//!
//! Each hit contributes a plane `n · x = n · p`. The vertex minimizes the sum
//! of squared plane distances, solved relative to the mass point (mean of the
//! hit positions) so the regularization pulls toward it:
//!
//! ```text
//! (AᵀA + λI) x = Aᵀb,   b_i = n_i · (p_i - mass_point)
//! vertex = mass_point + x
//! ```

use glam::Vec3;

use crate::constants::{QEF_PIVOT_EPSILON, QEF_REGULARIZATION, VERTEX_DRIFT_LIMIT};

/// Minimize the QEF for paired `positions` and `normals`.
///
/// Returns `mass_point` unchanged when there are no pairs or the solution is
/// not finite. Extra entries in the longer slice are ignored.
pub fn solve(positions: &[Vec3], normals: &[Vec3], mass_point: Vec3) -> Vec3 {
  let mut ata = [[0.0f32; 3]; 3];
  let mut atb = [0.0f32; 3];
  let mut count = 0usize;

  for (&p, &n) in positions.iter().zip(normals) {
    let d = n.dot(p - mass_point);
    let n = n.to_array();
    for row in 0..3 {
      for col in 0..3 {
        ata[row][col] += n[row] * n[col];
      }
      atb[row] += n[row] * d;
    }
    count += 1;
  }

  if count == 0 {
    return mass_point;
  }

  for (i, row) in ata.iter_mut().enumerate() {
    row[i] += QEF_REGULARIZATION;
  }

  let offset = Vec3::from_array(gaussian_elimination(ata, atb));
  if offset.is_finite() {
    mass_point + offset
  } else {
    mass_point
  }
}

/// Solve the QEF and keep the result inside the cell.
///
/// Falls back to `mass_point` when the solution is not finite or drifts more
/// than `2 × cell_size` from it, then clamps to `[cell_min, cell_max]`.
pub fn place_vertex(
  positions: &[Vec3],
  normals: &[Vec3],
  mass_point: Vec3,
  cell_min: Vec3,
  cell_max: Vec3,
) -> Vec3 {
  let cell_size = (cell_max - cell_min).max_element();
  let solved = solve(positions, normals, mass_point);

  let vertex = if !solved.is_finite() || solved.distance(mass_point) > VERTEX_DRIFT_LIMIT * cell_size {
    log::trace!("QEF solution {} drifted from mass point {}", solved, mass_point);
    mass_point
  } else {
    solved
  };

  vertex.clamp(cell_min, cell_max)
}

/// Solve `a x = b` for a 3×3 system by Gaussian elimination with partial
/// pivoting. Columns whose pivot falls below the epsilon are skipped and the
/// matching unknown is left at zero.
fn gaussian_elimination(mut a: [[f32; 3]; 3], mut b: [f32; 3]) -> [f32; 3] {
  for col in 0..3 {
    let pivot = (col..3)
      .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
      .unwrap_or(col);

    if a[pivot][col].abs() < QEF_PIVOT_EPSILON {
      continue;
    }

    a.swap(col, pivot);
    b.swap(col, pivot);

    for row in (col + 1)..3 {
      let factor = a[row][col] / a[col][col];
      for k in col..3 {
        a[row][k] -= factor * a[col][k];
      }
      b[row] -= factor * b[col];
    }
  }

  let mut x = [0.0f32; 3];
  for row in (0..3).rev() {
    let diag = a[row][row];
    if diag.abs() < QEF_PIVOT_EPSILON {
      continue;
    }
    let tail: f32 = ((row + 1)..3).map(|k| a[row][k] * x[k]).sum();
    x[row] = (b[row] - tail) / diag;
  }
  x
}

#[cfg(test)]
#[path = "qef_test.rs"]
mod qef_test;
