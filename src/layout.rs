//! Grid layout: how many instances cover the view volume, and where.
//!
//! The grid deliberately over-covers the visible area by one row and one
//! column so no gaps appear at the screen edges, and is centered on the
//! origin regardless of row/column parity. Layout is a pure function of
//! (view volume, spacing); every viewport or projection change triggers a
//! full rebuild rather than an incremental diff.

use glam::Vec2;

use crate::camera::ViewVolume;

/// Row/column counts covering a view volume at a given spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    /// Number of columns (x direction).
    pub columns: u32,
    /// Number of rows (y direction).
    pub rows: u32,
}

impl GridSpec {
    /// Compute the grid dimensions covering `view` with instance centers
    /// `spacing` world units apart.
    ///
    /// Always over-covers by one row and one column. `spacing` must be
    /// positive; [`Options::validate`](crate::options::Options::validate)
    /// enforces this before any layout runs.
    #[must_use]
    pub fn covering(view: ViewVolume, spacing: f32) -> Self {
        Self {
            columns: (view.width / spacing).ceil() as u32 + 1,
            rows: (view.height / spacing).ceil() as u32 + 1,
        }
    }

    /// Total cell count.
    #[must_use]
    pub fn cell_count(self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// Compute the centered position of every grid cell.
///
/// Cell (i, j) lands at `((i - (columns-1)/2) * spacing,
/// (j - (rows-1)/2) * spacing)`, so the position set is symmetric about the
/// origin. Column-major order: all rows of column 0, then column 1, and so
/// on. Deterministic and idempotent for identical inputs.
#[must_use]
pub fn layout(view: ViewVolume, spacing: f32) -> Vec<Vec2> {
    let spec = GridSpec::covering(view, spacing);
    let half_cols = (spec.columns - 1) as f32 / 2.0;
    let half_rows = (spec.rows - 1) as f32 / 2.0;

    let mut positions = Vec::with_capacity(spec.cell_count());
    for i in 0..spec.columns {
        for j in 0..spec.rows {
            positions.push(Vec2::new(
                (i as f32 - half_cols) * spacing,
                (j as f32 - half_rows) * spacing,
            ));
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(width: f32, height: f32) -> ViewVolume {
        ViewVolume { width, height }
    }

    #[test]
    fn covering_adds_one_row_and_column() {
        let spec = GridSpec::covering(view(10.0, 6.0), 2.0);
        assert_eq!(spec.columns, 6); // ceil(10/2) + 1
        assert_eq!(spec.rows, 4); // ceil(6/2) + 1
    }

    #[test]
    fn wide_viewport_scenario() {
        // 1600x900 viewport, fovy 90 at distance 15: view 53.3 x 30
        let spec = GridSpec::covering(view(53.3, 30.0), 1.5);
        assert_eq!(spec.columns, 37);
        assert_eq!(spec.rows, 21);
        assert_eq!(spec.cell_count(), 777);
        assert_eq!(layout(view(53.3, 30.0), 1.5).len(), 777);
    }

    #[test]
    fn positions_are_symmetric_about_origin() {
        for (w, h, s) in [(10.0, 6.0, 2.0), (7.3, 4.1, 0.9), (53.3, 30.0, 1.5)] {
            let positions = layout(view(w, h), s);
            let sum: Vec2 = positions.iter().copied().sum();
            assert!(sum.x.abs() < 1e-3, "x sum {} for {w}x{h}/{s}", sum.x);
            assert!(sum.y.abs() < 1e-3, "y sum {} for {w}x{h}/{s}", sum.y);
        }
    }

    #[test]
    fn adjacent_cells_are_spacing_apart() {
        let spacing = 1.25;
        let positions = layout(view(5.0, 5.0), spacing);
        let spec = GridSpec::covering(view(5.0, 5.0), spacing);
        // Column-major: consecutive entries within a column differ by one row
        assert!((positions[1].y - positions[0].y - spacing).abs() < 1e-6);
        assert_eq!(positions[1].x, positions[0].x);
        // First entries of consecutive columns differ by one column
        let next_col = positions[spec.rows as usize];
        assert!((next_col.x - positions[0].x - spacing).abs() < 1e-6);
    }

    #[test]
    fn layout_is_idempotent() {
        let a = layout(view(12.7, 8.9), 1.1);
        let b = layout(view(12.7, 8.9), 1.1);
        assert_eq!(a, b);
    }
}
