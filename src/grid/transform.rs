//! Geometric transforms over a pixel grid.
//!
//! All four operations are pure: they read an `R x C` grid and allocate a
//! new one. Rotations swap the dimensions to `C x R`; mirrors keep `R x C`.
//! None of them inspects cell values - a transform is a permutation of the
//! existing cells, and range checking stays with the renderer.

use super::PixelGrid;

/// Rotates the grid 90 degrees clockwise.
///
/// The first row of the input becomes the last column of the output:
/// `dest[j][R-1-i] = src[i][j]`.
pub fn rotate_cw(grid: &PixelGrid) -> PixelGrid {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut cells = vec![0; rows * cols];

    for (i, row) in grid.iter_rows().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            // Output is cols x rows wide, so its stride is `rows`.
            cells[j * rows + (rows - 1 - i)] = value;
        }
    }

    PixelGrid::from_raw(cells, cols, rows)
}

/// Rotates the grid 90 degrees counterclockwise.
///
/// The first column of the input becomes the first row of the output:
/// `dest[C-1-j][i] = src[i][j]`.
pub fn rotate_ccw(grid: &PixelGrid) -> PixelGrid {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut cells = vec![0; rows * cols];

    for (i, row) in grid.iter_rows().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            cells[(cols - 1 - j) * rows + i] = value;
        }
    }

    PixelGrid::from_raw(cells, cols, rows)
}

/// Mirrors the grid horizontally (flips columns): `dest[i][C-1-j] = src[i][j]`.
pub fn mirror_horizontal(grid: &PixelGrid) -> PixelGrid {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut cells = Vec::with_capacity(rows * cols);

    for row in grid.iter_rows() {
        cells.extend(row.iter().rev());
    }

    PixelGrid::from_raw(cells, rows, cols)
}

/// Mirrors the grid vertically (flips rows): `dest[R-1-i][j] = src[i][j]`.
pub fn mirror_vertical(grid: &PixelGrid) -> PixelGrid {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut cells = Vec::with_capacity(rows * cols);

    for row in grid.iter_rows().rev() {
        cells.extend_from_slice(row);
    }

    PixelGrid::from_raw(cells, rows, cols)
}
