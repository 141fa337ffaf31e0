//! Grid-to-terminal rendering.
//!
//! Paints a [`PixelGrid`] as rows of background-colored blocks. Each cell
//! becomes its background escape followed by two spaces (one pixel is two
//! terminal cells wide, which roughly squares it up on common fonts), each
//! row ends with a color reset and a newline, and the whole image is
//! followed by one blank line.
//!
//! Every cell is validated against the palette range *before* any output is
//! produced. A grid holding an out-of-range value renders nothing at all
//! rather than leaving the terminal with a half-painted row.

pub mod ansi;

use std::io::Write;

use crate::grid::PixelGrid;

pub use ansi::bg_escape;

/// Width of one rendered pixel in terminal cells.
const PIXEL: &str = "  ";

/// Rendering failures.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("color code {value} is outside the palette range 0-255")]
    ColorOutOfRange { value: i32 },

    #[error("failed to write to output: {0}")]
    Io(#[from] std::io::Error),
}

impl PartialEq for RenderError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                RenderError::ColorOutOfRange { value: a },
                RenderError::ColorOutOfRange { value: b },
            ) => a == b,
            // Io errors are not comparable
            _ => false,
        }
    }
}

/// Renders the grid to a string of ANSI-colored rows.
///
/// Fails with [`RenderError::ColorOutOfRange`] before producing any output
/// if any cell is outside 0-255.
pub fn render_to_string(grid: &PixelGrid) -> Result<String, RenderError> {
    // Validate the whole grid upfront so a failure never leaves partial
    // output behind.
    if let Some(&value) = grid.cells().iter().find(|v| !(0..=255).contains(*v)) {
        return Err(RenderError::ColorOutOfRange { value });
    }

    // Worst case per cell: 11-byte escape + 2 spaces.
    let mut output = String::with_capacity(grid.rows() * (grid.cols() * 13 + 6));

    for row in grid.iter_rows() {
        for &code in row {
            // Cannot fail: the grid was validated above.
            ansi::push_bg_escape(code, &mut output)?;
            output.push_str(PIXEL);
        }
        output.push_str(ansi::RESET);
        output.push('\n');
    }
    output.push('\n');

    Ok(output)
}

/// Renders the grid to a writer in a single write call.
///
/// Building the full string first keeps the terminal free of partial rows
/// when validation fails and minimizes syscalls on large grids.
pub fn render_grid(grid: &PixelGrid, out: &mut impl Write) -> Result<(), RenderError> {
    let output = render_to_string(grid)?;
    out.write_all(output.as_bytes())?;
    Ok(())
}
