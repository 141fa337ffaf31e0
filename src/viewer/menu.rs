//! Menu and status text for the interactive viewer.

use crate::render::ansi::{BOLD, DIM, RESET};

/// Farewell line printed when the viewer exits.
pub const GOODBYE: &str = "Goodbye!";

/// Builds the option menu shown under the rendered image.
///
/// `truncated` adds a warning when the grid is wider than the terminal;
/// `notice` carries one-shot messages such as the invalid-key hint.
pub fn menu_lines(truncated: bool, notice: Option<&str>) -> Vec<String> {
    let mut lines = vec![
        format!("{}OPTIONS{}", BOLD, RESET),
        "  [1] rotate clockwise         [2] rotate counterclockwise".to_string(),
        "  [3] mirror horizontal        [4] mirror vertical".to_string(),
        "  [5] quit".to_string(),
        format!("{}  keys r, l, h, v and q work too{}", DIM, RESET),
    ];

    if truncated {
        lines.push(format!(
            "{}  note: image is wider than the terminal; rows will wrap{}",
            DIM, RESET
        ));
    }
    if let Some(notice) = notice {
        lines.push(String::new());
        lines.push(format!("  {}", notice));
    }

    lines
}
