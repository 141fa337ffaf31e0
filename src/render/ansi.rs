//! ANSI escape sequences for 256-color background painting.
//!
//! One image pixel is drawn as a background-colored block, so only the
//! indexed background form (`ESC[48;5;Nm`) and the reset sequence matter
//! here. A handful of foreground codes are exposed for menu/status text.

use super::RenderError;

/// Reset all terminal colors and attributes.
pub const RESET: &str = "\x1b[0m";

/// Bold text (menu headings).
pub const BOLD: &str = "\x1b[1m";

/// Dim text (hints and notices).
pub const DIM: &str = "\x1b[2m";

/// Green foreground (status messages).
pub const GREEN: &str = "\x1b[32m";

/// Inclusive bounds of the indexed terminal palette.
const PALETTE_MIN: i32 = 0;
const PALETTE_MAX: i32 = 255;

/// Returns the escape sequence that sets the terminal background to the
/// indexed palette entry `code`.
///
/// Values outside 0-255 fail with [`RenderError::ColorOutOfRange`];
/// the value is never clamped.
pub fn bg_escape(code: i32) -> Result<String, RenderError> {
    let mut buf = String::with_capacity(11);
    push_bg_escape(code, &mut buf)?;
    Ok(buf)
}

/// Appends the background escape for `code` to `buf`, avoiding a fresh
/// allocation per cell when painting whole grids.
pub fn push_bg_escape(code: i32, buf: &mut String) -> Result<(), RenderError> {
    if !(PALETTE_MIN..=PALETTE_MAX).contains(&code) {
        return Err(RenderError::ColorOutOfRange { value: code });
    }
    buf.push_str("\x1b[48;5;");
    buf.push_str(&code.to_string());
    buf.push('m');
    Ok(())
}
