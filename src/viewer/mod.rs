//! Interactive viewer loop.
//!
//! Owns the current grid and runs the clear/render/menu/key cycle of the
//! program: every accepted transform replaces the grid, every redraw paints
//! the whole screen. The terminal runs in raw mode for single-key input and
//! is restored on every exit path.

mod input;
mod menu;

pub use input::{map_key, Action};

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, QueueableCommand};
use tracing::debug;

use crate::grid::{self, PixelGrid};
use crate::render::{self, ansi};

/// Restores cooked mode even when the loop exits early.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw terminal mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Runs the interactive loop until the user quits.
pub fn run(mut grid: PixelGrid) -> Result<()> {
    let _guard = RawModeGuard::enable()?;
    let mut stdout = io::stdout();
    let mut notice: Option<&str> = None;

    loop {
        draw(&mut stdout, &grid, notice)?;
        notice = None;

        let event = event::read().context("failed to read terminal event")?;
        let Event::Key(key) = event else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match map_key(key) {
            Some(Action::RotateCw) => grid = grid::rotate_cw(&grid),
            Some(Action::RotateCcw) => grid = grid::rotate_ccw(&grid),
            Some(Action::MirrorHorizontal) => grid = grid::mirror_horizontal(&grid),
            Some(Action::MirrorVertical) => grid = grid::mirror_vertical(&grid),
            Some(Action::Quit) => break,
            None => {
                notice = Some("Invalid option - use the keys listed above");
                continue;
            }
        }
        debug!(rows = grid.rows(), cols = grid.cols(), "applied transform");
    }

    // Leave a clean screen behind, like the original program.
    stdout.queue(Clear(ClearType::All))?.queue(cursor::MoveTo(0, 0))?;
    write!(stdout, "{}{}{}\r\n", ansi::GREEN, menu::GOODBYE, ansi::RESET)?;
    stdout.flush()?;
    Ok(())
}

/// Clears the screen and paints the image plus the menu.
fn draw(stdout: &mut io::Stdout, grid: &PixelGrid, notice: Option<&str>) -> Result<()> {
    stdout.queue(Clear(ClearType::All))?.queue(cursor::MoveTo(0, 0))?;

    let image = render::render_to_string(grid).context("failed to render grid")?;
    // Raw mode disables output post-processing, so line feeds need an
    // explicit carriage return.
    stdout.write_all(image.replace('\n', "\r\n").as_bytes())?;

    let truncated = terminal_width().is_some_and(|width| grid.cols() * 2 > width);
    for line in menu::menu_lines(truncated, notice) {
        stdout.write_all(line.as_bytes())?;
        stdout.write_all(b"\r\n")?;
    }
    stdout.flush()?;
    Ok(())
}

fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(width, _)| usize::from(width.0))
}
