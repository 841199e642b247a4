//! Full-frame glyph grid encoding.
//!
//! One call paints one whole frame: home the cursor, then overwrite every
//! cell row by row. There is no per-frame clear and no diffing; flicker
//! avoidance relies on the full-grid overwrite, and terminal area beyond a
//! smaller grid keeps whatever the previous frame left there.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use crate::buffer::ScreenBuffer;
use crate::types::{GlyphGrid, Rgb, BACKDROP_CHAR};

/// Terminal dimensions the frame is clipped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }
}

/// Encode one full-screen repaint of `grid` into `out`.
///
/// Behavior pinned by the render contract:
/// - a blank grid paints viewport-sized backdrop with no color codes;
/// - glyph characters land in a grid-sized buffer, later glyphs overwriting
///   earlier ones at the same cell, out-of-bounds glyphs dropped;
/// - emission clips to min(grid, viewport) per axis;
/// - each emitted cell gets a true-color foreground sequence then its
///   character; the cell's color comes from the *first* glyph in iteration
///   order at that position (white if none), so a cell's character and color
///   can come from different glyphs when several share a cell;
/// - each row ends with a color reset and `\r\n`.
pub fn encode_frame_into<W: Write>(out: &mut W, grid: &GlyphGrid, viewport: Viewport) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    if grid.is_blank() {
        for _ in 0..viewport.rows {
            for _ in 0..viewport.cols {
                out.queue(Print(BACKDROP_CHAR))?;
            }
            out.queue(Print("\r\n"))?;
        }
        return Ok(());
    }

    let mut chars = ScreenBuffer::new(grid.width(), grid.height());
    for glyph in grid.glyphs() {
        if glyph.x >= 0
            && glyph.x < grid.width() as i32
            && glyph.y >= 0
            && glyph.y < grid.height() as i32
        {
            chars.set(glyph.x as u16, glyph.y as u16, glyph.ch);
        }
    }

    let rows = grid.height().min(viewport.rows);
    let cols = grid.width().min(viewport.cols);

    for y in 0..rows {
        for x in 0..cols {
            let ch = chars.get(x, y).unwrap_or(BACKDROP_CHAR);
            let fg = color_at(grid, x, y);
            out.queue(SetForegroundColor(Color::Rgb {
                r: fg.r,
                g: fg.g,
                b: fg.b,
            }))?;
            out.queue(Print(ch))?;
        }
        out.queue(ResetColor)?;
        out.queue(Print("\r\n"))?;
    }

    Ok(())
}

/// First glyph in iteration order at exactly (x, y), defaulting to white.
fn color_at(grid: &GlyphGrid, x: u16, y: u16) -> Rgb {
    grid.glyphs()
        .iter()
        .find(|g| g.x == x as i32 && g.y == y as i32)
        .map(|g| g.fg)
        .unwrap_or(Rgb::WHITE)
}

/// Flushes encoded frames to the real terminal.
pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Write one frame and flush, so tick timing includes the I/O.
    pub fn draw(&mut self, grid: &GlyphGrid, viewport: Viewport) -> Result<()> {
        encode_frame_into(&mut self.stdout, grid, viewport)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Glyph;

    const HOME: &str = "\x1b[1;1H";
    const RESET: &str = "\x1b[0m";

    fn fg(rgb: Rgb) -> String {
        format!("\x1b[38;2;{};{};{}m", rgb.r, rgb.g, rgb.b)
    }

    fn encode(grid: &GlyphGrid, viewport: Viewport) -> String {
        let mut out = Vec::new();
        encode_frame_into(&mut out, grid, viewport).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn blank_grid_paints_backdrop_without_color_codes() {
        let grid = GlyphGrid::new(0, 0);
        let frame = encode(&grid, Viewport::new(3, 2));
        assert_eq!(frame, format!("{HOME}...\r\n...\r\n"));
        assert!(!frame.contains("\x1b[38"));
    }

    #[test]
    fn single_glyph_frame_matches_expected_bytes() {
        let mut grid = GlyphGrid::new(3, 2);
        grid.push(Glyph::new(1, 0, 'X', Rgb::new(10, 20, 30)));

        let white = fg(Rgb::WHITE);
        let colored = fg(Rgb::new(10, 20, 30));
        let expected = format!(
            "{HOME}{white}.{colored}X{white}.{RESET}\r\n{white}.{white}.{white}.{RESET}\r\n"
        );
        assert_eq!(encode(&grid, Viewport::new(3, 2)), expected);
    }

    #[test]
    fn out_of_bounds_glyphs_do_not_affect_output() {
        let mut plain = GlyphGrid::new(3, 2);
        plain.push(Glyph::new(1, 1, 'o', Rgb::new(5, 6, 7)));

        let mut noisy = plain.clone();
        noisy.push(Glyph::new(-1, 0, 'Z', Rgb::new(200, 0, 0)));
        noisy.push(Glyph::new(3, 0, 'Z', Rgb::new(200, 0, 0)));
        noisy.push(Glyph::new(0, 2, 'Z', Rgb::new(200, 0, 0)));
        noisy.push(Glyph::new(100, 100, 'Z', Rgb::new(200, 0, 0)));

        let viewport = Viewport::new(3, 2);
        assert_eq!(encode(&plain, viewport), encode(&noisy, viewport));
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut grid = GlyphGrid::new(5, 3);
        grid.push(Glyph::new(0, 0, '#', Rgb::new(1, 2, 3)));
        grid.push(Glyph::new(4, 2, '@', Rgb::new(9, 8, 7)));

        let viewport = Viewport::new(5, 3);
        assert_eq!(encode(&grid, viewport), encode(&grid, viewport));
    }

    #[test]
    fn shared_cell_takes_last_character_but_first_color() {
        let first_color = Rgb::new(200, 0, 0);
        let second_color = Rgb::new(0, 0, 200);
        let mut grid = GlyphGrid::new(1, 1);
        grid.push(Glyph::new(0, 0, 'A', first_color));
        grid.push(Glyph::new(0, 0, 'B', second_color));

        let frame = encode(&grid, Viewport::new(1, 1));
        // documented asymmetry: 'B' wins the character, 'A' wins the color
        assert_eq!(frame, format!("{HOME}{}B{RESET}\r\n", fg(first_color)));
        assert!(!frame.contains(&fg(second_color)));
    }

    #[test]
    fn frame_clips_to_viewport_when_grid_is_larger() {
        let mut grid = GlyphGrid::new(100, 30);
        grid.push(Glyph::new(0, 0, '#', Rgb::new(1, 1, 1)));
        // beyond the viewport on both axes; must be dropped silently
        grid.push(Glyph::new(90, 0, 'R', Rgb::new(2, 2, 2)));
        grid.push(Glyph::new(0, 28, 'B', Rgb::new(3, 3, 3)));

        let frame = encode(&grid, Viewport::new(80, 24));
        assert_eq!(frame.matches("\r\n").count(), 24);
        assert_eq!(frame.matches(RESET).count(), 24);
        assert_eq!(frame.matches("\x1b[38;2;").count(), 80 * 24);
        assert!(!frame.contains('R'));
        assert!(!frame.contains('B'));
    }

    #[test]
    fn frame_stops_at_grid_edge_when_viewport_is_larger() {
        let mut grid = GlyphGrid::new(2, 1);
        grid.push(Glyph::new(0, 0, 'a', Rgb::new(4, 4, 4)));

        let frame = encode(&grid, Viewport::new(80, 24));
        // one row of two cells; the rest of the terminal is left untouched
        assert_eq!(frame.matches("\r\n").count(), 1);
        assert_eq!(frame.matches("\x1b[38;2;").count(), 2);
    }

    #[test]
    fn backdrop_cell_over_a_vacated_position_keeps_first_match_color() {
        // A glyph's character can be overwritten while its color still wins
        // the scan for that cell.
        let mut grid = GlyphGrid::new(2, 1);
        grid.push(Glyph::new(0, 0, 'A', Rgb::new(11, 22, 33)));
        grid.push(Glyph::new(0, 0, BACKDROP_CHAR, Rgb::new(44, 55, 66)));

        let frame = encode(&grid, Viewport::new(2, 1));
        assert!(frame.contains(&format!("{}{}", fg(Rgb::new(11, 22, 33)), BACKDROP_CHAR)));
    }
}
