//! Rendering layer — all terminal output lives here.
//!
//! [`render`] paints a [`Frame`] produced by the game core.  No game logic is
//! performed; play-area pixels are scaled onto terminal cells through a
//! [`Viewport`].

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::geometry::Rect;
use crate::render::{Anchor, DrawCommand, Frame, ImageHandle};
use crate::settings::{Rgb, Settings};

// ── Sprites ───────────────────────────────────────────────────────────────────

//   ▲       ← tip
//  /█\      ← fuselage + wings
const SHIP_SPRITE: [&str; 2] = ["▲", "/█\\"];
//  «▼»      ← swept-back wings
//  ╚═╝      ← engine block
const ALIEN_SPRITE: [&str; 2] = ["«▼»", "╚═╝"];

const C_SHIP: Color = Color::DarkBlue;
const C_ALIEN: Color = Color::DarkGreen;

fn rgb(c: Rgb) -> Color {
    Color::Rgb { r: c.0, g: c.1, b: c.2 }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps the play area (pixels) onto a terminal of `cols` × `rows` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub screen_width: i32,
    pub screen_height: i32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, settings: &Settings) -> Self {
        Viewport {
            cols,
            rows,
            screen_width: settings.screen_width,
            screen_height: settings.screen_height,
        }
    }

    /// Column holding pixel `x` (may lie outside the terminal).
    pub fn col_of(&self, x: i32) -> i32 {
        scale_floor(x, self.cols, self.screen_width)
    }

    /// Row holding pixel `y` (may lie outside the terminal).
    pub fn row_of(&self, y: i32) -> i32 {
        scale_floor(y, self.rows, self.screen_height)
    }

    /// Cells covered by `rect` as `(col0, row0, col1, row1)`, ends
    /// exclusive.  A non-empty rect always covers at least one cell.
    pub fn cell_span(&self, rect: &Rect) -> (i32, i32, i32, i32) {
        let c0 = self.col_of(rect.left());
        let r0 = self.row_of(rect.top());
        let c1 = scale_ceil(rect.right(), self.cols, self.screen_width).max(c0 + 1);
        let r1 = scale_ceil(rect.bottom(), self.rows, self.screen_height).max(r0 + 1);
        (c0, r0, c1, r1)
    }

    /// Play-area pixel at the centre of cell `(col, row)`.
    pub fn to_screen(&self, col: u16, row: u16) -> (i32, i32) {
        let x = cell_center(col, self.cols, self.screen_width);
        let y = cell_center(row, self.rows, self.screen_height);
        (x, y)
    }
}

fn scale_floor(v: i32, cells: u16, extent: i32) -> i32 {
    if extent <= 0 {
        return 0;
    }
    (i64::from(v) * i64::from(cells)).div_euclid(i64::from(extent)) as i32
}

fn scale_ceil(v: i32, cells: u16, extent: i32) -> i32 {
    if extent <= 0 {
        return 0;
    }
    let num = i64::from(v) * i64::from(cells);
    let den = i64::from(extent);
    (num.div_euclid(den) + i64::from(num.rem_euclid(den) != 0)) as i32
}

fn cell_center(cell: u16, cells: u16, extent: i32) -> i32 {
    if cells == 0 {
        return 0;
    }
    ((2 * i64::from(cell) + 1) * i64::from(extent) / (2 * i64::from(cells))) as i32
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, frame: &Frame, vp: &Viewport) -> std::io::Result<()> {
    let bg = rgb(frame.background);
    out.queue(style::SetBackgroundColor(bg))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for command in &frame.commands {
        match command {
            DrawCommand::FillRect { rect, color } => fill_rect(out, vp, rect, rgb(*color), '█')?,
            DrawCommand::Image { rect, image } => draw_image(out, vp, rect, *image)?,
            DrawCommand::Text { text, anchor, color, background, .. } => {
                draw_text(out, vp, text, anchor, rgb(*color), background.map(rgb).unwrap_or(bg))?;
                out.queue(style::SetBackgroundColor(bg))?;
            }
            DrawCommand::Button { rect, color, label, label_color, .. } => {
                draw_button(out, vp, rect, rgb(*color), label, rgb(*label_color))?;
                out.queue(style::SetBackgroundColor(bg))?;
            }
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Primitives ────────────────────────────────────────────────────────────────

/// Print `s` at `(col, row)`, clipped to the terminal.
fn put<W: Write>(out: &mut W, vp: &Viewport, col: i32, row: i32, s: &str) -> std::io::Result<()> {
    if row < 0 || row >= i32::from(vp.rows) || col >= i32::from(vp.cols) {
        return Ok(());
    }
    let skip = (-col).max(0) as usize;
    let room = (i32::from(vp.cols) - col.max(0)) as usize;
    let visible: String = s.chars().skip(skip).take(room).collect();
    if visible.is_empty() {
        return Ok(());
    }
    out.queue(cursor::MoveTo(col.max(0) as u16, row as u16))?;
    out.queue(Print(visible))?;
    Ok(())
}

fn fill_rect<W: Write>(
    out: &mut W,
    vp: &Viewport,
    rect: &Rect,
    color: Color,
    glyph: char,
) -> std::io::Result<()> {
    let (c0, r0, c1, r1) = vp.cell_span(rect);
    let line: String = std::iter::repeat(glyph).take((c1 - c0) as usize).collect();
    out.queue(style::SetForegroundColor(color))?;
    for row in r0..r1 {
        put(out, vp, c0, row, &line)?;
    }
    Ok(())
}

fn draw_image<W: Write>(
    out: &mut W,
    vp: &Viewport,
    rect: &Rect,
    image: ImageHandle,
) -> std::io::Result<()> {
    let (sprite, color) = match image {
        ImageHandle::Ship => (SHIP_SPRITE, C_SHIP),
        ImageHandle::Alien => (ALIEN_SPRITE, C_ALIEN),
    };
    let (c0, r0, c1, r1) = vp.cell_span(rect);
    let mid = (c0 + c1 - 1) / 2;
    out.queue(style::SetForegroundColor(color))?;
    for (i, line) in sprite.iter().enumerate().take((r1 - r0) as usize) {
        let width = line.chars().count() as i32;
        put(out, vp, mid - width / 2, r0 + i as i32, line)?;
    }
    Ok(())
}

fn draw_text<W: Write>(
    out: &mut W,
    vp: &Viewport,
    text: &str,
    anchor: &Anchor,
    fg: Color,
    bg: Color,
) -> std::io::Result<()> {
    let width = text.chars().count() as i32;
    let (col, row) = match *anchor {
        Anchor::TopCenter { x, y } => (vp.col_of(x) - width / 2, vp.row_of(y)),
        Anchor::TopRight { x, y } => (vp.col_of(x) - width, vp.row_of(y)),
    };
    out.queue(style::SetForegroundColor(fg))?;
    out.queue(style::SetBackgroundColor(bg))?;
    put(out, vp, col, row, text)
}

fn draw_button<W: Write>(
    out: &mut W,
    vp: &Viewport,
    rect: &Rect,
    color: Color,
    label: &str,
    label_color: Color,
) -> std::io::Result<()> {
    let (c0, r0, c1, r1) = vp.cell_span(rect);
    out.queue(style::SetBackgroundColor(color))?;
    fill_rect(out, vp, rect, color, ' ')?;

    let width = label.chars().count() as i32;
    let col = (c0 + c1) / 2 - width / 2;
    let row = (r0 + r1 - 1) / 2;
    out.queue(style::SetForegroundColor(label_color))?;
    put(out, vp, col, row, label)
}
