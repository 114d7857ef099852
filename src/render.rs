//! Renderer-agnostic draw list.
//!
//! The core describes each frame as an ordered list of [`DrawCommand`]s in
//! play-area pixels.  A frontend paints them in order; it never needs to
//! look at game state directly.

use crate::geometry::Rect;
use crate::settings::{Rgb, Settings};

/// Sprite images the frontend is expected to supply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageHandle {
    Ship,
    Alien,
}

/// Where a text label is pinned.  `x` is the centre or right edge of the
/// rendered text; `y` is its top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    TopCenter { x: i32, y: i32 },
    TopRight { x: i32, y: i32 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Rgb },
    Image { rect: Rect, image: ImageHandle },
    Text {
        text: String,
        anchor: Anchor,
        color: Rgb,
        background: Option<Rgb>,
        size: u16,
    },
    Button {
        rect: Rect,
        color: Rgb,
        label: String,
        label_color: Rgb,
        size: u16,
    },
}

/// One frame's worth of drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub background: Rgb,
    pub commands: Vec<DrawCommand>,
    /// Whether the frontend should expose the pointer (menu) or hide it
    /// (playing).
    pub pointer_visible: bool,
}

// ── Play button ───────────────────────────────────────────────────────────────

/// The clickable start button shown while no game is running.
#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub color: Rgb,
    pub label_color: Rgb,
    pub size: u16,
}

impl Button {
    /// A button centred on the play area.
    pub fn new(settings: &Settings, label: &str) -> Self {
        let rect = Rect::new(0, 0, settings.button_width, settings.button_height)
            .centered_at(settings.screen_width / 2, settings.screen_height / 2);
        Button {
            rect,
            label: label.to_string(),
            color: settings.button_color,
            label_color: settings.button_text_color,
            size: settings.font_size,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect.collidepoint(x, y)
    }

    pub fn draw_command(&self) -> DrawCommand {
        DrawCommand::Button {
            rect: self.rect,
            color: self.color,
            label: self.label.clone(),
            label_color: self.label_color,
            size: self.size,
        }
    }
}
