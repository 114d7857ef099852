//! Integer bounding boxes and the capability shared by on-screen entities.

use crate::settings::Settings;

/// Axis-aligned rectangle in play-area pixels.  `x`/`y` are the top-left
/// corner; `right` and `bottom` are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn centerx(&self) -> i32 {
        self.x + self.w / 2
    }

    #[inline]
    pub fn centery(&self) -> i32 {
        self.y + self.h / 2
    }

    /// Same size, centred on `(cx, cy)`.
    pub fn centered_at(&self, cx: i32, cy: i32) -> Self {
        Rect { x: cx - self.w / 2, y: cy - self.h / 2, ..*self }
    }

    /// Strict overlap: rectangles that only share an edge do not collide,
    /// and empty rectangles never collide.
    pub fn colliderect(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Point containment over `[left, right) × [top, bottom)`.
    pub fn collidepoint(&self, px: i32, py: i32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }
}

/// Something with a bounding box that may advance itself once per frame.
///
/// `update` defaults to a no-op for entities that are moved from outside.
pub trait Sprite {
    fn rect(&self) -> Rect;

    fn update(&mut self, _settings: &Settings) {}
}
