//! Game entities: the player's ship, its bullets, and individual aliens.
//!
//! Each entity keeps a continuous coordinate along its axis of motion and
//! derives its integer [`Rect`] from it after every move.

use crate::geometry::{Rect, Sprite};
use crate::settings::{Rgb, Settings};

// ── Ship ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Ship {
    /// Exact horizontal centre.
    pub center: f32,
    pub rect: Rect,
    pub moving_right: bool,
    pub moving_left: bool,
}

impl Ship {
    /// A ship centred at the bottom of the play area.
    pub fn new(settings: &Settings) -> Self {
        let rect = Rect::new(
            0,
            settings.screen_height - settings.ship_height,
            settings.ship_width,
            settings.ship_height,
        );
        let mut ship = Ship { center: 0.0, rect, moving_right: false, moving_left: false };
        ship.center_ship(settings);
        ship
    }

    /// Put the ship back in the middle and forget any held direction.
    pub fn center_ship(&mut self, settings: &Settings) {
        self.center = (settings.screen_width / 2) as f32;
        self.moving_right = false;
        self.moving_left = false;
        self.sync_rect();
    }

    fn sync_rect(&mut self) {
        self.rect.x = self.center.floor() as i32 - self.rect.w / 2;
    }
}

impl Sprite for Ship {
    fn rect(&self) -> Rect {
        self.rect
    }

    /// Move by the current ship speed.  Right wins when both flags are set;
    /// the box is kept inside `[0, screen_width]`.
    fn update(&mut self, settings: &Settings) {
        let speed = settings.dynamic.ship_speed_factor;
        if self.moving_right {
            if self.rect.right() < settings.screen_width {
                self.center += speed;
            }
        } else if self.moving_left && self.rect.left() > 0 {
            self.center -= speed;
        }
        let lo = (self.rect.w / 2) as f32;
        let hi = (settings.screen_width - (self.rect.w - self.rect.w / 2)) as f32;
        self.center = self.center.min(hi).max(lo);
        self.sync_rect();
    }
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    /// Exact top edge.
    pub y: f32,
    pub rect: Rect,
    pub color: Rgb,
    /// Upward speed, fixed when the bullet is fired.
    pub speed: f32,
}

impl Bullet {
    /// A bullet whose top-centre sits on the ship's top-centre.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        let w = settings.bullet_width;
        let rect = Rect::new(ship.rect.centerx() - w / 2, ship.rect.top(), w, settings.bullet_height);
        Bullet {
            y: rect.y as f32,
            rect,
            color: settings.bullet_color,
            speed: settings.dynamic.bullet_speed_factor,
        }
    }

    /// True once the bottom edge has reached the top of the play area.
    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0
    }
}

impl Sprite for Bullet {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn update(&mut self, _settings: &Settings) {
        self.y -= self.speed;
        self.rect.y = self.y.floor() as i32;
    }
}

// ── Alien ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Alien {
    /// Exact left edge.
    pub x: f32,
    pub rect: Rect,
}

impl Alien {
    /// An alien one footprint in from the top-left corner.
    pub fn new(settings: &Settings) -> Self {
        let (w, h) = (settings.alien_width, settings.alien_height);
        Alien::at(w, h, w, h)
    }

    pub fn at(x: i32, y: i32, w: i32, h: i32) -> Self {
        Alien { x: x as f32, rect: Rect::new(x, y, w, h) }
    }

    /// True if the alien touches either side of the play area.
    pub fn check_edges(&self, screen_width: i32) -> bool {
        self.rect.right() >= screen_width || self.rect.left() <= 0
    }

    pub fn drop_by(&mut self, dy: i32) {
        self.rect.y += dy;
    }
}

impl Sprite for Alien {
    fn rect(&self) -> Rect {
        self.rect
    }

    /// Step sideways by the shared fleet speed and heading.
    fn update(&mut self, settings: &Settings) {
        let dynamic = &settings.dynamic;
        self.x += dynamic.alien_speed_factor * dynamic.fleet_direction.sign();
        self.rect.x = self.x.floor() as i32;
    }
}
