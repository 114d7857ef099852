//! Game tunables.
//!
//! `Settings` holds the static configuration fixed for a session (play-area
//! size, sprite footprints, colours, caps, scaling factors) and a
//! [`DynamicSettings`] block that is reset at the start of every game and
//! scaled up on every level.  Entities read settings by reference; only
//! [`Settings::initialize_dynamic_settings`] and [`Settings::increase_speed`]
//! replace the dynamic block.

use serde::Deserialize;

/// An sRGB colour triple.  Deserializes from `[r, g, b]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Horizontal heading shared by the whole fleet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetDirection {
    Right,
    Left,
}

impl FleetDirection {
    /// `+1.0` for right, `-1.0` for left.
    pub fn sign(self) -> f32 {
        match self {
            FleetDirection::Right => 1.0,
            FleetDirection::Left => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            FleetDirection::Right => FleetDirection::Left,
            FleetDirection::Left => FleetDirection::Right,
        }
    }
}

// ── Dynamic block ─────────────────────────────────────────────────────────────

/// Tunables that reset on every new game and grow with the level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynamicSettings {
    pub ship_speed_factor: f32,
    pub bullet_speed_factor: f32,
    pub alien_speed_factor: f32,
    pub fleet_direction: FleetDirection,
    /// Score awarded per alien destroyed.
    pub alien_points: u32,
}

impl DynamicSettings {
    /// Baseline values for a fresh game.
    pub fn baseline(settings: &Settings) -> Self {
        DynamicSettings {
            ship_speed_factor: settings.ship_speed_factor,
            bullet_speed_factor: settings.bullet_speed_factor,
            alien_speed_factor: settings.alien_speed_factor,
            fleet_direction: FleetDirection::Right,
            alien_points: settings.alien_points,
        }
    }

    /// The next level's values.  Speeds scale by `speedup`, points by
    /// `score_scale` (truncated).  Direction is carried over.
    pub fn sped_up(&self, speedup: f32, score_scale: f32) -> Self {
        DynamicSettings {
            ship_speed_factor: self.ship_speed_factor * speedup,
            bullet_speed_factor: self.bullet_speed_factor * speedup,
            alien_speed_factor: self.alien_speed_factor * speedup,
            fleet_direction: self.fleet_direction,
            alien_points: (self.alien_points as f32 * score_scale) as u32,
        }
    }

    /// Flip the fleet heading after it touches an edge.
    pub fn reverse_fleet(&mut self) {
        self.fleet_direction = self.fleet_direction.reversed();
    }
}

impl Default for DynamicSettings {
    fn default() -> Self {
        DynamicSettings::baseline(&Settings::default())
    }
}

// ── Settings ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Play area
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: Rgb,

    // Ship
    pub ship_width: i32,
    pub ship_height: i32,
    pub ship_speed_factor: f32,
    pub ship_limit: u32,

    // Bullets
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: Rgb,
    pub bullet_speed_factor: f32,
    pub bullets_allowed: usize,

    // Aliens
    pub alien_width: i32,
    pub alien_height: i32,
    pub alien_speed_factor: f32,
    pub fleet_drop_speed: i32,
    pub alien_points: u32,

    // Level scaling
    pub speedup_scale: f32,
    pub score_scale: f32,

    // HUD and Play button
    pub text_color: Rgb,
    pub font_size: u16,
    pub button_width: i32,
    pub button_height: i32,
    pub button_color: Rgb,
    pub button_text_color: Rgb,

    /// Update frames skipped after the ship is hit.  Derived from the
    /// frame rate by [`crate::config::Config::settings`].
    #[serde(skip)]
    pub hit_pause_frames: u32,

    #[serde(skip)]
    pub dynamic: DynamicSettings,
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings = Settings {
            screen_width: 1200,
            screen_height: 800,
            bg_color: Rgb(230, 230, 230),

            ship_width: 60,
            ship_height: 48,
            ship_speed_factor: 1.5,
            ship_limit: 3,

            bullet_width: 3,
            bullet_height: 15,
            bullet_color: Rgb(60, 60, 60),
            bullet_speed_factor: 3.0,
            bullets_allowed: 3,

            alien_width: 50,
            alien_height: 50,
            alien_speed_factor: 1.0,
            fleet_drop_speed: 10,
            alien_points: 50,

            speedup_scale: 1.1,
            score_scale: 1.5,

            text_color: Rgb(30, 30, 30),
            font_size: 48,
            button_width: 200,
            button_height: 50,
            button_color: Rgb(0, 255, 0),
            button_text_color: Rgb(255, 255, 255),

            hit_pause_frames: 30,

            // Placeholder; replaced just below from the static fields.
            dynamic: DynamicSettings {
                ship_speed_factor: 0.0,
                bullet_speed_factor: 0.0,
                alien_speed_factor: 0.0,
                fleet_direction: FleetDirection::Right,
                alien_points: 0,
            },
        };
        settings.initialize_dynamic_settings();
        settings
    }
}

impl Settings {
    /// Restore the dynamic block to its baseline.  Called on every new game.
    pub fn initialize_dynamic_settings(&mut self) {
        self.dynamic = DynamicSettings::baseline(self);
    }

    /// Scale speeds and point value for the next level.
    pub fn increase_speed(&mut self) {
        self.dynamic = self.dynamic.sped_up(self.speedup_scale, self.score_scale);
    }
}
