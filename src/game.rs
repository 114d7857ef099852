//! The game session: one owner for settings, stats and every entity.
//!
//! A frame is `handle_intent` for each pending intent, then [`Game::tick`],
//! then [`Game::frame`] for the renderer.  While no game is running only
//! start, click and quit intents do anything and `tick` is a no-op.
//!
//! Tick order while playing:
//!
//! 1. ship moves from its intent flags
//! 2. bullets advance; those past the top are dropped
//! 3. bullet/alien hits are scored; an emptied fleet starts the next level
//! 4. the fleet bounces off an edge if it touches one, then advances
//! 5. an alien touching the ship or the bottom edge costs a ship

use crate::entities::{Bullet, Ship};
use crate::fleet::{self, Fleet};
use crate::geometry::Sprite;
use crate::input::Intent;
use crate::render::{Button, DrawCommand, Frame, ImageHandle};
use crate::scoreboard;
use crate::settings::Settings;
use crate::stats::GameStats;

/// What the frontend should do after an intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Clone, Debug)]
pub struct Game {
    pub settings: Settings,
    pub stats: GameStats,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub fleet: Fleet,
    pub play_button: Button,
    /// Hidden while a game is running.
    pub pointer_visible: bool,
    /// Update frames still to skip after a ship hit.
    pause_frames: u32,
}

impl Game {
    /// A session sitting at the menu with a fleet already on screen.
    pub fn new(mut settings: Settings) -> Self {
        settings.initialize_dynamic_settings();
        Game {
            stats: GameStats::new(&settings),
            ship: Ship::new(&settings),
            bullets: Vec::new(),
            fleet: Fleet::create(&settings),
            play_button: Button::new(&settings, "Play"),
            pointer_visible: true,
            pause_frames: 0,
            settings,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.pause_frames > 0
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    pub fn handle_intent(&mut self, intent: Intent) -> Control {
        match intent {
            Intent::Quit => return Control::Quit,
            _ if self.is_paused() => log::trace!("dropping {intent:?} during hit pause"),
            Intent::Start => self.start_game(),
            Intent::Click { x, y } => {
                if self.play_button.contains(x, y) {
                    self.start_game();
                }
            }
            _ if !self.stats.game_active => {}
            Intent::StartMoveLeft => self.ship.moving_left = true,
            Intent::StopMoveLeft => self.ship.moving_left = false,
            Intent::StartMoveRight => self.ship.moving_right = true,
            Intent::StopMoveRight => self.ship.moving_right = false,
            Intent::Fire => {
                self.fire_bullet();
            }
        }
        Control::Continue
    }

    /// Begin a new game.  A no-op while one is already running.
    pub fn start_game(&mut self) {
        if self.stats.game_active {
            return;
        }
        self.pointer_visible = false;
        self.stats.reset_stats(&self.settings);
        self.stats.game_active = true;
        self.settings.initialize_dynamic_settings();
        self.bullets.clear();
        self.fleet.rebuild(&self.settings);
        self.ship.center_ship(&self.settings);
        self.pause_frames = 0;
        log::info!(
            "new game: {} ships, {} aliens, high score {}",
            self.stats.ships_left,
            self.fleet.len(),
            self.stats.high_score
        );
    }

    /// Fire from the ship's top-centre if under the bullet cap.
    pub fn fire_bullet(&mut self) -> bool {
        if self.bullets.len() >= self.settings.bullets_allowed {
            return false;
        }
        self.bullets.push(Bullet::new(&self.settings, &self.ship));
        true
    }

    // ── Per-frame update ──────────────────────────────────────────────────────

    /// Advance the simulation by one frame.
    pub fn tick(&mut self) {
        if !self.stats.game_active {
            return;
        }
        if self.pause_frames > 0 {
            self.pause_frames -= 1;
            return;
        }
        self.ship.update(&self.settings);
        self.update_bullets();
        self.update_aliens();
    }

    /// Move bullets, drop the ones that left the top, then resolve hits.
    pub fn update_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.update(&self.settings);
        }
        self.bullets.retain(|b| !b.is_off_screen());
        self.check_bullet_alien_collisions();
    }

    pub fn check_bullet_alien_collisions(&mut self) {
        let kills = self.fleet.resolve_bullet_hits(&mut self.bullets);
        if !kills.is_empty() {
            let points = self.settings.dynamic.alien_points;
            for destroyed in &kills {
                self.stats.add_points(points.saturating_mul(*destroyed as u32));
            }
            self.stats.check_high_score();
            log::debug!("{} alien(s) down, score {}", kills.iter().sum::<usize>(), self.stats.score);
        }

        if self.fleet.is_empty() && self.fleet_can_spawn() {
            self.start_new_level();
        }
    }

    /// A degenerate play area yields an empty grid; never level up on it.
    fn fleet_can_spawn(&self) -> bool {
        let (cols, rows) = fleet::grid_dimensions(&self.settings);
        cols > 0 && rows > 0
    }

    fn start_new_level(&mut self) {
        self.bullets.clear();
        self.settings.increase_speed();
        self.stats.level += 1;
        self.fleet.rebuild(&self.settings);
        log::info!(
            "level {} (alien speed {:.2}, {} points per alien)",
            self.stats.level,
            self.settings.dynamic.alien_speed_factor,
            self.settings.dynamic.alien_points
        );
    }

    /// Bounce, advance, then look for anything that costs a ship.
    pub fn update_aliens(&mut self) {
        self.fleet.check_fleet_edges(&mut self.settings);
        self.fleet.update(&self.settings);

        if self.fleet.collides_with(&self.ship.rect()) {
            self.ship_hit();
        } else if self.fleet.reached_bottom(self.settings.screen_height) {
            self.ship_hit();
        }
    }

    /// Lose a ship.  With ships to spare the round restarts after a short
    /// pause; otherwise the game ends.
    pub fn ship_hit(&mut self) {
        if !self.stats.game_active {
            return;
        }
        self.stats.ships_left = self.stats.ships_left.saturating_sub(1);

        if self.stats.ships_left > 0 {
            self.bullets.clear();
            self.fleet.rebuild(&self.settings);
            self.ship.center_ship(&self.settings);
            self.pause_frames = self.settings.hit_pause_frames;
            log::info!("ship hit, {} left", self.stats.ships_left);
        } else {
            self.stats.game_active = false;
            self.pointer_visible = true;
            self.ship.moving_left = false;
            self.ship.moving_right = false;
            log::info!(
                "game over: score {}, level {}, high score {}",
                self.stats.score,
                self.stats.level,
                self.stats.high_score
            );
        }
    }

    // ── Output ────────────────────────────────────────────────────────────────

    /// Draw list for this frame: bullets, ship, aliens, HUD, then the Play
    /// button when no game is running.
    pub fn frame(&self) -> Frame {
        let mut commands: Vec<DrawCommand> = self
            .bullets
            .iter()
            .map(|b| DrawCommand::FillRect { rect: b.rect(), color: b.color })
            .collect();

        commands.push(DrawCommand::Image { rect: self.ship.rect(), image: ImageHandle::Ship });
        commands.extend(
            self.fleet
                .aliens
                .iter()
                .map(|a| DrawCommand::Image { rect: a.rect(), image: ImageHandle::Alien }),
        );
        commands.extend(scoreboard::draw_commands(&self.stats, &self.settings));

        if !self.stats.game_active {
            commands.push(self.play_button.draw_command());
        }

        Frame {
            background: self.settings.bg_color,
            commands,
            pointer_visible: self.pointer_visible,
        }
    }
}
