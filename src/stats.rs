//! Score, level and lives bookkeeping.

use crate::settings::Settings;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStats {
    pub score: u32,
    /// Best score this process has seen.  Survives `reset_stats`.
    pub high_score: u32,
    pub level: u32,
    pub ships_left: u32,
    pub game_active: bool,
}

impl GameStats {
    /// Fresh counters, waiting at the menu.
    pub fn new(settings: &Settings) -> Self {
        let mut stats = GameStats {
            score: 0,
            high_score: 0,
            level: 1,
            ships_left: 0,
            game_active: false,
        };
        stats.reset_stats(settings);
        stats
    }

    /// Reset the per-game counters.  `high_score` and `game_active` are
    /// left alone.
    pub fn reset_stats(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Raise the high score to the current score if it was beaten.
    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}
