//! The alien fleet: grid construction, edge bounce, and collision queries.
//!
//! Grid size is recomputed from the current settings on every rebuild, so a
//! changed play area or sprite footprint is always honoured.

use crate::entities::{Alien, Bullet};
use crate::geometry::{Rect, Sprite};
use crate::settings::Settings;

// ── Grid sizing ───────────────────────────────────────────────────────────────

/// Aliens per row: one footprint of margin each side, one footprint of gap
/// between aliens.  Never negative.
pub fn number_aliens_x(screen_width: i32, alien_width: i32) -> usize {
    if alien_width <= 0 {
        return 0;
    }
    let available = screen_width - 2 * alien_width;
    if available <= 0 {
        0
    } else {
        (available / (2 * alien_width)) as usize
    }
}

/// Rows of aliens: one footprint of margin on top and two above the ship.
/// Never negative.
pub fn number_rows(screen_height: i32, ship_height: i32, alien_height: i32) -> usize {
    if alien_height <= 0 {
        return 0;
    }
    let available = screen_height - 3 * alien_height - ship_height;
    if available <= 0 {
        0
    } else {
        (available / (2 * alien_height)) as usize
    }
}

/// `(columns, rows)` for the current settings.
pub fn grid_dimensions(settings: &Settings) -> (usize, usize) {
    (
        number_aliens_x(settings.screen_width, settings.alien_width),
        number_rows(settings.screen_height, settings.ship_height, settings.alien_height),
    )
}

/// Top-left corner of grid cell `(row, col)`.
pub fn cell_origin(alien_width: i32, alien_height: i32, row: usize, col: usize) -> (i32, i32) {
    (
        alien_width + 2 * alien_width * col as i32,
        alien_height + 2 * alien_height * row as i32,
    )
}

// ── Fleet ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct Fleet {
    pub aliens: Vec<Alien>,
}

impl Fleet {
    /// A full grid for the current settings.
    pub fn create(settings: &Settings) -> Self {
        let mut fleet = Fleet::default();
        fleet.rebuild(settings);
        fleet
    }

    /// Replace whatever is left with a full grid.
    pub fn rebuild(&mut self, settings: &Settings) {
        let (cols, rows) = grid_dimensions(settings);
        let (w, h) = (settings.alien_width, settings.alien_height);
        self.clear();
        for row in 0..rows {
            for col in 0..cols {
                let (x, y) = cell_origin(w, h, row, col);
                self.aliens.push(Alien::at(x, y, w, h));
            }
        }
        log::debug!("fleet built: {cols} columns x {rows} rows");
    }

    /// Drop every alien.  The fleet stays empty until the next rebuild.
    pub fn clear(&mut self) {
        self.aliens.clear();
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    /// If any alien touches a side, drop the whole fleet and reverse its
    /// heading.  Returns whether a bounce happened.
    pub fn check_fleet_edges(&mut self, settings: &mut Settings) -> bool {
        let screen_width = settings.screen_width;
        if self.aliens.iter().any(|a| a.check_edges(screen_width)) {
            self.change_fleet_direction(settings);
            true
        } else {
            false
        }
    }

    pub fn change_fleet_direction(&mut self, settings: &mut Settings) {
        for alien in &mut self.aliens {
            alien.drop_by(settings.fleet_drop_speed);
        }
        settings.dynamic.reverse_fleet();
    }

    /// Advance every alien by the shared speed and heading.
    pub fn update(&mut self, settings: &Settings) {
        for alien in &mut self.aliens {
            alien.update(settings);
        }
    }

    pub fn collides_with(&self, rect: &Rect) -> bool {
        self.aliens.iter().any(|a| a.rect.colliderect(rect))
    }

    /// True if any alien's bottom edge has reached the bottom of the play area.
    pub fn reached_bottom(&self, screen_height: i32) -> bool {
        self.aliens.iter().any(|a| a.rect.bottom() >= screen_height)
    }

    /// Resolve bullet/alien overlaps.
    ///
    /// Bullets are tested in order; every alien a bullet overlaps is
    /// destroyed along with the bullet, so a later bullet never sees an alien
    /// an earlier one already took.  Returns the kill count of each bullet
    /// that hit something.
    pub fn resolve_bullet_hits(&mut self, bullets: &mut Vec<Bullet>) -> Vec<usize> {
        let mut kills = Vec::new();
        bullets.retain(|bullet| {
            let before = self.aliens.len();
            self.aliens.retain(|alien| !alien.rect.colliderect(&bullet.rect));
            let destroyed = before - self.aliens.len();
            if destroyed > 0 {
                kills.push(destroyed);
                false
            } else {
                true
            }
        });
        kills
    }
}
