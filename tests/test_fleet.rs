use alien_invasion::entities::{Alien, Bullet, Ship};
use alien_invasion::fleet::*;
use alien_invasion::geometry::Rect;
use alien_invasion::settings::{FleetDirection, Settings};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn bullet_at(settings: &Settings, x: i32, y: i32) -> Bullet {
    let mut b = Bullet::new(settings, &Ship::new(settings));
    b.rect = Rect::new(x, y, b.rect.w, b.rect.h);
    b.y = y as f32;
    b
}

// ── grid sizing ───────────────────────────────────────────────────────────────

#[test]
fn grid_for_default_screen() {
    assert_eq!(number_aliens_x(1200, 50), 11);
    assert_eq!(number_rows(800, 48, 50), 6);
    assert_eq!(grid_dimensions(&Settings::default()), (11, 6));
}

#[test]
fn grid_is_empty_when_space_runs_out() {
    assert_eq!(number_aliens_x(100, 50), 0);
    assert_eq!(number_aliens_x(50, 50), 0);
    assert_eq!(number_aliens_x(0, 50), 0);
    assert_eq!(number_rows(100, 48, 50), 0);
    assert_eq!(number_rows(0, 0, 10), 0);
}

#[test]
fn grid_is_empty_for_degenerate_footprint() {
    assert_eq!(number_aliens_x(1200, 0), 0);
    assert_eq!(number_rows(800, 48, 0), 0);
    assert_eq!(number_aliens_x(1200, -5), 0);
}

#[test]
fn cell_origins_step_by_two_footprints() {
    assert_eq!(cell_origin(50, 50, 0, 0), (50, 50));
    assert_eq!(cell_origin(50, 50, 0, 1), (150, 50));
    assert_eq!(cell_origin(50, 50, 5, 10), (1050, 550));
}

#[test]
fn random_geometry_always_fits_with_margins() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let settings = Settings {
            screen_width: rng.gen_range(0..2000),
            screen_height: rng.gen_range(0..2000),
            ship_height: rng.gen_range(1..200),
            alien_width: rng.gen_range(1..300),
            alien_height: rng.gen_range(1..300),
            ..Settings::default()
        };
        let (cols, rows) = grid_dimensions(&settings);
        let fleet = Fleet::create(&settings);
        assert_eq!(fleet.len(), cols * rows);

        let (w, h) = (settings.alien_width, settings.alien_height);
        for alien in &fleet.aliens {
            assert!(alien.rect.left() >= w);
            assert!(alien.rect.right() <= settings.screen_width - w);
            assert!(alien.rect.top() >= h);
            assert!(alien.rect.bottom() <= settings.screen_height - settings.ship_height - 2 * h);
        }
    }
}

#[test]
fn rebuild_follows_current_settings() {
    let mut settings = Settings::default();
    let mut fleet = Fleet::create(&settings);
    assert_eq!(fleet.len(), 66);

    settings.screen_width = 600; // (600 - 100) / 100 = 5 columns
    fleet.rebuild(&settings);
    assert_eq!(fleet.len(), 5 * 6);
}

#[test]
fn rebuild_on_a_cramped_screen_drops_the_survivors() {
    let mut settings = Settings::default();
    let mut fleet = Fleet::create(&settings);
    settings.screen_width = 120;
    fleet.rebuild(&settings);
    assert!(fleet.is_empty());
}

// ── edges & motion ────────────────────────────────────────────────────────────

#[test]
fn no_bounce_in_open_space() {
    let mut settings = Settings::default();
    let mut fleet = Fleet::create(&settings);
    assert!(!fleet.check_fleet_edges(&mut settings));
    assert_eq!(settings.dynamic.fleet_direction, FleetDirection::Right);
    assert_eq!(fleet.aliens[0].rect.y, 50);
}

#[test]
fn left_edge_drops_fleet_and_turns_it_around() {
    let mut settings = Settings::default();
    settings.dynamic.fleet_direction = FleetDirection::Left;
    let mut fleet = Fleet { aliens: vec![Alien::at(0, 100, 50, 50), Alien::at(300, 200, 50, 50)] };

    assert!(fleet.check_fleet_edges(&mut settings));
    assert_eq!(settings.dynamic.fleet_direction, FleetDirection::Right);
    assert_eq!(fleet.aliens[0].rect.y, 110);
    assert_eq!(fleet.aliens[1].rect.y, 210);
}

#[test]
fn update_moves_every_alien_the_same_way() {
    let mut settings = Settings::default();
    let mut fleet = Fleet::create(&settings);
    fleet.update(&settings);
    assert!(fleet.aliens.iter().all(|a| (a.rect.x - 50) % 100 == 1));

    settings.dynamic.reverse_fleet();
    fleet.update(&settings);
    fleet.update(&settings);
    assert!(fleet.aliens.iter().all(|a| (a.rect.x - 50) % 100 == 99 || a.rect.x == 49));
    assert_eq!(fleet.aliens[0].rect.x, 49);
}

#[test]
fn bottom_and_overlap_queries() {
    let fleet = Fleet { aliens: vec![Alien::at(100, 700, 50, 50)] };
    assert!(!fleet.reached_bottom(800));
    assert!(fleet.reached_bottom(750));
    assert!(fleet.collides_with(&Rect::new(140, 740, 20, 20)));
    assert!(!fleet.collides_with(&Rect::new(150, 740, 20, 20)));
}

// ── bullet hits ───────────────────────────────────────────────────────────────

#[test]
fn earlier_bullet_claims_the_alien() {
    let settings = Settings::default();
    let mut fleet = Fleet { aliens: vec![Alien::at(100, 100, 50, 50)] };
    let mut bullets = vec![bullet_at(&settings, 110, 120), bullet_at(&settings, 120, 120)];

    let kills = fleet.resolve_bullet_hits(&mut bullets);
    assert_eq!(kills, vec![1]);
    assert!(fleet.is_empty());
    assert_eq!(bullets.len(), 1);
    assert_eq!(bullets[0].rect.x, 120);
}

#[test]
fn kills_are_reported_per_bullet() {
    let settings = Settings::default();
    let mut fleet = Fleet {
        aliens: vec![
            Alien::at(100, 100, 50, 50),
            Alien::at(100, 140, 50, 50),
            Alien::at(400, 100, 50, 50),
            Alien::at(800, 100, 50, 50),
        ],
    };
    let mut bullets = vec![
        bullet_at(&settings, 110, 135), // 135..150 hits the first two
        bullet_at(&settings, 600, 100), // misses
        bullet_at(&settings, 410, 120),
    ];

    let kills = fleet.resolve_bullet_hits(&mut bullets);
    assert_eq!(kills, vec![2, 1]);
    assert_eq!(fleet.len(), 1);
    assert_eq!(bullets.len(), 1);
    assert_eq!(bullets[0].rect.x, 600);
}
