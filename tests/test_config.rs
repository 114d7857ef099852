use std::path::Path;
use std::time::Duration;

use alien_invasion::settings::Rgb;
use alien_invasion::{Config, ConfigError};

#[test]
fn empty_file_means_defaults() {
    let c = Config::from_toml_str("").unwrap();
    assert_eq!(c.fps, 60);
    assert_eq!(c.settings.screen_width, 1200);
    assert_eq!(c.settings().hit_pause_frames, 30);
}

#[test]
fn overrides_merge_with_defaults() {
    let text = r#"
        fps = 30
        hit_pause_secs = 0.25

        [settings]
        screen_width = 800
        bullets_allowed = 5
        bullet_color = [1, 2, 3]
    "#;
    let c = Config::from_toml_str(text).unwrap();
    let s = c.settings();
    assert_eq!(s.screen_width, 800);
    assert_eq!(s.screen_height, 800);
    assert_eq!(s.bullets_allowed, 5);
    assert_eq!(s.bullet_color, Rgb(1, 2, 3));
    assert_eq!(s.hit_pause_frames, 8); // ceil(0.25 × 30)
    assert_eq!(s.dynamic.alien_points, 50);
}

#[test]
fn overridden_speeds_feed_the_dynamic_baseline() {
    let c = Config::from_toml_str("[settings]\nalien_speed_factor = 2.5\nalien_points = 10\n").unwrap();
    let s = c.settings();
    assert_eq!(s.dynamic.alien_speed_factor, 2.5);
    assert_eq!(s.dynamic.alien_points, 10);
}

#[test]
fn zero_fps_is_rejected() {
    assert!(matches!(Config::from_toml_str("fps = 0"), Err(ConfigError::Invalid(_))));
}

#[test]
fn shrinking_scales_are_rejected() {
    let err = Config::from_toml_str("[settings]\nspeedup_scale = 0.5\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("speedup_scale"));
}

#[test]
fn negative_speed_is_rejected() {
    let err = Config::from_toml_str("[settings]\nship_speed_factor = -1.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    assert!(matches!(Config::from_toml_str("fps = "), Err(ConfigError::Parse(_))));
    assert!(matches!(Config::from_toml_str("fps = \"fast\""), Err(ConfigError::Parse(_))));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let err = Config::load(Some(Path::new("does/not/exist.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn frame_duration_from_fps() {
    let c = Config { fps: 50, ..Config::default() };
    assert_eq!(c.frame_duration(), Duration::from_millis(20));
}
