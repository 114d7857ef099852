//! Configuration loader for Alien Invasion.
//!
//! * Looks for `alien_invasion.toml` in the cwd unless overridden by `--config`.
//! * Every key is optional; anything missing keeps its built-in default.
//!
//! ```toml
//! fps = 60
//! hit_pause_secs = 0.5
//!
//! [settings]
//! screen_width = 1200
//! bullets_allowed = 5
//! bullet_color = [200, 40, 40]
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::settings::Settings;

pub const DEFAULT_CONFIG_PATH: &str = "alien_invasion.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target frame rate of the update/render loop.
    pub fps: u32,
    /// Length of the freeze after the ship is hit.
    pub hit_pause_secs: f32,
    /// Static tunable overrides.
    pub settings: Settings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: 60,
            hit_pause_secs: 0.5,
            settings: Settings::default(),
        }
    }
}

impl Config {
    /// Load from a TOML file.
    ///
    /// An explicit `path` must exist and parse.  With no path, a missing
    /// `alien_invasion.toml` silently means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (p, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };
        match fs::read_to_string(&p) {
            Ok(text) => {
                log::debug!("loading config from {}", p.display());
                Self::from_toml_str(&text)
            }
            Err(err) if !explicit && err.kind() == io::ErrorKind::NotFound => {
                log::warn!("{} not found, using defaults", p.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io { path: p, source }),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::Invalid("fps must be at least 1".into()));
        }
        if !self.hit_pause_secs.is_finite() || self.hit_pause_secs < 0.0 {
            return Err(ConfigError::Invalid(
                "hit_pause_secs must be a non-negative number".into(),
            ));
        }
        let s = &self.settings;
        let speeds = [
            ("ship_speed_factor", s.ship_speed_factor),
            ("bullet_speed_factor", s.bullet_speed_factor),
            ("alien_speed_factor", s.alien_speed_factor),
        ];
        for (name, value) in speeds {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        for (name, value) in [("speedup_scale", s.speedup_scale), ("score_scale", s.score_scale)] {
            if !value.is_finite() || value < 1.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be at least 1.0, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Session settings: static overrides, the pause converted to frames,
    /// and a baseline dynamic block.
    pub fn settings(&self) -> Settings {
        let mut settings = self.settings.clone();
        settings.hit_pause_frames = (self.hit_pause_secs * self.fps as f32).ceil() as u32;
        settings.initialize_dynamic_settings();
        settings
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }
}
