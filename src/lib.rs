//! Alien Invasion — game core plus a terminal frontend.
//!
//! The simulation (`game`, `fleet`, `entities`, `stats`, `settings`) is
//! single-threaded and deterministic.  It consumes decoded [`input::Intent`]s
//! and exposes a per-frame [`render::Frame`] draw list; it never touches the
//! terminal itself.  `display` and `input` are the crossterm adapters used by
//! the binary.

pub mod config;
pub mod display;
pub mod entities;
pub mod fleet;
pub mod game;
pub mod geometry;
pub mod input;
pub mod render;
pub mod scoreboard;
pub mod settings;
pub mod stats;

pub use config::{Config, ConfigError};
pub use game::{Control, Game};
pub use input::Intent;
pub use settings::Settings;
