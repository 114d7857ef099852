//! HUD: score, high score, level and remaining ships as draw commands.

use crate::geometry::Rect;
use crate::render::{Anchor, DrawCommand, ImageHandle};
use crate::settings::Settings;
use crate::stats::GameStats;

/// Distance of the score from the top-right corner.
const SCORE_MARGIN: i32 = 20;
/// Gap between the score line and the level line.
const LEVEL_GAP: i32 = 10;
/// Offset of the remaining-ships row from the top-left corner.
const SHIPS_MARGIN: i32 = 10;

/// Round to the nearest 10, ties to even (`25 -> 20`, `35 -> 40`).
pub fn round_to_ten(value: u32) -> u32 {
    let base = value / 10 * 10;
    match value % 10 {
        0..=4 => base,
        5 if (base / 10) % 2 == 0 => base,
        _ => base.saturating_add(10),
    }
}

/// Comma-grouped thousands: `1234567 -> "1,234,567"`.
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// How a score is shown on the HUD.
pub fn format_score(value: u32) -> String {
    group_thousands(round_to_ten(value))
}

/// Score, high score, level, then one ship icon per remaining life, laid
/// out for the play area in `settings`.
pub fn draw_commands(stats: &GameStats, settings: &Settings) -> Vec<DrawCommand> {
    let label = |text: String, anchor: Anchor| DrawCommand::Text {
        text,
        anchor,
        color: settings.text_color,
        background: Some(settings.bg_color),
        size: settings.font_size,
    };

    let score_top = SCORE_MARGIN;
    let level_top = score_top + i32::from(settings.font_size) + LEVEL_GAP;
    let right = settings.screen_width - SCORE_MARGIN;

    let mut commands = vec![
        label(format_score(stats.score), Anchor::TopRight { x: right, y: score_top }),
        label(
            format_score(stats.high_score),
            Anchor::TopCenter { x: settings.screen_width / 2, y: score_top },
        ),
        label(stats.level.to_string(), Anchor::TopRight { x: right, y: level_top }),
    ];

    for n in 0..stats.ships_left as i32 {
        commands.push(DrawCommand::Image {
            rect: Rect::new(
                SHIPS_MARGIN + n * settings.ship_width,
                SHIPS_MARGIN,
                settings.ship_width,
                settings.ship_height,
            ),
            image: ImageHandle::Ship,
        });
    }
    commands
}
