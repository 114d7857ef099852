use alien_invasion::geometry::Rect;
use alien_invasion::render::{Anchor, Button, DrawCommand, ImageHandle};
use alien_invasion::scoreboard::*;
use alien_invasion::settings::Settings;
use alien_invasion::stats::GameStats;

fn text_of(cmd: &DrawCommand) -> (&str, Anchor) {
    match cmd {
        DrawCommand::Text { text, anchor, .. } => (text.as_str(), *anchor),
        other => panic!("expected text, got {other:?}"),
    }
}

// ── formatting ────────────────────────────────────────────────────────────────

#[test]
fn scores_round_to_nearest_ten_ties_to_even() {
    assert_eq!(round_to_ten(0), 0);
    assert_eq!(round_to_ten(4), 0);
    assert_eq!(round_to_ten(5), 0);
    assert_eq!(round_to_ten(15), 20);
    assert_eq!(round_to_ten(25), 20);
    assert_eq!(round_to_ten(35), 40);
    assert_eq!(round_to_ten(1234), 1230);
    assert_eq!(round_to_ten(1236), 1240);
}

#[test]
fn thousands_are_comma_grouped() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1000), "1,000");
    assert_eq!(group_thousands(1234567), "1,234,567");
}

#[test]
fn format_score_combines_both() {
    assert_eq!(format_score(12345), "12,340");
    assert_eq!(format_score(112), "110");
}

// ── layout ────────────────────────────────────────────────────────────────────

#[test]
fn hud_layout_for_default_screen() {
    let s = Settings::default();
    let mut stats = GameStats::new(&s);
    stats.score = 1234;
    stats.high_score = 5000;
    stats.level = 3;

    let cmds = draw_commands(&stats, &s);
    assert_eq!(cmds.len(), 3 + 3);

    assert_eq!(text_of(&cmds[0]), ("1,230", Anchor::TopRight { x: 1180, y: 20 }));
    assert_eq!(text_of(&cmds[1]), ("5,000", Anchor::TopCenter { x: 600, y: 20 }));
    assert_eq!(text_of(&cmds[2]), ("3", Anchor::TopRight { x: 1180, y: 78 }));

    let icons: Vec<Rect> = cmds[3..]
        .iter()
        .map(|c| match c {
            DrawCommand::Image { rect, image: ImageHandle::Ship } => *rect,
            other => panic!("expected ship icon, got {other:?}"),
        })
        .collect();
    assert_eq!(
        icons,
        vec![Rect::new(10, 10, 60, 48), Rect::new(70, 10, 60, 48), Rect::new(130, 10, 60, 48)]
    );
}

#[test]
fn hud_has_no_icons_when_out_of_ships() {
    let s = Settings::default();
    let mut stats = GameStats::new(&s);
    stats.ships_left = 0;
    assert_eq!(draw_commands(&stats, &s).len(), 3);
}

#[test]
fn hud_follows_resized_play_area_and_font() {
    let mut s = Settings::default();
    s.screen_width = 800;
    s.font_size = 20;
    let stats = GameStats::new(&s);

    let cmds = draw_commands(&stats, &s);
    assert_eq!(text_of(&cmds[0]), ("0", Anchor::TopRight { x: 780, y: 20 }));
    assert_eq!(text_of(&cmds[1]), ("0", Anchor::TopCenter { x: 400, y: 20 }));
    assert_eq!(text_of(&cmds[2]), ("1", Anchor::TopRight { x: 780, y: 50 }));
    match &cmds[0] {
        DrawCommand::Text { size, .. } => assert_eq!(*size, 20),
        other => panic!("expected text, got {other:?}"),
    }
}

// ── Play button ───────────────────────────────────────────────────────────────

#[test]
fn play_button_is_centred() {
    let b = Button::new(&Settings::default(), "Play");
    assert_eq!(b.rect, Rect::new(500, 375, 200, 50));
    assert!(b.contains(500, 375));
    assert!(b.contains(699, 424));
    assert!(!b.contains(700, 400));
    assert!(!b.contains(600, 425));
}

#[test]
fn play_button_draw_command_carries_label() {
    let s = Settings::default();
    match Button::new(&s, "Play").draw_command() {
        DrawCommand::Button { label, color, label_color, .. } => {
            assert_eq!(label, "Play");
            assert_eq!(color, s.button_color);
            assert_eq!(label_color, s.button_text_color);
        }
        other => panic!("expected button, got {other:?}"),
    }
}
