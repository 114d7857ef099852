//! Input intents and their decoding from crossterm events.
//!
//! The game core only ever sees [`Intent`]s.  [`KeyTracker`] turns raw
//! terminal events into intents and works on two classes of terminal:
//!
//! * **Keyboard-enhancement capable** (kitty protocol): real `Release`
//!   events end a held direction.
//! * **Classic terminals**: only `Press` events arrive (OS key-repeat shows
//!   as repeated presses).  A direction counts as held while presses keep
//!   arriving within `hold_window` frames and is released when they stop.

use std::collections::HashMap;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::display::Viewport;

/// A decoded, semantic input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Quit,
    StartMoveLeft,
    StopMoveLeft,
    StartMoveRight,
    StopMoveRight,
    Fire,
    /// Start a new game (ignored while one is running).
    Start,
    /// Pointer click in play-area pixels.
    Click { x: i32, y: i32 },
}

/// Frames a direction stays held without a fresh press on classic
/// terminals.  Four frames at 30 FPS is ~133 ms, shorter than any OS
/// key-repeat interval.
pub const HOLD_WINDOW: u64 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Direction {
    Left,
    Right,
}

impl Direction {
    fn of(code: &KeyCode) -> Option<Self> {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
            _ => None,
        }
    }

    fn start(self) -> Intent {
        match self {
            Direction::Left => Intent::StartMoveLeft,
            Direction::Right => Intent::StartMoveRight,
        }
    }

    fn stop(self) -> Intent {
        match self {
            Direction::Left => Intent::StopMoveLeft,
            Direction::Right => Intent::StopMoveRight,
        }
    }
}

/// Stateful decoder from terminal events to intents.
#[derive(Debug)]
pub struct KeyTracker {
    /// Held direction → frame it was last pressed or repeated.
    last_seen: HashMap<Direction, u64>,
    frame: u64,
    hold_window: u64,
    release_events: bool,
}

impl KeyTracker {
    /// `release_events` says whether the terminal reports key releases.
    pub fn new(release_events: bool) -> Self {
        Self::with_hold_window(release_events, HOLD_WINDOW)
    }

    pub fn with_hold_window(release_events: bool, hold_window: u64) -> Self {
        KeyTracker { last_seen: HashMap::new(), frame: 0, hold_window, release_events }
    }

    /// Decode one terminal event.
    pub fn decode(&mut self, event: &Event, viewport: &Viewport) -> Option<Intent> {
        match event {
            Event::Key(key) => self.decode_key(key),
            Event::Mouse(MouseEvent { kind: MouseEventKind::Down(MouseButton::Left), column, row, .. }) => {
                let (x, y) = viewport.to_screen(*column, *row);
                Some(Intent::Click { x, y })
            }
            _ => None,
        }
    }

    fn decode_key(&mut self, key: &KeyEvent) -> Option<Intent> {
        if let Some(dir) = Direction::of(&key.code) {
            return match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    self.last_seen.insert(dir, self.frame);
                    Some(dir.start())
                }
                KeyEventKind::Release => self.last_seen.remove(&dir).map(|_| dir.stop()),
            };
        }

        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Intent::Quit),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Intent::Quit),
            KeyCode::Char(' ') => Some(Intent::Fire),
            KeyCode::Char('p') | KeyCode::Char('P') => Some(Intent::Start),
            _ => None,
        }
    }

    /// Close the current frame.  On classic terminals this releases any
    /// direction whose presses have gone quiet.
    pub fn end_frame(&mut self) -> Vec<Intent> {
        self.frame += 1;
        if self.release_events {
            return Vec::new();
        }
        let (frame, window) = (self.frame, self.hold_window);
        let expired: Vec<Direction> = self
            .last_seen
            .iter()
            .filter(|&(_, &last)| frame.saturating_sub(last) > window)
            .map(|(&dir, _)| dir)
            .collect();
        expired
            .into_iter()
            .map(|dir| {
                self.last_seen.remove(&dir);
                dir.stop()
            })
            .collect()
    }
}
