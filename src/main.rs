use std::error::Error;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use alien_invasion::display::{self, Viewport};
use alien_invasion::input::KeyTracker;
use alien_invasion::{Config, Control, Game};

#[derive(Parser, Debug)]
#[command(name = "alien_invasion", about = "Shoot down the descending alien fleet")]
struct Args {
    /// TOML config file (defaults to ./alien_invasion.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frame rate override
    #[arg(long)]
    fps: Option<u32>,
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run frames until a quit intent arrives.
///
/// Each frame drains pending terminal events into intents, lets the key
/// tracker release directions that went quiet, ticks the game once and
/// paints the resulting draw list.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game,
    rx: &mpsc::Receiver<Event>,
    frame_time: Duration,
    keyboard_enhanced: bool,
) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut viewport = Viewport::new(cols, rows, &game.settings);
    let mut keys = KeyTracker::new(keyboard_enhanced);
    let mut mouse_captured = false;

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Event::Resize(c, r) = ev {
                viewport = Viewport::new(c, r, &game.settings);
                continue;
            }
            if let Some(intent) = keys.decode(&ev, &viewport) {
                if game.handle_intent(intent) == Control::Quit {
                    return Ok(());
                }
            }
        }
        for intent in keys.end_frame() {
            game.handle_intent(intent);
        }

        game.tick();

        let frame = game.frame();
        if frame.pointer_visible != mouse_captured {
            if frame.pointer_visible {
                out.execute(EnableMouseCapture)?;
            } else {
                out.execute(DisableMouseCapture)?;
            }
            mouse_captured = frame.pointer_visible;
        }
        display::render(out, &frame, &viewport)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(fps) = args.fps {
        config.fps = fps;
        config.validate()?;
    }
    log::info!(
        "starting: {}x{} play area at {} fps",
        config.settings.screen_width,
        config.settings.screen_height,
        config.fps
    );
    let mut game = Game::new(config.settings());

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES))
            .is_ok();
    log::debug!("keyboard enhancement: {keyboard_enhanced}");

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &mut game, &rx, config.frame_duration(), keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    log::info!("session over, high score {}", game.stats.high_score);
    result.map_err(Into::into)
}
