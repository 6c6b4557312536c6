mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use alien_invasion::compute::{apply_intent, init_state, tick, GameState, Intent};
use alien_invasion::entities::{GameEvent, GameStatus};
use alien_invasion::scores::ScoreStore;
use alien_invasion::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "alien_invasion", about = "Hold the left edge against an advancing fleet")]
struct Cli {
    /// TOML file overriding the default settings.
    #[arg(long, default_value = "settings.toml")]
    settings: PathBuf,

    /// High-score file (default: ~/.alien_invasion/scores.json).
    #[arg(long)]
    scores: Option<PathBuf>,

    #[arg(long, default_value = "alien_invasion.log")]
    log_file: PathBuf,
}

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so 8 frames at 60 FPS (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|key| is_held(key_frame, key, frame))
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// Log to a file; stdout belongs to the game screen.
fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

// ── High-score persistence ────────────────────────────────────────────────────

/// Write the high score if it beats what is on disk. Failure is logged and
/// the game carries on.
fn persist_high_score(store: &ScoreStore, state: &GameState, saved: &mut u32) {
    let hi_score = state.stats.hi_score;
    match store.save_if_higher(hi_score, *saved) {
        Ok(true) => *saved = hi_score,
        Ok(false) => {}
        Err(err) => warn!(%err, "high score not saved"),
    }
}

fn high_score_changed(events: &[GameEvent]) -> bool {
    events
        .iter()
        .any(|e| matches!(e, GameEvent::HighScoreChanged { .. }))
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            // Audio hooks; the terminal build stays silent.
            GameEvent::ShotFired | GameEvent::EnemiesDestroyed { .. } => {
                debug!(?event, "sound cue")
            }
            _ => debug!(?event, "game event"),
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Movement keys are tracked in a `key_frame` map recording the frame of the
/// last press/repeat event for every key. Each frame the held set is turned
/// into `MoveUp`/`MoveDown` intents, so Space can be tapped while a
/// direction is held. Terminals with keyboard enhancement send `Release`
/// and drop keys immediately; classic terminals let them expire after
/// `HOLD_WINDOW` frames of silence.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    settings: Settings,
    store: &ScoreStore,
) -> Result<()> {
    let mut rng = thread_rng();
    let mut saved_hi = store.load().hi_score;
    let frame_time = settings.frame_duration();
    let mut state = init_state(settings, saved_hi, &mut rng);

    let up_keys = [KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')];
    let down_keys = [KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')];

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut intents = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code.clone(), frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            intents.push(Intent::Quit)
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            intents.push(Intent::Quit)
                        }
                        KeyCode::Char(' ') => intents.push(Intent::Fire),
                        KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P')
                            if state.status != GameStatus::Playing =>
                        {
                            intents.push(Intent::Restart)
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code.clone(), frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        let up = any_held(&key_frame, &up_keys, frame);
        let down = any_held(&key_frame, &down_keys, frame);
        if up != state.ship.moving_up {
            intents.push(Intent::MoveUp(up));
        }
        if down != state.ship.moving_down {
            intents.push(Intent::MoveDown(down));
        }

        // ── Apply intents, then advance one tick ──────────────────────────────
        for intent in intents {
            if intent == Intent::Quit {
                info!("quit requested");
                persist_high_score(store, &state, &mut saved_hi);
                return Ok(());
            }
            let (next, events) = apply_intent(&state, intent, &mut rng);
            state = next;
            log_events(&events);
        }

        let (next, events) = tick(&state, &mut rng);
        state = next;
        log_events(&events);
        if high_score_changed(&events) {
            persist_high_score(store, &state, &mut saved_hi);
        }

        display::render(out, &state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let settings = Settings::load(&cli.settings)
        .with_context(|| format!("could not load settings from {}", cli.settings.display()))?;
    let store = ScoreStore::new(cli.scores.unwrap_or_else(ScoreStore::default_path));
    info!(scores = %store.path().display(), "starting");

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to HOLD_WINDOW.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

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

    let result = game_loop(&mut out, &rx, settings, &store);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        warn!(%err, "exited with error");
    }
    result
}
