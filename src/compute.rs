/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where a fleet may be formed, an RNG handle) and returns
/// a brand-new `GameState` together with the events the transition produced.
/// Side effects are limited to the injected RNG.

use rand::Rng;
use tracing::info;

use crate::collision::{self, CollisionOutcome};
use crate::entities::{GameEvent, GameStatus, LifeLossCause};
use crate::fleet::Fleet;
use crate::settings::Settings;
use crate::ship::Ship;
use crate::stats::GameStats;

// ── State ────────────────────────────────────────────────────────────────────

/// The entire game state. Cloneable so transitions can return a new copy
/// without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Level-one settings, restored on restart.
    pub base_settings: Settings,
    /// Settings for the current level.
    pub settings: Settings,
    pub ship: Ship,
    pub fleet: Fleet,
    pub stats: GameStats,
    pub status: GameStatus,
    /// Ticks left in the pause that follows a lost life.
    pub pause_ticks: u32,
    pub frame: u64,
}

/// Abstract player requests, mapped upstream from raw input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    MoveUp(bool),
    MoveDown(bool),
    Fire,
    Restart,
    /// Handled by the outer loop; a no-op here.
    Quit,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// A formed but idle game waiting for its first `Restart`.
pub fn init_state(settings: Settings, hi_score: u32, rng: &mut impl Rng) -> GameState {
    GameState {
        ship: Ship::new(&settings),
        fleet: Fleet::form(&settings, rng),
        stats: GameStats::new(&settings, hi_score),
        status: GameStatus::Idle,
        pause_ticks: 0,
        frame: 0,
        base_settings: settings.clone(),
        settings,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn apply_intent(
    state: &GameState,
    intent: Intent,
    rng: &mut impl Rng,
) -> (GameState, Vec<GameEvent>) {
    match intent {
        Intent::MoveUp(on) => (set_moving_up(state, on), Vec::new()),
        Intent::MoveDown(on) => (set_moving_down(state, on), Vec::new()),
        Intent::Fire => fire(state),
        Intent::Restart => restart(state, rng),
        Intent::Quit => (state.clone(), Vec::new()),
    }
}

pub fn set_moving_up(state: &GameState, on: bool) -> GameState {
    let mut next = state.clone();
    next.ship.moving_up = on;
    next
}

pub fn set_moving_down(state: &GameState, on: bool) -> GameState {
    let mut next = state.clone();
    next.ship.moving_down = on;
    next
}

/// Fire from the ship. Ignored unless a game is in progress; a rate-limited
/// shot just produces no `ShotFired` event.
pub fn fire(state: &GameState) -> (GameState, Vec<GameEvent>) {
    if state.status != GameStatus::Playing {
        return (state.clone(), Vec::new());
    }
    let mut next = state.clone();
    let events = if next.ship.fire(&next.settings) {
        vec![GameEvent::ShotFired]
    } else {
        Vec::new()
    };
    (next, events)
}

/// Start a new game from any status: base settings, fresh stats (keeping
/// the max and high scores), a new fleet, the ship at its spawn point.
pub fn restart(state: &GameState, rng: &mut impl Rng) -> (GameState, Vec<GameEvent>) {
    let mut next = state.clone();
    next.settings = next.base_settings.clone();
    next.stats.reset(&next.settings);
    next.ship = Ship::new(&next.settings);
    next.fleet.reform(&next.settings, rng);
    next.status = GameStatus::Playing;
    next.pause_ticks = 0;

    info!("new game started");
    let events = vec![
        GameEvent::ScoreChanged {
            score: next.stats.score,
        },
        GameEvent::LevelChanged {
            level: next.stats.level,
        },
    ];
    (next, events)
}

// ── Per-frame tick (nearly pure: RNG is injected) ──────────────────────────

/// Advance the simulation by one frame: ship, then fleet, then collisions.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> (GameState, Vec<GameEvent>) {
    if state.status != GameStatus::Playing {
        return (state.clone(), Vec::new());
    }

    let mut next = state.clone();
    next.frame += 1;

    if next.pause_ticks > 0 {
        next.pause_ticks -= 1;
        return (next, Vec::new());
    }

    // ── 1. Movement ──────────────────────────────────────────────────────────
    next.ship.update(&next.settings);
    next.fleet.update(&next.settings);

    // ── 2. Collisions ────────────────────────────────────────────────────────
    let outcome = collision::resolve(&mut next.ship, &mut next.fleet, &next.settings);

    // ── 3. Apply the outcome ─────────────────────────────────────────────────
    let mut events = Vec::new();
    score_kills(&mut next, &outcome, &mut events);

    if outcome.life_lost() {
        let cause = if outcome.ship_hit {
            LifeLossCause::ShipHit
        } else {
            LifeLossCause::FleetBreach
        };
        lose_life(&mut next, cause, rng, &mut events);
    } else if outcome.fleet_wiped {
        clear_level(&mut next, rng, &mut events);
    }

    (next, events)
}

fn score_kills(state: &mut GameState, outcome: &CollisionOutcome, events: &mut Vec<GameEvent>) {
    let destroyed = outcome.destroyed();
    if destroyed == 0 {
        return;
    }

    let new_high = state.stats.record_kills(destroyed, &state.settings);
    events.push(GameEvent::EnemiesDestroyed { count: destroyed });
    events.push(GameEvent::ScoreChanged {
        score: state.stats.score,
    });
    if new_high {
        events.push(GameEvent::HighScoreChanged {
            hi_score: state.stats.hi_score,
        });
    }
}

fn lose_life(
    state: &mut GameState,
    cause: LifeLossCause,
    rng: &mut impl Rng,
    events: &mut Vec<GameEvent>,
) {
    let last_ship = state.stats.lose_ship();
    info!(?cause, ships_left = state.stats.ships_left, "life lost");
    events.push(GameEvent::LifeLost {
        ships_left: state.stats.ships_left,
        cause,
    });

    if last_ship {
        state.status = GameStatus::GameOver;
        info!(score = state.stats.score, "game over");
        events.push(GameEvent::GameOver {
            score: state.stats.score,
        });
        return;
    }

    reset_level(state, rng);
    state.ship.center(&state.settings);
    state.pause_ticks = state.settings.respawn_pause_ticks;
}

fn clear_level(state: &mut GameState, rng: &mut impl Rng, events: &mut Vec<GameEvent>) {
    let cleared = state.stats.level;
    state.settings = state.settings.scaled();
    reset_level(state, rng);
    state.stats.advance_level();

    info!(level = state.stats.level, "level cleared");
    events.push(GameEvent::LevelCleared { level: cleared });
    events.push(GameEvent::LevelChanged {
        level: state.stats.level,
    });
}

/// Clear the arsenal and form a fresh fleet from the current settings.
fn reset_level(state: &mut GameState, rng: &mut impl Rng) {
    state.ship.arsenal.clear();
    state.fleet.reform(&state.settings, rng);
}
