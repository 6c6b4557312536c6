/// All game entity types. Pure data, no logic.
///
/// Behaviour lives with the collection that owns each entity: enemies in
/// `fleet`, projectiles in `arsenal`.

use crate::geometry::Rect;

// ── Identity ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnemyId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectileId(pub u32);

// ── Enemies ──────────────────────────────────────────────────────────────────

/// Hull design. Cosmetic only; every kind moves and scores the same.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Saucer,
    Crab,
    Squid,
    Wasp,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 4] = [
        EnemyKind::Saucer,
        EnemyKind::Crab,
        EnemyKind::Squid,
        EnemyKind::Wasp,
    ];
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: EnemyKind,
    /// Drawing rect, re-derived from `x`/`y` after every move.
    pub rect: Rect,
    /// Exact position; sub-pixel motion accumulates here.
    pub x: f32,
    pub y: f32,
}

/// Vertical heading shared by the whole fleet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetDirection {
    /// Toward the bottom boundary (+1).
    Down,
    /// Toward the top boundary (−1).
    Up,
}

impl FleetDirection {
    pub fn sign(self) -> f32 {
        match self {
            FleetDirection::Down => 1.0,
            FleetDirection::Up => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            FleetDirection::Down => FleetDirection::Up,
            FleetDirection::Up => FleetDirection::Down,
        }
    }
}

// ── Projectiles ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub id: ProjectileId,
    pub rect: Rect,
    /// Exact horizontal position; projectiles only travel along x.
    pub x: f32,
}

// ── Session ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the first "play" request.
    Idle,
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifeLossCause {
    ShipHit,
    FleetBreach,
}

/// Outcomes of a transition, consumed by the HUD and audio layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    ShotFired,
    EnemiesDestroyed { count: usize },
    ScoreChanged { score: u32 },
    HighScoreChanged { hi_score: u32 },
    LevelChanged { level: u32 },
    LevelCleared { level: u32 },
    LifeLost { ships_left: u32, cause: LifeLossCause },
    GameOver { score: u32 },
}
