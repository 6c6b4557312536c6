/// The enemy fleet: formation, synchronized movement and the
/// reverse-and-advance protocol.
///
/// The fleet moves as one unit. All members share a single `FleetDirection`;
/// enemies carry no heading of their own and never reference the fleet, they
/// are simply told how far to move.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::debug;

use crate::entities::{Enemy, EnemyId, EnemyKind, FleetDirection};
use crate::geometry::{Body, Rect};
use crate::settings::Settings;

// ── Formation ────────────────────────────────────────────────────────────────

/// Grid geometry for a fresh fleet.
///
/// `rows` is always odd so a blank row borders the block top and bottom;
/// `cols` is always even and the block sits just right of mid-screen, leaving
/// the left half to the player. Either may come out ≤ 0 on a tiny screen, in
/// which case the grid has no cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FleetLayout {
    pub rows: i32,
    pub cols: i32,
    pub x_offset: f32,
    pub y_offset: f32,
}

impl FleetLayout {
    pub fn for_screen(screen_w: f32, screen_h: f32, alien_w: f32, alien_h: f32) -> Self {
        let (rows, cols) = fleet_dimensions(screen_w, screen_h, alien_w, alien_h);
        let half_screen = (screen_w / 2.0).floor();
        FleetLayout {
            rows,
            cols,
            x_offset: ((half_screen + cols as f32 * alien_w) / 2.0).floor(),
            y_offset: ((screen_h - rows as f32 * alien_h) / 2.0).floor(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        FleetLayout::for_screen(
            settings.screen_w,
            settings.screen_h,
            settings.alien_w,
            settings.alien_h,
        )
    }

    /// Populated `(row, col)` cells: those whose zero-based indices are both
    /// odd. Yields nothing when either dimension is ≤ 0.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows.max(0))
            .filter(|row| row % 2 == 1)
            .flat_map(move |row| {
                (0..cols.max(0))
                    .filter(|col| col % 2 == 1)
                    .map(move |col| (row, col))
            })
    }

    /// Top-left corner of cell `(row, col)`.
    pub fn cell_origin(&self, row: i32, col: i32, alien_w: f32, alien_h: f32) -> (f32, f32) {
        (
            self.x_offset + col as f32 * alien_w,
            self.y_offset + row as f32 * alien_h,
        )
    }
}

/// `(rows, cols)` of the formation grid before sparse filling.
///
/// Rows: as many enemy heights as fit, stepped down to the next odd number
/// strictly below. Cols: as many enemy widths as fit in half the screen,
/// stepped down to the next even number strictly below.
pub fn fleet_dimensions(screen_w: f32, screen_h: f32, alien_w: f32, alien_h: f32) -> (i32, i32) {
    let mut rows = (screen_h / alien_h).floor() as i32;
    let mut cols = (screen_w / 2.0 / alien_w).floor() as i32;

    rows -= if rows % 2 == 0 { 1 } else { 2 };
    cols -= if cols % 2 == 0 { 2 } else { 1 };

    (rows, cols)
}

// ── Enemy behaviour ──────────────────────────────────────────────────────────

impl Enemy {
    pub fn new(id: EnemyId, kind: EnemyKind, x: f32, y: f32, w: f32, h: f32) -> Self {
        Enemy {
            id,
            kind,
            rect: Rect::new(x, y, w, h).rounded(),
            x,
            y,
        }
    }

    /// Move vertically by `dy` and re-derive the drawing rect.
    pub fn update(&mut self, dy: f32) {
        self.y += dy;
        self.sync_rect();
    }

    /// Whether this enemy is on or past the top or bottom of `bounds`.
    pub fn check_edges(&self, bounds: &Rect) -> bool {
        self.rect.bottom() >= bounds.bottom() || self.rect.top() <= bounds.top()
    }

    fn shift_x(&mut self, dx: f32) {
        self.x += dx;
        self.sync_rect();
    }

    fn sync_rect(&mut self) {
        self.rect.x = self.x.round();
        self.rect.y = self.y.round();
    }
}

impl Body for Enemy {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

// ── Fleet ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Fleet {
    enemies: Vec<Enemy>,
    direction: FleetDirection,
    rank_advance: f32,
    next_id: u32,
}

impl Fleet {
    /// An empty fleet heading down, advancing by `settings.rank_advance`.
    pub fn new(settings: &Settings) -> Self {
        Fleet {
            enemies: Vec::new(),
            direction: FleetDirection::Down,
            rank_advance: settings.rank_advance,
            next_id: 0,
        }
    }

    /// A fully formed fleet for `settings`. Hull kinds are drawn from `rng`.
    pub fn form(settings: &Settings, rng: &mut impl Rng) -> Self {
        let mut fleet = Fleet::new(settings);
        fleet.populate(settings, rng);
        fleet
    }

    /// Discard every enemy and form a fresh fleet in place. Direction and
    /// rank advance are reset from `settings`; ids keep counting up.
    pub fn reform(&mut self, settings: &Settings, rng: &mut impl Rng) {
        self.enemies.clear();
        self.direction = FleetDirection::Down;
        self.rank_advance = settings.rank_advance;
        self.populate(settings, rng);
    }

    fn populate(&mut self, settings: &Settings, rng: &mut impl Rng) {
        let layout = FleetLayout::from_settings(settings);
        for (row, col) in layout.cells() {
            let (x, y) = layout.cell_origin(row, col, settings.alien_w, settings.alien_h);
            let kind = EnemyKind::ALL[rng.gen_range(0..EnemyKind::ALL.len())];
            self.spawn_at(x, y, kind, settings);
        }
        debug!(
            rows = layout.rows,
            cols = layout.cols,
            enemies = self.enemies.len(),
            "fleet formed"
        );
    }

    /// Add one enemy with its top-left corner at `(x, y)`.
    pub fn spawn_at(&mut self, x: f32, y: f32, kind: EnemyKind, settings: &Settings) -> EnemyId {
        let id = EnemyId(self.next_id);
        self.next_id += 1;
        self.enemies.push(Enemy::new(
            id,
            kind,
            x,
            y,
            settings.alien_w,
            settings.alien_h,
        ));
        id
    }

    /// Advance one tick. Returns `true` when the fleet reversed this tick.
    ///
    /// Edges are tested on last tick's positions, before anything moves, so
    /// an enemy that reached a boundary bounces off it this tick. However
    /// many enemies touch, the fleet reverses and advances exactly once.
    pub fn update(&mut self, settings: &Settings) -> bool {
        let bounds = settings.bounds();

        let reversed = self.enemies.iter().any(|e| e.check_edges(&bounds));
        if reversed {
            self.advance_rank();
            self.direction = self.direction.reversed();
            debug!(direction = ?self.direction, "fleet reversed");
        }

        let dy = settings.fleet_speed * self.direction.sign();
        for enemy in &mut self.enemies {
            enemy.update(dy);
        }
        reversed
    }

    fn advance_rank(&mut self) {
        let dx = self.rank_advance;
        for enemy in &mut self.enemies {
            enemy.shift_x(dx);
        }
    }

    /// Whether any enemy's leading edge has reached `defense_line`.
    pub fn is_breached(&self, defense_line: f32) -> bool {
        self.enemies.iter().any(|e| e.rect.left() <= defense_line)
    }

    pub fn is_wiped(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn remove(&mut self, ids: &BTreeSet<EnemyId>) {
        self.enemies.retain(|e| !ids.contains(&e.id));
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn direction(&self) -> FleetDirection {
        self.direction
    }

    pub fn rank_advance(&self) -> f32 {
        self.rank_advance
    }
}
