/// Rendering layer: all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state. No game logic is performed; this module only scales the
/// logical pixel screen onto the terminal grid and draws it.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use alien_invasion::compute::GameState;
use alien_invasion::entities::{EnemyKind, GameStatus};
use alien_invasion::geometry::Rect;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::Green;
const C_HUD_LIVES: Color = Color::Red;
const C_SHIP: Color = Color::White;
const C_PROJECTILE: Color = Color::Cyan;
const C_DEFENSE_LINE: Color = Color::DarkRed;
const C_HINT: Color = Color::DarkGrey;

/// Rows reserved above the playfield for the HUD.
const HUD_ROWS: u16 = 1;
/// Rows reserved below the playfield for the controls hint.
const HINT_ROWS: u16 = 1;

/// Maps logical pixels to terminal cells.
struct Viewport {
    sx: f32,
    sy: f32,
    cols: u16,
    rows: u16,
}

impl Viewport {
    fn new(state: &GameState, width: u16, height: u16) -> Self {
        let rows = height.saturating_sub(HUD_ROWS + HINT_ROWS);
        Viewport {
            sx: f32::from(width) / state.settings.screen_w,
            sy: f32::from(rows) / state.settings.screen_h,
            cols: width,
            rows,
        }
    }

    /// Cell span `(col0, row0, col1, row1)` (exclusive end) covered by
    /// `rect`, at least one cell in each direction, clipped to the field.
    fn cells(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        let c0 = (rect.left() * self.sx).floor() as i32;
        let r0 = (rect.top() * self.sy).floor() as i32;
        let c1 = ((rect.right() * self.sx).ceil() as i32).max(c0 + 1);
        let r1 = ((rect.bottom() * self.sy).ceil() as i32).max(r0 + 1);

        let c0 = c0.max(0);
        let r0 = r0.max(0);
        let c1 = c1.min(i32::from(self.cols));
        let r1 = r1.min(i32::from(self.rows));
        if c0 >= c1 || r0 >= r1 {
            return None;
        }
        Some((c0 as u16, r0 as u16 + HUD_ROWS, c1 as u16, r1 as u16 + HUD_ROWS))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let view = Viewport::new(state, width, height);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, state)?;
    draw_defense_line(out, state, &view)?;

    for enemy in state.fleet.enemies() {
        let (glyph, color) = enemy_look(enemy.kind);
        fill_rect(out, &view, &enemy.rect, glyph, color)?;
    }
    for projectile in state.ship.arsenal.projectiles() {
        fill_rect(out, &view, &projectile.rect, '─', C_PROJECTILE)?;
    }
    fill_rect(out, &view, &state.ship.rect, '▶', C_SHIP)?;

    draw_controls_hint(out, height)?;

    match state.status {
        GameStatus::Idle => draw_banner(out, width, height, &["ALIEN INVASION", "ENTER to play"])?,
        GameStatus::GameOver => {
            let score = format!("Score: {}", state.stats.score);
            draw_banner(out, width, height, &["GAME OVER", score.as_str(), "ENTER to play again"])?
        }
        GameStatus::Playing => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let stats = &state.stats;

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print("♥".repeat(stats.ships_left as usize)))?;

    out.queue(Print("  "))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(format!("Level: {}", stats.level)))?;

    out.queue(Print("  "))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!(
        "Score: {:>6}  Max: {:>6}  Hi: {:>6}",
        stats.score, stats.max_score, stats.hi_score
    )))?;
    Ok(())
}

// ── Playfield ─────────────────────────────────────────────────────────────────

fn enemy_look(kind: EnemyKind) -> (char, Color) {
    match kind {
        EnemyKind::Saucer => ('◆', Color::Green),
        EnemyKind::Crab => ('▓', Color::Magenta),
        EnemyKind::Squid => ('▒', Color::Red),
        EnemyKind::Wasp => ('▲', Color::Yellow),
    }
}

fn fill_rect<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: &Rect,
    glyph: char,
    color: Color,
) -> std::io::Result<()> {
    let Some((c0, r0, c1, r1)) = view.cells(rect) else {
        return Ok(());
    };
    let line: String = std::iter::repeat(glyph).take(usize::from(c1 - c0)).collect();

    out.queue(style::SetForegroundColor(color))?;
    for row in r0..r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

fn draw_defense_line<W: Write>(
    out: &mut W,
    state: &GameState,
    view: &Viewport,
) -> std::io::Result<()> {
    let col = (state.settings.defense_line * view.sx).floor();
    if col < 0.0 || col >= f32::from(view.cols) {
        return Ok(());
    }
    out.queue(style::SetForegroundColor(C_DEFENSE_LINE))?;
    for row in HUD_ROWS..HUD_ROWS + view.rows {
        out.queue(cursor::MoveTo(col as u16, row))?;
        out.queue(Print("┊"))?;
    }
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("↑ ↓ / W S : Move   SPACE : Shoot   ENTER : Play   Q : Quit"))?;
    Ok(())
}

fn draw_banner<W: Write>(
    out: &mut W,
    width: u16,
    height: u16,
    lines: &[&str],
) -> std::io::Result<()> {
    let cx = width / 2;
    let top = (height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, line) in lines.iter().enumerate() {
        let color = if i == 0 { Color::Red } else { Color::White };
        out.queue(cursor::MoveTo(
            cx.saturating_sub(line.chars().count() as u16 / 2),
            top + i as u16,
        ))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(*line))?;
    }
    Ok(())
}
