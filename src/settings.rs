/// Game tuning, built once at startup and passed by reference everywhere.
///
/// `Settings::load` reads an optional TOML file and overlays it on the
/// compiled defaults; keys the file leaves out keep their default value, so
/// a file containing only `fleet_speed = 3.0` is valid.
///
/// Difficulty never mutates a shared record: `scaled()` derives the next
/// level's settings and the caller keeps the original for restarts.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{GameError, GameResult};
use crate::geometry::Rect;

/// Flat settings record. Entity sizes are on-screen footprints.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    // ── Screen ───────────────────────────────────────────────────────────────
    pub screen_w: f32,
    pub screen_h: f32,
    /// Logical ticks per second.
    pub fps: u32,
    /// Multiplier applied to every speed on each level clear.
    pub difficulty_scale: f32,

    // ── Ship ─────────────────────────────────────────────────────────────────
    pub ship_w: f32,
    pub ship_h: f32,
    pub ship_speed: f32,
    /// Ships (lives) at the start of a game.
    pub ship_limit: u32,

    // ── Projectiles ──────────────────────────────────────────────────────────
    pub bullet_w: f32,
    pub bullet_h: f32,
    pub bullet_speed: f32,
    /// Maximum live projectiles per arsenal.
    pub bullets_allowed: usize,

    // ── Fleet ────────────────────────────────────────────────────────────────
    pub alien_w: f32,
    pub alien_h: f32,
    pub fleet_speed: f32,
    /// Horizontal shift applied on every reversal. Negative moves the fleet
    /// toward the ship.
    pub rank_advance: f32,
    /// An enemy whose left edge reaches this x has breached the defences.
    pub defense_line: f32,
    pub alien_points: u32,

    /// Ticks the simulation holds still after a life is lost.
    pub respawn_pause_ticks: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            screen_w: 1200.0,
            screen_h: 800.0,
            fps: 60,
            difficulty_scale: 1.1,

            ship_w: 60.0,
            ship_h: 40.0,
            ship_speed: 5.0,
            ship_limit: 3,

            bullet_w: 80.0,
            bullet_h: 25.0,
            bullet_speed: 7.0,
            bullets_allowed: 7,

            alien_w: 40.0,
            alien_h: 40.0,
            fleet_speed: 2.0,
            rank_advance: -40.0,
            defense_line: 0.0,
            alien_points: 50,

            respawn_pause_ticks: 30,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file is
    /// absent. A file that is present but unreadable or invalid is an error.
    pub fn load(path: &Path) -> GameResult<Settings> {
        if !path.exists() {
            info!(path = %path.display(), "no settings file; using compiled defaults");
            return Ok(Settings::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Settings::from_toml(&contents).map_err(|source| GameError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;

        info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    pub fn from_toml(contents: &str) -> Result<Settings, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn validate(&self) -> GameResult<()> {
        positive("screen_w", self.screen_w)?;
        positive("screen_h", self.screen_h)?;
        positive("fps", self.fps as f32)?;
        positive("difficulty_scale", self.difficulty_scale)?;
        positive("ship_w", self.ship_w)?;
        positive("ship_h", self.ship_h)?;
        non_negative("ship_speed", self.ship_speed)?;
        positive("bullet_w", self.bullet_w)?;
        positive("bullet_h", self.bullet_h)?;
        positive("bullet_speed", self.bullet_speed)?;
        positive("bullets_allowed", self.bullets_allowed as f32)?;
        positive("alien_w", self.alien_w)?;
        positive("alien_h", self.alien_h)?;
        non_negative("fleet_speed", self.fleet_speed)?;
        Ok(())
    }

    /// The settings for the next level: every speed, and the rank advance,
    /// multiplied by `difficulty_scale`.
    pub fn scaled(&self) -> Settings {
        let scale = self.difficulty_scale;
        Settings {
            ship_speed: self.ship_speed * scale,
            bullet_speed: self.bullet_speed * scale,
            fleet_speed: self.fleet_speed * scale,
            rank_advance: self.rank_advance * scale,
            ..self.clone()
        }
    }

    /// The playfield, anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.screen_w, self.screen_h)
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }
}

fn positive(name: &'static str, value: f32) -> GameResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(GameError::InvalidSetting {
            name,
            value: f64::from(value),
            expected: "greater than zero",
        })
    }
}

fn non_negative(name: &'static str, value: f32) -> GameResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(GameError::InvalidSetting {
            name,
            value: f64::from(value),
            expected: "zero or greater",
        })
    }
}
