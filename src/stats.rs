/// Score, lives and level for the current session.

use crate::settings::Settings;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    /// Best score since the program started; survives restarts.
    pub max_score: u32,
    /// Best score ever, seeded from the score file.
    pub hi_score: u32,
}

impl GameStats {
    pub fn new(settings: &Settings, hi_score: u32) -> Self {
        GameStats {
            ships_left: settings.ship_limit,
            score: 0,
            level: 1,
            max_score: 0,
            hi_score,
        }
    }

    /// Start a new game. Max and high scores carry over.
    pub fn reset(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    /// Credit `destroyed` enemies. Returns `true` if the high score moved.
    pub fn record_kills(&mut self, destroyed: usize, settings: &Settings) -> bool {
        let gained = settings.alien_points.saturating_mul(destroyed as u32);
        self.score = self.score.saturating_add(gained);
        self.max_score = self.max_score.max(self.score);

        if self.score > self.hi_score {
            self.hi_score = self.score;
            true
        } else {
            false
        }
    }

    /// Spend one ship. Returns `true` when that was the last one.
    pub fn lose_ship(&mut self) -> bool {
        self.ships_left = self.ships_left.saturating_sub(1);
        self.ships_left == 0
    }

    pub fn advance_level(&mut self) {
        self.level += 1;
    }
}
