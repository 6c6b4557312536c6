/// The player's ship: a vertical mover on the left edge that owns its
/// arsenal.

use crate::arsenal::Arsenal;
use crate::geometry::{Body, Rect};
use crate::settings::Settings;

#[derive(Clone, Debug)]
pub struct Ship {
    pub rect: Rect,
    /// Exact vertical position.
    pub y: f32,
    pub moving_up: bool,
    pub moving_down: bool,
    pub arsenal: Arsenal,
}

impl Ship {
    /// A ship at its spawn point (mid-left of the screen) with an empty
    /// arsenal.
    pub fn new(settings: &Settings) -> Self {
        let rect = spawn_rect(settings);
        Ship {
            rect: rect.rounded(),
            y: rect.y,
            moving_up: false,
            moving_down: false,
            arsenal: Arsenal::new(settings.bullets_allowed),
        }
    }

    /// Return to the spawn point. Intent flags and projectiles are untouched.
    pub fn center(&mut self, settings: &Settings) {
        let rect = spawn_rect(settings);
        self.y = rect.y;
        self.rect = rect.rounded();
    }

    /// Apply the intent flags, then advance the arsenal.
    pub fn update(&mut self, settings: &Settings) {
        self.update_movement(settings);
        self.arsenal.update(settings);
    }

    /// A step that would cross the screen edge is refused outright.
    fn update_movement(&mut self, settings: &Settings) {
        let speed = settings.ship_speed;
        let bounds = settings.bounds();

        if self.moving_down && self.y + self.rect.h + speed <= bounds.bottom() {
            self.y += speed;
        }
        if self.moving_up && self.y - speed >= bounds.top() {
            self.y -= speed;
        }

        self.rect.y = self.y.round();
    }

    /// Fire from the middle of the ship's right edge.
    pub fn fire(&mut self, settings: &Settings) -> bool {
        let muzzle = self.rect.mid_right();
        self.arsenal.fire(muzzle, settings)
    }
}

impl Body for Ship {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

fn spawn_rect(settings: &Settings) -> Rect {
    Rect::from_mid_left(
        settings.bounds().mid_left(),
        settings.ship_w,
        settings.ship_h,
    )
}
