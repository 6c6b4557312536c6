/// Live projectiles fired by one shooter.
///
/// The concurrency cap is checked only in `fire`. Projectiles leave the pool
/// by flying off the right edge (pruned in `update`) or by hitting an enemy
/// (removed by the collision resolver).

use std::collections::BTreeSet;

use crate::entities::{Projectile, ProjectileId};
use crate::geometry::{Body, Rect};
use crate::settings::Settings;

impl Projectile {
    /// A projectile whose right-edge midpoint sits on `muzzle`.
    pub fn new(id: ProjectileId, muzzle: (f32, f32), w: f32, h: f32) -> Self {
        let rect = Rect::from_mid_right(muzzle, w, h);
        Projectile {
            id,
            rect: rect.rounded(),
            x: rect.x,
        }
    }

    pub fn update(&mut self, speed: f32) {
        self.x += speed;
        self.rect.x = self.x.round();
    }

    /// Fully past the right edge of a `screen_w`-wide screen.
    pub fn is_expired(&self, screen_w: f32) -> bool {
        self.rect.left() >= screen_w
    }
}

impl Body for Projectile {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

#[derive(Clone, Debug)]
pub struct Arsenal {
    projectiles: Vec<Projectile>,
    max_concurrent: usize,
    next_id: u32,
}

impl Arsenal {
    pub fn new(max_concurrent: usize) -> Self {
        Arsenal {
            projectiles: Vec::new(),
            max_concurrent,
            next_id: 0,
        }
    }

    /// Fire one projectile from `muzzle` if under the cap.
    ///
    /// Returns `false` when rate-limited; that is an ordinary outcome.
    pub fn fire(&mut self, muzzle: (f32, f32), settings: &Settings) -> bool {
        if self.projectiles.len() >= self.max_concurrent {
            return false;
        }
        let id = ProjectileId(self.next_id);
        self.next_id += 1;
        self.projectiles.push(Projectile::new(
            id,
            muzzle,
            settings.bullet_w,
            settings.bullet_h,
        ));
        true
    }

    /// Move every projectile, then drop the ones that left the screen.
    pub fn update(&mut self, settings: &Settings) {
        for projectile in &mut self.projectiles {
            projectile.update(settings.bullet_speed);
        }
        self.projectiles.retain(|p| !p.is_expired(settings.screen_w));
    }

    pub fn remove(&mut self, ids: &BTreeSet<ProjectileId>) {
        self.projectiles.retain(|p| !ids.contains(&p.id));
    }

    pub fn clear(&mut self) {
        self.projectiles.clear();
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }
}
