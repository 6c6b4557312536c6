/// Per-tick collision resolution between the ship, its arsenal and the
/// fleet.
///
/// Checks run in a fixed order on post-movement positions:
///
/// 1. ship vs fleet (the ship is sent back to its spawn point),
/// 2. fleet vs defense line,
/// 3. projectiles vs fleet (both sides of every hit are removed),
/// 4. fleet wiped.
///
/// Nothing here touches lives, score or level; the caller applies the
/// returned outcome.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::entities::{Enemy, EnemyId, Projectile, ProjectileId};
use crate::fleet::Fleet;
use crate::geometry::Body;
use crate::settings::Settings;
use crate::ship::Ship;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    /// Each destroyed enemy and the projectile(s) that hit it this tick.
    pub kills: BTreeMap<EnemyId, Vec<ProjectileId>>,
    pub ship_hit: bool,
    pub fleet_breached: bool,
    pub fleet_wiped: bool,
}

impl CollisionOutcome {
    pub fn destroyed(&self) -> usize {
        self.kills.len()
    }

    /// Either a direct hit or a breach costs a life. Both in one tick still
    /// cost only one.
    pub fn life_lost(&self) -> bool {
        self.ship_hit || self.fleet_breached
    }
}

pub fn resolve(ship: &mut Ship, fleet: &mut Fleet, settings: &Settings) -> CollisionOutcome {
    let ship_hit = fleet.enemies().iter().any(|e| ship.collides_with(e));
    if ship_hit {
        ship.center(settings);
    }

    let fleet_breached = fleet.is_breached(settings.defense_line);

    let kills = match_hits(fleet.enemies(), ship.arsenal.projectiles());
    if !kills.is_empty() {
        let dead_enemies: BTreeSet<EnemyId> = kills.keys().copied().collect();
        let spent: BTreeSet<ProjectileId> = kills.values().flatten().copied().collect();
        fleet.remove(&dead_enemies);
        ship.arsenal.remove(&spent);
        debug!(
            enemies = dead_enemies.len(),
            projectiles = spent.len(),
            "projectile hits"
        );
    }

    CollisionOutcome {
        kills,
        ship_hit,
        fleet_breached,
        fleet_wiped: fleet.is_wiped(),
    }
}

/// Pair projectiles with the enemies they overlap.
///
/// Enemies are visited in fleet order and claim every still-unclaimed
/// projectile touching them, so a projectile is spent on at most one enemy
/// while an enemy may absorb several.
pub fn match_hits(
    enemies: &[Enemy],
    projectiles: &[Projectile],
) -> BTreeMap<EnemyId, Vec<ProjectileId>> {
    let mut claimed: BTreeSet<ProjectileId> = BTreeSet::new();
    let mut kills = BTreeMap::new();

    for enemy in enemies {
        let hits: Vec<ProjectileId> = projectiles
            .iter()
            .filter(|p| !claimed.contains(&p.id) && enemy.collides_with(*p))
            .map(|p| p.id)
            .collect();
        if hits.is_empty() {
            continue;
        }
        claimed.extend(hits.iter().copied());
        kills.insert(enemy.id, hits);
    }

    kills
}
