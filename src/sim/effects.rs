//! Short-lived explosion markers
//!
//! Spawned by destructive collisions and projectile kills, decayed once per
//! tick. Cosmetic only - nothing reads them back into gameplay.

use glam::Vec3;

use crate::consts::EXPLOSION_TICKS;
use crate::sim::state::Explosion;

pub fn spawn(explosions: &mut Vec<Explosion>, pos: Vec3) {
    explosions.push(Explosion {
        pos,
        ticks_left: EXPLOSION_TICKS,
    });
}

/// Count every timer down and drop the expired ones
pub fn update_explosions(explosions: &mut Vec<Explosion>) {
    explosions.retain_mut(|explosion| {
        explosion.ticks_left -= 1;
        explosion.ticks_left > 0
    });
}
