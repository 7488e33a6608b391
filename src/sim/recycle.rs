//! Endless-world object recycling
//!
//! Pools are fixed-size; objects that fall behind the plane (or pursuers
//! that go inactive) are relocated to randomized positions ahead of it and
//! reset to spawn defaults. No allocation happens after init.

use glam::{Vec2, Vec3};
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::state::{random_obstacle_kind, Obstacle, Plane, Pursuer, WorldState};

/// Relocate everything eligible this tick. Each pool uses its own "behind"
/// test so one pass never carries another pool's condition.
pub fn recycle_objects(state: &mut WorldState) {
    let WorldState {
        plane,
        rings,
        obstacles,
        pursuers,
        powerups,
        rng,
        ..
    } = state;
    let plane_y = plane.pos.y;

    for ring in rings.iter_mut() {
        if ring.pos.y < plane_y - RECYCLE_BEHIND {
            ring.pos = Vec3::new(
                rng.random_range(-500.0..500.0),
                plane_y + SPAWN_AHEAD,
                rng.random_range(100.0..300.0),
            );
            ring.collected = false;
        }
    }

    for obstacle in obstacles.iter_mut() {
        if obstacle.pos.y < plane_y - RECYCLE_BEHIND {
            respawn_obstacle(obstacle, plane_y, rng);
        }
    }

    // Pursuers recycle aggressively: anything inactive or closing in on the
    // plane's forward coordinate goes back out ahead
    for pursuer in pursuers.iter_mut() {
        if pursuer.pos.y < plane_y + PURSUER_RECYCLE_MARGIN || !pursuer.active {
            respawn_pursuer(pursuer, plane, rng);
        }
    }

    for powerup in powerups.iter_mut() {
        if powerup.pos.y < plane_y - RECYCLE_BEHIND || powerup.collected {
            powerup.pos = Vec3::new(
                rng.random_range(-300.0..300.0),
                plane_y + SPAWN_AHEAD,
                rng.random_range(100.0..250.0),
            );
            powerup.collected = false;
        }
    }
}

/// Fresh obstacle ahead of the plane with a re-rolled kind. Also used by the
/// collision pass to respawn a destroyed obstacle without shrinking the pool.
pub(crate) fn respawn_obstacle(obstacle: &mut Obstacle, plane_y: f32, rng: &mut Pcg32) {
    obstacle.pos = Vec3::new(
        rng.random_range(-600.0..600.0),
        plane_y + SPAWN_AHEAD,
        rng.random_range(50.0..400.0),
    );
    obstacle.kind = random_obstacle_kind(rng);
}

pub(crate) fn respawn_pursuer(pursuer: &mut Pursuer, plane: &Plane, rng: &mut Pcg32) {
    pursuer.pos = Vec3::new(
        plane.pos.x + rng.random_range(-400.0..400.0),
        plane.pos.y + rng.random_range(1500.0..3000.0),
        plane.pos.z + rng.random_range(-150.0..150.0),
    );
    pursuer.drift = Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
    pursuer.active = true;
}
