//! Plane-vs-world collision resolution
//!
//! Fixed evaluation order per tick: rings, obstacles, pursuers, power-ups.
//! Every test is a 3-D Euclidean distance check against the plane with a
//! type-specific radius. Only the first obstacle and the first pursuer hit
//! are resolved each tick; rings and power-ups all resolve.

use crate::consts::*;
use crate::sim::effects;
use crate::sim::recycle::respawn_obstacle;
use crate::sim::state::{GameEvent, WorldState};

/// Resolve this tick's collisions. May invoke the crash transition; a crash
/// that ends the run stops the remaining passes.
pub fn check_collisions(state: &mut WorldState) {
    if state.progression.game_over {
        return;
    }

    // Boost and cheat both grant the no-damage rows
    let protected = state.progression.boost_ticks > 0 || state.progression.cheat;

    collect_rings(state);

    if resolve_obstacle_hit(state, protected) && state.progression.game_over {
        return;
    }

    if resolve_pursuer_hit(state, protected) && state.progression.game_over {
        return;
    }

    collect_powerups(state);
}

fn collect_rings(state: &mut WorldState) {
    let WorldState {
        plane,
        rings,
        progression,
        events,
        ..
    } = state;

    for ring in rings.iter_mut().filter(|r| !r.collected) {
        if plane.pos.distance(ring.pos) < RING_RADIUS {
            ring.collected = true;
            progression.score += RING_SCORE;
            events.push(GameEvent::RingCollected);
        }
    }
}

/// First solid obstacle within radius. Destroyed either way - under
/// boost/cheat the plane smashes through for points, otherwise it crashes.
/// Returns whether a hit was resolved.
fn resolve_obstacle_hit(state: &mut WorldState, protected: bool) -> bool {
    let plane_pos = state.plane.pos;
    let hit = state.obstacles.iter().position(|obstacle| {
        obstacle.kind.is_solid() && plane_pos.distance(obstacle.pos) < OBSTACLE_RADIUS
    });
    let Some(index) = hit else {
        return false;
    };

    if protected {
        let pos = state.obstacles[index].pos;
        effects::spawn(&mut state.explosions, pos);
        state.progression.score += OBSTACLE_SMASH_SCORE;
        state.events.push(GameEvent::ObstacleSmashed);
    } else {
        state.crash();
    }

    // Respawn ahead instead of shrinking the pool
    let WorldState {
        plane,
        obstacles,
        rng,
        ..
    } = state;
    respawn_obstacle(&mut obstacles[index], plane.pos.y, rng);
    true
}

/// First active pursuer within radius. Protected hits ram it for points;
/// unprotected hits feed the accumulator, which crashes the plane at 5.
fn resolve_pursuer_hit(state: &mut WorldState, protected: bool) -> bool {
    let plane_pos = state.plane.pos;
    let hit = state.pursuers.iter().position(|pursuer| {
        pursuer.active && plane_pos.distance(pursuer.pos) < PURSUER_RADIUS
    });
    let Some(index) = hit else {
        return false;
    };

    let pursuer_pos = state.pursuers[index].pos;
    state.pursuers[index].active = false;

    if protected {
        effects::spawn(&mut state.explosions, pursuer_pos);
        state.progression.score += PURSUER_RAM_SCORE;
        state.events.push(GameEvent::PursuerRammed);
    } else {
        state.progression.enemy_hits += 1;
        if state.progression.enemy_hits >= ENEMY_HITS_PER_CRASH {
            state.progression.enemy_hits = 0;
            state.crash();
        }
    }
    true
}

fn collect_powerups(state: &mut WorldState) {
    let WorldState {
        plane,
        powerups,
        explosions,
        progression,
        events,
        ..
    } = state;

    for powerup in powerups.iter_mut().filter(|p| !p.collected) {
        if plane.pos.distance(powerup.pos) < POWERUP_RADIUS {
            powerup.collected = true;
            progression.boost_ticks = BOOST_TICKS;
            plane.velocity = progression.speed * BOOST_MULTIPLIER;
            effects::spawn(explosions, powerup.pos);
            progression.score += POWERUP_SCORE;
            events.push(GameEvent::PowerUpCollected);
        }
    }
}
