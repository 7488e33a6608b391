//! Pursuer steering
//!
//! Pursuers home toward the plane under one hard rule: an active pursuer
//! never trails the plane along the forward axis. Every branch below either
//! keeps the pursuer strictly ahead or deactivates it for the recycler.

use crate::consts::*;
use crate::sim::state::WorldState;

/// Steer every active pursuer one tick
pub fn update_pursuers(state: &mut WorldState) {
    let WorldState { plane, pursuers, progression, .. } = state;
    let ticks = progression.ticks as f32;
    let speed = PURSUER_BASE_SPEED + progression.level as f32 * PURSUER_SPEED_PER_LEVEL;

    for pursuer in pursuers.iter_mut().filter(|p| p.active) {
        // Forward invariant: trailing pursuers are snapped ahead before any
        // steering happens
        if pursuer.pos.y <= plane.pos.y {
            pursuer.pos.y = plane.pos.y + PURSUER_PUSH_AHEAD;
        }

        let to_plane = plane.pos - pursuer.pos;
        let distance = to_plane.length();

        if distance > 0.0 {
            let dir = to_plane / distance;
            let next = pursuer.pos + dir * speed;

            if next.y > plane.pos.y {
                pursuer.pos = next;
            } else {
                // A full homing step would put the pursuer behind; fall back
                // to a damped lateral/vertical correction and keep a minimum
                // forward lead
                pursuer.pos.x += dir.x * speed * 0.3;
                pursuer.pos.z += dir.z * speed;
                pursuer.pos.y = pursuer.pos.y.max(plane.pos.y + PURSUER_MIN_LEAD);
            }

            // Small oscillatory evasion so pursuers never fly perfectly
            // straight lines
            pursuer.pos.x += (ticks * 0.05 + pursuer.pos.y * 0.005).sin() * 5.0 * 0.05;
            pursuer.pos.z += (ticks * 0.04 + pursuer.pos.x * 0.005).cos() * 3.0 * 0.05;
        }

        // Leave the fight when too close or too far; the recycler respawns
        // deactivated pursuers ahead
        let distance = pursuer.pos.distance(plane.pos);
        if distance < PURSUER_MIN_RANGE || distance > PURSUER_MAX_RANGE {
            pursuer.active = false;
        }

        // Safety net for anything that still slipped behind
        if pursuer.pos.y < plane.pos.y - PURSUER_BEHIND_SLACK {
            pursuer.active = false;
        }
    }
}
