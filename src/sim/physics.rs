//! Plane physics: control application and per-tick integration
//!
//! No exceptional control flow - every boundary (altitude, lateral limits)
//! is handled by clamping, and clamping at a bound also clamps the attitude
//! sign so the plane cannot keep pushing into it.

use crate::consts::*;
use crate::sim::state::WorldState;
use crate::sim::tick::TickInput;

/// Apply this tick's control events to attitude and drift accumulators.
///
/// Two tiers: the primary tier changes bank/pitch and adds a drift impulse;
/// the direct tier adds a larger sideways impulse without banking. Both are
/// additive into the same accumulators.
pub fn apply_controls(state: &mut WorldState, input: &TickInput) {
    let plane = &mut state.plane;

    if input.pitch_up {
        plane.pitch = (plane.pitch + PITCH_STEP).min(MAX_PITCH);
        plane.vertical_vel += VERTICAL_IMPULSE;
    }
    if input.pitch_down {
        plane.pitch = (plane.pitch - PITCH_STEP).max(-MAX_PITCH);
        plane.vertical_vel -= VERTICAL_IMPULSE;
    }
    if input.bank_left {
        plane.roll = (plane.roll + ROLL_STEP).min(MAX_ROLL);
        plane.lateral_vel -= LATERAL_IMPULSE;
    }
    if input.bank_right {
        plane.roll = (plane.roll - ROLL_STEP).max(-MAX_ROLL);
        plane.lateral_vel += LATERAL_IMPULSE;
    }
    if input.slide_left {
        plane.lateral_vel -= DIRECT_IMPULSE;
    }
    if input.slide_right {
        plane.lateral_vel += DIRECT_IMPULSE;
    }
}

/// Advance the plane one tick
pub fn integrate(state: &mut WorldState) {
    let plane = &mut state.plane;
    let progression = &mut state.progression;

    plane.propeller_angle += PROPELLER_STEP;

    // Heading is fixed; the plane always points down +y
    plane.yaw = 0.0;

    // Forward flight, multiplied while the boost window is open
    if progression.boost_ticks > 0 {
        plane.pos.y += progression.speed * BOOST_MULTIPLIER;
    } else {
        plane.pos.y += progression.speed;
    }

    // Drift accumulators move the plane directly
    plane.pos.x += plane.lateral_vel;
    plane.pos.z += plane.vertical_vel;

    // Attitude-coupled drift on top of the direct terms. With the original
    // sign convention (roll positive = banked left) a positive roll drifts
    // the plane toward +x.
    plane.pos.x += plane.velocity * plane.roll.to_radians().sin() * ROLL_DRIFT;
    plane.pos.z += plane.velocity * plane.pitch.to_radians().sin() * PITCH_DRIFT;

    // Air resistance
    plane.lateral_vel *= LATERAL_DAMPING;
    plane.vertical_vel *= VERTICAL_DAMPING;

    // Attitude returns to level when no input holds it
    if plane.roll.abs() > 1.0 {
        plane.roll *= ROLL_DECAY;
    } else {
        plane.roll = 0.0;
    }
    if plane.pitch.abs() > 1.0 {
        plane.pitch *= PITCH_DECAY;
    } else {
        plane.pitch = 0.0;
    }

    // Flight envelope: clamping at a bound also clamps the attitude sign so
    // further motion into the bound stops
    if plane.pos.z < MIN_ALTITUDE {
        plane.pos.z = MIN_ALTITUDE;
        plane.pitch = plane.pitch.max(0.0);
    }
    if plane.pos.z > MAX_ALTITUDE {
        plane.pos.z = MAX_ALTITUDE;
        plane.pitch = plane.pitch.min(0.0);
    }
    if plane.pos.x < -LATERAL_LIMIT {
        plane.pos.x = -LATERAL_LIMIT;
        plane.roll = plane.roll.max(0.0);
    } else if plane.pos.x > LATERAL_LIMIT {
        plane.pos.x = LATERAL_LIMIT;
        plane.roll = plane.roll.min(0.0);
    }

    // Boost countdown; expiry returns the plane to its baseline speed
    if progression.boost_ticks > 0 {
        progression.boost_ticks -= 1;
        if progression.boost_ticks == 0 {
            plane.velocity = progression.speed;
        }
    }
}
