//! Player projectiles: firing, flight, and pursuer hits

use glam::Vec3;

use crate::consts::*;
use crate::sim::effects;
use crate::sim::state::{GameEvent, Projectile, WorldState};

/// Spawn a projectile at the plane's nose, aimed along the forward axis
/// rotated by the current pitch (nose-up fires upward)
pub fn fire(state: &mut WorldState) {
    let plane = &state.plane;
    let pitch = plane.pitch.to_radians();
    state.projectiles.push(Projectile {
        pos: Vec3::new(
            plane.pos.x,
            plane.pos.y + MUZZLE_FORWARD,
            plane.pos.z + MUZZLE_UP,
        ),
        dir: Vec3::new(0.0, pitch.cos(), pitch.sin()),
        speed: PROJECTILE_SPEED,
    });
    state.events.push(GameEvent::ProjectileFired);
}

/// Advance all projectiles one tick and resolve pursuer hits.
///
/// A projectile is removed when it leaves its travel budget around the plane
/// or on its first pursuer hit (one kill credited per projectile per tick).
pub fn update_projectiles(state: &mut WorldState) {
    let WorldState {
        plane,
        projectiles,
        pursuers,
        explosions,
        progression,
        events,
        ..
    } = state;

    projectiles.retain_mut(|projectile| {
        projectile.pos += projectile.dir * projectile.speed;

        if projectile.pos.distance(plane.pos) > PROJECTILE_RANGE {
            return false;
        }

        for pursuer in pursuers.iter_mut().filter(|p| p.active) {
            if projectile.pos.distance(pursuer.pos) < PROJECTILE_HIT_RADIUS {
                pursuer.active = false;
                effects::spawn(explosions, pursuer.pos);
                progression.score += PROJECTILE_KILL_SCORE;
                events.push(GameEvent::PursuerDowned);
                return false;
            }
        }
        true
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> WorldState {
        WorldState::new(777)
    }

    #[test]
    fn test_fire_spawns_at_nose() {
        let mut state = world();
        fire(&mut state);
        let p = &state.projectiles[0];
        assert_eq!(p.pos, Vec3::new(0.0, 50.0, 70.0));
        assert_eq!(p.dir, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(p.speed, PROJECTILE_SPEED);
        assert!(state.events.contains(&GameEvent::ProjectileFired));
    }

    #[test]
    fn test_pitched_up_fires_upward() {
        let mut state = world();
        state.plane.pitch = 25.0;
        fire(&mut state);
        let p = &state.projectiles[0];
        assert!(p.dir.z > 0.0);
        assert!(p.dir.y > 0.0);
        assert!((p.dir.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_projectile_expires_beyond_range() {
        let mut state = world();
        state.pursuers.clear();
        fire(&mut state);
        // 30 units/tick, removed once further than 1000 from the plane
        for _ in 0..40 {
            update_projectiles(&mut state);
        }
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_hit_downs_pursuer_and_scores() {
        let mut state = world();
        fire(&mut state);
        let ahead = state.projectiles[0].pos + Vec3::new(0.0, PROJECTILE_SPEED, 0.0);
        state.pursuers[0].pos = ahead;
        update_projectiles(&mut state);
        assert!(state.projectiles.is_empty());
        assert!(!state.pursuers[0].active);
        assert_eq!(state.progression.score, PROJECTILE_KILL_SCORE);
        assert_eq!(state.explosions.len(), 1);
        assert!(state.events.contains(&GameEvent::PursuerDowned));
    }

    #[test]
    fn test_one_kill_per_projectile() {
        let mut state = world();
        fire(&mut state);
        let ahead = state.projectiles[0].pos + Vec3::new(0.0, PROJECTILE_SPEED, 0.0);
        // Two overlapping pursuers; only the first scanned is credited
        state.pursuers[0].pos = ahead;
        state.pursuers[1].pos = ahead;
        update_projectiles(&mut state);
        assert!(!state.pursuers[0].active);
        assert!(state.pursuers[1].active);
        assert_eq!(state.progression.score, PROJECTILE_KILL_SCORE);
    }

    #[test]
    fn test_inactive_pursuers_not_hit() {
        let mut state = world();
        fire(&mut state);
        let ahead = state.projectiles[0].pos + Vec3::new(0.0, PROJECTILE_SPEED, 0.0);
        state.pursuers[0].pos = ahead;
        state.pursuers[0].active = false;
        update_projectiles(&mut state);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.progression.score, 0);
    }
}
