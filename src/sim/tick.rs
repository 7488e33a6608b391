//! Fixed-cadence simulation tick
//!
//! One call advances the world by exactly one frame, running the systems in
//! a fixed order: physics, recycling, pursuer AI, projectiles, collisions,
//! effect decay, level check. The ordering is the whole concurrency story -
//! the core is single-threaded and synchronous.

use crate::consts::*;
use crate::sim::state::WorldState;
use crate::sim::{ai, collision, effects, physics, projectile, recycle};

/// Control events for a single tick, already mapped from raw device input
/// by the input-binding collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Primary tier: attitude change plus drift impulse
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub bank_left: bool,
    pub bank_right: bool,
    /// Direct tier: sideways impulse without banking
    pub slide_left: bool,
    pub slide_right: bool,
    /// Fire one projectile
    pub fire: bool,
    /// Cycle the camera mode
    pub cycle_camera: bool,
    /// Toggle cheat mode (damage immunity + auto-fire)
    pub toggle_cheat: bool,
    /// Restart the run; honored only while game-over
    pub restart: bool,
}

/// Advance the world by one frame
pub fn tick(state: &mut WorldState, input: &TickInput) {
    if state.progression.game_over {
        // Terminal state: everything is a no-op except restart
        if input.restart {
            state.restart();
        }
        return;
    }

    state.events.clear();
    state.progression.ticks += 1;

    if input.cycle_camera {
        state.camera = state.camera.next();
    }
    if input.toggle_cheat {
        state.progression.cheat = !state.progression.cheat;
        state.progression.cheat_fire_ticks = 0;
        log::info!(
            "Cheat mode {}",
            if state.progression.cheat { "on" } else { "off" }
        );
    }

    physics::apply_controls(state, input);
    physics::integrate(state);

    recycle::recycle_objects(state);
    ai::update_pursuers(state);

    if input.fire {
        projectile::fire(state);
    }
    if state.progression.cheat {
        if state.progression.cheat_fire_ticks == 0 {
            projectile::fire(state);
            // One shot every CHEAT_FIRE_INTERVAL ticks, counting this one
            state.progression.cheat_fire_ticks = CHEAT_FIRE_INTERVAL - 1;
        } else {
            state.progression.cheat_fire_ticks -= 1;
        }
    }
    projectile::update_projectiles(state);

    collision::check_collisions(state);

    effects::update_explosions(&mut state.explosions);

    state.check_level_up();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GameEvent, ObstacleKind};
    use glam::Vec3;

    /// World with all pools pushed far away so pipeline tests control every
    /// encounter explicitly.
    fn quiet_world() -> WorldState {
        let mut state = WorldState::new(1000);
        for ring in &mut state.rings {
            ring.pos.y += 100_000.0;
        }
        for obstacle in &mut state.obstacles {
            obstacle.pos.y += 100_000.0;
        }
        for pursuer in &mut state.pursuers {
            pursuer.pos.y += 100_000.0;
        }
        for powerup in &mut state.powerups {
            powerup.pos.y += 100_000.0;
        }
        state
    }

    #[test]
    fn test_one_tick_integrator_scenario() {
        // Spec scenario: plane at (0,0,50), speed 1.0, no boost
        let mut state = quiet_world();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.plane.pos.y, 1.0);
        assert_eq!(state.plane.pos.z, 50.0);
        assert_eq!(state.plane.roll, 0.0);
        assert_eq!(state.plane.pitch, 0.0);
        assert_eq!(state.progression.ticks, 1);
    }

    #[test]
    fn test_game_over_tick_is_noop() {
        let mut state = quiet_world();
        state.progression.game_over = true;
        let before = serde_json::to_string(&state).unwrap();
        tick(&mut state, &TickInput::default());
        assert_eq!(serde_json::to_string(&state).unwrap(), before);
    }

    #[test]
    fn test_restart_only_from_game_over() {
        let mut state = quiet_world();
        state.progression.score = 900;
        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
        );
        // Ignored while playing
        assert_eq!(state.progression.score, 900);

        state.progression.game_over = true;
        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
        );
        assert!(!state.progression.game_over);
        assert_eq!(state.progression.score, 0);
        assert_eq!(state.progression.lives, 3);
    }

    #[test]
    fn test_fire_event_spawns_projectile() {
        let mut state = quiet_world();
        tick(
            &mut state,
            &TickInput {
                fire: true,
                ..Default::default()
            },
        );
        assert_eq!(state.projectiles.len(), 1);
        assert!(state.events.contains(&GameEvent::ProjectileFired));
    }

    #[test]
    fn test_cheat_auto_fire_cadence() {
        let mut state = quiet_world();
        tick(
            &mut state,
            &TickInput {
                toggle_cheat: true,
                ..Default::default()
            },
        );
        assert!(state.progression.cheat);
        assert_eq!(state.projectiles.len(), 1);

        // Next shot comes after the interval elapses
        for _ in 0..CHEAT_FIRE_INTERVAL {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.projectiles.len(), 2);
    }

    #[test]
    fn test_camera_cycles_on_event() {
        let mut state = quiet_world();
        let start = state.camera;
        tick(
            &mut state,
            &TickInput {
                cycle_camera: true,
                ..Default::default()
            },
        );
        assert_eq!(state.camera, start.next());
    }

    #[test]
    fn test_boost_window_end_to_end() {
        // Power-up pickup: 420 boosted ticks, then baseline speed returns
        let mut state = quiet_world();
        state.powerups[0].pos = state.plane.pos + Vec3::new(0.0, 11.0, 0.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.progression.boost_ticks, BOOST_TICKS);
        assert_eq!(
            state.plane.velocity,
            state.progression.speed * BOOST_MULTIPLIER
        );

        for _ in 0..BOOST_TICKS {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.progression.boost_ticks, 0);
        assert_eq!(state.plane.velocity, state.progression.speed);
    }

    #[test]
    fn test_level_transition_scenario() {
        // Spec scenario: score hits 500 -> level 2, +0.5 speed, one more pursuer
        let mut state = quiet_world();
        let pursuers_before = state.pursuers.len();
        state.progression.score = 499;
        state.rings[0] = crate::sim::state::Ring {
            pos: state.plane.pos + Vec3::new(0.0, 21.0, 0.0),
            collected: false,
        };
        tick(&mut state, &TickInput::default());
        assert_eq!(state.progression.score, 599);
        assert_eq!(state.progression.level, 2);
        assert_eq!(state.progression.speed, 1.5);
        assert_eq!(state.pursuers.len(), pursuers_before + 1);
    }

    #[test]
    fn test_crash_on_solid_obstacle_end_to_end() {
        let mut state = quiet_world();
        // Place the obstacle where the plane will be after one tick
        state.obstacles[0].pos = Vec3::new(0.0, 1.0, 50.0);
        state.obstacles[0].kind = ObstacleKind::Rock;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.progression.lives, 2);
        assert!(state.events.contains(&GameEvent::Crashed));
        assert_eq!(state.plane.pos, Vec3::new(0.0, 0.0, 50.0));
    }

    #[test]
    fn test_determinism_same_seed_same_inputs() {
        let mut a = WorldState::new(8080);
        let mut b = WorldState::new(8080);
        let script = [
            TickInput {
                bank_left: true,
                ..Default::default()
            },
            TickInput {
                pitch_up: true,
                fire: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                slide_right: true,
                ..Default::default()
            },
        ];
        for _ in 0..100 {
            for input in &script {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_events_cleared_each_tick() {
        let mut state = quiet_world();
        tick(
            &mut state,
            &TickInput {
                fire: true,
                ..Default::default()
            },
        );
        assert!(!state.events.is_empty());
        tick(&mut state, &TickInput::default());
        assert!(!state.events.contains(&GameEvent::ProjectileFired));
    }

    #[test]
    fn test_long_run_keeps_world_populated() {
        // Endless-world smoke test: fly straight for a while, pools keep
        // their sizes and pursuers keep honoring the forward invariant
        let mut state = WorldState::new(55);
        for _ in 0..2000 {
            tick(&mut state, &TickInput::default());
            if state.progression.game_over {
                break;
            }
            for pursuer in state.pursuers.iter().filter(|p| p.active) {
                assert!(pursuer.pos.y > state.plane.pos.y - PURSUER_BEHIND_SLACK);
            }
        }
        assert_eq!(state.rings.len(), crate::sim::state::RING_COUNT);
        assert_eq!(state.obstacles.len(), crate::sim::state::OBSTACLE_COUNT);
        assert_eq!(state.powerups.len(), crate::sim::state::POWERUP_COUNT);
    }
}
