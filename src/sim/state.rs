//! World state and core simulation types
//!
//! All mutable simulation state lives in [`WorldState`]. Entities are owned
//! exclusively by the aggregate and never reference each other; transient
//! relationships (nearest pursuer, hit pairs) are computed each tick.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Initial pool sizes. Pools are fixed after init - recycling relocates
/// objects instead of allocating (level-ups add pursuers, nothing removes).
pub const RING_COUNT: usize = 5;
pub const OBSTACLE_COUNT: usize = 8;
pub const PURSUER_COUNT: usize = 3;
pub const POWERUP_COUNT: usize = 3;

/// The player's plane
///
/// Travels perpetually along +y (the forward axis). Yaw is pinned to 0;
/// roll/pitch are in degrees and only bank the flight path sideways or
/// vertically through the drift coupling in the integrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plane {
    pub pos: Vec3,
    /// Bank angle, degrees, positive = banked left
    pub roll: f32,
    /// Nose attitude, degrees, positive = nose up
    pub pitch: f32,
    /// Always 0 - kept so the renderer pose is complete
    pub yaw: f32,
    /// Linear speed used by the attitude drift terms
    pub velocity: f32,
    /// Drift accumulators fed by control impulses, damped every tick
    pub lateral_vel: f32,
    pub vertical_vel: f32,
    /// Cosmetic, monotonically increasing (degrees)
    pub propeller_angle: f32,
}

impl Plane {
    pub fn spawn() -> Self {
        Self {
            pos: Vec3::new(0.0, 0.0, 50.0),
            roll: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            velocity: 1.0,
            lateral_vel: 0.0,
            vertical_vel: 0.0,
            propeller_angle: 0.0,
        }
    }

    /// Reset pose after a crash; speed and propeller carry over
    pub fn reset_pose(&mut self) {
        self.pos = Vec3::new(0.0, 0.0, 50.0);
        self.roll = 0.0;
        self.pitch = 0.0;
        self.yaw = 0.0;
        self.lateral_vel = 0.0;
        self.vertical_vel = 0.0;
    }
}

/// A ring to fly through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ring {
    pub pos: Vec3,
    pub collected: bool,
}

/// Obstacle kinds - clouds are decoration and never collide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Cloud,
    Rock,
    Balloon,
}

impl ObstacleKind {
    pub fn is_solid(&self) -> bool {
        !matches!(self, ObstacleKind::Cloud)
    }
}

/// A floating obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec3,
    pub kind: ObstacleKind,
}

/// An enemy plane chasing the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pursuer {
    pub pos: Vec3,
    /// Auxiliary wander hint for the renderer; steering ignores it
    pub drift: Vec2,
    pub active: bool,
}

/// A boost power-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec3,
    pub collected: bool,
}

/// A player-fired projectile. Fully populated at spawn - no optional fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec3,
    /// Unit direction, fixed at fire time
    pub dir: Vec3,
    pub speed: f32,
}

/// A timed explosion marker, purely cosmetic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub pos: Vec3,
    pub ticks_left: u32,
}

/// Camera mode, cycled by the input collaborator. The core only stores it;
/// projection math belongs to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    #[default]
    Chase,
    Cockpit,
    Side,
}

impl CameraMode {
    pub fn next(self) -> Self {
        match self {
            CameraMode::Chase => CameraMode::Cockpit,
            CameraMode::Cockpit => CameraMode::Side,
            CameraMode::Side => CameraMode::Chase,
        }
    }
}

/// Things that happened during the last tick, for renderer/audio feedback.
/// Cleared at the start of every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    RingCollected,
    ObstacleSmashed,
    /// Pursuer shot down by a projectile
    PursuerDowned,
    /// Pursuer destroyed by ramming it under boost or cheat
    PursuerRammed,
    PowerUpCollected,
    ProjectileFired,
    Crashed,
    LevelUp(u32),
    GameOver,
}

/// Score, lives, level, and the timed/accumulated rules between them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progression {
    pub score: u64,
    pub lives: u8,
    /// Base forward speed; the plane's velocity baseline
    pub speed: f32,
    pub level: u32,
    /// Boost window countdown; > 0 means boosted
    pub boost_ticks: u32,
    /// Pursuer collisions accumulated toward the next crash (0..5)
    pub enemy_hits: u8,
    pub cheat: bool,
    /// Countdown to the next automatic shot while cheating
    pub cheat_fire_ticks: u32,
    pub game_over: bool,
    /// Elapsed simulation ticks
    pub ticks: u64,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            score: 0,
            lives: 3,
            speed: 1.0,
            level: 1,
            boost_ticks: 0,
            enemy_hits: 0,
            cheat: false,
            cheat_fire_ticks: 0,
            game_over: false,
            ticks: 0,
        }
    }
}

fn detached_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete world state (deterministic, serializable)
///
/// The read-only snapshot the renderer consumes is simply a shared
/// reference to this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    /// Run seed; restart re-derives everything from it
    pub seed: u64,
    pub plane: Plane,
    pub rings: Vec<Ring>,
    pub obstacles: Vec<Obstacle>,
    pub pursuers: Vec<Pursuer>,
    pub powerups: Vec<PowerUp>,
    pub projectiles: Vec<Projectile>,
    pub explosions: Vec<Explosion>,
    pub progression: Progression,
    pub camera: CameraMode,
    /// Events emitted by the last tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Seeded spawn/recycle randomness; not part of the snapshot
    #[serde(skip, default = "detached_rng")]
    pub(crate) rng: Pcg32,
}

impl WorldState {
    /// Create a fresh world from the given run seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let plane = Plane::spawn();

        let rings = (0..RING_COUNT)
            .map(|i| Ring {
                pos: Vec3::new(
                    rng.random_range(-500.0..500.0),
                    200.0 + i as f32 * 300.0,
                    rng.random_range(100.0..300.0),
                ),
                collected: false,
            })
            .collect();

        let obstacles = (0..OBSTACLE_COUNT)
            .map(|_| Obstacle {
                pos: Vec3::new(
                    rng.random_range(-600.0..600.0),
                    rng.random_range(100.0..1500.0),
                    rng.random_range(50.0..400.0),
                ),
                kind: random_obstacle_kind(&mut rng),
            })
            .collect();

        let pursuers = (0..PURSUER_COUNT)
            .map(|i| Pursuer {
                pos: Vec3::new(
                    plane.pos.x + rng.random_range(-400.0..400.0),
                    plane.pos.y + 1500.0 + i as f32 * 600.0,
                    plane.pos.z + rng.random_range(-150.0..150.0),
                ),
                drift: Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)),
                active: true,
            })
            .collect();

        let powerups = (0..POWERUP_COUNT)
            .map(|_| PowerUp {
                pos: Vec3::new(
                    rng.random_range(-300.0..300.0),
                    rng.random_range(200.0..1000.0),
                    rng.random_range(100.0..250.0),
                ),
                collected: false,
            })
            .collect();

        Self {
            seed,
            plane,
            rings,
            obstacles,
            pursuers,
            powerups,
            projectiles: Vec::new(),
            explosions: Vec::new(),
            progression: Progression::default(),
            camera: CameraMode::default(),
            events: Vec::new(),
            rng,
        }
    }

    /// Full restart from the stored seed. Independent of the crash path:
    /// pools, progression, and camera all return to spawn configuration.
    pub fn restart(&mut self) {
        log::info!("Restarting run with seed {}", self.seed);
        *self = WorldState::new(self.seed);
    }

    /// Crash transition: lose a life, reset pose or end the run
    pub fn crash(&mut self) {
        self.progression.lives = self.progression.lives.saturating_sub(1);
        self.events.push(GameEvent::Crashed);
        if self.progression.lives == 0 {
            self.progression.game_over = true;
            self.events.push(GameEvent::GameOver);
            log::info!("Game over at score {}", self.progression.score);
        } else {
            self.plane.reset_pose();
            log::info!("Crashed, {} lives left", self.progression.lives);
        }
    }

    /// Level transition, re-derived from score every tick. A level increase
    /// bumps the base speed and sends in one more pursuer.
    pub fn check_level_up(&mut self) {
        let new_level = 1 + (self.progression.score / LEVEL_SCORE_STEP) as u32;
        if new_level > self.progression.level {
            self.progression.level = new_level;
            self.progression.speed += 0.5;
            self.plane.velocity = self.progression.speed;
            self.spawn_pursuer_ahead();
            self.events.push(GameEvent::LevelUp(new_level));
            log::info!(
                "Level {} reached, speed {}",
                new_level,
                self.progression.speed
            );
        }
    }

    /// Add one pursuer ahead of the plane (level-up reinforcement)
    pub fn spawn_pursuer_ahead(&mut self) {
        let Self { plane, pursuers, rng, .. } = self;
        pursuers.push(Pursuer {
            pos: Vec3::new(
                plane.pos.x + rng.random_range(-400.0..400.0),
                plane.pos.y + rng.random_range(500.0..1500.0),
                rng.random_range(150.0..350.0),
            ),
            drift: Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)),
            active: true,
        });
    }
}

pub(crate) fn random_obstacle_kind(rng: &mut Pcg32) -> ObstacleKind {
    match rng.random_range(0..3) {
        0 => ObstacleKind::Cloud,
        1 => ObstacleKind::Rock,
        _ => ObstacleKind::Balloon,
    }
}
