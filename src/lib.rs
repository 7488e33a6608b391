//! Aero Rush - an endless arcade flight game
//!
//! This crate is the simulation core only: it advances the plane, steers
//! pursuers, resolves collisions, recycles world objects ahead of the plane,
//! and tracks progression. Rendering, input-device binding, and frame timing
//! are external collaborators that read [`sim::WorldState`] and drive
//! [`sim::tick`] once per frame.

pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Nominal simulation rate the constants below are tuned for
    pub const TICK_RATE: u32 = 60;

    /// Flight envelope
    pub const MIN_ALTITUDE: f32 = 20.0;
    pub const MAX_ALTITUDE: f32 = 500.0;
    pub const LATERAL_LIMIT: f32 = 1000.0;
    pub const MAX_ROLL: f32 = 35.0;
    pub const MAX_PITCH: f32 = 25.0;

    /// Per-tick exponential damping on the drift velocity accumulators
    pub const LATERAL_DAMPING: f32 = 0.85;
    pub const VERTICAL_DAMPING: f32 = 0.90;
    /// Per-tick decay pulling roll/pitch back toward level flight
    pub const ROLL_DECAY: f32 = 0.95;
    pub const PITCH_DECAY: f32 = 0.98;
    /// Secondary drift coupling from bank/pitch attitude
    pub const ROLL_DRIFT: f32 = 0.3;
    pub const PITCH_DRIFT: f32 = 0.5;
    /// Cosmetic propeller spin per tick (degrees)
    pub const PROPELLER_STEP: f32 = 20.0;

    /// Control increments - primary tier (attitude change + drift impulse)
    pub const PITCH_STEP: f32 = 5.0;
    pub const ROLL_STEP: f32 = 8.0;
    pub const VERTICAL_IMPULSE: f32 = 3.0;
    pub const LATERAL_IMPULSE: f32 = 4.0;
    /// Direct tier: pure sideways impulse, no bank
    pub const DIRECT_IMPULSE: f32 = 8.0;

    /// Boost window granted by a power-up (7 seconds at 60 Hz)
    pub const BOOST_TICKS: u32 = 420;
    pub const BOOST_MULTIPLIER: f32 = 5.0;

    /// Endless-world recycling distances
    pub const RECYCLE_BEHIND: f32 = 400.0;
    pub const SPAWN_AHEAD: f32 = 1800.0;
    /// Pursuers are recycled well before they fall behind the plane
    pub const PURSUER_RECYCLE_MARGIN: f32 = 200.0;

    /// Collision radii (3-D Euclidean, against the plane)
    pub const RING_RADIUS: f32 = 80.0;
    pub const OBSTACLE_RADIUS: f32 = 40.0;
    pub const PURSUER_RADIUS: f32 = 35.0;
    pub const POWERUP_RADIUS: f32 = 35.0;

    /// Scoring
    pub const RING_SCORE: u64 = 100;
    pub const OBSTACLE_SMASH_SCORE: u64 = 50;
    pub const PURSUER_RAM_SCORE: u64 = 150;
    pub const PROJECTILE_KILL_SCORE: u64 = 100;
    pub const POWERUP_SCORE: u64 = 200;
    /// Pursuer collisions accumulated before one crash fires
    pub const ENEMY_HITS_PER_CRASH: u8 = 5;
    /// Score per level step
    pub const LEVEL_SCORE_STEP: u64 = 500;

    /// Projectiles
    pub const PROJECTILE_SPEED: f32 = 30.0;
    pub const PROJECTILE_RANGE: f32 = 1000.0;
    pub const PROJECTILE_HIT_RADIUS: f32 = 30.0;
    /// Muzzle offset from the plane origin (forward, up)
    pub const MUZZLE_FORWARD: f32 = 50.0;
    pub const MUZZLE_UP: f32 = 20.0;
    /// Ticks between automatic shots while cheat mode is on
    pub const CHEAT_FIRE_INTERVAL: u32 = 15;

    /// Explosion lifetime in ticks
    pub const EXPLOSION_TICKS: u32 = 30;

    /// Pursuer steering
    pub const PURSUER_BASE_SPEED: f32 = 0.2;
    pub const PURSUER_SPEED_PER_LEVEL: f32 = 0.05;
    /// Engagement envelope - outside it the pursuer is deactivated
    pub const PURSUER_MIN_RANGE: f32 = 50.0;
    pub const PURSUER_MAX_RANGE: f32 = 2000.0;
    /// Forward relocation applied when a pursuer trails the plane
    pub const PURSUER_PUSH_AHEAD: f32 = 200.0;
    /// Minimum lead kept when a full move would put the pursuer behind
    pub const PURSUER_MIN_LEAD: f32 = 100.0;
    /// Slack before a behind-the-plane pursuer is force-deactivated
    pub const PURSUER_BEHIND_SLACK: f32 = 50.0;
}
