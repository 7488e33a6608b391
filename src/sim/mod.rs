//! Deterministic simulation module
//!
//! All gameplay logic lives here. The module is pure and deterministic:
//! - Fixed tick cadence only, driven from outside
//! - Seeded RNG only (same seed + same inputs = same run)
//! - Single-threaded; per-tick system order is the synchronization
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod effects;
pub mod physics;
pub mod projectile;
pub mod recycle;
pub mod state;
pub mod tick;

pub use ai::update_pursuers;
pub use collision::check_collisions;
pub use effects::update_explosions;
pub use physics::{apply_controls, integrate};
pub use projectile::{fire, update_projectiles};
pub use recycle::recycle_objects;
pub use state::{
    CameraMode, Explosion, GameEvent, Obstacle, ObstacleKind, Plane, PowerUp, Progression,
    Projectile, Pursuer, Ring, WorldState,
};
pub use tick::{TickInput, tick};
