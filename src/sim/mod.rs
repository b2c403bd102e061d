//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall clock
//! - Seeded RNG only (owned by the spawner)
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod difficulty;
pub mod entity;
pub mod geometry;
pub mod projectile;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod vehicle;

pub use difficulty::Difficulty;
pub use entity::{Entity, EntityKind, ExitPolicy, descent_step, exit_policy};
pub use geometry::{BoundingBox, overlaps};
pub use projectile::{Projectile, resolve_hits};
pub use snapshot::{OpponentView, PlayerView, Snapshot};
pub use spawner::{Spawner, random_x, random_y_above_screen};
pub use state::{GamePhase, Session};
pub use tick::{TickInput, tick};
pub use vehicle::{Steering, Vehicle};
