//! Turbo Road - a vertical-scrolling arcade driving game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, scoring, session state)
//! - `settings`: JSON game configuration
//! - `clock`: Fixed-timestep pacing for frontends
//! - `error`: Configuration errors

pub mod clock;
pub mod error;
pub mod settings;
pub mod sim;

pub use clock::FrameClock;
pub use error::ConfigError;
pub use settings::{AssetSizes, GameConfig, Size};

/// Game configuration constants
pub mod consts {
    /// Simulation rate the frame clock paces ticks at
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default window dimensions
    pub const SCREEN_WIDTH: i32 = 530;
    pub const SCREEN_HEIGHT: i32 = 800;

    /// Scroll speed at the start of a run (pixels/tick)
    pub const BASE_SCROLL_SPEED: u32 = 2;
    /// Player car speed without / with turbo (pixels/tick)
    pub const CAR_SPEED: u32 = 5;
    pub const TURBO_SPEED: u32 = 10;
    /// Gap between the car and the bottom edge at the start
    pub const PLAYER_BOTTOM_MARGIN: i32 = 20;

    /// Ticks between shots while fire is held
    pub const FIRE_RATE_TICKS: u32 = 40;
    /// Projectiles fly this much faster than the car
    pub const PROJECTILE_SPEED_OFFSET: u32 = 5;

    /// Scoring
    pub const FUEL_POINTS: u64 = 1;
    pub const PROJECTILE_HIT_BONUS: u64 = 2;
    /// Scroll speed goes up by one every this many points
    pub const POINTS_PER_SPEED_STEP: u64 = 10;

    /// Road population
    pub const FUEL_TANK_COUNT: usize = 4;
    pub const OPPONENT_COUNT: usize = 3;
    /// Rival car sprites to choose from
    pub const OPPONENT_VARIANTS: u8 = 4;
}
