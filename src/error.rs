//! Configuration errors
//!
//! Ticking never fails; everything that can go wrong is caught when a
//! session is built.

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{what} must have a positive size, got {width}x{height}")]
    NonPositiveSize {
        what: &'static str,
        width: i32,
        height: i32,
    },

    #[error("{what} leaves an empty spawn range on the {axis} axis ({size} vs screen {screen})")]
    EmptySpawnRange {
        what: &'static str,
        axis: char,
        size: i32,
        screen: i32,
    },

    #[error("{what} ({width}x{height}) does not fit on a {screen_width}x{screen_height} screen")]
    DoesNotFit {
        what: &'static str,
        width: i32,
        height: i32,
        screen_width: i32,
        screen_height: i32,
    },

    #[error("Baseline scroll speed must be at least 1")]
    ZeroScrollSpeed,

    #[error("Baseline scroll speed {speed} must be below the screen height {screen_height}")]
    ScrollSpeedTooHigh { speed: u32, screen_height: i32 },

    #[error("Fire rate must be at least 1 tick")]
    ZeroFireRate,
}
