//! Game configuration
//!
//! Screen dimensions and asset sizes come from the outside world (window
//! and sprite loader); everything else defaults to the values in
//! [`crate::consts`]. Loaded from JSON, missing fields fall back to defaults.

use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Width/height pair as it appears in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn as_ivec2(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Sprite dimensions for every entity kind, supplied by the asset loader
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSizes {
    pub player: Size,
    pub fuel_tank: Size,
    pub opponent: Size,
    pub projectile: Size,
    pub road: Size,
}

impl Default for AssetSizes {
    fn default() -> Self {
        Self {
            player: Size::new(70, 140),
            fuel_tank: Size::new(40, 50),
            opponent: Size::new(70, 140),
            projectile: Size::new(6, 16),
            road: Size::new(400, 400),
        }
    }
}

/// Everything needed to build a [`crate::sim::Session`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the spawner RNG
    pub seed: u64,
    pub screen: Size,
    pub assets: AssetSizes,
    /// Number of fuel tanks on the road at once
    pub fuel_tanks: usize,
    /// Number of rival cars on the road at once
    pub opponents: usize,
    /// Number of rival car sprites to pick from
    pub opponent_variants: u8,
    /// Scroll speed at the start of a run (pixels/tick)
    pub baseline_scroll_speed: u32,
    /// Ticks between shots while fire is held
    pub fire_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            screen: Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            assets: AssetSizes::default(),
            fuel_tanks: FUEL_TANK_COUNT,
            opponents: OPPONENT_COUNT,
            opponent_variants: OPPONENT_VARIANTS,
            baseline_scroll_speed: BASE_SCROLL_SPEED,
            fire_rate: FIRE_RATE_TICKS,
        }
    }
}

impl GameConfig {
    /// Default config with a specific spawner seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject dimensions that would make spawning or clamping impossible
    pub fn validate(&self) -> Result<(), ConfigError> {
        let screen = self.screen;
        let sized = [
            ("screen", screen),
            ("player", self.assets.player),
            ("fuel tank", self.assets.fuel_tank),
            ("opponent", self.assets.opponent),
            ("projectile", self.assets.projectile),
            ("road", self.assets.road),
        ];
        for (what, size) in sized {
            if !size.is_positive() {
                return Err(ConfigError::NonPositiveSize {
                    what,
                    width: size.width,
                    height: size.height,
                });
            }
        }

        // Spawn ranges are half-open, so the sprite must be strictly smaller
        let spawned = [
            ("fuel tank", self.assets.fuel_tank),
            ("opponent", self.assets.opponent),
        ];
        for (what, size) in spawned {
            if size.width >= screen.width {
                return Err(ConfigError::EmptySpawnRange {
                    what,
                    axis: 'x',
                    size: size.width,
                    screen: screen.width,
                });
            }
            if size.height >= screen.height {
                return Err(ConfigError::EmptySpawnRange {
                    what,
                    axis: 'y',
                    size: size.height,
                    screen: screen.height,
                });
            }
        }

        let player = self.assets.player;
        if player.width > screen.width || player.height + PLAYER_BOTTOM_MARGIN > screen.height {
            return Err(ConfigError::DoesNotFit {
                what: "player",
                width: player.width,
                height: player.height,
                screen_width: screen.width,
                screen_height: screen.height,
            });
        }

        if self.baseline_scroll_speed == 0 {
            return Err(ConfigError::ZeroScrollSpeed);
        }
        // Screen height is positive here, so the cast is lossless
        if self.baseline_scroll_speed >= screen.height as u32 {
            return Err(ConfigError::ScrollSpeedTooHigh {
                speed: self.baseline_scroll_speed,
                screen_height: screen.height,
            });
        }
        if self.fire_rate == 0 {
            return Err(ConfigError::ZeroFireRate);
        }
        Ok(())
    }
}
