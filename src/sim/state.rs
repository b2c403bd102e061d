//! Session state
//!
//! A [`Session`] owns every entity in a run plus score and difficulty. The
//! per-tick update lives in [`super::tick`].

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::entity::{Entity, EntityKind};
use super::spawner::Spawner;
use super::vehicle::Vehicle;
use crate::error::ConfigError;
use crate::settings::GameConfig;

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Driving
    Running,
    /// Crashed into a rival; frozen until reset
    Stopped,
}

/// One game session
#[derive(Debug, Clone)]
pub struct Session {
    screen: IVec2,
    phase: GamePhase,
    score: u64,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
    difficulty: Difficulty,
    spawner: Spawner,
    /// Player car
    pub vehicle: Vehicle,
    /// Scrolling background
    pub road: Entity,
    /// Fuel tanks, in spawn order
    pub obstacles: Vec<Entity>,
    /// Rival cars, in spawn order
    pub opponents: Vec<Entity>,
    quit_requested: bool,
}

impl Session {
    /// Build a session, rejecting configs that cannot be simulated
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let screen = config.screen.as_ivec2();
        let assets = &config.assets;
        let mut spawner = Spawner::new(config.seed, screen, config.opponent_variants);

        let vehicle = Vehicle::new(
            assets.player.as_ivec2(),
            assets.projectile.as_ivec2(),
            screen,
            config.fire_rate,
        );

        let mut road = Entity::new(EntityKind::Road, assets.road.as_ivec2());
        road.center_horizontally(screen.x);

        let obstacles = (0..config.fuel_tanks)
            .map(|_| {
                let mut tank = Entity::new(EntityKind::Fuel, assets.fuel_tank.as_ivec2());
                spawner.respawn(&mut tank);
                tank
            })
            .collect();
        let opponents = (0..config.opponents)
            .map(|_| {
                let mut rival = Entity::new(EntityKind::Opponent, assets.opponent.as_ivec2());
                spawner.respawn(&mut rival);
                rival
            })
            .collect();

        log::info!(
            "Session started: {}x{} screen, seed {}, {} fuel tanks, {} rivals",
            screen.x,
            screen.y,
            config.seed,
            config.fuel_tanks,
            config.opponents
        );

        Ok(Self {
            screen,
            phase: GamePhase::Running,
            score: 0,
            time_ticks: 0,
            difficulty: Difficulty::new(config.baseline_scroll_speed),
            spawner,
            vehicle,
            road,
            obstacles,
            opponents,
            quit_requested: false,
        })
    }

    #[inline]
    pub fn screen(&self) -> IVec2 {
        self.screen
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    pub fn scroll_speed(&self) -> u32 {
        self.difficulty.scroll_speed()
    }

    #[inline]
    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    /// The external loop should stop
    #[inline]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn request_quit(&mut self) {
        if !self.quit_requested {
            log::info!("Quit requested at score {}", self.score);
        }
        self.quit_requested = true;
    }

    /// Spawner plus the fuel tanks and rival cars it places
    pub(crate) fn spawn_parts(&mut self) -> (&mut Spawner, &mut [Entity], &mut [Entity]) {
        (&mut self.spawner, &mut self.obstacles, &mut self.opponents)
    }

    /// Add points, ramping scroll speed on every multiple of ten passed
    pub fn award(&mut self, points: u64) {
        let old = self.score;
        self.score += points;
        self.difficulty.on_score(old, self.score);
        log::debug!("Score {} -> {}", old, self.score);
    }

    /// Crash: freeze scrolling and the car
    pub fn stop(&mut self) {
        self.difficulty.freeze();
        self.vehicle.crash();
        self.phase = GamePhase::Stopped;
        log::info!("Crashed at score {} after {} ticks", self.score, self.time_ticks);
    }

    /// Start a fresh run with new spawn positions
    pub fn reset(&mut self) {
        self.score = 0;
        self.time_ticks = 0;
        self.difficulty.reset();
        self.vehicle.reset();
        self.road.pos.y = 0;
        for tank in &mut self.obstacles {
            self.spawner.respawn(tank);
        }
        for rival in &mut self.opponents {
            self.spawner.respawn(rival);
        }
        self.phase = GamePhase::Running;
        log::info!("Session reset");
    }
}
