//! The player's car

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use super::projectile::Projectile;
use crate::consts::*;

/// Directions held this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steering {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Player car with its own gun and projectiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub body: Entity,
    /// Pixels per tick: 0 after a crash, otherwise [`CAR_SPEED`] or [`TURBO_SPEED`]
    pub speed: u32,
    /// Turbo held last tick (renderer draws the rocket blast)
    pub turbo: bool,
    /// Live projectiles, oldest first
    pub projectiles: Vec<Projectile>,
    /// Total shots fired this run
    pub shots_fired: u64,
    /// Held-fire ticks since the last shot cycle started
    fire_counter: u32,
    fire_rate: u32,
    projectile_size: IVec2,
    screen: IVec2,
}

impl Vehicle {
    pub fn new(size: IVec2, projectile_size: IVec2, screen: IVec2, fire_rate: u32) -> Self {
        let mut vehicle = Self {
            body: Entity::bordered(EntityKind::Player, size, screen),
            speed: CAR_SPEED,
            turbo: false,
            projectiles: Vec::new(),
            shots_fired: 0,
            fire_counter: 0,
            fire_rate,
            projectile_size,
            screen,
        };
        vehicle.place_at_start();
        vehicle
    }

    /// Starting spot: centered, just above the bottom edge
    pub fn start_position(&self) -> IVec2 {
        IVec2::new(
            self.screen.x / 2 - self.body.width() / 2,
            self.screen.y - self.body.height() - PLAYER_BOTTOM_MARGIN,
        )
    }

    pub fn place_at_start(&mut self) {
        let start = self.start_position();
        self.body.set_position(start);
    }

    /// Back to a fresh car for a new run
    pub fn reset(&mut self) {
        self.body.unexplode();
        self.place_at_start();
        self.speed = CAR_SPEED;
        self.turbo = false;
        self.projectiles.clear();
        self.shots_fired = 0;
        self.fire_counter = 0;
    }

    /// Crash: stop dead and explode
    pub fn crash(&mut self) {
        self.speed = 0;
        self.body.explode();
    }

    #[inline]
    pub fn fire_rate(&self) -> u32 {
        self.fire_rate
    }

    /// Move one step per held direction at the current speed
    pub fn steer(&mut self, steering: Steering) {
        let step = self.speed as i32;
        if steering.up {
            self.body.move_up(step);
        }
        if steering.down {
            self.body.move_down(step);
        }
        if steering.left {
            self.body.move_left(step);
        }
        if steering.right {
            self.body.move_right(step);
        }
    }

    /// Handle the fire button for one tick; returns true if a shot left
    ///
    /// The first held tick fires, then one shot every `fire_rate` held
    /// ticks. Releasing (or being wrecked) resets the counter.
    pub fn update_fire(&mut self, fire_held: bool) -> bool {
        if !fire_held || self.body.is_exploded() {
            self.fire_counter = 0;
            return false;
        }

        let fired = self.fire_counter == 0;
        if fired {
            self.projectiles
                .push(Projectile::fire_from(&self.body, self.projectile_size));
            self.shots_fired += 1;
        }
        self.fire_counter = (self.fire_counter + 1) % self.fire_rate;
        fired
    }

    /// Move every projectile up and drop the ones off the top
    ///
    /// Returns how many were removed.
    pub fn advance_projectiles(&mut self) -> usize {
        let speed = self.speed;
        for projectile in &mut self.projectiles {
            projectile.advance(speed);
        }
        let before = self.projectiles.len();
        self.projectiles.retain(|p| !p.is_spent());
        before - self.projectiles.len()
    }
}
