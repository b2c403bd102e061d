//! Randomized placement for fuel tanks and rival cars
//!
//! The spawner owns the only RNG in the simulation. It is seeded from the
//! config so a whole run replays identically for the same inputs.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Entity, EntityKind};

/// Uniform x in `[0, screen_width - entity_width)`
///
/// Callers must ensure `entity_width < screen_width` (checked by config
/// validation).
pub fn random_x<R: Rng>(rng: &mut R, screen_width: i32, entity_width: i32) -> i32 {
    rng.random_range(0..screen_width - entity_width)
}

/// Uniform y in `[-screen_height, -entity_height)`, fully above the screen
///
/// Callers must ensure `entity_height < screen_height`.
pub fn random_y_above_screen<R: Rng>(
    rng: &mut R,
    screen_height: i32,
    entity_height: i32,
) -> i32 {
    rng.random_range(-screen_height..-entity_height)
}

/// Seeded source of spawn positions
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    screen: IVec2,
    opponent_variants: u8,
}

impl Spawner {
    pub fn new(seed: u64, screen: IVec2, opponent_variants: u8) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed), screen, opponent_variants)
    }

    /// Use an explicit generator (tests, replays)
    pub fn with_rng(rng: Pcg32, screen: IVec2, opponent_variants: u8) -> Self {
        Self {
            rng,
            screen,
            opponent_variants,
        }
    }

    #[inline]
    pub fn screen(&self) -> IVec2 {
        self.screen
    }

    pub fn random_x(&mut self, entity_width: i32) -> i32 {
        random_x(&mut self.rng, self.screen.x, entity_width)
    }

    pub fn random_y_above_screen(&mut self, entity_height: i32) -> i32 {
        random_y_above_screen(&mut self.rng, self.screen.y, entity_height)
    }

    /// Give an entity a fresh position above the screen
    ///
    /// Rival cars are also revived and get a new sprite.
    pub fn respawn(&mut self, entity: &mut Entity) {
        let y = self.random_y_above_screen(entity.height());
        let x = self.random_x(entity.width());
        entity.pos = IVec2::new(x, y);

        if entity.kind == EntityKind::Opponent {
            entity.unexplode();
            if self.opponent_variants > 1 {
                entity.variant = self.rng.random_range(0..self.opponent_variants);
            }
        }
        log::trace!("Respawned {:?} at ({}, {})", entity.kind, x, y);
    }

    /// Respawn `entity` if its top edge has passed the bottom of the screen
    ///
    /// Returns true if it was moved.
    pub fn recycle_if_below(&mut self, entity: &mut Entity) -> bool {
        if entity.is_below(self.screen.y) {
            self.respawn(entity);
            true
        } else {
            false
        }
    }
}
