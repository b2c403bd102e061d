//! Shots fired by the player's car

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use super::geometry::overlaps;
use crate::consts::PROJECTILE_SPEED_OFFSET;

/// A projectile flying up the screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Entity,
}

impl Projectile {
    /// Spawn a projectile centered on the shooter's nose
    pub fn fire_from(shooter: &Entity, size: IVec2) -> Self {
        let mut body = Entity::new(EntityKind::Projectile, size);
        body.pos = IVec2::new(
            shooter.pos.x + shooter.width() / 2 - size.x / 2,
            shooter.pos.y,
        );
        Self { body }
    }

    /// Pixels per tick for a shooter moving at `shooter_speed`
    #[inline]
    pub fn speed(shooter_speed: u32) -> i32 {
        let speed = shooter_speed.saturating_add(PROJECTILE_SPEED_OFFSET);
        i32::try_from(speed).unwrap_or(i32::MAX)
    }

    /// Move up one tick
    pub fn advance(&mut self, shooter_speed: u32) {
        self.body.move_up(Self::speed(shooter_speed));
    }

    /// True once the top edge has left the screen
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.body.pos.y <= 0
    }
}

/// Explode every rival car hit by a projectile this tick
///
/// Each projectile hits at most one car (the first live one in order), and
/// cars that are already exploded are ignored, so nothing scores twice.
/// Returns the number of cars destroyed.
pub fn resolve_hits(projectiles: &[Projectile], opponents: &mut [Entity]) -> u32 {
    let mut hits = 0;
    for projectile in projectiles {
        let shot = projectile.body.bounding_box();
        let target = opponents
            .iter_mut()
            .find(|rival| !rival.is_exploded() && overlaps(&shot, &rival.bounding_box()));
        if let Some(rival) = target {
            rival.explode();
            hits += 1;
        }
    }
    hits
}
