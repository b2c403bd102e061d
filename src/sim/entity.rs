//! Positioned, sized game objects
//!
//! Every object on screen is an [`Entity`]. The few places where kinds
//! behave differently (descent speed, what happens past the bottom edge)
//! are plain functions over [`EntityKind`].

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::geometry::BoundingBox;

/// What an entity represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// The player's car
    Player,
    /// Scrolling background
    Road,
    /// Fuel tank pickup
    Fuel,
    /// Rival car
    Opponent,
    /// Shot fired by the player
    Projectile,
}

/// What happens once an entity's top edge passes the bottom of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitPolicy {
    /// Nothing, stays where it is
    Keep,
    /// Jump back to the top (road tiles)
    Wrap,
    /// Reposition above the screen via the spawner
    Respawn,
}

/// Pixels an entity of `kind` moves down for one scroll step
///
/// Rival cars drive forward too, so they close in one pixel slower than
/// the road.
#[inline]
pub fn descent_step(kind: EntityKind, scroll_speed: u32) -> u32 {
    match kind {
        EntityKind::Opponent => scroll_speed.saturating_sub(1),
        EntityKind::Projectile | EntityKind::Player => 0,
        EntityKind::Road | EntityKind::Fuel => scroll_speed,
    }
}

/// Exit behaviour for `kind`
#[inline]
pub fn exit_policy(kind: EntityKind) -> ExitPolicy {
    match kind {
        EntityKind::Fuel | EntityKind::Opponent => ExitPolicy::Respawn,
        EntityKind::Road => ExitPolicy::Wrap,
        EntityKind::Player | EntityKind::Projectile => ExitPolicy::Keep,
    }
}

/// A positioned, sized object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    /// Top-left corner in screen pixels
    pub pos: IVec2,
    /// Fixed at creation from the sprite size
    size: IVec2,
    /// Screen size to clamp against, `None` if the entity may leave the screen
    borders: Option<IVec2>,
    /// Sprite variant for the renderer
    pub variant: u8,
    exploded: bool,
}

impl Entity {
    /// Entity that may move off-screen freely
    pub fn new(kind: EntityKind, size: IVec2) -> Self {
        Self {
            kind,
            pos: IVec2::ZERO,
            size,
            borders: None,
            variant: 0,
            exploded: false,
        }
    }

    /// Entity that is always kept fully inside `screen`
    pub fn bordered(kind: EntityKind, size: IVec2, screen: IVec2) -> Self {
        Self {
            borders: Some(screen),
            ..Self::new(kind, size)
        }
    }

    #[inline]
    pub fn size(&self) -> IVec2 {
        self.size
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size.y
    }

    #[inline]
    pub fn respects_borders(&self) -> bool {
        self.borders.is_some()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_pos_size(self.pos, self.size)
    }

    /// Place the entity, clamping if it respects borders
    pub fn set_position(&mut self, pos: IVec2) {
        self.pos = pos;
        self.clamp();
    }

    /// Move without any clamping
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.pos = self.pos.saturating_add(IVec2::new(dx, dy));
    }

    // Moves saturate at the i32 range instead of wrapping
    pub fn move_up(&mut self, step: i32) {
        self.pos.y = self.pos.y.saturating_sub(step);
        self.clamp();
    }

    pub fn move_down(&mut self, step: i32) {
        self.pos.y = self.pos.y.saturating_add(step);
        self.clamp();
    }

    pub fn move_left(&mut self, step: i32) {
        self.pos.x = self.pos.x.saturating_sub(step);
        self.clamp();
    }

    pub fn move_right(&mut self, step: i32) {
        self.pos.x = self.pos.x.saturating_add(step);
        self.clamp();
    }

    pub fn center_horizontally(&mut self, screen_width: i32) {
        self.pos.x = screen_width / 2 - self.size.x / 2;
        self.clamp();
    }

    pub fn explode(&mut self) {
        self.exploded = true;
    }

    pub fn unexplode(&mut self) {
        self.exploded = false;
    }

    #[inline]
    pub fn is_exploded(&self) -> bool {
        self.exploded
    }

    /// True once the top edge has reached the bottom of the screen
    #[inline]
    pub fn is_below(&self, screen_height: i32) -> bool {
        self.pos.y >= screen_height
    }

    fn clamp(&mut self) {
        if let Some(screen) = self.borders {
            // Config validation guarantees size <= screen, so max >= 0
            let max = (screen - self.size).max(IVec2::ZERO);
            self.pos = self.pos.clamp(IVec2::ZERO, max);
        }
    }
}
