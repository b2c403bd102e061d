//! Read-only view of a session for the renderer
//!
//! Cheap to build every frame and serializable, so a frontend in another
//! process can consume it as JSON.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, Session};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: IVec2,
    pub exploded: bool,
    /// Draw the rocket blast
    pub turbo: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentView {
    pub pos: IVec2,
    pub exploded: bool,
    pub variant: u8,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub scroll_speed: u32,
    /// Road tile y offset; tiles repeat every road height
    pub road_offset: i32,
    pub player: PlayerView,
    pub obstacles: Vec<IVec2>,
    pub opponents: Vec<OpponentView>,
    pub projectiles: Vec<IVec2>,
}

impl Session {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            phase: self.phase(),
            score: self.score(),
            scroll_speed: self.scroll_speed(),
            road_offset: self.road.pos.y,
            player: PlayerView {
                pos: self.vehicle.body.pos,
                exploded: self.vehicle.body.is_exploded(),
                turbo: self.vehicle.turbo,
            },
            obstacles: self.obstacles.iter().map(|tank| tank.pos).collect(),
            opponents: self
                .opponents
                .iter()
                .map(|rival| OpponentView {
                    pos: rival.pos,
                    exploded: rival.is_exploded(),
                    variant: rival.variant,
                })
                .collect(),
            projectiles: self
                .vehicle
                .projectiles
                .iter()
                .map(|shot| shot.body.pos)
                .collect(),
        }
    }
}
