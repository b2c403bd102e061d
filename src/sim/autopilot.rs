//! Demo-mode driver
//!
//! Plays the game from the session state alone, for attract screens and
//! soak runs. Priorities: get out of the lane of a rival that is about to
//! hit us (shooting it if lined up), otherwise chase the nearest visible
//! fuel tank, and always drift back to the starting row.

use super::geometry::{BoundingBox, overlaps};
use super::state::Session;
use super::tick::TickInput;

/// Horizontal slack around the car when looking for threats
const LANE_MARGIN: i32 = 10;

/// Build this tick's input; reset/quit/turbo are taken from `input`
pub fn drive(session: &Session, input: &TickInput) -> TickInput {
    let car = session.vehicle.body.bounding_box();
    let screen = session.screen();
    let speed = session.vehicle.speed.max(1) as i32;

    let mut out = TickInput {
        turbo: input.turbo,
        reset: input.reset,
        quit: input.quit,
        idle_mode: true,
        ..Default::default()
    };

    // Shoot anything alive straight ahead
    out.fire = session
        .opponents
        .iter()
        .filter(|rival| !rival.is_exploded())
        .map(|rival| rival.bounding_box())
        .any(|rival| rival.overlaps_x(&car) && rival.bottom <= car.top);

    let lane = BoundingBox::new(
        car.left - LANE_MARGIN,
        car.right + LANE_MARGIN,
        car.top - car.height() * 2,
        car.bottom,
    );
    let threat = session
        .opponents
        .iter()
        .filter(|rival| !rival.is_exploded())
        .map(|rival| rival.bounding_box())
        .filter(|rival| overlaps(&lane, rival))
        .max_by_key(|rival| rival.bottom);

    if let Some(rival) = threat {
        // Dodge toward the side with more room
        let room_left = rival.left;
        let room_right = screen.x - rival.right;
        if room_right >= room_left {
            out.right = true;
        } else {
            out.left = true;
        }
    } else if let Some(target) = nearest_fuel(session, &car) {
        let dx = target.center_x() - car.center_x();
        if dx > speed {
            out.right = true;
        } else if dx < -speed {
            out.left = true;
        }
    }

    let home = session.vehicle.start_position().y;
    if car.top < home - speed {
        out.down = true;
    } else if car.top > home + speed {
        out.up = true;
    }

    out
}

/// Closest fuel tank that is on screen and not already behind us
fn nearest_fuel(session: &Session, car: &BoundingBox) -> Option<BoundingBox> {
    session
        .obstacles
        .iter()
        .map(|tank| tank.bounding_box())
        .filter(|tank| tank.bottom > 0 && tank.top < car.bottom)
        .min_by_key(|tank| {
            let dx = (tank.center_x() - car.center_x()).abs();
            let dy = (car.top - tank.bottom).max(0);
            dx + dy
        })
}
