//! Fixed-step simulation tick
//!
//! One call to [`tick`] advances the session by one frame. The order of the
//! steps matters: fuel pickups are scored before the crash check, so a
//! pickup and a crash on the same tick both count.

use super::autopilot;
use super::difficulty::Difficulty;
use super::entity::{ExitPolicy, descent_step, exit_policy};
use super::geometry::overlaps;
use super::projectile::resolve_hits;
use super::state::{GamePhase, Session};
use super::vehicle::Steering;
use crate::consts::*;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub turbo: bool,
    /// Start a new run
    pub reset: bool,
    /// Ask the driver loop to stop
    pub quit: bool,
    /// Demo mode - the autopilot drives
    pub idle_mode: bool,
}

impl TickInput {
    pub fn steering(&self) -> Steering {
        Steering {
            up: self.up,
            down: self.down,
            left: self.left,
            right: self.right,
        }
    }
}

/// Advance the session by one tick
pub fn tick(session: &mut Session, input: &TickInput) {
    if input.quit {
        session.request_quit();
    }

    // Reset wins over anything else that would happen this tick
    if input.reset {
        session.reset();
        return;
    }

    if session.phase() == GamePhase::Stopped {
        return;
    }

    let input = if input.idle_mode {
        autopilot::drive(session, input)
    } else {
        input.clone()
    };

    session.time_ticks += 1;

    scroll(session);
    drive_player(session, &input);
    update_projectiles(session, input.fire);
    collect_fuel(session);
    check_crash(session);
}

impl Session {
    /// Run `ticks` ticks with the same input
    pub fn advance(&mut self, input: &TickInput, ticks: u32) {
        for _ in 0..ticks {
            tick(self, input);
        }
    }
}

/// Move the road, fuel tanks and rival cars down
fn scroll(session: &mut Session) {
    let speed = session.scroll_speed();
    let screen = session.screen();

    let road = &mut session.road;
    road.move_down(step_pixels(descent_step(road.kind, speed)));
    if exit_policy(road.kind) == ExitPolicy::Wrap && road.is_below(screen.y) {
        road.pos.y = 0;
    }

    let (spawner, tanks, rivals) = session.spawn_parts();
    for entity in tanks.iter_mut().chain(rivals.iter_mut()) {
        entity.move_down(step_pixels(descent_step(entity.kind, speed)));
        if exit_policy(entity.kind) == ExitPolicy::Respawn {
            spawner.recycle_if_below(entity);
        }
    }
}

fn step_pixels(step: u32) -> i32 {
    i32::try_from(step).unwrap_or(i32::MAX)
}

fn drive_player(session: &mut Session, input: &TickInput) {
    let vehicle = &mut session.vehicle;
    vehicle.turbo = input.turbo;
    vehicle.speed = Difficulty::vehicle_speed(input.turbo);

    if session.difficulty().scroll_speed() > 0 {
        session.vehicle.steer(input.steering());
    }
}

fn update_projectiles(session: &mut Session, fire: bool) {
    session.vehicle.update_fire(fire);
    session.vehicle.advance_projectiles();

    let hits = resolve_hits(&session.vehicle.projectiles, &mut session.opponents);
    for _ in 0..hits {
        session.award(PROJECTILE_HIT_BONUS);
    }
}

fn collect_fuel(session: &mut Session) {
    let car = session.vehicle.body.bounding_box();
    let mut collected = 0;

    let (spawner, tanks, _) = session.spawn_parts();
    for tank in tanks {
        if overlaps(&car, &tank.bounding_box()) {
            spawner.respawn(tank);
            collected += 1;
        }
    }

    for _ in 0..collected {
        session.award(FUEL_POINTS);
    }
}

fn check_crash(session: &mut Session) {
    let car = session.vehicle.body.bounding_box();
    let crashed = session
        .opponents
        .iter()
        .any(|rival| !rival.is_exploded() && overlaps(&car, &rival.bounding_box()));
    if crashed {
        session.stop();
    }
}

#[cfg(test)]
mod tests {
    use glam::IVec2;

    use super::*;
    use crate::settings::{GameConfig, Size};
    use crate::sim::{BoundingBox, Entity, EntityKind};

    /// Session with nothing on the road
    fn empty_session() -> Session {
        let mut session = Session::new(&GameConfig::with_seed(12345)).unwrap();
        session.obstacles.clear();
        session.opponents.clear();
        session
    }

    fn park_rival_on_player(session: &mut Session) {
        let mut rival = Entity::new(EntityKind::Opponent, session.vehicle.body.size());
        rival.pos = session.vehicle.body.pos;
        session.opponents.push(rival);
    }

    #[test]
    fn test_tick_scrolls_entities() {
        let mut session = Session::new(&GameConfig::with_seed(1)).unwrap();
        let tanks: Vec<_> = session.obstacles.iter().map(|e| e.pos).collect();
        let rivals: Vec<_> = session.opponents.iter().map(|e| e.pos).collect();

        tick(&mut session, &TickInput::default());

        let speed = BASE_SCROLL_SPEED as i32;
        for (before, after) in tanks.iter().zip(&session.obstacles) {
            assert_eq!(after.pos, *before + IVec2::new(0, speed));
        }
        for (before, after) in rivals.iter().zip(&session.opponents) {
            assert_eq!(after.pos, *before + IVec2::new(0, speed - 1));
        }
        assert_eq!(session.road.pos.y, speed);
        assert_eq!(session.time_ticks, 1);
    }

    #[test]
    fn test_road_wraps() {
        let mut session = empty_session();
        session.road.pos.y = SCREEN_HEIGHT - 1;
        tick(&mut session, &TickInput::default());
        assert_eq!(session.road.pos.y, 0);
    }

    #[test]
    fn test_entities_respawn_past_bottom() {
        let mut session = Session::new(&GameConfig::with_seed(5)).unwrap();
        session.obstacles[0].pos.y = SCREEN_HEIGHT - 1;
        session.opponents[0].pos.y = SCREEN_HEIGHT - 1;
        session.opponents[0].pos.x = 0;
        session.opponents[0].explode();
        // Keep the rival away from the player while it falls
        session.vehicle.body.set_position(IVec2::new(SCREEN_WIDTH, 0));

        tick(&mut session, &TickInput::default());

        assert!(session.obstacles[0].pos.y < 0);
        assert!(session.opponents[0].pos.y < 0);
        assert!(!session.opponents[0].is_exploded());
    }

    #[test]
    fn test_player_moves_with_turbo() {
        let mut session = empty_session();
        let start = session.vehicle.body.pos;

        let left = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut session, &left);
        assert_eq!(session.vehicle.body.pos.x, start.x - CAR_SPEED as i32);

        let turbo_left = TickInput {
            left: true,
            turbo: true,
            ..Default::default()
        };
        tick(&mut session, &turbo_left);
        assert_eq!(session.vehicle.speed, TURBO_SPEED);
        assert!(session.vehicle.turbo);
        assert_eq!(
            session.vehicle.body.pos.x,
            start.x - (CAR_SPEED + TURBO_SPEED) as i32
        );

        tick(&mut session, &TickInput::default());
        assert_eq!(session.vehicle.speed, CAR_SPEED);
    }

    #[test]
    fn test_fuel_pickup_scenario() {
        let mut config = GameConfig::with_seed(9);
        config.assets.player = Size::new(20, 20);
        config.assets.fuel_tank = Size::new(20, 20);
        let mut session = Session::new(&config).unwrap();
        session.opponents.clear();
        session.obstacles.truncate(1);

        session.obstacles[0].pos = IVec2::new(100, 100);
        session.vehicle.body.set_position(IVec2::new(90, 90));
        assert_eq!(
            session.vehicle.body.bounding_box(),
            BoundingBox::new(90, 110, 90, 110)
        );

        collect_fuel(&mut session);
        assert_eq!(session.score(), 1);
        assert!(session.obstacles[0].pos.y < 0);
    }

    #[test]
    fn test_fuel_pickup_through_tick() {
        let mut session = empty_session();
        let mut tank = Entity::new(EntityKind::Fuel, IVec2::new(40, 50));
        tank.pos = session.vehicle.body.pos;
        session.obstacles.push(tank);

        tick(&mut session, &TickInput::default());
        assert_eq!(session.score(), 1);
        assert!(session.obstacles[0].pos.y < 0);
    }

    #[test]
    fn test_tenth_fuel_speeds_up() {
        let mut session = empty_session();
        let mut tank = Entity::new(EntityKind::Fuel, IVec2::new(40, 50));
        tank.pos = IVec2::new(-100, -100);
        session.obstacles.push(tank);

        for expected in 1..=20u64 {
            session.obstacles[0].pos = session.vehicle.body.pos;
            tick(&mut session, &TickInput::default());
            assert_eq!(session.score(), expected);
            let steps = (expected / POINTS_PER_SPEED_STEP) as u32;
            assert_eq!(session.scroll_speed(), BASE_SCROLL_SPEED + steps);
        }
    }

    #[test]
    fn test_crash_stops_session() {
        let mut session = empty_session();
        park_rival_on_player(&mut session);

        tick(&mut session, &TickInput::default());

        assert_eq!(session.phase(), GamePhase::Stopped);
        assert_eq!(session.scroll_speed(), 0);
        assert_eq!(session.vehicle.speed, 0);
        assert!(session.vehicle.body.is_exploded());
    }

    #[test]
    fn test_exploded_rival_is_harmless() {
        let mut session = empty_session();
        park_rival_on_player(&mut session);
        session.opponents[0].explode();

        tick(&mut session, &TickInput::default());
        assert_eq!(session.phase(), GamePhase::Running);
    }

    #[test]
    fn test_stopped_session_is_frozen() {
        let mut session = empty_session();
        park_rival_on_player(&mut session);
        tick(&mut session, &TickInput::default());
        assert_eq!(session.phase(), GamePhase::Stopped);

        let car = session.vehicle.body.pos;
        let road = session.road.pos;
        let busy = TickInput {
            left: true,
            fire: true,
            turbo: true,
            ..Default::default()
        };
        session.advance(&busy, 10);
        assert_eq!(session.vehicle.body.pos, car);
        assert_eq!(session.road.pos, road);
        assert!(session.vehicle.projectiles.is_empty());
        assert_eq!(session.vehicle.speed, 0);
    }

    #[test]
    fn test_pickup_and_crash_same_tick() {
        let mut session = empty_session();
        let mut tank = Entity::new(EntityKind::Fuel, IVec2::new(40, 50));
        tank.pos = session.vehicle.body.pos;
        session.obstacles.push(tank);
        park_rival_on_player(&mut session);

        tick(&mut session, &TickInput::default());
        assert_eq!(session.score(), 1);
        assert_eq!(session.phase(), GamePhase::Stopped);
    }

    #[test]
    fn test_reset_from_stopped() {
        let mut session = Session::new(&GameConfig::with_seed(77)).unwrap();
        park_rival_on_player(&mut session);
        session.award(12);
        tick(&mut session, &TickInput::default());
        assert_eq!(session.phase(), GamePhase::Stopped);

        let reset = TickInput {
            reset: true,
            left: true,
            ..Default::default()
        };
        tick(&mut session, &reset);

        assert_eq!(session.phase(), GamePhase::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.scroll_speed(), BASE_SCROLL_SPEED);
        assert_eq!(session.vehicle.speed, CAR_SPEED);
        assert!(!session.vehicle.body.is_exploded());
        // Reset tick does nothing else
        assert_eq!(session.vehicle.body.pos, session.vehicle.start_position());
        assert!(session.opponents.iter().all(|r| !r.is_exploded()));
        assert!(session.opponents.iter().all(|r| r.pos.y < 0));
        assert!(session.obstacles.iter().all(|t| t.pos.y < 0));
    }

    #[test]
    fn test_fire_rate_while_held() {
        let mut session = empty_session();
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        session.advance(&fire, FIRE_RATE_TICKS * 5);
        assert_eq!(session.vehicle.shots_fired, 5);

        session.advance(&fire, 1);
        assert_eq!(session.vehicle.shots_fired, 6);
    }

    #[test]
    fn test_projectile_removed_at_top() {
        let mut session = empty_session();
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut session, &fire);
        assert_eq!(session.vehicle.projectiles.len(), 1);

        let per_tick = (CAR_SPEED + PROJECTILE_SPEED_OFFSET) as i32;
        let remaining = session.vehicle.projectiles[0].body.pos.y;
        let ticks_left = (remaining + per_tick - 1) / per_tick;
        session.advance(&TickInput::default(), ticks_left as u32 - 1);
        assert_eq!(session.vehicle.projectiles.len(), 1);
        tick(&mut session, &TickInput::default());
        assert!(session.vehicle.projectiles.is_empty());
    }

    #[test]
    fn test_projectile_hit_scores_once() {
        let mut session = empty_session();
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut session, &fire);
        let shot = session.vehicle.projectiles[0].body.bounding_box();

        // Rival sitting just above the shot, not touching the player
        let mut rival = Entity::new(EntityKind::Opponent, IVec2::new(70, 140));
        rival.pos = IVec2::new(shot.left - 30, shot.top - 150);
        session.opponents.push(rival);

        // Fly until the first hit
        let mut ticks = 0;
        while session.score() == 0 && ticks < 100 {
            tick(&mut session, &TickInput::default());
            ticks += 1;
        }
        assert!(session.opponents[0].is_exploded());
        assert_eq!(session.score(), PROJECTILE_HIT_BONUS);

        // Shot keeps overlapping the wreck on the next tick
        tick(&mut session, &TickInput::default());
        assert_eq!(session.score(), PROJECTILE_HIT_BONUS);
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut session = empty_session();
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut session, &quit);
        assert!(session.quit_requested());
    }

    #[test]
    fn test_determinism() {
        let config = GameConfig::with_seed(99999);
        let mut a = Session::new(&config).unwrap();
        let mut b = Session::new(&config).unwrap();
        let demo = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let reset = TickInput {
            reset: true,
            ..Default::default()
        };

        for _ in 0..2000 {
            tick(&mut a, &demo);
            tick(&mut b, &demo);
            if !a.is_running() {
                tick(&mut a, &reset);
                tick(&mut b, &reset);
            }
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_step_pixels_saturates() {
        assert_eq!(step_pixels(3), 3);
        assert_eq!(step_pixels(i32::MAX as u32), i32::MAX);
        assert_eq!(step_pixels(3_000_000_000), i32::MAX);
    }

    #[test]
    fn test_huge_scroll_step_recycles_without_overflow() {
        let mut session = Session::new(&GameConfig::default()).unwrap();
        let (spawner, tanks, _) = session.spawn_parts();
        let tank = &mut tanks[0];
        tank.pos.y = 700;
        tank.move_down(step_pixels(3_000_000_000));
        assert!(spawner.recycle_if_below(tank));
        assert!(tank.pos.y < 0);
    }
}
