//! Demo autopilot
//!
//! Plays the game for the headless runner: turns toward the nearest asteroid,
//! shoots when roughly lined up, and restarts after a game over. Decisions are
//! a pure function of the game state, so demo runs stay deterministic.

use crate::consts::SHIP_TURN_SPEED;
use crate::input::{Key, KeyEvent, Keys};
use crate::sim::{GameState, GameStatus};

/// Frames to linger on the start / game-over screen before confirming
pub const DEFAULT_RESTART_DELAY: u32 = 90;

/// Aim tolerance (degrees) for opening fire
const FIRE_CONE: f32 = 10.0;
/// Aim tolerance (degrees) for thrusting toward a distant target
const THRUST_CONE: f32 = 30.0;
/// Only close in on targets farther than this
const THRUST_RANGE: f32 = 250.0;

#[derive(Debug, Clone)]
pub struct DemoPilot {
    restart_delay: u32,
    waited: u32,
}

impl Default for DemoPilot {
    fn default() -> Self {
        Self::new(DEFAULT_RESTART_DELAY)
    }
}

impl DemoPilot {
    pub fn new(restart_delay: u32) -> Self {
        Self {
            restart_delay,
            waited: 0,
        }
    }

    /// Key events to apply before the next tick
    pub fn drive(&mut self, state: &GameState) -> Vec<KeyEvent> {
        if state.status != GameStatus::Playing {
            let mut events = key_events(Keys::default());
            self.waited += 1;
            if self.waited >= self.restart_delay {
                self.waited = 0;
                events.push(KeyEvent::Down(Key::Confirm));
                events.push(KeyEvent::Up(Key::Confirm));
            }
            return events;
        }

        self.waited = 0;
        key_events(choose_keys(state))
    }
}

/// Held keys the pilot wants for this frame
pub fn choose_keys(state: &GameState) -> Keys {
    let ship = &state.ship;
    let target = state.asteroids.iter().min_by(|a, b| {
        ship.pos
            .distance_squared(a.pos)
            .total_cmp(&ship.pos.distance_squared(b.pos))
    });

    let Some(target) = target else {
        return Keys::default();
    };

    let to_target = target.pos - ship.pos;
    let desired = to_target.y.atan2(to_target.x).to_degrees();
    let diff = angle_diff(desired, ship.angle);
    let distance = to_target.length();

    Keys {
        left: diff < -SHIP_TURN_SPEED / 2.0,
        right: diff > SHIP_TURN_SPEED / 2.0,
        up: distance > THRUST_RANGE && diff.abs() < THRUST_CONE,
        space: diff.abs() < FIRE_CONE,
    }
}

/// Signed shortest rotation from `from` to `to`, in (-180, 180]
pub fn angle_diff(to: f32, from: f32) -> f32 {
    let d = (to - from).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

fn key_events(keys: Keys) -> Vec<KeyEvent> {
    [
        (Key::Left, keys.left),
        (Key::Right, keys.right),
        (Key::Thrust, keys.up),
        (Key::Fire, keys.space),
    ]
    .into_iter()
    .map(|(key, held)| {
        if held {
            KeyEvent::Down(key)
        } else {
            KeyEvent::Up(key)
        }
    })
    .collect()
}
