//! Particle bursts (explosions and engine exhaust)

use glam::Vec2;
use std::f32::consts::PI;

use super::rng::GameRng;
use super::state::{Particle, Ship};
use crate::consts::*;
use crate::heading_vector;

/// Radial burst of `count` particles at `pos`
pub fn explosion(pos: Vec2, color: u32, count: usize, rng: &mut GameRng) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let dir = rng.angle();
            let speed = rng.float(1.0, 4.0);
            let life = rng.int(15, 35) as u32;
            Particle {
                pos,
                vel: Vec2::new(dir.cos(), dir.sin()) * speed,
                life,
                max_life: life,
                color,
            }
        })
        .collect()
}

/// Exhaust emitted behind a thrusting ship, one tick's worth
pub fn thrust(ship: &Ship, rng: &mut GameRng) -> Vec<Particle> {
    let back = heading_vector(ship.angle) * -1.0;
    let origin = ship.pos + back * SHIP_RADIUS;
    let base = ship.angle.to_radians() + PI;

    (0..THRUST_PARTICLES)
        .map(|_| {
            let dir = base + rng.float(-0.3, 0.3);
            let speed = rng.float(1.0, 3.0);
            let life = rng.int(8, 18) as u32;
            Particle {
                pos: origin,
                vel: Vec2::new(dir.cos(), dir.sin()) * speed + ship.vel * THRUST_INHERIT,
                life,
                max_life: life,
                color: COLOR_THRUST,
            }
        })
        .collect()
}
