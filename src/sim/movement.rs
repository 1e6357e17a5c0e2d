//! Per-entity integration
//!
//! Everything advances one fixed step per tick; there is no `dt`.

use super::state::{Asteroid, Bullet, Particle, Ship};
use crate::consts::*;
use crate::input::Keys;
use crate::{heading_vector, wrap_position};

/// Turn, thrust, apply friction, integrate and wrap
pub fn update_ship(ship: &mut Ship, keys: &Keys) {
    if keys.left {
        ship.angle -= SHIP_TURN_SPEED;
    }
    if keys.right {
        ship.angle += SHIP_TURN_SPEED;
    }

    ship.thrusting = keys.up;
    if ship.thrusting {
        ship.vel += heading_vector(ship.angle) * SHIP_THRUST;
    }

    ship.vel *= SHIP_FRICTION;
    ship.pos = wrap_position(ship.pos + ship.vel);
}

/// Move and age bullets, dropping expired ones
pub fn update_bullets(bullets: &mut Vec<Bullet>) {
    for bullet in bullets.iter_mut() {
        bullet.pos = wrap_position(bullet.pos + bullet.vel);
        bullet.life = bullet.life.saturating_sub(1);
    }
    bullets.retain(|b| b.life > 0);
}

/// Drift and spin asteroids
pub fn update_asteroids(asteroids: &mut [Asteroid]) {
    for asteroid in asteroids {
        asteroid.pos = wrap_position(asteroid.pos + asteroid.vel);
        asteroid.angle += asteroid.rotation_speed;
    }
}

/// Move and fade particles; they do not wrap
pub fn update_particles(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.life = particle.life.saturating_sub(1);
    }
    particles.retain(|p| p.life > 0);
}
