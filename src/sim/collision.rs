//! Circle-approximate collision detection and response
//!
//! Scans run in list order with early exit, so the first asteroid in the
//! list wins when several overlap.

use glam::Vec2;

use super::particles::explosion;
use super::spawn::split;
use super::state::{Asteroid, GameEvent, GameState, Ship};
use crate::consts::*;

/// Bullet overlaps the asteroid's hit circle
#[inline]
pub fn bullet_hits_asteroid(bullet_pos: Vec2, asteroid: &Asteroid) -> bool {
    bullet_pos.distance(asteroid.pos) < asteroid.radius() + BULLET_HIT_RADIUS
}

/// Ship overlaps the asteroid's hit circle (slightly forgiving)
#[inline]
pub fn ship_hits_asteroid(ship: &Ship, asteroid: &Asteroid) -> bool {
    ship.pos.distance(asteroid.pos) < asteroid.radius() + SHIP_RADIUS - 5.0
}

/// Resolve every bullet against the asteroid field.
///
/// A bullet consumes at most one asteroid. The asteroid is removed, its
/// fragments are appended to the field, an explosion is queued and the score
/// is credited. Bullets that hit nothing are kept unchanged.
pub fn resolve_bullet_hits(state: &mut GameState) {
    let bullets = std::mem::take(&mut state.bullets);
    let mut survivors = Vec::with_capacity(bullets.len());

    for bullet in bullets {
        let hit = state
            .asteroids
            .iter()
            .position(|a| bullet_hits_asteroid(bullet.pos, a));

        match hit {
            Some(index) => {
                let asteroid = state.asteroids.remove(index);
                destroy_asteroid(state, &asteroid);
            }
            None => survivors.push(bullet),
        }
    }

    state.bullets = survivors;
}

fn destroy_asteroid(state: &mut GameState, asteroid: &Asteroid) {
    let fragments = split(asteroid, &mut state.rng);
    state.asteroids.extend(fragments);

    let burst = explosion(
        asteroid.pos,
        asteroid.size.color(),
        ASTEROID_EXPLOSION_PARTICLES,
        &mut state.rng,
    );
    state.particles.extend(burst);

    let points = asteroid.size.points();
    state.score += points;
    state.events.push(GameEvent::AsteroidDestroyed {
        size: asteroid.size,
        points,
    });
    log::debug!(
        "{} asteroid destroyed at ({:.1}, {:.1}), score {}",
        asteroid.size.as_str(),
        asteroid.pos.x,
        asteroid.pos.y,
        state.score
    );
}

/// Check the ship against the field. Returns true on a hit and queues the
/// ship explosion; asteroids are left in place. Skipped while invincible.
pub fn resolve_ship_hit(state: &mut GameState) -> bool {
    if state.ship.is_invincible() {
        return false;
    }

    let hit = state
        .asteroids
        .iter()
        .any(|a| ship_hits_asteroid(&state.ship, a));
    if !hit {
        return false;
    }

    let burst = explosion(
        state.ship.pos,
        COLOR_SHIP_EXPLOSION,
        SHIP_EXPLOSION_PARTICLES,
        &mut state.rng,
    );
    state.particles.extend(burst);
    true
}
