//! Fixed-step simulation tick
//!
//! Core game loop that advances the state machine by exactly one frame.
//! Integration always runs before collision resolution, and collision
//! resolution (splits, respawn, next wave) finishes before the tick returns.

use super::collision::{resolve_bullet_hits, resolve_ship_hit};
use super::movement::{update_asteroids, update_bullets, update_particles, update_ship};
use super::particles::thrust;
use super::spawn::spawn_wave;
use super::state::{Bullet, GameEvent, GameState, GameStatus, Ship};
use crate::consts::*;
use crate::{heading_vector, wrap_position};

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) {
    match state.status {
        GameStatus::Start => {
            state.frame += 1;
            // Ambient drift only
            update_asteroids(&mut state.asteroids);
        }
        GameStatus::Playing => step_playing(state),
        GameStatus::GameOver => {}
    }
}

/// Confirm input: begins a run from the start or game-over screen.
/// Ignored while playing.
pub fn confirm(state: &mut GameState) {
    match state.status {
        GameStatus::Start | GameStatus::GameOver => state.start_game(),
        GameStatus::Playing => {}
    }
}

fn step_playing(state: &mut GameState) {
    state.frame += 1;
    let keys = state.keys;

    update_ship(&mut state.ship, &keys);
    if state.ship.thrusting {
        let exhaust = thrust(&state.ship, &mut state.rng);
        state.particles.extend(exhaust);
    }

    if keys.space && state.shoot_cooldown == 0 && state.bullets.len() < MAX_BULLETS {
        fire(state);
    } else {
        state.shoot_cooldown = state.shoot_cooldown.saturating_sub(1);
    }

    state.ship.invincibility = state.ship.invincibility.saturating_sub(1);

    update_bullets(&mut state.bullets);
    update_asteroids(&mut state.asteroids);
    update_particles(&mut state.particles);

    resolve_bullet_hits(state);
    if resolve_ship_hit(state) {
        lose_life(state);
    }

    if state.status == GameStatus::Playing && state.asteroids.is_empty() {
        advance_level(state);
    }
}

fn fire(state: &mut GameState) {
    let ship = &state.ship;
    let vel = heading_vector(ship.angle) * BULLET_SPEED + ship.vel * BULLET_INHERIT;
    state.bullets.push(Bullet {
        pos: wrap_position(ship.nose()),
        vel,
        life: BULLET_LIFE,
    });
    state.shoot_cooldown = SHOOT_COOLDOWN;
}

fn lose_life(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::ShipHit {
        lives_left: state.lives,
    });

    if state.lives == 0 {
        state.status = GameStatus::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "Game over at level {} with score {} (frame {})",
            state.level,
            state.score,
            state.frame
        );
    } else {
        log::debug!("Ship destroyed, {} lives left", state.lives);
        state.ship = Ship::spawn();
    }
}

fn advance_level(state: &mut GameState) {
    let cleared = state.level;
    state.level += 1;
    let count = WAVE_BASE + state.level as usize;
    state.asteroids = spawn_wave(count, &mut state.rng);
    state.events.push(GameEvent::LevelCleared { level: cleared });
    log::info!("Level {} cleared, spawning {} asteroids", cleared, count);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Keys;
    use crate::sim::state::{Asteroid, AsteroidSize};
    use glam::Vec2;

    fn still_rock(pos: Vec2, size: AsteroidSize) -> Asteroid {
        Asteroid {
            pos,
            vel: Vec2::ZERO,
            size,
            angle: 0.0,
            rotation_speed: 0.0,
            outline: vec![Vec2::X; ASTEROID_VERTICES],
        }
    }

    fn still_bullet(pos: Vec2) -> Bullet {
        Bullet {
            pos,
            vel: Vec2::ZERO,
            life: 50,
        }
    }

    /// Playing state with a single parked asteroid far from the ship
    fn quiet_playing_state() -> GameState {
        let mut state = GameState::new(2024);
        confirm(&mut state);
        state.asteroids = vec![still_rock(Vec2::new(700.0, 500.0), AsteroidSize::Small)];
        state.events.clear();
        state
    }

    #[test]
    fn test_confirm_from_start() {
        let mut state = GameState::new(12345);
        assert_eq!(state.status, GameStatus::Start);

        confirm(&mut state);

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.asteroids.len(), 4);
        assert!(state.asteroids.iter().all(|a| a.size == AsteroidSize::Large));
        assert_eq!(state.ship.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ship.angle, -90.0);
        assert_eq!(state.ship.invincibility, 120);
    }

    #[test]
    fn test_confirm_ignored_while_playing() {
        let mut state = quiet_playing_state();
        state.score = 40;
        let before = state.clone();
        confirm(&mut state);
        assert_eq!(state, before);
    }

    #[test]
    fn test_start_screen_only_drifts_asteroids() {
        let mut state = GameState::new(3);
        state.keys = Keys {
            left: true,
            up: true,
            space: true,
            ..Default::default()
        };
        let ship = state.ship.clone();
        let before: Vec<Vec2> = state.asteroids.iter().map(|a| a.pos).collect();

        tick(&mut state);

        assert_eq!(state.frame, 1);
        assert_eq!(state.ship, ship);
        assert!(state.bullets.is_empty());
        assert!(state.particles.is_empty());
        assert_eq!(state.score, 0);
        let after: Vec<Vec2> = state.asteroids.iter().map(|a| a.pos).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_thrust_single_tick() {
        let mut state = quiet_playing_state();
        state.ship.angle = 0.0;
        state.keys.up = true;

        tick(&mut state);

        let expected = 0.12 * 0.99;
        assert!((state.ship.vel.x - expected).abs() < 1e-6);
        assert!(state.ship.vel.y.abs() < 1e-6);
        assert!((state.ship.pos.x - (400.0 + expected)).abs() < 1e-4);
        assert!((state.ship.pos.y - 300.0).abs() < 1e-4);
        // Exhaust particles, emitted then integrated once
        assert_eq!(state.particles.len(), THRUST_PARTICLES);
    }

    #[test]
    fn test_fire_spawns_bullet_and_sets_cooldown() {
        let mut state = quiet_playing_state();
        state.keys.space = true;

        tick(&mut state);

        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.shoot_cooldown, SHOOT_COOLDOWN);
        let bullet = &state.bullets[0];
        assert_eq!(bullet.life, BULLET_LIFE - 1);
        // Fired upward from the nose, then moved one step
        assert!((bullet.pos.x - 400.0).abs() < 1e-3);
        assert!((bullet.pos.y - (300.0 - SHIP_RADIUS - BULLET_SPEED)).abs() < 1e-3);

        // Held fire respects the cooldown
        for _ in 0..SHOOT_COOLDOWN {
            tick(&mut state);
        }
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.shoot_cooldown, 0);
        tick(&mut state);
        assert_eq!(state.bullets.len(), 2);
    }

    #[test]
    fn test_bullet_cap_blocks_firing() {
        let mut state = quiet_playing_state();
        state.bullets = (0..MAX_BULLETS)
            .map(|i| still_bullet(Vec2::new(50.0 + i as f32 * 20.0, 50.0)))
            .collect();
        state.keys.space = true;
        state.shoot_cooldown = 0;

        tick(&mut state);

        assert_eq!(state.bullets.len(), MAX_BULLETS);
        assert_eq!(state.shoot_cooldown, 0);
    }

    #[test]
    fn test_bullet_hits_small_asteroid_in_tick() {
        let mut state = quiet_playing_state();
        state.bullets = vec![still_bullet(Vec2::new(702.0, 500.0))];
        state.asteroids.push(still_rock(Vec2::new(100.0, 500.0), AsteroidSize::Large));

        tick(&mut state);

        assert_eq!(state.score, 100);
        assert!(state.bullets.is_empty());
        assert_eq!(state.asteroids.len(), 1);
        assert_eq!(state.asteroids[0].size, AsteroidSize::Large);
    }

    #[test]
    fn test_bullet_out_of_range_misses() {
        let mut state = quiet_playing_state();
        state.bullets = vec![still_bullet(Vec2::new(715.0, 500.0))];

        tick(&mut state);

        assert_eq!(state.score, 0);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.asteroids.len(), 1);
    }

    #[test]
    fn test_clearing_field_spawns_next_wave_same_tick() {
        let mut state = quiet_playing_state();
        assert_eq!(state.level, 1);
        state.bullets = vec![still_bullet(Vec2::new(701.0, 500.0))];

        tick(&mut state);

        assert_eq!(state.level, 2);
        assert_eq!(state.asteroids.len(), WAVE_BASE + 2);
        assert!(state.asteroids.iter().all(|a| a.size == AsteroidSize::Large));
        assert!(state.events.contains(&GameEvent::LevelCleared { level: 1 }));
    }

    #[test]
    fn test_invincible_ship_survives_collision() {
        let mut state = quiet_playing_state();
        state.asteroids = vec![still_rock(Vec2::new(400.0, 300.0), AsteroidSize::Large)];
        state.ship.invincibility = 60;

        tick(&mut state);

        assert_eq!(state.lives, 3);
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.ship.invincibility, 59);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_non_fatal_hit_respawns_ship() {
        let mut state = quiet_playing_state();
        state.asteroids = vec![still_rock(Vec2::new(420.0, 300.0), AsteroidSize::Large)];
        state.ship.invincibility = 0;
        state.ship.vel = Vec2::new(1.0, 1.0);

        tick(&mut state);

        assert_eq!(state.lives, 2);
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.ship, Ship::spawn());
        assert_eq!(state.asteroids.len(), 1);
        assert_eq!(state.particles.len(), SHIP_EXPLOSION_PARTICLES);
        assert_eq!(state.events, vec![GameEvent::ShipHit { lives_left: 2 }]);
    }

    #[test]
    fn test_fatal_hit_freezes_game() {
        let mut state = quiet_playing_state();
        state.asteroids = vec![still_rock(Vec2::new(420.0, 300.0), AsteroidSize::Large)];
        state.ship.invincibility = 0;
        state.lives = 1;
        state.score = 370;

        tick(&mut state);

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.lives, 0);
        assert!(state.events.contains(&GameEvent::GameOver { score: 370 }));

        let mut frozen = state.clone();
        frozen.keys = Keys {
            right: true,
            up: true,
            space: true,
            ..Default::default()
        };
        let keys = frozen.keys;
        tick(&mut frozen);
        frozen.keys = state.keys;
        frozen.events.clear();
        state.events.clear();
        assert_eq!(frozen, state);
        assert_ne!(keys, state.keys);
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut state = quiet_playing_state();
        state.status = GameStatus::GameOver;
        state.lives = 0;
        state.score = 1000;
        state.level = 4;

        confirm(&mut state);

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.asteroids.len(), 4);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);
        confirm(&mut a);
        confirm(&mut b);

        for frame in 0..600u32 {
            let keys = Keys {
                left: frame % 90 < 20,
                right: frame % 70 > 50,
                up: frame % 40 < 10,
                space: frame % 3 == 0,
            };
            a.keys = keys;
            b.keys = keys;
            tick(&mut a);
            tick(&mut b);
            assert_eq!(a, b);
        }
    }
}
