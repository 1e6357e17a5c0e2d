//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, counted in frames
//! - Seeded RNG only, owned by the game state
//! - Stable iteration order (list order decides first-match collisions)
//! - No rendering or platform dependencies

pub mod collision;
pub mod movement;
pub mod particles;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{bullet_hits_asteroid, resolve_bullet_hits, resolve_ship_hit, ship_hits_asteroid};
pub use rng::GameRng;
pub use spawn::{random_outline, spawn_wave, split};
pub use state::{
    Asteroid, AsteroidSize, Bullet, GameEvent, GameState, GameStatus, Particle, Ship,
};
pub use tick::{confirm, tick};
