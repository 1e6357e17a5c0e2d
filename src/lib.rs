//! Asteroid Drift - simulation core for a wrap-around asteroid shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `input`: Key identifiers and the held-keys snapshot
//! - `scene`: Transport-neutral frame description for the renderer
//! - `game`: Host-facing driver (key events in, scene frames out)
//! - `demo`: Autopilot used by the headless runner
//! - `settings`: Runner configuration

pub mod demo;
pub mod game;
pub mod input;
pub mod scene;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use scene::SceneFrame;
pub use settings::{FrameOutput, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical canvas size (fixed)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;
    /// How far past an edge an entity travels before wrapping
    pub const WRAP_MARGIN: f32 = 50.0;

    /// Ship
    pub const SHIP_RADIUS: f32 = 15.0;
    /// Degrees per tick while a turn key is held
    pub const SHIP_TURN_SPEED: f32 = 5.0;
    pub const SHIP_THRUST: f32 = 0.12;
    /// Velocity multiplier applied every tick
    pub const SHIP_FRICTION: f32 = 0.99;
    pub const SHIP_START_ANGLE: f32 = -90.0;
    /// Invincibility after (re)spawn, in frames
    pub const INVINCIBILITY_FRAMES: u32 = 120;

    /// Bullets
    pub const BULLET_SPEED: f32 = 7.0;
    pub const BULLET_LIFE: u32 = 60;
    pub const BULLET_HIT_RADIUS: f32 = 3.0;
    pub const MAX_BULLETS: usize = 5;
    pub const SHOOT_COOLDOWN: u32 = 8;
    /// Fraction of ship velocity inherited by a new bullet
    pub const BULLET_INHERIT: f32 = 0.5;

    /// Asteroids
    pub const ASTEROID_RADIUS_LARGE: f32 = 40.0;
    pub const ASTEROID_RADIUS_MEDIUM: f32 = 20.0;
    pub const ASTEROID_RADIUS_SMALL: f32 = 10.0;
    pub const SCORE_LARGE: u64 = 20;
    pub const SCORE_MEDIUM: u64 = 50;
    pub const SCORE_SMALL: u64 = 100;
    pub const ASTEROID_VERTICES: usize = 10;
    /// Distance outside the canvas edge where new waves appear
    pub const SPAWN_OFFSET: f32 = 30.0;

    /// Session
    pub const START_LIVES: u32 = 3;
    pub const START_WAVE_SIZE: usize = 4;
    /// Base asteroid count per wave; the wave adds the level number
    pub const WAVE_BASE: usize = 3;

    /// Particles
    pub const ASTEROID_EXPLOSION_PARTICLES: usize = 8;
    pub const SHIP_EXPLOSION_PARTICLES: usize = 15;
    pub const THRUST_PARTICLES: usize = 2;
    pub const THRUST_INHERIT: f32 = 0.3;

    /// Colors (0xRRGGBB)
    pub const COLOR_SHIP_EXPLOSION: u32 = 0x00FFFF;
    pub const COLOR_THRUST: u32 = 0xFF8800;
    pub const COLOR_ASTEROID_LARGE: u32 = 0xB0B0B0;
    pub const COLOR_ASTEROID_MEDIUM: u32 = 0xD0D0D0;
    pub const COLOR_ASTEROID_SMALL: u32 = 0xF0F0F0;
}

/// Wrap a single coordinate across `[-WRAP_MARGIN, extent + WRAP_MARGIN]`
#[inline]
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    use consts::WRAP_MARGIN;
    let span = extent + 2.0 * WRAP_MARGIN;
    if value > extent + WRAP_MARGIN {
        value - span
    } else if value < -WRAP_MARGIN {
        value + span
    } else {
        value
    }
}

/// Wrap a position on the toroidal playfield
#[inline]
pub fn wrap_position(pos: Vec2) -> Vec2 {
    Vec2::new(
        wrap_coord(pos.x, consts::CANVAS_WIDTH),
        wrap_coord(pos.y, consts::CANVAS_HEIGHT),
    )
}

/// Unit vector for a heading given in degrees
#[inline]
pub fn heading_vector(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Center of the canvas (ship spawn point)
#[inline]
pub fn canvas_center() -> Vec2 {
    Vec2::new(consts::CANVAS_WIDTH / 2.0, consts::CANVAS_HEIGHT / 2.0)
}
