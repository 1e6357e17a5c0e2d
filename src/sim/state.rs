//! Game state and core simulation types
//!
//! The whole session lives in one `GameState` aggregate. Every entity is owned
//! by value; nothing is shared and nothing points back at its owner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use super::spawn::spawn_wave;
use crate::consts::*;
use crate::input::Keys;
use crate::canvas_center;

/// Lifecycle status of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Title screen; asteroids drift for ambience
    Start,
    /// Active gameplay
    Playing,
    /// Run ended, world frozen
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Start => "start",
            GameStatus::Playing => "playing",
            GameStatus::GameOver => "gameover",
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in degrees
    pub angle: f32,
    pub thrusting: bool,
    /// Frames of invincibility remaining
    pub invincibility: u32,
}

impl Ship {
    /// Fresh ship at the canvas center, pointing up, fully invincible
    pub fn spawn() -> Self {
        Self {
            pos: canvas_center(),
            vel: Vec2::ZERO,
            angle: SHIP_START_ANGLE,
            thrusting: false,
            invincibility: INVINCIBILITY_FRAMES,
        }
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility > 0
    }

    /// Point `SHIP_RADIUS` ahead of the center along the heading
    pub fn nose(&self) -> Vec2 {
        self.pos + crate::heading_vector(self.angle) * SHIP_RADIUS
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self::spawn()
    }
}

/// A bullet fired by the ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames until the bullet expires
    pub life: u32,
}

/// Asteroid size category. Size fixes radius, score and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsteroidSize {
    Large,
    Medium,
    Small,
}

impl AsteroidSize {
    pub fn radius(&self) -> f32 {
        match self {
            AsteroidSize::Large => ASTEROID_RADIUS_LARGE,
            AsteroidSize::Medium => ASTEROID_RADIUS_MEDIUM,
            AsteroidSize::Small => ASTEROID_RADIUS_SMALL,
        }
    }

    /// Points awarded for destroying an asteroid of this size
    pub fn points(&self) -> u64 {
        match self {
            AsteroidSize::Large => SCORE_LARGE,
            AsteroidSize::Medium => SCORE_MEDIUM,
            AsteroidSize::Small => SCORE_SMALL,
        }
    }

    /// Size of the fragments produced when destroyed
    pub fn child(&self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }

    pub fn color(&self) -> u32 {
        match self {
            AsteroidSize::Large => COLOR_ASTEROID_LARGE,
            AsteroidSize::Medium => COLOR_ASTEROID_MEDIUM,
            AsteroidSize::Small => COLOR_ASTEROID_SMALL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AsteroidSize::Large => "large",
            AsteroidSize::Medium => "medium",
            AsteroidSize::Small => "small",
        }
    }
}

/// A drifting asteroid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: AsteroidSize,
    /// Display rotation in degrees
    pub angle: f32,
    /// Degrees per frame
    pub rotation_speed: f32,
    /// Outline as unit-circle offsets, scaled by `size.radius()` when drawn
    pub outline: Vec<Vec2>,
}

impl Asteroid {
    pub fn radius(&self) -> f32 {
        self.size.radius()
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames remaining
    pub life: u32,
    /// Life at creation, for fade ratio
    pub max_life: u32,
    /// 0xRRGGBB
    pub color: u32,
}

/// Notable things the host may react to (sound, HUD flashes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted,
    AsteroidDestroyed { size: AsteroidSize, points: u64 },
    ShipHit { lives_left: u32 },
    LevelCleared { level: u32 },
    GameOver { score: u64 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub asteroids: Vec<Asteroid>,
    pub particles: Vec<Particle>,
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    /// Held-keys snapshot, read once per tick
    pub keys: Keys,
    /// Frames until the ship may fire again
    pub shoot_cooldown: u32,
    pub rng: GameRng,
    /// Simulation tick counter
    pub frame: u64,
    /// Events raised since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session on the start screen with an ambient wave drifting
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let asteroids = spawn_wave(START_WAVE_SIZE, &mut rng);
        Self {
            status: GameStatus::Start,
            ship: Ship::spawn(),
            bullets: Vec::new(),
            asteroids,
            particles: Vec::new(),
            score: 0,
            lives: START_LIVES,
            level: 1,
            keys: Keys::default(),
            shoot_cooldown: 0,
            rng,
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Reset everything for a new run and enter Playing
    pub fn start_game(&mut self) {
        self.ship = Ship::spawn();
        self.bullets.clear();
        self.particles.clear();
        self.asteroids = spawn_wave(START_WAVE_SIZE, &mut self.rng);
        self.score = 0;
        self.lives = START_LIVES;
        self.level = 1;
        self.shoot_cooldown = 0;
        self.status = GameStatus::Playing;
        self.events.push(GameEvent::GameStarted);
        log::info!("Game started (seed {})", self.rng.seed());
    }
}
