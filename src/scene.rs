//! Scene frames handed to the renderer
//!
//! A frame is everything the renderer may know about the world. It is built
//! from the game state after the tick completes, so it never shows a
//! half-resolved collision.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{AsteroidSize, GameState, GameStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Vec2,
    pub velocity: Vec2,
    pub angle: f32,
    pub thrusting: bool,
    pub invincibility: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Vec2,
    pub life: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidView {
    pub position: Vec2,
    pub size: AsteroidSize,
    pub angle: f32,
    pub vertices: Vec<Vec2>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleView {
    pub position: Vec2,
    pub life: u32,
    pub max_life: u32,
    /// `#rrggbb`
    pub color: String,
}

/// One rendered frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFrame {
    pub state: GameStatus,
    pub ship: ShipView,
    pub bullets: Vec<BulletView>,
    pub asteroids: Vec<AsteroidView>,
    pub particles: Vec<ParticleView>,
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub frame: u64,
}

impl SceneFrame {
    /// Snapshot the renderable parts of the game state
    pub fn capture(state: &GameState) -> Self {
        let ship = &state.ship;
        Self {
            state: state.status,
            ship: ShipView {
                position: ship.pos,
                velocity: ship.vel,
                angle: ship.angle,
                thrusting: ship.thrusting,
                invincibility: ship.invincibility,
            },
            bullets: state
                .bullets
                .iter()
                .map(|b| BulletView {
                    position: b.pos,
                    life: b.life,
                })
                .collect(),
            asteroids: state
                .asteroids
                .iter()
                .map(|a| AsteroidView {
                    position: a.pos,
                    size: a.size,
                    angle: a.angle,
                    vertices: a.outline.clone(),
                })
                .collect(),
            particles: state
                .particles
                .iter()
                .map(|p| ParticleView {
                    position: p.pos,
                    life: p.life,
                    max_life: p.max_life,
                    color: color_tag(p.color),
                })
                .collect(),
            score: state.score,
            lives: state.lives,
            level: state.level,
            frame: state.frame,
        }
    }

    /// Encode as compact JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameStatus::GameOver
    }
}

/// `0xRRGGBB` to `#rrggbb`
pub fn color_tag(rgb: u32) -> String {
    format!("#{:06x}", rgb & 0x00FF_FFFF)
}
