//! Asteroid factories: wave spawning and splitting

use glam::Vec2;
use std::f32::consts::TAU;

use super::rng::GameRng;
use super::state::{Asteroid, AsteroidSize};
use crate::consts::*;

/// Irregular outline: `ASTEROID_VERTICES` points evenly spaced around the
/// unit circle, each pushed in or out by an independent 0.7-1.3 jitter
pub fn random_outline(rng: &mut GameRng) -> Vec<Vec2> {
    (0..ASTEROID_VERTICES)
        .map(|i| {
            let theta = i as f32 / ASTEROID_VERTICES as f32 * TAU;
            let r = rng.float(0.7, 1.3);
            Vec2::new(theta.cos() * r, theta.sin() * r)
        })
        .collect()
}

/// Random point just outside one of the four canvas edges
fn edge_position(rng: &mut GameRng) -> Vec2 {
    match rng.int(0, 3) {
        0 => Vec2::new(rng.float(0.0, CANVAS_WIDTH), -SPAWN_OFFSET),
        1 => Vec2::new(CANVAS_WIDTH + SPAWN_OFFSET, rng.float(0.0, CANVAS_HEIGHT)),
        2 => Vec2::new(rng.float(0.0, CANVAS_WIDTH), CANVAS_HEIGHT + SPAWN_OFFSET),
        _ => Vec2::new(-SPAWN_OFFSET, rng.float(0.0, CANVAS_HEIGHT)),
    }
}

/// Spawn `count` large asteroids entering from the canvas edges
pub fn spawn_wave(count: usize, rng: &mut GameRng) -> Vec<Asteroid> {
    log::trace!("Spawning wave of {count} asteroids");
    (0..count)
        .map(|_| {
            let pos = edge_position(rng);
            let speed = rng.float(0.5, 2.0);
            let dir = rng.angle();
            let rotation_speed = rng.float(-2.0, 2.0);
            let angle = rng.float(0.0, 360.0) % 360.0;
            Asteroid {
                pos,
                vel: Vec2::new(dir.cos(), dir.sin()) * speed,
                size: AsteroidSize::Large,
                angle,
                rotation_speed,
                outline: random_outline(rng),
            }
        })
        .collect()
}

/// Fragments produced by destroying `parent`: two of the next smaller size
/// at the parent's position, or nothing for a small asteroid
pub fn split(parent: &Asteroid, rng: &mut GameRng) -> Vec<Asteroid> {
    let Some(size) = parent.size.child() else {
        return Vec::new();
    };

    (0..2)
        .map(|_| {
            let dir = rng.angle();
            let speed = rng.float(1.5, 3.0);
            let rotation_speed = rng.float(-3.0, 3.0);
            Asteroid {
                pos: parent.pos,
                vel: Vec2::new(dir.cos(), dir.sin()) * speed,
                size,
                angle: parent.angle,
                rotation_speed,
                outline: random_outline(rng),
            }
        })
        .collect()
}
