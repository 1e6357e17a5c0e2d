//! Host-facing game driver
//!
//! The host forwards key events as they arrive and calls `tick` once per
//! animation frame. Key events only touch the held-keys snapshot (or apply a
//! confirm); the simulation reads the snapshot once at the start of each tick.

use crate::input::{Key, KeyEvent};
use crate::scene::SceneFrame;
use crate::sim::{self, GameEvent, GameState};

/// A running game session
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    /// Events drained by the last tick, including any raised by key events
    /// just before it
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        log::info!("New session with seed {}", seed);
        Self {
            state: GameState::new(seed),
            events: Vec::new(),
        }
    }

    /// Raw key-down from the host; unknown identifiers are ignored
    pub fn key_down(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.handle(KeyEvent::Down(key));
        }
    }

    /// Raw key-up from the host; unknown identifiers are ignored
    pub fn key_up(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.handle(KeyEvent::Up(key));
        }
    }

    pub fn handle(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Down(Key::Confirm) => sim::confirm(&mut self.state),
            KeyEvent::Up(Key::Confirm) => {}
            KeyEvent::Down(key) => {
                self.state.keys.set(key, true);
            }
            KeyEvent::Up(key) => {
                self.state.keys.set(key, false);
            }
        }
    }

    /// Advance one frame. The timestamp only triggers the step; the
    /// simulation counts frames, not wall-clock time.
    pub fn tick(&mut self, _timestamp: f64) -> SceneFrame {
        sim::tick(&mut self.state);
        self.events = std::mem::take(&mut self.state.events);
        self.scene()
    }

    /// Frame for the current state without advancing
    pub fn scene(&self) -> SceneFrame {
        SceneFrame::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Events raised during the last tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}
