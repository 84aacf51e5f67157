//! Loop driver
//!
//! One call to `Game::frame` is one iteration of the game loop: map input,
//! wait for the next frame slot, step the simulation once and hand back the
//! scene to draw. There is no catch-up; every step is drawn exactly once.

use crate::config::GameConfig;
use crate::input::{KeySet, map_input};
use crate::pacing::{Clock, FramePacer};
use crate::renderer::scene::{self, Scene};
use crate::sim::{GameState, tick};

/// Game instance holding all state
pub struct Game<C: Clock> {
    config: GameConfig,
    state: GameState,
    pacer: FramePacer,
    clock: C,
    frames: u64,
}

impl<C: Clock> Game<C> {
    /// Start a game seeded with `seed`, pacing from the clock's current time
    pub fn new(config: GameConfig, seed: u64, clock: C) -> Self {
        let state = GameState::new(&config, seed);
        Self::with_state(config, state, clock)
    }

    /// Resume from an existing state (tests, scripted scenarios)
    pub fn with_state(config: GameConfig, state: GameState, clock: C) -> Self {
        let pacer = FramePacer::new(config.pacing, clock.now_ms());
        Self {
            config,
            state,
            pacer,
            clock,
            frames: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Simulation steps taken so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one loop iteration.
    ///
    /// Returns the scene to present, or `None` once the game has ended
    /// (all balls gone or quit observed).
    pub fn frame(&mut self, keys: &KeySet, close_requested: bool) -> Option<Scene> {
        if !self.state.is_running() {
            return None;
        }

        let input = map_input(keys, close_requested);
        if input.quit {
            self.state.request_quit();
            return None;
        }

        let dt = self.pacer.wait_next_frame(&mut self.clock);
        tick(&mut self.state, &input, dt, &self.config.field);
        self.frames += 1;
        log::trace!(
            "frame {} dt={:.4} balls={}",
            self.frames,
            dt,
            self.state.balls.len()
        );

        Some(self.scene())
    }

    /// Draw list for the current state
    pub fn scene(&self) -> Scene {
        scene::build(&self.state, &self.config.field)
    }
}
