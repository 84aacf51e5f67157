//! Game state and core simulation types
//!
//! Everything the simulation step mutates lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::spawn_balls;
use crate::config::{FieldConfig, GameConfig};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// At least one ball in play and nobody asked to quit
    Running,
    /// Every ball left the field, or quit was requested
    Terminated,
}

/// Desired paddle direction for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Intent {
    /// Toward the top wall (negative y)
    Up,
    #[default]
    Idle,
    /// Toward the bottom wall (positive y)
    Down,
}

impl Intent {
    /// Net intent from a pair of held keys. Both held cancel out.
    pub fn from_keys(up: bool, down: bool) -> Self {
        match (down as i8) - (up as i8) {
            -1 => Intent::Up,
            1 => Intent::Down,
            _ => Intent::Idle,
        }
    }

    /// Signed direction: -1, 0 or +1
    pub fn direction(self) -> f32 {
        match self {
            Intent::Up => -1.0,
            Intent::Idle => 0.0,
            Intent::Down => 1.0,
        }
    }
}

/// A ball entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Advance position by velocity
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// A player's paddle; only `pos.y` moves after creation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Center of the paddle
    pub pos: Vec2,
    /// Direction requested this frame
    pub intent: Intent,
}

impl Paddle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            intent: Intent::Idle,
        }
    }

    /// Move along y by intent and clamp inside the walls
    pub fn integrate(&mut self, field: &FieldConfig, dt: f32) {
        if self.intent == Intent::Idle {
            return;
        }
        let (min_y, max_y) = field.paddle_y_range();
        self.pos.y += self.intent.direction() * field.paddle_speed() * dt;
        self.pos.y = self.pos.y.clamp(min_y, max_y);
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the balls were spawned from
    pub seed: u64,
    pub phase: GamePhase,
    /// Player 1, on the left edge
    pub left: Paddle,
    /// Player 2, on the right edge
    pub right: Paddle,
    /// Balls still in play, in spawn order
    pub balls: Vec<Ball>,
}

impl GameState {
    /// Create a running game with `config.ball_count` freshly launched balls
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let balls = spawn_balls(&config.field, config.ball_count, &mut rng);
        let mut state = Self::with_balls(&config.field, balls);
        state.seed = seed;
        state
    }

    /// Create a game with paddles at their start positions and the given balls
    pub fn with_balls(field: &FieldConfig, balls: Vec<Ball>) -> Self {
        let phase = if balls.is_empty() {
            GamePhase::Terminated
        } else {
            GamePhase::Running
        };
        Self {
            seed: 0,
            phase,
            left: Paddle::new(field.left_paddle_start()),
            right: Paddle::new(field.right_paddle_start()),
            balls,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// External quit signal (window close, kill keys)
    pub fn request_quit(&mut self) {
        if self.phase == GamePhase::Running {
            log::info!("quit requested with {} balls in play", self.balls.len());
        }
        self.phase = GamePhase::Terminated;
    }
}
