//! Game configuration
//!
//! Field geometry and frame pacing, passed explicitly to the simulation and
//! renderer instead of living in globals. `Default` yields the stock
//! 1024×768 table.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Geometry of the play field and the entities on it (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
    /// Thickness of the top and bottom walls
    pub wall_thickness: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Horizontal distance from each side edge to its paddle's center
    pub paddle_inset: f32,
    pub ball_width: f32,
    pub ball_height: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
            wall_thickness: 15.0,
            paddle_width: 5.0,
            paddle_height: 40.0,
            paddle_inset: 10.0,
            ball_width: 5.0,
            ball_height: 5.0,
        }
    }
}

impl FieldConfig {
    /// Center of the field; balls spawn here
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Paddle travel speed in px/s (the full field height in 1.5 s)
    pub fn paddle_speed(&self) -> f32 {
        self.height / 1.5
    }

    /// Legal range for a paddle's center y
    pub fn paddle_y_range(&self) -> (f32, f32) {
        let half = self.paddle_height / 2.0;
        (
            self.wall_thickness + half,
            self.height - self.wall_thickness - half,
        )
    }

    /// Horizontal range a ball's center may occupy before it is discarded
    pub fn ball_x_range(&self) -> (f32, f32) {
        let half = self.ball_width / 2.0;
        (-half, self.width + half)
    }

    /// A ball moving up bounces once its center is above this y
    pub fn top_wall_limit(&self) -> f32 {
        self.wall_thickness + self.ball_height / 2.0
    }

    /// A ball moving down bounces once its center is below this y
    pub fn bottom_wall_limit(&self) -> f32 {
        self.height - self.wall_thickness - self.ball_height / 2.0
    }

    /// Starting center of the left paddle
    pub fn left_paddle_start(&self) -> Vec2 {
        Vec2::new(self.paddle_inset, self.height / 2.0)
    }

    /// Starting center of the right paddle
    pub fn right_paddle_start(&self) -> Vec2 {
        Vec2::new(self.width - self.paddle_inset, self.height / 2.0)
    }
}

/// Frame throttling limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Minimum time between frames in milliseconds (16 ms ≈ 62.5 Hz)
    pub min_frame_ms: u64,
    /// Upper bound on the simulation step in seconds (0.05 s = 20 Hz floor)
    pub max_dt: f32,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            min_frame_ms: 16,
            max_dt: 0.05,
        }
    }
}

/// Everything fixed at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Balls in play at the start of a game
    pub ball_count: usize,
    pub field: FieldConfig,
    pub pacing: PacingConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        let field = FieldConfig::default();
        Self {
            title: "Pong".to_string(),
            window_width: field.width as u32,
            window_height: field.height as u32,
            ball_count: 5,
            field,
            pacing: PacingConfig::default(),
        }
    }
}

/// Reason a configuration was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A dimension that must be positive was not
    NonPositive(&'static str),
    /// Walls leave no room for the paddles to move
    WallsTooThick,
    /// Pacing values would produce a zero or negative step
    BadPacing,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive(name) => write!(f, "{name} must be positive"),
            ConfigError::WallsTooThick => {
                write!(f, "walls leave no room for paddles between them")
            }
            ConfigError::BadPacing => {
                write!(f, "frame interval and max dt must both be positive")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Reject geometry the simulation can't work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = &self.field;
        let dims = [
            ("width", f.width),
            ("height", f.height),
            ("paddle_width", f.paddle_width),
            ("paddle_height", f.paddle_height),
            ("ball_width", f.ball_width),
            ("ball_height", f.ball_height),
        ];
        if let Some(&(name, _)) = dims.iter().find(|(_, v)| *v <= 0.0) {
            return Err(ConfigError::NonPositive(name));
        }
        if f.wall_thickness < 0.0 {
            return Err(ConfigError::NonPositive("wall_thickness"));
        }

        let (min_y, max_y) = f.paddle_y_range();
        if min_y > max_y {
            return Err(ConfigError::WallsTooThick);
        }

        if self.pacing.min_frame_ms == 0 || self.pacing.max_dt <= 0.0 {
            return Err(ConfigError::BadPacing);
        }
        Ok(())
    }
}
