//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module knows about
//! windows, clocks or the GPU:
//! - Caller-supplied `dt` only
//! - Seeded RNG only
//! - Balls processed in spawn order

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

/// Positions (px) and velocities (px/s) in screen space, y pointing down
pub type Vector2 = glam::Vec2;

pub use collision::{Side, hits_bottom_wall, hits_paddle, hits_top_wall, out_of_bounds};
pub use spawn::{random_velocity, spawn_balls};
pub use state::{Ball, GamePhase, GameState, Intent, Paddle};
pub use tick::{TickInput, tick};
