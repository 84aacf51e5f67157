//! Multi-ball Pong - two paddles, several balls, no mercy
//!
//! Core modules:
//! - `config`: Immutable field geometry and pacing constants
//! - `sim`: Simulation step (integration, collisions, ball lifecycle)
//! - `pacing`: Frame throttling and delta-time computation
//! - `input`: Keyboard state to paddle intents
//! - `game`: Loop driver tying input, pacing, simulation and scene together
//! - `renderer`: Scene building and the wgpu backend
//! - `platform`: winit window/event glue

pub mod config;
pub mod game;
pub mod input;
pub mod pacing;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{FieldConfig, GameConfig, PacingConfig};
pub use game::Game;
