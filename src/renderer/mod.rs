//! Rendering module
//!
//! `scene` turns game state into a list of filled rectangles; the wgpu
//! pipeline draws that list once per frame.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{FillRect, Rect, Rgba, Scene};
