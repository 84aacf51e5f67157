//! What to draw this frame, independent of the GPU backend

use glam::Vec2;

use crate::config::FieldConfig;
use crate::sim::GameState;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    /// Normalized components for the vertex buffer
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
            self.3 as f32 / 255.0,
        ]
    }
}

pub mod colors {
    use super::Rgba;

    pub const BACKGROUND: Rgba = Rgba(0, 0, 255, 255);
    /// Walls, paddles and balls share one translucent white
    pub const FOREGROUND: Rgba = Rgba(255, 255, 255, 200);
}

/// Pixel rectangle, top-left origin, y down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w`×`h` centered on `center`, corner truncated to
    /// whole pixels
    pub fn centered(center: Vec2, w: f32, h: f32) -> Self {
        Self {
            x: (center.x - w / 2.0) as i32,
            y: (center.y - h / 2.0) as i32,
            w: w as u32,
            h: h as u32,
        }
    }
}

/// A filled rectangle in a single color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillRect {
    pub rect: Rect,
    pub color: Rgba,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub clear: Rgba,
    /// Drawn in order: walls, paddles, balls
    pub rects: Vec<FillRect>,
}

/// Build the frame's draw list from the current state
pub fn build(state: &GameState, field: &FieldConfig) -> Scene {
    let fg = colors::FOREGROUND;
    let width = field.width as u32;
    let wall = field.wall_thickness as u32;
    let fill = |rect| FillRect { rect, color: fg };

    let mut rects = Vec::with_capacity(4 + state.balls.len());
    rects.push(fill(Rect::new(0, 0, width, wall)));
    rects.push(fill(Rect::new(
        0,
        (field.height - field.wall_thickness) as i32,
        width,
        wall,
    )));

    for paddle in [&state.left, &state.right] {
        rects.push(fill(Rect::centered(
            paddle.pos,
            field.paddle_width,
            field.paddle_height,
        )));
    }

    rects.extend(
        state
            .balls
            .iter()
            .map(|ball| fill(Rect::centered(ball.pos, field.ball_width, field.ball_height))),
    );

    Scene {
        clear: colors::BACKGROUND,
        rects,
    }
}
