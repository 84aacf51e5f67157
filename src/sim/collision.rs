//! Collision predicates for balls against paddles and walls
//!
//! All checks are discrete: they look at the ball's position after this
//! frame's integration. A fast ball can skip over a 5 px paddle between
//! frames and that is accepted. Only the paddle's front half counts, so a
//! ball can bounce off the face but never off the back.

use super::state::{Ball, Paddle};
use crate::config::FieldConfig;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Ball's center is within half a paddle height of the paddle's center
fn within_paddle_height(ball: &Ball, paddle: &Paddle, field: &FieldConfig) -> bool {
    (paddle.pos.y - ball.pos.y).abs() <= field.paddle_height / 2.0
}

/// True if `ball` should bounce off `paddle` this frame
pub fn hits_paddle(ball: &Ball, paddle: &Paddle, side: Side, field: &FieldConfig) -> bool {
    if !within_paddle_height(ball, paddle, field) {
        return false;
    }
    let reach = field.paddle_width / 2.0 + field.ball_width / 2.0;
    match side {
        Side::Left => {
            ball.vel.x < 0.0 && ball.pos.x >= paddle.pos.x && ball.pos.x <= paddle.pos.x + reach
        }
        Side::Right => {
            ball.vel.x > 0.0 && ball.pos.x <= paddle.pos.x && ball.pos.x >= paddle.pos.x - reach
        }
    }
}

/// Moving down and past the bottom wall's inner edge
pub fn hits_bottom_wall(ball: &Ball, field: &FieldConfig) -> bool {
    ball.vel.y > 0.0 && ball.pos.y > field.bottom_wall_limit()
}

/// Moving up and past the top wall's inner edge
pub fn hits_top_wall(ball: &Ball, field: &FieldConfig) -> bool {
    ball.vel.y < 0.0 && ball.pos.y < field.top_wall_limit()
}

/// Ball's center has left the horizontal extent of the field
pub fn out_of_bounds(ball: &Ball, field: &FieldConfig) -> bool {
    let (min_x, max_x) = field.ball_x_range();
    ball.pos.x < min_x || ball.pos.x > max_x
}
