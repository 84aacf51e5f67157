//! Initial ball placement

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::Ball;
use crate::config::FieldConfig;

/// Random launch velocity for a ball leaving the center.
///
/// The direction comes from a uniform angle in [0, 2π); the x and y speeds
/// are drawn independently from narrow bands proportional to the field size
/// and scaled by the angle's cosine and sine.
pub fn random_velocity<R: Rng>(field: &FieldConfig, rng: &mut R) -> Vec2 {
    let angle: f32 = rng.random_range(0.0..TAU);
    let speed_x: f32 = rng.random_range(field.width / 6.5..=field.width / 6.0);
    let speed_y: f32 = rng.random_range(field.height / 6.5..=field.height / 6.0);
    Vec2::new(angle.cos() * speed_x, angle.sin() * speed_y)
}

/// Spawn `count` balls at the field center
pub fn spawn_balls<R: Rng>(field: &FieldConfig, count: usize, rng: &mut R) -> Vec<Ball> {
    let center = field.center();
    (0..count)
        .map(|_| Ball::new(center, random_velocity(field, rng)))
        .collect()
}
