//! Per-frame simulation step
//!
//! Advances paddles and balls by `dt`, resolves collisions by flipping the
//! relevant velocity component, drops balls that left the field and ends
//! the game once none remain.

use super::collision::{Side, hits_bottom_wall, hits_paddle, hits_top_wall, out_of_bounds};
use super::state::{GamePhase, GameState, Intent};
use crate::config::FieldConfig;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Player 1 (left paddle)
    pub left: Intent,
    /// Player 2 (right paddle)
    pub right: Intent,
    /// Window close or kill keys
    pub quit: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, field: &FieldConfig) {
    if state.phase == GamePhase::Terminated {
        return;
    }
    if input.quit {
        state.request_quit();
        return;
    }

    state.left.intent = input.left;
    state.right.intent = input.right;
    state.left.integrate(field, dt);
    state.right.integrate(field, dt);

    let mut i = 0;
    while i < state.balls.len() {
        let ball = &mut state.balls[i];
        ball.integrate(dt);

        if out_of_bounds(ball, field) {
            log::debug!("ball removed at x={:.1}", ball.pos.x);
            state.balls.remove(i);
            continue;
        }

        if hits_paddle(ball, &state.left, Side::Left, field) {
            ball.vel.x = -ball.vel.x;
        }
        if hits_paddle(ball, &state.right, Side::Right, field) {
            ball.vel.x = -ball.vel.x;
        }
        if hits_bottom_wall(ball, field) {
            ball.vel.y = -ball.vel.y;
        }
        if hits_top_wall(ball, field) {
            ball.vel.y = -ball.vel.y;
        }

        i += 1;
    }

    if state.balls.is_empty() {
        log::info!("game over - no balls remaining");
        state.phase = GamePhase::Terminated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::Ball;
    use glam::Vec2;
    use proptest::prelude::*;

    fn state_with(balls: Vec<Ball>) -> (GameState, FieldConfig) {
        let field = FieldConfig::default();
        (GameState::with_balls(&field, balls), field)
    }

    #[test]
    fn test_ball_far_from_paddle_just_moves() {
        let (mut state, field) = state_with(vec![Ball::new(
            Vec2::new(500.0, 384.0),
            Vec2::new(-100.0, 0.0),
        )]);
        tick(&mut state, &TickInput::default(), 1.0, &field);

        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.balls[0].pos, Vec2::new(400.0, 384.0));
        assert_eq!(state.balls[0].vel, Vec2::new(-100.0, 0.0));
        assert!(state.is_running());
    }

    #[test]
    fn test_ball_bounces_off_left_paddle() {
        let (mut state, field) = state_with(vec![Ball::new(
            Vec2::new(12.0, 384.0),
            Vec2::new(-50.0, 0.0),
        )]);
        tick(&mut state, &TickInput::default(), 0.01, &field);

        let ball = state.balls[0];
        assert!((ball.pos.x - 11.5).abs() < 1e-4);
        assert_eq!(ball.vel.x, 50.0);
    }

    #[test]
    fn test_ball_bounces_off_right_paddle() {
        let (mut state, field) = state_with(vec![Ball::new(
            Vec2::new(1011.0, 390.0),
            Vec2::new(100.0, 0.0),
        )]);
        tick(&mut state, &TickInput::default(), 0.016, &field);
        assert_eq!(state.balls[0].vel.x, -100.0);
    }

    #[test]
    fn test_walls_reflect_vertical_velocity() {
        let (mut state, field) = state_with(vec![
            Ball::new(Vec2::new(500.0, 749.0), Vec2::new(30.0, 200.0)),
            Ball::new(Vec2::new(500.0, 19.0), Vec2::new(30.0, -200.0)),
        ]);
        tick(&mut state, &TickInput::default(), 0.016, &field);
        assert_eq!(state.balls[0].vel, Vec2::new(30.0, -200.0));
        assert_eq!(state.balls[1].vel, Vec2::new(30.0, 200.0));
    }

    #[test]
    fn test_removed_ball_skips_collisions_and_others_keep_order() {
        let (mut state, field) = state_with(vec![
            Ball::new(Vec2::new(100.0, 100.0), Vec2::new(10.0, 0.0)),
            Ball::new(Vec2::new(0.0, 384.0), Vec2::new(-500.0, 0.0)),
            Ball::new(Vec2::new(200.0, 200.0), Vec2::new(20.0, 0.0)),
        ]);
        tick(&mut state, &TickInput::default(), 0.05, &field);

        assert_eq!(state.balls.len(), 2);
        assert_eq!(state.balls[0].pos, Vec2::new(100.5, 100.0));
        assert_eq!(state.balls[1].pos, Vec2::new(201.0, 200.0));
        assert!(state.is_running());
    }

    #[test]
    fn test_game_over_on_fifth_removal() {
        let exits = [0.1, 0.2, 0.3, 0.4, 0.5];
        // Each ball starts just inside the left edge and leaves after
        // `exit` seconds of travel at -10 px/s.
        let balls = exits
            .iter()
            .map(|t| Ball::new(Vec2::new(-2.5 + 10.0 * t - 0.05, 300.0), Vec2::new(-10.0, 0.0)))
            .collect();
        let (mut state, field) = state_with(balls);

        for remaining in (0..5).rev() {
            assert!(state.is_running());
            tick(&mut state, &TickInput::default(), 0.1, &field);
            assert_eq!(state.balls.len(), remaining);
        }
        assert_eq!(state.phase, GamePhase::Terminated);
    }

    #[test]
    fn test_opposite_keys_leave_paddle_still() {
        let (mut state, field) = state_with(vec![Ball::new(
            Vec2::new(500.0, 384.0),
            Vec2::new(10.0, 0.0),
        )]);
        let before = state.left.pos;
        let input = TickInput {
            left: Intent::from_keys(true, true),
            ..Default::default()
        };
        tick(&mut state, &input, 0.05, &field);
        assert_eq!(state.left.pos, before);
    }

    #[test]
    fn test_paddles_follow_intent() {
        let (mut state, field) = state_with(vec![Ball::new(
            Vec2::new(500.0, 384.0),
            Vec2::new(10.0, 0.0),
        )]);
        let input = TickInput {
            left: Intent::Up,
            right: Intent::Down,
            quit: false,
        };
        tick(&mut state, &input, 0.05, &field);
        assert!((state.left.pos.y - (384.0 - 25.6)).abs() < 1e-3);
        assert!((state.right.pos.y - (384.0 + 25.6)).abs() < 1e-3);
    }

    #[test]
    fn test_quit_stops_simulation() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 5);
        let snapshot = state.balls.clone();
        let input = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.05, &config.field);
        assert_eq!(state.phase, GamePhase::Terminated);
        assert_eq!(state.balls, snapshot);

        // Terminated state is frozen
        tick(&mut state, &TickInput::default(), 0.05, &config.field);
        assert_eq!(state.balls, snapshot);
    }

    fn intent() -> impl Strategy<Value = Intent> {
        prop_oneof![Just(Intent::Up), Just(Intent::Idle), Just(Intent::Down)]
    }

    proptest! {
        #[test]
        fn prop_paddles_stay_between_walls(
            steps in prop::collection::vec((intent(), intent(), 0.001f32..0.05), 1..200)
        ) {
            let field = FieldConfig::default();
            let (min_y, max_y) = field.paddle_y_range();
            // A ball parked mid-field keeps the game running
            let mut state = GameState::with_balls(
                &field,
                vec![Ball::new(field.center(), Vec2::ZERO)],
            );
            for (left, right, dt) in steps {
                let input = TickInput { left, right, quit: false };
                tick(&mut state, &input, dt, &field);
                prop_assert!(state.left.pos.y >= min_y && state.left.pos.y <= max_y);
                prop_assert!(state.right.pos.y >= min_y && state.right.pos.y <= max_y);
            }
        }

        #[test]
        fn prop_reflection_keeps_speed(
            seed in any::<u64>(),
            dts in prop::collection::vec(0.016f32..=0.05, 1..300)
        ) {
            let config = GameConfig::default();
            let mut state = GameState::new(&config, seed);
            let speeds: Vec<(f32, f32)> =
                state.balls.iter().map(|b| (b.vel.x.abs(), b.vel.y.abs())).collect();
            for dt in dts {
                tick(&mut state, &TickInput::default(), dt, &config.field);
            }
            for ball in &state.balls {
                prop_assert!(speeds.iter().any(|&(sx, sy)| sx == ball.vel.x.abs() && sy == ball.vel.y.abs()));
            }
        }

        #[test]
        fn prop_removed_balls_never_return(
            seed in any::<u64>(),
            dts in prop::collection::vec(0.016f32..=0.05, 1..300)
        ) {
            let config = GameConfig::default();
            let mut state = GameState::new(&config, seed);
            let mut previous = state.balls.len();
            for dt in dts {
                tick(&mut state, &TickInput::default(), dt, &config.field);
                prop_assert!(state.balls.len() <= previous);
                for ball in &state.balls {
                    prop_assert!(!out_of_bounds(ball, &config.field));
                }
                prop_assert_eq!(state.is_running(), !state.balls.is_empty());
                previous = state.balls.len();
            }
        }
    }
}
