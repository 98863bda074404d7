//! Reactive computer opponent
//!
//! The paddle only tracks a ball that is in its half and heading its way,
//! one `paddle_speed` step per frame.

use super::state::{Ball, Paddle, Side};
use crate::settings::GameConfig;

/// Ball is in `side`'s half and moving toward it
pub fn is_engaged(side: Side, ball: &Ball, config: &GameConfig) -> bool {
    let mid = config.width / 2.0;
    let in_half = match side {
        Side::Left => ball.pos.x < mid,
        Side::Right => ball.pos.x > mid,
    };
    in_half && ball.vel.x * side.direction() > 0.0
}

/// Step the paddle toward the ball's y. Returns whether the AI engaged.
pub fn track_ball(paddle: &mut Paddle, side: Side, ball: &Ball, config: &GameConfig) -> bool {
    if !is_engaged(side, ball, config) {
        return false;
    }

    let center = paddle.center_y(config);
    let step = if center > ball.pos.y {
        -config.paddle_speed
    } else if center < ball.pos.y {
        config.paddle_speed
    } else {
        0.0
    };
    paddle.shift(step, config);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_moves_exactly_one_step_toward_ball() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(Side::Right, &config);
        // center at 200, ball higher up the screen at 120
        let ball = Ball::new(Vec2::new(600.0, 120.0), Vec2::new(5.0, 5.0));

        let before = paddle.y;
        assert!(track_ball(&mut paddle, Side::Right, &ball, &config));
        assert_eq!(paddle.y, before - config.paddle_speed);

        let ball = Ball::new(Vec2::new(600.0, 350.0), Vec2::new(5.0, 5.0));
        let before = paddle.y;
        track_ball(&mut paddle, Side::Right, &ball, &config);
        assert_eq!(paddle.y, before + config.paddle_speed);
    }

    #[test]
    fn test_ignores_receding_ball() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(Side::Right, &config);
        let ball = Ball::new(Vec2::new(600.0, 20.0), Vec2::new(-5.0, 5.0));

        let before = paddle;
        assert!(!track_ball(&mut paddle, Side::Right, &ball, &config));
        assert_eq!(paddle, before);
    }

    #[test]
    fn test_ignores_ball_in_other_half() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(Side::Right, &config);
        let ball = Ball::new(Vec2::new(200.0, 20.0), Vec2::new(5.0, 5.0));

        assert!(!track_ball(&mut paddle, Side::Right, &ball, &config));
        assert_eq!(paddle.y, 155.0);
    }

    #[test]
    fn test_left_side_gate() {
        let config = GameConfig::default();
        let ball = Ball::new(Vec2::new(100.0, 20.0), Vec2::new(-5.0, 5.0));
        assert!(is_engaged(Side::Left, &ball, &config));
        assert!(!is_engaged(Side::Right, &ball, &config));
    }

    #[test]
    fn test_clamped_at_top() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(Side::Right, &config);
        paddle.y = 2.0;
        let ball = Ball::new(Vec2::new(600.0, 5.0), Vec2::new(5.0, -5.0));

        track_ball(&mut paddle, Side::Right, &ball, &config);
        assert_eq!(paddle.y, 0.0);
    }

    #[test]
    fn test_centered_on_ball_holds_still() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(Side::Right, &config);
        let ball = Ball::new(Vec2::new(600.0, 200.0), Vec2::new(5.0, 5.0));

        assert!(track_ball(&mut paddle, Side::Right, &ball, &config));
        assert_eq!(paddle.y, 155.0);
    }
}
