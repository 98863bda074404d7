//! Collision detection between the ball, paddles, walls and goal lines
//!
//! All comparisons go through the configured `BoundaryPolicy` so the edge
//! behavior is the same everywhere.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::settings::{BoundaryPolicy, GameConfig};

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center(center: Vec2, half_extent: Vec2) -> Self {
        Self::new(center - half_extent, center + half_extent)
    }

    /// Boxes share area (touching counts under `Inclusive`)
    pub fn overlaps(&self, other: &Rect, policy: BoundaryPolicy) -> bool {
        policy.at_or_above(self.max.x, other.min.x)
            && policy.at_or_below(self.min.x, other.max.x)
            && policy.at_or_above(self.max.y, other.min.y)
            && policy.at_or_below(self.min.y, other.max.y)
    }

    /// Point lies inside (edges excluded)
    pub fn contains_strict(&self, p: Vec2) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }
}

/// Bounding box of the ball square
pub fn ball_rect(ball: &Ball, config: &GameConfig) -> Rect {
    Rect::from_center(ball.pos, Vec2::splat(config.half_ball()))
}

/// Bounding box of a paddle
pub fn paddle_rect(paddle: &Paddle, config: &GameConfig) -> Rect {
    Rect::new(
        Vec2::new(paddle.x, paddle.y),
        Vec2::new(paddle.x + config.paddle_width, paddle.y + config.paddle_height),
    )
}

/// Horizontal walls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
}

/// Wall the ball is pressing into, if any. A ball already moving away from
/// a wall is not in contact, so one crossing flips `dy` once.
pub fn wall_contact(ball: &Ball, config: &GameConfig) -> Option<Wall> {
    let half = config.half_ball();
    let policy = config.boundary;
    if ball.vel.y < 0.0 && policy.at_or_below(ball.pos.y - half, 0.0) {
        Some(Wall::Top)
    } else if ball.vel.y > 0.0 && policy.at_or_above(ball.pos.y + half, config.height) {
        Some(Wall::Bottom)
    } else {
        None
    }
}

/// Reflect off a wall and pull the ball back inside
pub fn resolve_wall(ball: &mut Ball, wall: Wall, config: &GameConfig) {
    let half = config.half_ball();
    ball.vel.y = -ball.vel.y;
    ball.pos.y = match wall {
        Wall::Top => ball.pos.y.max(half),
        Wall::Bottom => ball.pos.y.min(config.height - half),
    };
}

/// The ball overlaps this paddle while travelling toward it, having been in
/// front of the face before this frame's move
pub fn paddle_contact(ball: &Ball, paddle: &Paddle, side: Side, config: &GameConfig) -> bool {
    let approaching = ball.vel.x * side.direction() > 0.0;
    approaching
        && came_from_front(ball, paddle, side, config)
        && ball_rect(ball, config).overlaps(&paddle_rect(paddle, config), config.boundary)
}

/// Leading edge of the ball was not past the paddle face last frame. A ball
/// already behind the face is a goal in progress, even if the paddle slides
/// onto it.
fn came_from_front(ball: &Ball, paddle: &Paddle, side: Side, config: &GameConfig) -> bool {
    let half = config.half_ball();
    let prev_x = ball.pos.x - ball.vel.x;
    match side {
        Side::Left => prev_x - half >= paddle.x + config.paddle_width,
        Side::Right => prev_x + half <= paddle.x,
    }
}

/// Push the ball out of the paddle face, reverse `dx` and add spin from the
/// hit offset
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle, side: Side, config: &GameConfig) {
    let half = config.half_ball();
    ball.pos.x = match side {
        Side::Left => paddle.x + config.paddle_width + half,
        Side::Right => paddle.x - half,
    };
    ball.vel.x = -ball.vel.x;
    ball.vel.y -= config.spin_factor * (paddle.center_y(config) - ball.pos.y);
}

/// Side that conceded if the ball has left the playfield
pub fn goal_line_crossed(ball: &Ball, config: &GameConfig) -> Option<Side> {
    let policy = config.boundary;
    if policy.at_or_below(ball.pos.x, 0.0) {
        Some(Side::Left)
    } else if policy.at_or_above(ball.pos.x, config.width) {
        Some(Side::Right)
    } else {
        None
    }
}
