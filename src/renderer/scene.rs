//! Frame composition: net, paddles, ball, scores

use glam::Vec2;

use super::Snapshot;
use super::shapes::{DigitStyle, dashed_vline, number, rect};
use super::vertex::{Vertex, colors};

/// Roughly the footprint of the 72px Courier digits the canvas version used
pub const SCORE_DIGITS: DigitStyle = DigitStyle {
    width: 36.0,
    height: 52.0,
    stroke: 7.0,
    spacing: 8.0,
};
/// Top edge of the score digits
pub const SCORE_TOP: f32 = 48.0;

const NET_WIDTH: f32 = 2.0;
const NET_DASH: f32 = 10.0;

/// Left edge of the left score: closer to the net for one digit, further
/// out for two or more
fn left_score_x(width: f32, score: u32) -> f32 {
    width / 2.0 - if score < 10 { 80.0 } else { 120.0 }
}

/// Triangles for one frame, in playfield pixels
pub fn build_scene(snapshot: &Snapshot) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(512);
    let paddle_size = Vec2::new(snapshot.paddle_width, snapshot.paddle_height);

    vertices.extend(dashed_vline(
        snapshot.width / 2.0,
        snapshot.height,
        NET_WIDTH,
        NET_DASH,
        NET_DASH,
        colors::NET,
    ));

    for paddle in [&snapshot.left, &snapshot.right] {
        vertices.extend(rect(
            Vec2::new(paddle.x, paddle.y),
            paddle_size,
            colors::FOREGROUND,
        ));
    }

    let half_ball = Vec2::splat(snapshot.ball_size / 2.0);
    vertices.extend(rect(
        snapshot.ball.pos - half_ball,
        Vec2::splat(snapshot.ball_size),
        colors::FOREGROUND,
    ));

    vertices.extend(number(
        snapshot.score.left,
        Vec2::new(left_score_x(snapshot.width, snapshot.score.left), SCORE_TOP),
        &SCORE_DIGITS,
        colors::FOREGROUND,
    ));
    vertices.extend(number(
        snapshot.score.right,
        Vec2::new(snapshot.width / 2.0 + 40.0, SCORE_TOP),
        &SCORE_DIGITS,
        colors::FOREGROUND,
    ));

    if !snapshot.phase.is_running() {
        vertices.extend(rect(
            Vec2::ZERO,
            Vec2::new(snapshot.width, snapshot.height),
            colors::OVERLAY,
        ));
    }

    vertices
}
