//! Rendering
//!
//! The game hands renderers a read-only `Snapshot`; `scene` turns it into
//! colored triangles and `pipeline` draws them with WebGPU.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;

use serde::Serialize;

use crate::error::RenderError;
use crate::settings::GameConfig;
use crate::sim::{Ball, GamePhase, GameState, Paddle, Score};

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_size: f32,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: GamePhase,
}

impl Snapshot {
    pub fn capture(state: &GameState, config: &GameConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            paddle_width: config.paddle_width,
            paddle_height: config.paddle_height,
            ball_size: config.ball_size,
            left: state.left,
            right: state.right,
            ball: state.ball,
            score: state.score,
            phase: state.phase,
        }
    }
}

/// Draws snapshots to some surface
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), RenderError>;
}
