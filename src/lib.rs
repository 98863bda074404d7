//! Canvas Pong - single player Pong against a reactive AI
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, AI, scoring)
//! - `game`: Loop driver and Idle/Running/Over state machine
//! - `renderer`: Snapshot boundary and WebGPU rendering pipeline
//! - `audio`: Sound effect boundary and Web Audio tones
//! - `settings`: Game constants and boundary/start policies

pub mod assets;
pub mod audio;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{RenderError, SettingsError, StartError};
pub use game::{Game, Schedule};
pub use settings::{BoundaryPolicy, GameConfig, Settings, StartPolicy};

/// Default game constants, in pixels and pixels per frame
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_SPEED: f32 = 5.0;
    /// Space between goal and paddle
    pub const GOAL_PADDING: f32 = 30.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED: f32 = 5.0;
    /// `dy -= SPIN_FACTOR * (paddle_center - ball_y)` on a paddle hit
    pub const SPIN_FACTOR: f32 = 0.1;

    pub const WINNING_SCORE: u32 = 10;
}
