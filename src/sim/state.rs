//! Game state and core simulation types
//!
//! Plain data owned by the loop driver. Nothing here reads globals; every
//! mutation goes through `&mut GameState`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::GameConfig;

/// One half of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Player 1
    Left,
    /// Player 2
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal direction pointing toward this side's goal
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a start signal
    Idle,
    /// Simulation advancing every frame
    Running,
    /// A side reached the winning score
    Over { winner: Side },
}

impl GamePhase {
    pub fn is_running(self) -> bool {
        matches!(self, GamePhase::Running)
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallBounce,
    PaddleHit { side: Side },
    Goal { scorer: Side },
    GameOver { winner: Side },
}

/// A vertical paddle pinned to one side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge (fixed)
    pub x: f32,
    /// Top edge
    pub y: f32,
}

impl Paddle {
    /// Paddle centered vertically on its side
    pub fn new(side: Side, config: &GameConfig) -> Self {
        Self {
            x: config.paddle_x(side),
            y: config.height / 2.0 - config.paddle_height / 2.0,
        }
    }

    pub fn center_y(&self, config: &GameConfig) -> f32 {
        self.y + config.paddle_height / 2.0
    }

    /// Move by `dy` and clamp into the playfield
    pub fn shift(&mut self, dy: f32, config: &GameConfig) {
        self.y = config.clamp_paddle_y(self.y + dy);
    }
}

/// The ball, a square centered on `pos`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Per-frame displacement
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Advance one frame
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Add exactly one point, returns the new total
    pub fn award(&mut self, side: Side) -> u32 {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *slot += 1;
        *slot
    }

    /// First side at or above `threshold`, if any
    pub fn winner(&self, threshold: u32) -> Option<Side> {
        if self.left >= threshold {
            Some(Side::Left)
        } else if self.right >= threshold {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: GamePhase,
    /// Frames simulated since the last reset
    pub frame: u64,
    /// Seed the current RNG stream started from
    pub seed: u64,
    rng: Pcg32,
}

impl GameState {
    /// Fresh Idle state; the ball sits at the center with the classic
    /// diagonal serve until the first reset randomizes it
    pub fn new(seed: u64, config: &GameConfig) -> Self {
        let center = Vec2::new(config.width / 2.0, config.height / 2.0);
        Self {
            left: Paddle::new(Side::Left, config),
            right: Paddle::new(Side::Right, config),
            ball: Ball::new(center, Vec2::splat(config.ball_speed)),
            score: Score::default(),
            phase: GamePhase::Idle,
            frame: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Scores to zero, paddles centered, ball served from the center with
    /// a random direction on both axes
    pub fn reset(&mut self, config: &GameConfig) {
        self.left = Paddle::new(Side::Left, config);
        self.right = Paddle::new(Side::Right, config);
        self.score = Score::default();
        self.frame = 0;

        let toward = if self.rng.random_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        };
        let center = Vec2::new(config.width / 2.0, config.height / 2.0);
        self.ball = Ball::new(center, self.serve_velocity(toward, config));
    }

    /// Re-center the ball after a goal, heading at the side that conceded
    pub fn serve_toward(&mut self, toward: Side, config: &GameConfig) {
        let half = config.half_ball();
        let y = self.rng.random_range(half..=config.height - half);
        self.ball = Ball::new(
            Vec2::new(config.width / 2.0, y),
            self.serve_velocity(toward, config),
        );
    }

    fn serve_velocity(&mut self, toward: Side, config: &GameConfig) -> Vec2 {
        let dy_sign = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Vec2::new(
            toward.direction() * config.ball_speed,
            dy_sign * config.ball_speed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_centered() {
        let config = GameConfig::default();
        let state = GameState::new(7, &config);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.left.y, 155.0);
        assert_eq!(state.right.x, 750.0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_reset_randomizes_direction_but_keeps_speed() {
        let config = GameConfig::default();
        let mut state = GameState::new(42, &config);
        state.score.left = 4;
        state.left.y = 0.0;

        state.reset(&config);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.left.y, 155.0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(state.ball.vel.x.abs(), config.ball_speed);
        assert_eq!(state.ball.vel.y.abs(), config.ball_speed);
    }

    #[test]
    fn test_serve_toward_stays_in_playfield() {
        let config = GameConfig::default();
        let mut state = GameState::new(3, &config);
        for _ in 0..200 {
            state.serve_toward(Side::Left, &config);
            assert_eq!(state.ball.pos.x, 400.0);
            assert!(state.ball.pos.y >= 5.0 && state.ball.pos.y <= 395.0);
            assert!(state.ball.vel.x < 0.0);
            assert_ne!(state.ball.vel.y, 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_serves() {
        let config = GameConfig::default();
        let mut a = GameState::new(99, &config);
        let mut b = GameState::new(99, &config);
        for _ in 0..10 {
            a.serve_toward(Side::Right, &config);
            b.serve_toward(Side::Right, &config);
            assert_eq!(a.ball, b.ball);
        }
    }

    #[test]
    fn test_score_winner() {
        let mut score = Score::default();
        assert_eq!(score.award(Side::Right), 1);
        assert_eq!(score.winner(2), None);
        assert_eq!(score.award(Side::Right), 2);
        assert_eq!(score.winner(2), Some(Side::Right));
    }
}
