//! Per-frame simulation step
//!
//! One call moves everything by exactly one frame. There is no delta time:
//! speeds are pixels per frame, so the game runs at the display rate.

use super::ai;
use super::collision::{goal_line_crossed, paddle_contact, resolve_paddle, resolve_wall, wall_contact};
use super::state::{GameEvent, GamePhase, GameState, Side};
use crate::settings::GameConfig;

/// Controls sampled at the start of a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Human paddle direction: -1 up, 0 still, 1 down
    pub direction: i8,
    /// Let the AI drive the human paddle too (demo mode)
    pub autopilot: bool,
}

/// Advance the game by one frame, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput, config: &GameConfig) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.phase.is_running() {
        return events;
    }
    state.frame += 1;

    steer_paddles(state, input, config);

    state.ball.advance();

    if let Some(wall) = wall_contact(&state.ball, config) {
        resolve_wall(&mut state.ball, wall, config);
        events.push(GameEvent::WallBounce);
    }

    for side in [Side::Left, Side::Right] {
        let paddle = *state.paddle(side);
        if paddle_contact(&state.ball, &paddle, side, config) {
            resolve_paddle(&mut state.ball, &paddle, side, config);
            events.push(GameEvent::PaddleHit { side });
            break;
        }
    }

    if let Some(conceded) = goal_line_crossed(&state.ball, config) {
        let scorer = conceded.opponent();
        let total = state.score.award(scorer);
        log::debug!(
            "{scorer:?} scores ({total}), {} - {}",
            state.score.left,
            state.score.right
        );
        state.serve_toward(conceded, config);
        events.push(GameEvent::Goal { scorer });

        if let Some(winner) = state.score.winner(config.winning_score) {
            state.phase = GamePhase::Over { winner };
            events.push(GameEvent::GameOver { winner });
        }
    }

    events
}

fn steer_paddles(state: &mut GameState, input: &TickInput, config: &GameConfig) {
    let human = config.human_side();
    let ball = state.ball;

    if input.autopilot {
        ai::track_ball(state.paddle_mut(human), human, &ball, config);
    } else {
        let dy = f32::from(input.direction.signum()) * config.paddle_speed;
        state.paddle_mut(human).shift(dy, config);
    }

    ai::track_ball(state.paddle_mut(config.ai_side), config.ai_side, &ball, config);
}
