//! Game loop driver
//!
//! Owns the simulation state and moves it through Idle → Running → Over.
//!
//! | From         | Signal                  | To      |
//! |--------------|-------------------------|---------|
//! | Idle / Over  | start or any key, ready | Running |
//! | Idle / Over  | start, not ready        | refused |
//! | Running      | frame                   | Running |
//! | Running      | winning goal            | Over    |
//!
//! Every start performs a full reset. The host calls `frame` from its display
//! callback and only re-arms the callback while `frame` returns
//! `Schedule::Continue`.

use crate::assets::AssetGate;
use crate::audio::{AudioSink, SoundEffect};
use crate::error::StartError;
use crate::input::{Key, KeySet};
use crate::renderer::{Renderer, Snapshot};
use crate::settings::{GameConfig, StartPolicy};
use crate::sim::{GameEvent, GamePhase, GameState, tick};

/// Whether the host should request another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    Continue,
    Halt,
}

/// The match plus the inputs and readiness it depends on
pub struct Game {
    config: GameConfig,
    state: GameState,
    keys: KeySet,
    assets: AssetGate,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let state = GameState::new(seed, &config);
        Self {
            config,
            state,
            keys: KeySet::new(),
            assets: AssetGate::new(),
        }
    }

    /// Require named assets before the first start
    pub fn with_assets(mut self, assets: AssetGate) -> Self {
        self.assets = assets;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn assets_mut(&mut self) -> &mut AssetGate {
        &mut self.assets
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.config)
    }

    /// Idle/Over → Running with a full reset
    pub fn start(&mut self) -> Result<(), StartError> {
        if self.state.phase.is_running() {
            return Err(StartError::AlreadyRunning);
        }
        self.assets.check()?;

        self.state.reset(&self.config);
        self.state.phase = GamePhase::Running;
        log::info!("Game started (first to {})", self.config.winning_score);
        Ok(())
    }

    /// Record a key press. Any key while not running is a start signal and
    /// nothing else, so it never flips a toggle.
    /// Returns true when this press started the game, so the host knows to
    /// schedule frames again.
    pub fn key_down(&mut self, key: Key) -> bool {
        if self.state.phase.is_running() {
            self.keys.press(key);
            return false;
        }
        self.keys.hold(key);
        match self.start() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Start refused: {e}");
                false
            }
        }
    }

    pub fn key_up(&mut self, key: &Key) {
        self.keys.release(key);
    }

    /// One display frame: update, render, decide on the next frame
    pub fn frame(&mut self, renderer: &mut dyn Renderer, audio: &mut dyn AudioSink) -> Schedule {
        if self.state.phase == GamePhase::Idle
            && self.config.start_policy == StartPolicy::AutoStart
            && self.assets.is_ready()
        {
            if let Err(e) = self.start() {
                log::warn!("Auto-start refused: {e}");
            }
        }

        let events = tick(&mut self.state, &self.keys.sample(), &self.config);
        for event in &events {
            if let Some(effect) = SoundEffect::for_event(event) {
                audio.play(effect);
            }
            if let GameEvent::GameOver { winner } = event {
                log::info!(
                    "Game over: {winner:?} wins {} - {}",
                    self.state.score.left,
                    self.state.score.right
                );
            }
        }

        if let Err(e) = renderer.render(&self.snapshot()) {
            log::warn!("Render error: {e}");
        }

        match self.state.phase {
            GamePhase::Running => Schedule::Continue,
            // Keep polling until the assets arrive
            GamePhase::Idle if self.config.start_policy == StartPolicy::AutoStart => {
                Schedule::Continue
            }
            GamePhase::Idle | GamePhase::Over { .. } => Schedule::Halt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentAudio;
    use crate::error::RenderError;
    use crate::sim::Side;

    #[derive(Default)]
    struct CountingRenderer {
        frames: Vec<Snapshot>,
    }

    impl Renderer for CountingRenderer {
        fn render(&mut self, snapshot: &Snapshot) -> Result<(), RenderError> {
            self.frames.push(snapshot.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingAudio {
        played: Vec<SoundEffect>,
    }

    impl AudioSink for RecordingAudio {
        fn play(&mut self, effect: SoundEffect) {
            self.played.push(effect);
        }
    }

    #[test]
    fn test_starts_idle_and_halts() {
        let mut game = Game::new(GameConfig::default(), 1);
        let mut renderer = CountingRenderer::default();

        assert_eq!(game.phase(), GamePhase::Idle);
        assert_eq!(game.frame(&mut renderer, &mut SilentAudio), Schedule::Halt);
        assert_eq!(renderer.frames.len(), 1);
        assert_eq!(renderer.frames[0].phase, GamePhase::Idle);
    }

    #[test]
    fn test_any_key_starts() {
        let mut game = Game::new(GameConfig::default(), 1);
        assert!(game.key_down(Key::Other("Enter".into())));
        assert_eq!(game.phase(), GamePhase::Running);

        // A second key while running is just input
        assert!(!game.key_down(Key::Up));
        assert_eq!(game.phase(), GamePhase::Running);
    }

    #[test]
    fn test_start_key_does_not_toggle_autopilot() {
        let mut game = Game::new(GameConfig::default(), 1);
        assert!(game.key_down(Key::Autopilot));
        assert_eq!(game.phase(), GamePhase::Running);
        assert!(!game.keys.autopilot());

        // Held from the start press: repeats are ignored
        assert!(!game.key_down(Key::Autopilot));
        assert!(!game.keys.autopilot());

        game.key_up(&Key::Autopilot);
        assert!(!game.key_down(Key::Autopilot));
        assert!(game.keys.autopilot());
    }

    #[test]
    fn test_start_refused_until_assets_ready() {
        let assets = AssetGate::requiring(["renderer"]);
        let mut game = Game::new(GameConfig::default(), 1).with_assets(assets);

        assert!(!game.key_down(Key::Up));
        assert_eq!(game.phase(), GamePhase::Idle);
        assert!(matches!(game.start(), Err(StartError::AssetsNotReady { .. })));

        game.assets_mut().mark_loaded("renderer");
        assert!(game.start().is_ok());
        assert_eq!(game.start(), Err(StartError::AlreadyRunning));
    }

    #[test]
    fn test_running_frame_continues_and_renders() {
        let mut game = Game::new(GameConfig::default(), 1);
        game.start().unwrap();
        let mut renderer = CountingRenderer::default();

        assert_eq!(game.frame(&mut renderer, &mut SilentAudio), Schedule::Continue);
        assert_eq!(game.state().frame, 1);
        assert_eq!(renderer.frames.len(), 1);
    }

    #[test]
    fn test_auto_start_waits_for_assets() {
        let config = GameConfig {
            start_policy: StartPolicy::AutoStart,
            ..Default::default()
        };
        let assets = AssetGate::requiring(["audio"]);
        let mut game = Game::new(config, 1).with_assets(assets);
        let mut renderer = CountingRenderer::default();

        assert_eq!(game.frame(&mut renderer, &mut SilentAudio), Schedule::Continue);
        assert_eq!(game.phase(), GamePhase::Idle);

        game.assets_mut().mark_loaded("audio");
        assert_eq!(game.frame(&mut renderer, &mut SilentAudio), Schedule::Continue);
        assert_eq!(game.phase(), GamePhase::Running);
    }

    #[test]
    fn test_game_over_halts_and_restart_resets() {
        let config = GameConfig {
            winning_score: 1,
            ..Default::default()
        };
        let mut game = Game::new(config, 3);
        game.start().unwrap();
        let mut renderer = CountingRenderer::default();
        let mut audio = RecordingAudio::default();

        // Park the AI paddle and send the ball into its goal
        game.state.right.y = 0.0;
        game.state.ball.pos = glam::Vec2::new(798.0, 380.0);
        game.state.ball.vel = glam::Vec2::new(5.0, 0.5);

        assert_eq!(game.frame(&mut renderer, &mut audio), Schedule::Halt);
        assert_eq!(game.phase(), GamePhase::Over { winner: Side::Left });
        assert!(audio.played.contains(&SoundEffect::Goal));
        assert_eq!(renderer.frames.last().map(|s| s.score.left), Some(1));

        assert!(game.key_down(Key::Other(" ".into())));
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.state().score.left, 0);
        assert_eq!(game.state().frame, 0);
    }
}
