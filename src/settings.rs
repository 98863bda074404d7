//! Game configuration and preferences
//!
//! Everything here is fixed once the game is constructed. The web host may
//! override the defaults with a JSON blob embedded in the page.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::sim::Side;

/// How boundary comparisons treat the exact edge value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoundaryPolicy {
    /// Touching the edge counts (`<=` / `>=`)
    #[default]
    Inclusive,
    /// The edge must be crossed (`<` / `>`)
    Exclusive,
}

impl BoundaryPolicy {
    /// `value` has reached `limit` from above
    #[inline]
    pub fn at_or_below(self, value: f32, limit: f32) -> bool {
        match self {
            BoundaryPolicy::Inclusive => value <= limit,
            BoundaryPolicy::Exclusive => value < limit,
        }
    }

    /// `value` has reached `limit` from below
    #[inline]
    pub fn at_or_above(self, value: f32, limit: f32) -> bool {
        match self {
            BoundaryPolicy::Inclusive => value >= limit,
            BoundaryPolicy::Exclusive => value > limit,
        }
    }
}

/// What the game does before the first input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StartPolicy {
    /// Show the waiting screen until a key is pressed
    #[default]
    AwaitInput,
    /// Start as soon as assets are ready
    AutoStart,
}

/// Playfield and gameplay constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Vertical paddle speed (pixels per frame)
    pub paddle_speed: f32,
    /// Side length of the square ball
    pub ball_size: f32,
    /// Ball speed per axis after a serve (pixels per frame)
    pub ball_speed: f32,
    /// Gap between the goal line and the paddle
    pub goal_padding: f32,
    pub winning_score: u32,
    /// How strongly the hit offset bends the return
    pub spin_factor: f32,
    pub boundary: BoundaryPolicy,
    pub start_policy: StartPolicy,
    /// Which paddle the computer plays
    pub ai_side: Side,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
            goal_padding: GOAL_PADDING,
            winning_score: WINNING_SCORE,
            spin_factor: SPIN_FACTOR,
            boundary: BoundaryPolicy::Inclusive,
            start_policy: StartPolicy::AwaitInput,
            ai_side: Side::Right,
        }
    }
}

impl GameConfig {
    /// Side the keyboard controls
    pub fn human_side(&self) -> Side {
        self.ai_side.opponent()
    }

    /// Fixed horizontal coordinate of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.goal_padding,
            Side::Right => self.width - (self.goal_padding + self.paddle_width),
        }
    }

    /// Largest valid paddle y
    pub fn paddle_max_y(&self) -> f32 {
        self.height - self.paddle_height
    }

    /// Clamp a paddle y into the playfield
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.paddle_max_y())
    }

    pub fn half_ball(&self) -> f32 {
        self.ball_size / 2.0
    }

    /// Reject configurations the simulation cannot honor
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::invalid(field, "must be a positive number"));
            }
        }
        if !(self.goal_padding.is_finite() && self.goal_padding >= 0.0) {
            return Err(SettingsError::invalid("goal_padding", "must not be negative"));
        }
        if !self.spin_factor.is_finite() {
            return Err(SettingsError::invalid("spin_factor", "must be finite"));
        }
        if self.paddle_height > self.height {
            return Err(SettingsError::invalid("paddle_height", "taller than the playfield"));
        }
        if self.ball_size >= self.height {
            return Err(SettingsError::invalid("ball_size", "does not fit the playfield"));
        }
        // Collisions are sampled once per frame; a faster ball skips a paddle
        if self.ball_speed >= self.paddle_width + self.ball_size {
            return Err(SettingsError::invalid("ball_speed", "ball would pass through paddles"));
        }
        if 2.0 * (self.goal_padding + self.paddle_width) >= self.width {
            return Err(SettingsError::invalid("goal_padding", "paddles overlap"));
        }
        if self.winning_score == 0 {
            return Err(SettingsError::invalid("winning_score", "must be at least 1"));
        }
        Ok(())
    }
}

/// Sound preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            muted: false,
        }
    }
}

/// Everything the host reads at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: GameConfig,
    pub audio: AudioSettings,
}

impl Settings {
    /// Parse and validate a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.game.validate()?;
        settings.audio.master_volume = settings.audio.master_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Id of the `<script type="application/json">` element holding overrides
    const CONFIG_ELEMENT_ID: &'static str = "pong-config";

    /// Load overrides from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", Self::CONFIG_ELEMENT_ID);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring page settings: {e}");
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Native builds always use the defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        log::debug!("No #{} on native, using defaults", Self::CONFIG_ELEMENT_ID);
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paddle_layout() {
        let config = GameConfig::default();
        assert_eq!(config.paddle_x(Side::Left), 30.0);
        assert_eq!(config.paddle_x(Side::Right), 800.0 - 50.0);
        assert_eq!(config.paddle_max_y(), 310.0);
        assert_eq!(config.human_side(), Side::Left);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_boundary_policy_edges() {
        assert!(BoundaryPolicy::Inclusive.at_or_below(0.0, 0.0));
        assert!(!BoundaryPolicy::Exclusive.at_or_below(0.0, 0.0));
        assert!(BoundaryPolicy::Inclusive.at_or_above(400.0, 400.0));
        assert!(!BoundaryPolicy::Exclusive.at_or_above(400.0, 400.0));
        assert!(BoundaryPolicy::Exclusive.at_or_above(400.1, 400.0));
    }

    #[test]
    fn test_clamp_paddle_y() {
        let config = GameConfig::default();
        assert_eq!(config.clamp_paddle_y(-12.0), 0.0);
        assert_eq!(config.clamp_paddle_y(1000.0), config.paddle_max_y());
        assert_eq!(config.clamp_paddle_y(100.0), 100.0);
    }

    #[test]
    fn test_from_json_partial_override() {
        let settings =
            Settings::from_json(r#"{"game": {"winning_score": 3, "start_policy": "AutoStart"}}"#)
                .unwrap();
        assert_eq!(settings.game.winning_score, 3);
        assert_eq!(settings.game.start_policy, StartPolicy::AutoStart);
        assert_eq!(settings.game.width, PLAYFIELD_WIDTH);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let err = Settings::from_json(r#"{"game": {"winning_score": 0}}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "winning_score", .. }));

        let err = Settings::from_json("not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_rejects_ball_faster_than_paddle_depth() {
        let config = GameConfig {
            ball_speed: 40.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SettingsError::Invalid { field: "ball_speed", .. })
        ));

        let edge = GameConfig {
            ball_speed: 30.0,
            ..Default::default()
        };
        assert!(edge.validate().is_err());

        let fast = GameConfig {
            ball_speed: 29.0,
            ..Default::default()
        };
        assert!(fast.validate().is_ok());
    }

    #[test]
    fn test_volume_clamped() {
        let settings = Settings::from_json(r#"{"audio": {"master_volume": 4.0}}"#).unwrap();
        assert_eq!(settings.audio.master_volume, 1.0);
    }
}
