//! Sound effects
//!
//! The simulation reports events; the loop driver turns the audible ones into
//! `SoundEffect`s for whatever sink the host provides. On the web the tones
//! are generated with the Web Audio API, no sound files needed.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball bounced off the top or bottom
    WallBounce,
    /// Ball hit a paddle
    PaddleHit,
    /// Someone scored
    Goal,
}

impl SoundEffect {
    /// Effect for a simulation event, if it makes a sound
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::WallBounce => Some(SoundEffect::WallBounce),
            GameEvent::PaddleHit { .. } => Some(SoundEffect::PaddleHit),
            GameEvent::Goal { .. } => Some(SoundEffect::Goal),
            GameEvent::GameOver { .. } => None,
        }
    }
}

/// Fire-and-forget playback
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Sink that only logs; used natively and in tests
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::trace!("sound: {effect:?}");
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioSink, SoundEffect};
    use crate::settings::AudioSettings;

    /// Web Audio playback
    pub struct AudioManager {
        ctx: AudioContext,
        volume: f32,
    }

    impl AudioManager {
        /// `None` when the browser refuses an AudioContext
        pub fn new(settings: &AudioSettings) -> Option<Self> {
            let ctx = match AudioContext::new() {
                Ok(ctx) => ctx,
                Err(e) => {
                    log::warn!("Failed to create AudioContext: {e:?}");
                    return None;
                }
            };
            let volume = if settings.muted {
                0.0
            } else {
                settings.master_volume
            };
            Some(Self { ctx, volume })
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            let _ = self.ctx.resume();
        }

        fn create_osc(&self, freq: f32, osc_type: OscillatorType) -> Option<(OscillatorNode, GainNode)> {
            let osc = self.ctx.create_oscillator().ok()?;
            let gain = self.ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&self.ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Short blip with an exponential decay
        fn blip(&self, freq: f32, osc_type: OscillatorType, level: f32, length: f64) {
            let Some((osc, gain)) = self.create_osc(freq, osc_type) else {
                return;
            };
            let t = self.ctx.current_time();

            gain.gain().set_value_at_time(self.volume * level, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + length)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + length + 0.02).ok();
        }

        /// Falling two-tone for a goal
        fn goal(&self) {
            let Some((osc, gain)) = self.create_osc(520.0, OscillatorType::Square) else {
                return;
            };
            let t = self.ctx.current_time();

            gain.gain().set_value_at_time(self.volume * 0.25, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.4)
                .ok();
            osc.frequency().set_value_at_time(520.0, t).ok();
            osc.frequency().set_value_at_time(260.0, t + 0.15).ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.45).ok();
        }
    }

    impl AudioSink for AudioManager {
        fn play(&mut self, effect: SoundEffect) {
            if self.volume <= 0.0 {
                return;
            }
            if self.ctx.state() == web_sys::AudioContextState::Suspended {
                self.resume();
            }

            match effect {
                SoundEffect::PaddleHit => self.blip(440.0, OscillatorType::Square, 0.3, 0.08),
                SoundEffect::WallBounce => self.blip(220.0, OscillatorType::Square, 0.25, 0.06),
                SoundEffect::Goal => self.goal(),
            }
        }
    }
}
