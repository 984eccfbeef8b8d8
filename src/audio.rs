//! Sound cues
//!
//! Playback is fire-and-forget: a sink must never fail the frame loop. On the
//! web the cues are synthesised with the Web Audio API, no sound files needed.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// Bird flaps
    Flap,
    /// Power-up collected
    Pickup,
    /// Pig fires an arrow
    HazardFire,
    /// Run ended
    Crash,
    /// Run beat the stored high score
    HighScore,
}

impl Cue {
    /// The cue (if any) that accompanies a simulation event
    pub fn for_event(event: &GameEvent) -> Option<Cue> {
        match event {
            GameEvent::Flapped => Some(Cue::Flap),
            GameEvent::PowerUpCollected(_) => Some(Cue::Pickup),
            GameEvent::HazardFired => Some(Cue::HazardFire),
            GameEvent::Crashed { .. } => Some(Cue::Crash),
            GameEvent::NewHighScore(_) => Some(Cue::HighScore),
            GameEvent::RunStarted
            | GameEvent::ArrowDeflected
            | GameEvent::CharacterSelected(_) => None,
        }
    }
}

/// Anything that can play cues
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Sink for hosts without audio; logs cues at trace level
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, cue: Cue) {
        log::trace!("cue {:?}", cue);
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioSink, Cue};
    use crate::settings::Settings;

    /// Web Audio synthesiser
    pub struct WebAudio {
        ctx: Option<AudioContext>,
        /// Combined master, sfx and mute setting
        volume: f32,
    }

    impl WebAudio {
        pub fn new(settings: &Settings) -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: settings.effective_volume(),
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Short upward chirp
        fn play_flap(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 300.0, OscillatorType::Triangle) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain().exponential_ramp_to_value_at_time(0.01, t + 0.12).ok();
            osc.frequency().set_value_at_time(300.0, t).ok();
            osc.frequency().exponential_ramp_to_value_at_time(700.0, t + 0.1).ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.15).ok();
        }

        /// Rising three-note ding
        fn play_pickup(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [600.0, 800.0, 1000.0].iter().enumerate() {
                let delay = i as f64 * 0.08;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sine) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.25, t).ok();
                    gain.gain().exponential_ramp_to_value_at_time(0.01, t + 0.15).ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.2).ok();
                }
            }
        }

        /// Snorty pig laugh: two wobbling square bursts
        fn play_hazard_fire(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [220.0, 180.0].iter().enumerate() {
                let delay = i as f64 * 0.12;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Square) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.15, t).ok();
                    gain.gain().exponential_ramp_to_value_at_time(0.01, t + 0.1).ok();
                    osc.frequency().set_value_at_time(*freq, t).ok();
                    osc.frequency().set_value_at_time(*freq * 1.3, t + 0.03).ok();
                    osc.frequency().set_value_at_time(*freq, t + 0.06).ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.12).ok();
                }
            }
        }

        /// Thud falling into a low rumble
        fn play_crash(&self, ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();

            if let Some((osc, gain)) = self.create_osc(ctx, 150.0, OscillatorType::Sine) {
                gain.gain().set_value_at_time(vol * 0.6, t).ok();
                gain.gain().exponential_ramp_to_value_at_time(0.01, t + 0.4).ok();
                osc.frequency().set_value_at_time(150.0, t).ok();
                osc.frequency().exponential_ramp_to_value_at_time(40.0, t + 0.35).ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.45).ok();
            }

            if let Some((osc, gain)) = self.create_osc(ctx, 90.0, OscillatorType::Sawtooth) {
                gain.gain().set_value_at_time(vol * 0.2, t).ok();
                gain.gain().exponential_ramp_to_value_at_time(0.01, t + 0.2).ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.25).ok();
            }
        }

        /// Celebratory arpeggio
        fn play_high_score(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [500.0, 600.0, 700.0, 800.0, 1000.0].iter().enumerate() {
                let delay = 0.5 + i as f64 * 0.08;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.25, t).ok();
                    gain.gain().exponential_ramp_to_value_at_time(0.01, t + 0.25).ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.3).ok();
                }
            }
        }
    }

    impl AudioSink for WebAudio {
        fn play(&mut self, cue: Cue) {
            let vol = self.volume;
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match cue {
                Cue::Flap => self.play_flap(ctx, vol),
                Cue::Pickup => self.play_pickup(ctx, vol),
                Cue::HazardFire => self.play_hazard_fire(ctx, vol),
                Cue::Crash => self.play_crash(ctx, vol),
                Cue::HighScore => self.play_high_score(ctx, vol),
            }
        }
    }
}
