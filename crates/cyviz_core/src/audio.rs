//! Audio cue derivation
//!
//! The synthesizer lives outside this crate. It reads an [`AudioCue`] derived
//! from the interaction state and is free to render it however it likes.

use cyviz_math::DualityMode;

use crate::state::ExplorerState;

/// Tone at dimension fraction 0 (n = 3)
pub const BASE_FREQUENCY: f32 = 110.0;
/// Octaves spanned across the full dimension range
pub const OCTAVE_SPAN: f32 = 3.0;
pub const LFO_RATE_PER_SPEED: f32 = 0.4;
pub const LFO_DEPTH_HZ: f32 = 8.0;
pub const PLAYING_GAIN: f32 = 0.12;
pub const PAUSED_GAIN: f32 = 0.03;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

impl Waveform {
    pub fn for_duality(mode: DualityMode) -> Self {
        match mode {
            DualityMode::TypeI => Waveform::Sine,
            DualityMode::HeteroticE => Waveform::Triangle,
        }
    }
}

/// `110 · 2^(3t)`: n = 3 maps to 110 Hz and n = 11 to 880 Hz
pub fn tone_frequency(dimension_t: f32) -> f32 {
    BASE_FREQUENCY * 2f32.powf(OCTAVE_SPAN * dimension_t.clamp(0.0, 1.0))
}

/// Parameters for the external synthesizer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AudioCue {
    pub frequency: f32,
    pub waveform: Waveform,
    pub lfo_rate: f32,
    pub lfo_depth: f32,
    pub gain: f32,
}

impl AudioCue {
    /// Derive the cue from the current state, or `None` while audio is disabled
    pub fn from_state(state: &ExplorerState) -> Option<Self> {
        if !state.audio_enabled() {
            return None;
        }
        Some(Self::derive(
            state.dimension_fraction(),
            state.duality(),
            state.rotation_speed(),
            state.is_playing(),
        ))
    }

    pub fn derive(dimension_t: f32, duality: DualityMode, speed: f32, playing: bool) -> Self {
        Self {
            frequency: tone_frequency(dimension_t),
            waveform: Waveform::for_duality(duality),
            lfo_rate: speed * LFO_RATE_PER_SPEED,
            lfo_depth: LFO_DEPTH_HZ,
            gain: if playing { PLAYING_GAIN } else { PAUSED_GAIN },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_endpoints() {
        assert!((tone_frequency(0.0) - 110.0).abs() < 1e-3);
        assert!((tone_frequency(1.0) - 880.0).abs() < 1e-2);
        assert!((tone_frequency(0.5) - 110.0 * 2f32.powf(1.5)).abs() < 1e-2);
    }

    #[test]
    fn test_cue_disabled_by_default() {
        let state = ExplorerState::new();
        assert!(AudioCue::from_state(&state).is_none());
    }

    #[test]
    fn test_cue_follows_state() {
        let mut state = ExplorerState::new();
        state.set_audio_enabled(true);
        state.set_dimension(11);
        state.toggle_duality();
        state.set_speed(2.0);
        state.set_playing(false);

        let cue = AudioCue::from_state(&state).unwrap();
        assert!((cue.frequency - 880.0).abs() < 1e-2);
        assert_eq!(cue.waveform, Waveform::Triangle);
        assert!((cue.lfo_rate - 0.8).abs() < 1e-6);
        assert_eq!(cue.lfo_depth, 8.0);
        assert_eq!(cue.gain, PAUSED_GAIN);
    }
}
