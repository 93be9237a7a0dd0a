//! Additive tone banks shared by the profile → audio converters

use crate::model::{AudioParameters, Timbre};

/// Profile levels at or below this stay silent
const ACTIVE_LEVEL: f64 = 0.1;
/// Tone used when no level is active
const FALLBACK_HZ: f64 = 440.0;
const FALLBACK_AMPLITUDE: f64 = 0.3;

/// Collects one sine partial per active profile field
#[derive(Debug, Default)]
pub(crate) struct ToneBank {
    frequency: Vec<f64>,
    amplitude: Vec<f64>,
}

impl ToneBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `base_hz + level * spread_hz` at `level * gain` if the level is active
    pub fn tone(mut self, level: f64, base_hz: f64, spread_hz: f64, gain: f64) -> Self {
        if level > ACTIVE_LEVEL {
            self.frequency.push(base_hz + level * spread_hz);
            self.amplitude.push(level * gain);
        }
        self
    }

    /// Finish the bank; an empty bank plays the fallback tone
    pub fn into_parameters(
        mut self,
        harmonics: &[f64],
        tempo: f64,
        timbre: Timbre,
        duration: f64,
    ) -> AudioParameters {
        if self.frequency.is_empty() {
            self.frequency.push(FALLBACK_HZ);
            self.amplitude.push(FALLBACK_AMPLITUDE);
        }
        AudioParameters {
            frequency: self.frequency,
            amplitude: self.amplitude,
            harmonics: harmonics.to_vec(),
            tempo,
            timbre,
            duration,
        }
    }
}
