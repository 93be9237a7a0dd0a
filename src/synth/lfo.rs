//! Low Frequency Oscillator for vibrato

use std::f64::consts::PI;

/// Sine LFO producing values in `[-1, 1]`
#[derive(Debug, Clone)]
pub struct Lfo {
    frequency: f64,
    phase: f64,
    sample_rate: f64,
}

impl Lfo {
    pub fn new(frequency: f64, sample_rate: f64) -> Self {
        let mut lfo = Self {
            frequency: 0.0,
            phase: 0.0,
            sample_rate,
        };
        lfo.set_frequency(frequency);
        lfo
    }

    /// Set LFO frequency in Hz
    pub fn set_frequency(&mut self, hz: f64) {
        self.frequency = hz.clamp(0.01, 100.0);
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Generate next sample
    pub fn process(&mut self) -> f64 {
        let value = (self.phase * 2.0 * PI).sin();
        self.phase += self.frequency / self.sample_rate;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }
        value
    }
}
