//! Phase-accumulating oscillator

use std::f64::consts::PI;

use crate::model::Timbre;

/// Waveforms available to playback voices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Saw,
}

impl Waveform {
    /// Waveform used to voice a timbre
    ///
    /// Square timbres play as sawtooth, which is softer at equal level.
    pub fn for_timbre(timbre: Timbre) -> Self {
        match timbre {
            Timbre::Sine => Waveform::Sine,
            Timbre::Triangle => Waveform::Triangle,
            Timbre::Sawtooth | Timbre::Square => Waveform::Saw,
        }
    }
}

/// A basic oscillator that generates waveforms
#[derive(Debug, Clone)]
pub struct Oscillator {
    waveform: Waveform,
    phase: f64,
    frequency: f64,
    sample_rate: f64,
}

impl Oscillator {
    pub fn new(waveform: Waveform, frequency: f64, sample_rate: f64) -> Self {
        Self {
            waveform,
            phase: 0.0,
            frequency,
            sample_rate,
        }
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Generate the next sample in `[-1, 1]`
    pub fn generate(&mut self) -> f64 {
        let p = self.phase;
        let sample = match self.waveform {
            Waveform::Sine => (p * 2.0 * PI).sin(),
            Waveform::Triangle => {
                if p < 0.25 {
                    4.0 * p
                } else if p < 0.75 {
                    2.0 - 4.0 * p
                } else {
                    4.0 * p - 4.0
                }
            }
            Waveform::Saw => 2.0 * p - 1.0,
        };

        self.phase += self.frequency / self.sample_rate;
        self.phase -= self.phase.floor();

        sample
    }
}
