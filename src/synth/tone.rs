//! Gliding tone voice with vibrato

use super::{Lfo, Oscillator, Voice, Waveform};

/// Linear glide from the current value to a target over a fixed number of samples
#[derive(Debug, Clone)]
struct Ramp {
    current: f64,
    target: f64,
    step: f64,
    remaining: usize,
}

impl Ramp {
    fn at(value: f64) -> Self {
        Self {
            current: value,
            target: value,
            step: 0.0,
            remaining: 0,
        }
    }

    fn glide(&mut self, target: f64, samples: usize) {
        self.target = target;
        if samples == 0 {
            self.current = target;
            self.remaining = 0;
        } else {
            self.step = (target - self.current) / samples as f64;
            self.remaining = samples;
        }
    }

    fn next(&mut self) -> f64 {
        if self.remaining > 0 {
            self.remaining -= 1;
            self.current = if self.remaining == 0 {
                self.target
            } else {
                self.current + self.step
            };
        }
        self.current
    }

    fn is_settled(&self) -> bool {
        self.remaining == 0
    }
}

/// One playback partial: an oscillator with gliding pitch and level plus vibrato
pub struct ToneVoice {
    oscillator: Oscillator,
    vibrato: Lfo,
    /// Vibrato swing as a fraction of the pitch
    vibrato_depth: f64,
    frequency: Ramp,
    amplitude: Ramp,
    transition: usize,
    released: bool,
}

impl ToneVoice {
    /// Start a voice at `frequency` that fades in to `amplitude`
    pub fn new(
        waveform: Waveform,
        frequency: f64,
        amplitude: f64,
        sample_rate: f64,
        transition_secs: f64,
    ) -> Self {
        let transition = (transition_secs.max(0.0) * sample_rate) as usize;
        let mut level = Ramp::at(0.0);
        level.glide(amplitude, transition);

        Self {
            oscillator: Oscillator::new(waveform, frequency, sample_rate),
            vibrato: Lfo::new(0.01, sample_rate),
            vibrato_depth: 0.0,
            frequency: Ramp::at(frequency),
            amplitude: level,
            transition,
            released: false,
        }
    }

    /// Add pitch vibrato at `rate` Hz swinging by `depth` of the pitch
    pub fn with_vibrato(mut self, rate: f64, depth: f64) -> Self {
        self.vibrato.set_frequency(rate);
        self.vibrato_depth = depth.max(0.0);
        self
    }

    pub fn waveform(&self) -> Waveform {
        self.oscillator.waveform()
    }
}

impl Voice for ToneVoice {
    fn retarget(&mut self, frequency: f64, amplitude: f64) {
        self.frequency.glide(frequency, self.transition);
        self.amplitude.glide(amplitude, self.transition);
    }

    fn release(&mut self) {
        self.released = true;
        self.amplitude.glide(0.0, self.transition);
    }

    fn is_sounding(&self) -> bool {
        !(self.released && self.amplitude.is_settled())
    }

    fn frequency(&self) -> f64 {
        self.frequency.target
    }

    fn amplitude(&self) -> f64 {
        self.amplitude.target
    }

    fn process(&mut self) -> f64 {
        let pitch = self.frequency.next();
        let level = self.amplitude.next();
        let swing = self.vibrato.process() * pitch * self.vibrato_depth;

        self.oscillator.set_frequency(pitch + swing);
        self.oscillator.generate() * level
    }
}
