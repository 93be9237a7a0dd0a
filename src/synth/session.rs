//! Continuous playback of `AudioParameters`
//!
//! A session owns a small pool of gliding voices and renders them into
//! caller-provided buffers. Parameter changes retarget the running voices
//! instead of restarting them, so adjusting an input never clicks.

use tracing::debug;

use super::{ToneVoice, Voice, Waveform};
use crate::config::PlaybackConfig;
use crate::model::AudioParameters;

/// Pitch used for a missing or zero frequency
const FALLBACK_FREQUENCY: f64 = 440.0;

/// Level used for a missing or zero amplitude, before scaling
const FALLBACK_AMPLITUDE: f64 = 0.05;

/// Golden-ratio step spreading vibrato rates across voices
const VIBRATO_SPREAD: f64 = 0.618034;

/// Caller-owned playback state
pub struct PlaybackSession {
    config: PlaybackConfig,
    sample_rate: f64,
    voices: Vec<Box<dyn Voice>>,
    /// Released voices still fading out
    fading: Vec<Box<dyn Voice>>,
    current: Option<AudioParameters>,
}

impl PlaybackSession {
    pub fn new(config: PlaybackConfig, sample_rate: u32) -> Self {
        Self {
            config,
            sample_rate: f64::from(sample_rate),
            voices: Vec::new(),
            fading: Vec::new(),
            current: None,
        }
    }

    /// Begin playing, or retarget the running voices if already playing
    pub fn start(&mut self, params: &AudioParameters) {
        if self.is_playing() {
            self.update(params);
            return;
        }

        self.current = Some(params.clone());
        self.sync_voices(params);
        debug!(voices = self.voices.len(), timbre = %params.timbre, "playback started");
    }

    /// Glide to new parameters; ignored while stopped
    pub fn update(&mut self, params: &AudioParameters) {
        if !self.is_playing() {
            return;
        }

        self.current = Some(params.clone());
        self.sync_voices(params);
    }

    /// Fade every voice out and stop
    pub fn stop(&mut self) {
        if self.current.take().is_some() {
            self.release_from(0);
            debug!(fading = self.fading.len(), "playback stopped");
        }
    }

    /// Start if stopped, stop if playing; returns whether playback is now on
    pub fn toggle(&mut self, params: &AudioParameters) -> bool {
        if self.is_playing() {
            self.stop();
        } else {
            self.start(params);
        }
        self.is_playing()
    }

    pub fn is_playing(&self) -> bool {
        self.current.is_some()
    }

    /// Parameters currently being played
    pub fn current_params(&self) -> Option<&AudioParameters> {
        self.current.as_ref()
    }

    /// Number of voices tracking the current parameters
    pub fn voice_count(&self) -> usize {
        self.voices.len()
    }

    /// Render the next block of samples
    ///
    /// Released voices finish their fade even after `stop`; once they are
    /// gone the buffer is filled with silence.
    pub fn fill_buffer(&mut self, buffer: &mut [f32]) {
        let gain = self.config.master_gain;

        for sample in buffer.iter_mut() {
            let mut output = 0.0;
            for voice in self.voices.iter_mut().chain(self.fading.iter_mut()) {
                output += voice.process();
            }
            *sample = (output * gain) as f32;
        }

        self.fading.retain(|voice| voice.is_sounding());
    }

    fn sync_voices(&mut self, params: &AudioParameters) {
        let wanted = params.frequency.len().min(self.config.max_voices);

        for index in 0..wanted {
            let frequency = self.voice_frequency(params.frequency[index]);
            let amplitude = self.voice_amplitude(params.amplitude.get(index).copied());

            match self.voices.get_mut(index) {
                Some(voice) => voice.retarget(frequency, amplitude),
                None => {
                    let rate = 3.0 + 2.0 * (index as f64 * VIBRATO_SPREAD).fract();
                    let voice = ToneVoice::new(
                        Waveform::for_timbre(params.timbre),
                        frequency,
                        amplitude,
                        self.sample_rate,
                        self.config.transition_secs,
                    )
                    .with_vibrato(rate, self.config.vibrato_depth);
                    self.voices.push(Box::new(voice));
                }
            }
        }

        self.release_from(wanted);
    }

    fn release_from(&mut self, index: usize) {
        if index >= self.voices.len() {
            return;
        }
        for mut voice in self.voices.drain(index..) {
            voice.release();
            self.fading.push(voice);
        }
    }

    fn voice_frequency(&self, raw: f64) -> f64 {
        let freq = if raw == 0.0 || raw.is_nan() {
            FALLBACK_FREQUENCY
        } else {
            raw
        };
        freq.max(self.config.min_frequency).min(self.config.max_frequency)
    }

    fn voice_amplitude(&self, raw: Option<f64>) -> f64 {
        let amp = match raw {
            Some(a) if a != 0.0 && !a.is_nan() => a,
            _ => FALLBACK_AMPLITUDE,
        };
        (amp * self.config.amplitude_scale).min(self.config.amplitude_cap)
    }
}
