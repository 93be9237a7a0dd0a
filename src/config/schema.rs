//! Configuration schema definitions

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Main configuration for Synesthesia
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynesthesiaConfig {
    /// Audio rendering settings
    #[serde(default)]
    pub audio: AudioConfig,

    /// Continuous playback voicing
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// CLI output formatting
    #[serde(default)]
    pub output: OutputConfig,
}

impl SynesthesiaConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.audio.sample_rate < 8000 || self.audio.sample_rate > 192000 {
            bail!("Sample rate must be between 8000 and 192000");
        }

        let playback = &self.playback;
        if playback.max_voices == 0 || playback.max_voices > 32 {
            bail!("Voice limit must be between 1 and 32");
        }
        let (min, max) = (playback.min_frequency, playback.max_frequency);
        if !(min > 0.0 && min < max && max.is_finite()) {
            bail!(
                "Playback frequency range {}..{} must be finite, positive and non-empty",
                min,
                max
            );
        }
        if playback.max_frequency > f64::from(self.audio.sample_rate) / 2.0 {
            bail!("Playback max frequency must not exceed the Nyquist frequency");
        }
        for (name, value) in [
            ("amplitude_cap", playback.amplitude_cap),
            ("amplitude_scale", playback.amplitude_scale),
            ("master_gain", playback.master_gain),
        ] {
            if !(0.0..=1.0).contains(&value) {
                bail!("Playback {} must be between 0.0 and 1.0", name);
            }
        }
        if !(0.0..=5.0).contains(&playback.transition_secs) {
            bail!("Playback transition must be between 0 and 5 seconds");
        }
        if !(0.0..=0.1).contains(&playback.vibrato_depth) {
            bail!("Vibrato depth must be between 0.0 and 0.1");
        }

        Ok(())
    }
}

/// Audio rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Sample rate in Hz for generated audio (default: 44100)
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
        }
    }
}

fn default_sample_rate() -> u32 { 44100 }

/// Continuous playback configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Most simultaneous voices (default: 6)
    #[serde(default = "default_max_voices")]
    pub max_voices: usize,

    /// Lowest voice pitch in Hz (default: 80)
    #[serde(default = "default_min_frequency")]
    pub min_frequency: f64,

    /// Highest voice pitch in Hz (default: 2000)
    #[serde(default = "default_max_frequency")]
    pub max_frequency: f64,

    /// Per-voice level ceiling (default: 0.06)
    #[serde(default = "default_amplitude_cap")]
    pub amplitude_cap: f64,

    /// Scale applied to parameter amplitudes (default: 0.6)
    #[serde(default = "default_amplitude_scale")]
    pub amplitude_scale: f64,

    /// Glide time for start, update and removal (default: 0.1)
    #[serde(default = "default_transition_secs")]
    pub transition_secs: f64,

    /// Gain on the summed voices (default: 0.1)
    #[serde(default = "default_master_gain")]
    pub master_gain: f64,

    /// Vibrato swing as a fraction of pitch (default: 0.005)
    #[serde(default = "default_vibrato_depth")]
    pub vibrato_depth: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            max_voices: default_max_voices(),
            min_frequency: default_min_frequency(),
            max_frequency: default_max_frequency(),
            amplitude_cap: default_amplitude_cap(),
            amplitude_scale: default_amplitude_scale(),
            transition_secs: default_transition_secs(),
            master_gain: default_master_gain(),
            vibrato_depth: default_vibrato_depth(),
        }
    }
}

fn default_max_voices() -> usize { 6 }
fn default_min_frequency() -> f64 { 80.0 }
fn default_max_frequency() -> f64 { 2000.0 }
fn default_amplitude_cap() -> f64 { 0.06 }
fn default_amplitude_scale() -> f64 { 0.6 }
fn default_transition_secs() -> f64 { 0.1 }
fn default_master_gain() -> f64 { 0.1 }
fn default_vibrato_depth() -> f64 { 0.005 }

/// Output formatting for the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Serialization format (default: json)
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON (default: true)
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool { true }

/// Serialization formats for exported parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON via serde_json (default)
    #[default]
    Json,
    /// YAML via serde_yaml
    Yaml,
}
