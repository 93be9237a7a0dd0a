//! Synthesis of audio parameters
//!
//! `AudioGenerator` renders fixed-length clips to WAV bytes. A
//! `PlaybackSession` voices parameters continuously through a pool of
//! gliding oscillator voices.

mod generator;
mod lfo;
mod oscillator;
mod session;
mod tone;
mod voice;

pub use generator::{AudioGenerator, MAX_DURATION_SECS, MAX_PARTIALS};
pub use lfo::Lfo;
pub use oscillator::{Oscillator, Waveform};
pub use session::PlaybackSession;
pub use tone::ToneVoice;
pub use voice::Voice;
