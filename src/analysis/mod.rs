//! Feature extraction from raw waveforms and pixel buffers
//!
//! Analyzers are stateless: each call builds its own transient context
//! (a [`Spectrum`] for audio, a grayscale view for images) and drops it
//! before returning.

mod audio;
mod error;
mod image;
mod pitch;
mod spectrum;

pub use audio::{AudioAnalyzer, DEFAULT_TEMPO, FREQUENCY_BINS, RHYTHM_SLOTS};
pub use error::AnalysisError;
pub use image::{ImageAnalyzer, COLOR_STEP, DOMINANT_COLORS};
pub use pitch::{detect_pitch, pitch_track, PITCH_WINDOW};
pub use spectrum::{tonnetz, Spectrum, ROLLOFF_FRACTION};
