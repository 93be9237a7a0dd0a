//! Analysis input errors

use thiserror::Error;

/// Raised when a waveform or pixel buffer cannot be analyzed
///
/// Every variant is an invalid-input condition; analysis never fabricates
/// a feature vector for input it rejects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("invalid analysis input: waveform has no samples")]
    EmptySignal,

    #[error("invalid analysis input: sample rate must be positive")]
    ZeroSampleRate,

    #[error("invalid analysis input: sample {index} is not a finite number")]
    NonFiniteSample { index: usize },

    #[error("invalid analysis input: image dimensions {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("invalid analysis input: expected {expected} bytes of RGBA data, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}
