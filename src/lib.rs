//! Synesthesia - Deterministic cross-modal sensory translation
//!
//! Maps between sound, images, taste, smell and emotion. Audio and images
//! are analyzed into feature vectors; every modality converts into the
//! others through explicit hand-tuned formulas, and audio parameters can
//! be rendered back to WAV or voiced continuously.

pub mod analysis;
pub mod config;
pub mod convert;
pub mod engine;
pub mod mapping;
pub mod media;
pub mod model;
pub mod presets;
pub mod synth;

pub use config::SynesthesiaConfig;
pub use engine::{Engine, Modality, SensoryInput, SensoryOutput, Translation};
