//! Modalities and the values that flow between them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::model::{
    AudioFeatures, AudioParameters, EmotionalState, GeneratedImageParams, ImageFeatures,
    SmellProfile, TasteProfile, VisualParameters,
};

/// A sense, as a conversion source or target
///
/// As a target, `Audio` means synthesis parameters and `Image` means
/// generated image parameters. `Visual` is only ever a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Audio,
    Image,
    Visual,
    Taste,
    Smell,
    Emotion,
}

impl Modality {
    pub const ALL: [Modality; 6] = [
        Modality::Audio,
        Modality::Image,
        Modality::Visual,
        Modality::Taste,
        Modality::Smell,
        Modality::Emotion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Modality::Audio => "audio",
            Modality::Image => "image",
            Modality::Visual => "visual",
            Modality::Taste => "taste",
            Modality::Smell => "smell",
            Modality::Emotion => "emotion",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown modality '{0}'")]
pub struct ParseModalityError(String);

impl FromStr for Modality {
    type Err = ParseModalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Modality::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseModalityError(s.to_string()))
    }
}

/// Analyzed features or a directly set profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "modality", content = "value", rename_all = "lowercase")]
pub enum SensoryInput {
    Audio(AudioFeatures),
    Image(ImageFeatures),
    Taste(TasteProfile),
    Smell(SmellProfile),
    Emotion(EmotionalState),
}

impl SensoryInput {
    pub fn modality(&self) -> Modality {
        match self {
            SensoryInput::Audio(_) => Modality::Audio,
            SensoryInput::Image(_) => Modality::Image,
            SensoryInput::Taste(_) => Modality::Taste,
            SensoryInput::Smell(_) => Modality::Smell,
            SensoryInput::Emotion(_) => Modality::Emotion,
        }
    }
}

/// Result of converting a `SensoryInput` into one target modality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "modality", content = "value", rename_all = "lowercase")]
pub enum SensoryOutput {
    Audio(AudioParameters),
    Image(GeneratedImageParams),
    Visual(VisualParameters),
    Taste(TasteProfile),
    Smell(SmellProfile),
    Emotion(EmotionalState),
}

impl SensoryOutput {
    pub fn modality(&self) -> Modality {
        match self {
            SensoryOutput::Audio(_) => Modality::Audio,
            SensoryOutput::Image(_) => Modality::Image,
            SensoryOutput::Visual(_) => Modality::Visual,
            SensoryOutput::Taste(_) => Modality::Taste,
            SensoryOutput::Smell(_) => Modality::Smell,
            SensoryOutput::Emotion(_) => Modality::Emotion,
        }
    }
}

/// Errors from engine analysis and dispatch
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("no conversion from {from} to {to}")]
    Unsupported { from: Modality, to: Modality },
}
