//! Output parameter sets consumed by renderers and the audio generator

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape families a procedural renderer can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    Organic,
    Geometric,
    Abstract,
    Flowing,
}

/// Oscillator character for synthesized audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timbre {
    #[default]
    Sine,
    Triangle,
    Sawtooth,
    Square,
}

impl Timbre {
    pub fn as_str(self) -> &'static str {
        match self {
            Timbre::Sine => "sine",
            Timbre::Triangle => "triangle",
            Timbre::Sawtooth => "sawtooth",
            Timbre::Square => "square",
        }
    }
}

impl fmt::Display for Timbre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for procedural artwork
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualParameters {
    /// CSS color strings, never empty
    pub colors: Vec<String>,
    pub movement: f64,
    pub intensity: f64,
    pub complexity: f64,
    pub balance: f64,
    /// Per-beat pulse levels
    pub rhythm: Vec<f64>,
    /// Never empty
    pub forms: Vec<FormType>,
    pub texture: f64,
    pub temperature: f64,
}

/// Parameters for additive synthesis
///
/// `frequency` and `amplitude` are paired by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioParameters {
    pub frequency: Vec<f64>,
    pub amplitude: Vec<f64>,
    pub harmonics: Vec<f64>,
    pub tempo: f64,
    pub timbre: Timbre,
    /// Seconds
    pub duration: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    Surreal,
    Dynamic,
    Minimalist,
    Textured,
    Abstract,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Composition {
    Symmetrical,
    Diagonal,
    Complex,
    Centered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Warm,
    Cool,
    Energetic,
    Calm,
    Balanced,
}

/// Descriptive tags for a generated image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageElement {
    #[serde(rename = "organic shapes")]
    OrganicShapes,
    #[serde(rename = "geometric patterns")]
    GeometricPatterns,
    #[serde(rename = "textured surfaces")]
    TexturedSurfaces,
    #[serde(rename = "flowing lines")]
    FlowingLines,
    #[serde(rename = "abstract forms")]
    AbstractForms,
}

/// High-level description of an image derived from visual parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedImageParams {
    pub style: ImageStyle,
    pub colors: Vec<String>,
    pub composition: Composition,
    pub mood: Mood,
    pub elements: Vec<ImageElement>,
}
