//! Data model shared by analyzers, converters and the generator

mod color;
mod features;
mod params;
mod profiles;

pub(crate) use color::hue_sector;
pub use color::{ParseRgbError, Rgb};
pub use features::{AudioFeatures, ImageFeatures, CHROMA_BINS, MFCC_COUNT, TONNETZ_DIMS};
pub use params::{
    AudioParameters, Composition, FormType, GeneratedImageParams, ImageElement, ImageStyle, Mood,
    Timbre, VisualParameters,
};
pub use profiles::{EmotionalState, SmellProfile, TasteProfile};
