//! Cross-modal converters
//!
//! Every function here is pure and total: the same input always yields
//! the same output, and no finite input produces NaN or infinity. Most
//! outputs stay within `[0, 1]`; a few weighted sums are left unclamped
//! and may exceed 1 for strong inputs (see the tests below for the list).

mod audio;
mod emotion;
mod image;
mod imagery;
mod palette;
mod rhythm;
mod smell;
mod taste;
mod tones;

pub use audio::{audio_to_smell, audio_to_taste, audio_to_visual};
pub use emotion::{emotion_to_audio, emotion_to_smell, emotion_to_taste, emotion_to_visual};
pub use image::{image_to_audio, image_to_smell, image_to_taste, image_to_visual};
pub use imagery::generate_image_params;
pub use palette::FALLBACK_COLOR;
pub use smell::{smell_to_audio, smell_to_taste, smell_to_visual};
pub use taste::{taste_to_audio, taste_to_smell, taste_to_visual};
