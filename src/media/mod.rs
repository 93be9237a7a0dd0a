//! File decoding and encoding around the analysis core
//!
//! The analyzers and converters never touch the filesystem; these helpers
//! turn files into sample and pixel buffers and back.

pub mod picture;
pub mod wav;

pub use picture::{load_rgba, RgbaPixels};
pub use wav::{encode_pcm16, read_wav, write_pcm16, DecodedAudio};
