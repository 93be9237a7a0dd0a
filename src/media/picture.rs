//! Image decoding to RGBA8

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Row-major RGBA8 pixels
#[derive(Debug, Clone)]
pub struct RgbaPixels {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decode a PNG or JPEG file to RGBA8
pub fn load_rgba(path: &Path) -> Result<RgbaPixels> {
    let decoded = image::open(path).with_context(|| format!("failed to decode image: {:?}", path))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    debug!(width, height, path = %path.display(), "decoded image");

    Ok(RgbaPixels {
        pixels: rgba.into_raw(),
        width,
        height,
    })
}
