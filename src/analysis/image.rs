//! RGBA pixel buffer feature extraction

use std::collections::HashMap;

use tracing::debug;

use super::AnalysisError;
use crate::mapping::stats;
use crate::model::{hue_sector, ImageFeatures, Rgb};

/// Dominant colors reported per image
pub const DOMINANT_COLORS: usize = 5;
/// Channel quantization step for dominant colors
pub const COLOR_STEP: u8 = 32;
/// Only every n-th pixel votes for dominant colors
const COLOR_SAMPLE_STRIDE: usize = 10;
/// Side of a spatial frequency block
const BLOCK: usize = 8;
/// Spatial frequency values kept
const MAX_BLOCKS: usize = 64;
const HUE_BINS: usize = 360;
const GRAY_LEVELS: usize = 256;

/// Extracts `ImageFeatures` from RGBA8 pixel data
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageAnalyzer;

impl ImageAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a row-major RGBA buffer of `width * height` pixels
    pub fn analyze(&self, pixels: &[u8], width: u32, height: u32) -> Result<ImageFeatures, AnalysisError> {
        if width == 0 || height == 0 {
            return Err(AnalysisError::ZeroDimension { width, height });
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .unwrap_or(usize::MAX);
        if pixels.len() != expected {
            return Err(AnalysisError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }

        let luma = Luma::from_rgba(pixels, width as usize, height as usize);
        let histogram = luma.histogram();
        let (contrast, brightness) = {
            let mean = stats::mean(&luma.values);
            (stats::std_dev(&luma.values) / 255.0, mean / 255.0)
        };

        let features = ImageFeatures {
            dominant_colors: dominant_colors(pixels),
            brightness,
            contrast,
            saturation: saturation(pixels),
            hue: hue_histogram(pixels),
            texture: luma.texture(),
            edges: luma.edges(),
            complexity: entropy(&histogram, luma.values.len()) / 8.0,
            color_histogram: histogram,
            spatial_frequency: luma.block_deviations(),
        };

        debug!(
            width,
            height,
            brightness = features.brightness,
            contrast = features.contrast,
            colors = features.dominant_colors.len(),
            "analyzed image"
        );
        Ok(features)
    }
}

/// Grayscale view of an image
struct Luma {
    values: Vec<f64>,
    width: usize,
    height: usize,
}

impl Luma {
    fn from_rgba(pixels: &[u8], width: usize, height: usize) -> Self {
        let values = pixels
            .chunks_exact(4)
            .map(|p| gray(p[0], p[1], p[2]))
            .collect();
        Self {
            values,
            width,
            height,
        }
    }

    fn at(&self, x: usize, y: usize) -> f64 {
        self.values[y * self.width + x]
    }

    fn interior(&self) -> Option<usize> {
        (self.width > 2 && self.height > 2).then(|| (self.width - 2) * (self.height - 2))
    }

    /// 256-bin histogram of rounded gray levels
    fn histogram(&self) -> Vec<u32> {
        let mut bins = vec![0u32; GRAY_LEVELS];
        for &v in &self.values {
            bins[(v.round() as usize).min(GRAY_LEVELS - 1)] += 1;
        }
        bins
    }

    /// Share of interior neighbour comparisons where the neighbour is at least as bright
    fn texture(&self) -> f64 {
        let Some(interior) = self.interior() else {
            return 0.0;
        };

        let mut count = 0usize;
        for y in 1..self.height - 1 {
            for x in 1..self.width - 1 {
                let center = self.at(x, y);
                for ny in y - 1..=y + 1 {
                    for nx in x - 1..=x + 1 {
                        if (nx, ny) != (x, y) && self.at(nx, ny) >= center {
                            count += 1;
                        }
                    }
                }
            }
        }
        count as f64 / (interior * 8) as f64
    }

    /// Mean Sobel gradient magnitude over the interior, scaled by 255
    fn edges(&self) -> f64 {
        const SOBEL_X: [[f64; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
        const SOBEL_Y: [[f64; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

        let Some(interior) = self.interior() else {
            return 0.0;
        };

        let mut strength = 0.0;
        for y in 1..self.height - 1 {
            for x in 1..self.width - 1 {
                let (mut gx, mut gy) = (0.0, 0.0);
                for (ky, (row_x, row_y)) in SOBEL_X.iter().zip(&SOBEL_Y).enumerate() {
                    for kx in 0..3 {
                        let v = self.at(x + kx - 1, y + ky - 1);
                        gx += v * row_x[kx];
                        gy += v * row_y[kx];
                    }
                }
                strength += (gx * gx + gy * gy).sqrt();
            }
        }
        strength / (interior as f64 * 255.0)
    }

    /// Standard deviation of each 8x8 block strictly inside the image
    fn block_deviations(&self) -> Vec<f64> {
        let mut deviations = Vec::new();
        let mut block = Vec::with_capacity(BLOCK * BLOCK);

        'rows: for y in (0..self.height).step_by(BLOCK) {
            if y + BLOCK >= self.height {
                break;
            }
            for x in (0..self.width).step_by(BLOCK) {
                if x + BLOCK >= self.width {
                    break;
                }
                block.clear();
                for by in y..y + BLOCK {
                    block.extend_from_slice(&self.values[by * self.width + x..by * self.width + x + BLOCK]);
                }
                deviations.push(stats::std_dev(&block));
                if deviations.len() == MAX_BLOCKS {
                    break 'rows;
                }
            }
        }
        deviations
    }
}

fn gray(r: u8, g: u8, b: u8) -> f64 {
    0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
}

/// Most common quantized colors among sampled pixels, ties in first-seen order
fn dominant_colors(pixels: &[u8]) -> Vec<Rgb> {
    let mut counts: HashMap<Rgb, usize> = HashMap::new();
    let mut order = Vec::new();

    for p in pixels.chunks_exact(4).step_by(COLOR_SAMPLE_STRIDE) {
        let color = Rgb::new(p[0], p[1], p[2]).quantized(COLOR_STEP);
        let count = counts.entry(color).or_insert(0);
        if *count == 0 {
            order.push(color);
        }
        *count += 1;
    }

    // Stable sort keeps first-seen order among equal counts
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.truncate(DOMINANT_COLORS);
    order
}

fn saturation(pixels: &[u8]) -> f64 {
    let levels: Vec<f64> = pixels
        .chunks_exact(4)
        .map(|p| {
            let max = p[0].max(p[1]).max(p[2]);
            let min = p[0].min(p[1]).min(p[2]);
            if max == 0 {
                0.0
            } else {
                f64::from(max - min) / f64::from(max)
            }
        })
        .collect();
    stats::mean(&levels)
}

/// Whole-degree hue counts; gray pixels are skipped
fn hue_histogram(pixels: &[u8]) -> Vec<u32> {
    let mut bins = vec![0u32; HUE_BINS];
    for p in pixels.chunks_exact(4) {
        let channel = |c: u8| f64::from(c) / 255.0;
        if let Some(sector) = hue_sector(channel(p[0]), channel(p[1]), channel(p[2])) {
            let degrees = (sector * 60.0).round() as i64;
            bins[degrees.rem_euclid(HUE_BINS as i64) as usize] += 1;
        }
    }
    bins
}

/// Shannon entropy in bits
fn entropy(histogram: &[u32], total: usize) -> f64 {
    histogram
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / total as f64;
            -p * p.log2()
        })
        .sum()
}
