//! Musical scales and pitch classes

/// Reference pitch for pitch-class folding (A4)
pub const A4_HZ: f64 = 440.0;

/// Musical scale as semitone intervals from the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    intervals: &'static [u8],
}

impl Scale {
    /// Major scale
    pub const fn major() -> Self {
        Self {
            intervals: &[0, 2, 4, 5, 7, 9, 11],
        }
    }

    /// Sum the entries of a 12-bin chroma vector that fall on this scale
    pub fn weight_in(&self, chroma: &[f64; 12]) -> f64 {
        self.intervals
            .iter()
            .map(|&interval| chroma[usize::from(interval) % 12])
            .sum()
    }
}

/// Signed pitch class of a frequency relative to A4
///
/// Frequencies below A4 fold to negative classes (the remainder keeps the
/// sign of the semitone offset); callers drop those.
pub fn pitch_class(frequency: f64) -> i64 {
    let semitones = (12.0 * (frequency / A4_HZ).log2()).round() as i64;
    semitones % 12
}
