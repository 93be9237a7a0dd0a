//! Logarithmic (octave) rescale
//!
//! Perceived pitch is logarithmic in frequency, so equal steps of input
//! should move the output by equal musical intervals.

use super::Mapper;

/// Maps input with `out_min * (out_max/out_min)^t` for normalized `t`
///
/// With `out_max = 4 * out_min` the output spans exactly two octaves.
pub struct LogarithmicMapper {
    label: &'static str,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
    clamp: bool,
}

impl LogarithmicMapper {
    /// Create a new logarithmic mapper
    ///
    /// Output bounds are floored at 0.001 so the ratio stays defined.
    pub fn new(label: &'static str, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> Self {
        Self {
            label,
            in_min,
            in_max,
            out_min: out_min.max(0.001),
            out_max: out_max.max(0.001),
            clamp: true,
        }
    }

    /// Set whether to clamp input and output to range
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }
}

impl Mapper for LogarithmicMapper {
    fn label(&self) -> &str {
        self.label
    }

    fn map(&self, input: f64) -> f64 {
        let in_range = self.in_max - self.in_min;
        let normalized = if in_range.abs() < f64::EPSILON {
            0.5
        } else {
            (input - self.in_min) / in_range
        };

        let normalized = if self.clamp {
            normalized.clamp(0.0, 1.0)
        } else {
            normalized
        };

        let output = self.out_min * (self.out_max / self.out_min).powf(normalized);

        if self.clamp {
            output.clamp(self.out_min.min(self.out_max), self.out_min.max(self.out_max))
        } else {
            output
        }
    }
}
