//! Clamped linear rescale

use super::Mapper;

/// Linear interpolation from an input range into an output range
pub struct LinearMapper {
    label: &'static str,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
    clamp: bool,
}

impl LinearMapper {
    /// Create a new clamped linear mapper
    pub fn new(label: &'static str, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> Self {
        Self {
            label,
            in_min,
            in_max,
            out_min,
            out_max,
            clamp: true,
        }
    }

    /// Map `[in_min, in_max]` onto the unit interval
    pub fn unit(label: &'static str, in_min: f64, in_max: f64) -> Self {
        Self::new(label, in_min, in_max, 0.0, 1.0)
    }

    /// Set whether to clamp output to range
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }
}

impl Mapper for LinearMapper {
    fn label(&self) -> &str {
        self.label
    }

    fn map(&self, input: f64) -> f64 {
        let in_range = self.in_max - self.in_min;
        // A collapsed input range has no slope; park at the midpoint.
        let normalized = if in_range.abs() < f64::EPSILON {
            0.5
        } else {
            (input - self.in_min) / in_range
        };

        let output = self.out_min + normalized * (self.out_max - self.out_min);

        if self.clamp {
            output.clamp(self.out_min.min(self.out_max), self.out_min.max(self.out_max))
        } else {
            output
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tempo_to_movement() {
        let mapper = LinearMapper::unit("movement", 60.0, 180.0);

        assert_eq!(mapper.map(60.0), 0.0);
        assert_eq!(mapper.map(120.0), 0.5);
        assert_eq!(mapper.map(180.0), 1.0);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let mapper = LinearMapper::unit("movement", 60.0, 180.0);

        assert_eq!(mapper.map(0.0), 0.0);
        assert_eq!(mapper.map(400.0), 1.0);
    }

    #[test]
    fn test_unclamped_extrapolates() {
        let mapper = LinearMapper::unit("movement", 60.0, 180.0).with_clamp(false);

        assert_eq!(mapper.map(240.0), 1.5);
        assert_eq!(mapper.map(0.0), -0.5);
    }

    #[test]
    fn test_inverted_output_range() {
        let mapper = LinearMapper::new("bitterness", 0.0, 1.0, 0.8, 0.0);

        assert_eq!(mapper.map(0.0), 0.8);
        assert_eq!(mapper.map(1.0), 0.0);
    }

    #[test]
    fn test_collapsed_input_range() {
        let mapper = LinearMapper::unit("flat", 5.0, 5.0);
        assert_eq!(mapper.map(123.0), 0.5);
    }
}
