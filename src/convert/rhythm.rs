//! Pulse sequences for profile → visual conversion

/// Shortest sequence produced
const BASE_LENGTH: f64 = 8.0;
/// Extra steps added at full driver level
const DRIVER_SPAN: f64 = 16.0;
/// Longest sequence produced, for drivers far outside `[0, 1]`
const MAX_LENGTH: f64 = 256.0;

/// One oscillating contribution to a pulse sequence
#[derive(Debug, Clone, Copy)]
pub(crate) struct Wave {
    pub level: f64,
    /// Radians per step
    pub rate: f64,
    pub weight: f64,
}

impl Wave {
    pub const fn new(level: f64, rate: f64, weight: f64) -> Self {
        Self {
            level,
            rate,
            weight,
        }
    }
}

/// `8 + round(driver * 16)` steps of `0.5 + Σ level·sin(i·rate)·weight`, each clamped to `[0, 1]`
pub(crate) fn pulse_sequence(driver: f64, waves: &[Wave]) -> Vec<f64> {
    // Negative or NaN drivers saturate to zero extra steps, huge ones to MAX_LENGTH
    let length = (BASE_LENGTH + (driver * DRIVER_SPAN).round())
        .max(BASE_LENGTH)
        .min(MAX_LENGTH) as usize;

    (0..length)
        .map(|i| {
            let step = i as f64;
            let value = waves
                .iter()
                .fold(0.5, |acc, w| acc + w.level * (step * w.rate).sin() * w.weight);
            value.clamp(0.0, 1.0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_follows_driver() {
        assert_eq!(pulse_sequence(0.0, &[]).len(), 8);
        assert_eq!(pulse_sequence(0.5, &[]).len(), 16);
        assert_eq!(pulse_sequence(1.0, &[]).len(), 24);
        // round rather than floor: 0.47 * 16 = 7.52
        assert_eq!(pulse_sequence(0.47, &[]).len(), 16);
        assert_eq!(pulse_sequence(-1.0, &[]).len(), 8);
    }

    #[test]
    fn test_extreme_drivers_stay_bounded() {
        assert_eq!(pulse_sequence(f64::INFINITY, &[]).len(), 256);
        assert_eq!(pulse_sequence(1e300, &[]).len(), 256);
        assert_eq!(pulse_sequence(f64::NAN, &[]).len(), 8);
        assert_eq!(pulse_sequence(f64::NEG_INFINITY, &[]).len(), 8);
        // overshooting converter output keeps the plain formula
        assert_eq!(pulse_sequence(1.5, &[]).len(), 32);
    }

    #[test]
    fn test_values_are_clamped() {
        let loud = [Wave::new(5.0, 1.0, 1.0)];
        let sequence = pulse_sequence(1.0, &loud);

        assert_eq!(sequence[0], 0.5);
        assert!(sequence.iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert!(sequence.contains(&1.0));
        assert!(sequence.contains(&0.0));
    }

    #[test]
    fn test_silent_waves_stay_centered() {
        let sequence = pulse_sequence(0.25, &[Wave::new(0.0, 0.5, 0.3)]);
        assert!(sequence.iter().all(|&v| v == 0.5));
    }
}
