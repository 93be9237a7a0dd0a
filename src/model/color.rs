//! Quantized RGB colors as they appear in image features

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An 8-bit RGB color, serialized as `rgb(r,g,b)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Snap each channel down to the nearest multiple of `step`
    ///
    /// A step of 0 is treated as 1 and leaves the color unchanged.
    pub fn quantized(self, step: u8) -> Self {
        let step = step.max(1);
        let snap = |c: u8| (c / step) * step;
        Self::new(snap(self.r), snap(self.g), snap(self.b))
    }

    /// HSV hue in degrees, `[0, 360)`; achromatic colors report 0
    pub fn hue(self) -> f64 {
        match hue_sector(
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ) {
            Some(sector) => (sector * 60.0 + 360.0) % 360.0,
            None => 0.0,
        }
    }
}

/// Hue in sixths of a turn for normalized channels, or `None` if gray
///
/// The red branch keeps the sign of the remainder, so values lie in
/// `(-1, 6)` and callers wrap negatives themselves.
pub(crate) fn hue_sector(r: f64, g: f64, b: f64) -> Option<f64> {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta == 0.0 {
        return None;
    }

    let sector = if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    Some(sector)
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Error parsing an `rgb(r,g,b)` string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not an rgb(r,g,b) color: {0:?}")]
pub struct ParseRgbError(String);

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseRgbError(s.to_string());
        let inner = s
            .trim()
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;

        let channels: Vec<u8> = inner
            .split(',')
            .map(|c| c.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .map_err(|_| err())?;

        match channels.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseRgbError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let color = Rgb::new(224, 96, 0);
        assert_eq!(color.to_string(), "rgb(224,96,0)");
        assert_eq!("rgb(224,96,0)".parse::<Rgb>(), Ok(color));
        assert_eq!(" rgb(1, 2, 3) ".parse::<Rgb>(), Ok(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("#ff0000".parse::<Rgb>().is_err());
        assert!("rgb(1,2)".parse::<Rgb>().is_err());
        assert!("rgb(1,2,300)".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_quantize_to_32() {
        assert_eq!(Rgb::new(255, 31, 64).quantized(32), Rgb::new(224, 0, 64));
    }

    #[test]
    fn test_quantize_zero_step_is_identity() {
        let color = Rgb::new(255, 31, 7);
        assert_eq!(color.quantized(0), color);
        assert_eq!(color.quantized(1), color);
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(Rgb::new(255, 0, 0).hue(), 0.0);
        assert_eq!(Rgb::new(0, 255, 0).hue(), 120.0);
        assert_eq!(Rgb::new(0, 0, 255).hue(), 240.0);
        assert_eq!(Rgb::new(255, 0, 255).hue(), 300.0);
        assert_eq!(Rgb::new(128, 128, 128).hue(), 0.0);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Rgb::new(32, 64, 96)).unwrap();
        assert_eq!(json, "\"rgb(32,64,96)\"");

        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(32, 64, 96));
    }
}
