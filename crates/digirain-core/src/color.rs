//! RGB paint colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An opaque RGB triple. Opacity is supplied per draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as floats in `0.0..=255.0`, handy for compositing.
    pub fn to_f32(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{input}`: expected `rgb(r, g, b)` or `#rrggbb`")]
pub struct ParseColorError {
    input: String,
}

impl ParseColorError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parses `rgb(r, g, b)` (case-insensitive, any whitespace) or `#rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(ParseColorError::new(s));
            }
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseColorError::new(s))
            };
            return Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?));
        }

        let lower = trimmed.to_ascii_lowercase();
        let inner = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ParseColorError::new(s))?;

        let channels = inner
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ParseColorError::new(s))?;

        match channels.as_slice() {
            [r, g, b] => Ok(Rgb::new(*r, *g, *b)),
            _ => Err(ParseColorError::new(s)),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!("rgb(0, 255, 0)".parse(), Ok(Rgb::new(0, 255, 0)));
        assert_eq!("RGB(255,128,0)".parse(), Ok(Rgb::new(255, 128, 0)));
        assert_eq!("  rgb( 1 , 2 , 3 ) ".parse(), Ok(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#00ffff".parse(), Ok(Rgb::new(0, 255, 255)));
        assert_eq!("#FF8000".parse(), Ok(Rgb::new(255, 128, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("green".parse::<Rgb>().is_err());
        assert!("rgb(0, 255)".parse::<Rgb>().is_err());
        assert!("rgb(0, 256, 0)".parse::<Rgb>().is_err());
        assert!("#0f0".parse::<Rgb>().is_err());
        assert!("#gg0000".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        let color = Rgb::new(12, 34, 56);
        assert_eq!(color.to_string(), "rgb(12, 34, 56)");
        assert_eq!(color.to_string().parse(), Ok(color));
    }

    #[test]
    fn test_serde_as_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            color: Rgb,
        }
        let parsed: Wrapper = toml::from_str(r##"color = "#00ff00""##).unwrap();
        assert_eq!(parsed.color, Rgb::GREEN);
    }
}
