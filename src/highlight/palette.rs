//! Color palette

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGB color, encoded as `"R G B"` in text and JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(format!("Invalid color '{}': expected 'R G B'", s));
        }
        let channel = |p: &str| {
            p.parse::<u8>()
                .map_err(|e| format!("Invalid color channel '{}': {}", p, e))
        };
        Ok(Rgb::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?))
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Foreground used for every highlighted span
pub const FOREGROUND: Rgb = Rgb::new(255, 255, 255);

/// Background colors, assigned to queries in order
pub const PALETTE: [Rgb; 6] = [
    Rgb::new(255, 60, 60),  // red
    Rgb::new(60, 200, 60),  // green
    Rgb::new(60, 60, 255),  // blue
    Rgb::new(230, 200, 60), // yellow
    Rgb::new(255, 60, 255), // pink
    Rgb::new(60, 220, 220), // cyan
];

/// Color for the query at `index`, wrapping around the palette
pub fn color_for(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_for_is_circular() {
        for i in 0..20 {
            assert_eq!(color_for(i), PALETTE[i % 6]);
        }
        assert_eq!(color_for(0), color_for(6));
        assert_eq!(color_for(7), Rgb::new(60, 200, 60));
    }

    #[test]
    fn test_display_and_parse() {
        let color = Rgb::new(230, 200, 60);
        assert_eq!(color.to_string(), "230 200 60");
        assert_eq!("230 200 60".parse::<Rgb>().unwrap(), color);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("1 2".parse::<Rgb>().is_err());
        assert!("1 2 300".parse::<Rgb>().is_err());
        assert!("a b c".parse::<Rgb>().unwrap_err().contains("Invalid color channel"));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Rgb::new(255, 60, 60)).unwrap();
        assert_eq!(json, "\"255 60 60\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(255, 60, 60));
    }
}
