use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_COLOR: &str = "#2d3436";

pub const DEFAULT_PALETTE: [&str; 35] = [
    "#2d3436", "#636e72", "#b2bec3", "#dfe6e9", "#ffffff",
    "#d63031", "#e17055", "#fab1a0", "#ff7675", "#fd79a8",
    "#e84393", "#fdcb6e", "#ffeaa7", "#f1c40f", "#e67e22",
    "#d35400", "#27ae60", "#2ecc71", "#55efc4", "#00b894",
    "#16a085", "#00cec9", "#74b9ff", "#0984e3", "#0097e6",
    "#182C61", "#6c5ce7", "#a29bfe", "#8e44ad", "#2c3e50",
    "#8395a7", "#95a5a6", "#7f8c8d", "#6D214F", "#2C3A47",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color must have 3, 4, 6 or 8 hex digits: {0:?}")]
    InvalidLength(String),
    #[error("invalid hex digit in color {0:?}")]
    InvalidDigit(String),
}

/// Straight (non-premultiplied) RGBA, the channel layout of `ImageData`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn parse_hex(value: &str) -> Result<Self, ColorParseError> {
        let trimmed = value.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(value.to_string()))?;
        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(value.to_string()));
        }
        let nibble = |index: usize| {
            u8::from_str_radix(&digits[index..index + 1], 16)
                .map(|n| n * 17)
                .map_err(|_| ColorParseError::InvalidDigit(value.to_string()))
        };
        let byte = |index: usize| {
            u8::from_str_radix(&digits[index * 2..index * 2 + 2], 16)
                .map_err(|_| ColorParseError::InvalidDigit(value.to_string()))
        };
        match digits.len() {
            3 => Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            4 => Ok(Self::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Ok(Self::rgb(byte(0)?, byte(1)?, byte(2)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(1)?, byte(2)?, byte(3)?)),
            _ => Err(ColorParseError::InvalidLength(value.to_string())),
        }
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

pub fn default_palette() -> Vec<Color> {
    DEFAULT_PALETTE
        .iter()
        .filter_map(|value| Color::parse_hex(value).ok())
        .collect()
}
