use crate::error::ColorError;

pub const OPAQUE: u8 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Normalized `[r, g, b, a]` as piston expects, alpha always opaque.
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            OPAQUE as f32 / 255.0,
        ]
    }
}

fn hex_digit(digit: char, index: usize) -> Result<u8, ColorError> {
    digit
        .to_digit(16)
        .map(|v| v as u8)
        .ok_or(ColorError::InvalidDigit { digit, index })
}

/// Parses `RRGGBB` (case insensitive, no `#` prefix).
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    let digits: Vec<char> = hex.chars().collect();
    if digits.len() != 6 {
        return Err(ColorError::Length(digits.len()));
    }

    let byte = |at: usize| -> Result<u8, ColorError> {
        Ok(hex_digit(digits[at], at)? * 0x10 + hex_digit(digits[at + 1], at + 1)?)
    };

    Ok(Rgb {
        r: byte(0)?,
        g: byte(2)?,
        b: byte(4)?,
    })
}
