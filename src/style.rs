use crate::color::{Rgb, parse_hex};
use crate::error::ColorError;

pub const BACKGROUND_COLOR: &str = "181818";
pub const GRID_COLOR: &str = "3C3C3C";
pub const AGENT_COLOR: &str = "DA2C38";

/// The three frame colors, parsed once before anything is drawn. Rendering
/// only accepts a `Palette`, never raw hex strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: [f32; 4],
    pub grid: [f32; 4],
    pub agent: [f32; 4],
}

impl Palette {
    pub fn from_hex(background: &str, grid: &str, agent: &str) -> Result<Self, ColorError> {
        Ok(Palette {
            background: parse_hex(background).map(Rgb::to_rgba)?,
            grid: parse_hex(grid).map(Rgb::to_rgba)?,
            agent: parse_hex(agent).map(Rgb::to_rgba)?,
        })
    }

    pub fn load() -> Result<Self, ColorError> {
        Self::from_hex(BACKGROUND_COLOR, GRID_COLOR, AGENT_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_palette_is_valid() {
        let palette = Palette::load().unwrap();
        assert_eq!(palette.grid, parse_hex("3C3C3C").unwrap().to_rgba());
        assert_eq!(palette.background[3], 1.0);
    }

    #[test]
    fn any_bad_constant_fails_the_whole_palette() {
        assert!(Palette::from_hex("XX0000", GRID_COLOR, AGENT_COLOR).is_err());
        assert!(Palette::from_hex(BACKGROUND_COLOR, "3C3C", AGENT_COLOR).is_err());
        assert!(Palette::from_hex(BACKGROUND_COLOR, GRID_COLOR, "DA2C3g").is_err());
    }
}
