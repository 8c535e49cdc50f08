//! Slice color palette.

use serde::{Deserialize, Serialize};

/// One of the five colors a wheel slice can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SliceColor {
    #[default]
    Coral,
    Zest,
    White,
    Ocean,
    Charcoal,
}

/// Palette in assignment priority order.
pub const PALETTE: [SliceColor; 5] = [
    SliceColor::Coral,
    SliceColor::Zest,
    SliceColor::White,
    SliceColor::Ocean,
    SliceColor::Charcoal,
];

impl SliceColor {
    /// RGB value of this color.
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            SliceColor::Coral => [0xFF, 0x6F, 0x61],
            SliceColor::Zest => [0xF4, 0xD0, 0x3F],
            SliceColor::White => [0xFF, 0xFF, 0xFF],
            SliceColor::Ocean => [0x0F, 0x4C, 0x81],
            SliceColor::Charcoal => [0x33, 0x33, 0x33],
        }
    }

    /// CSS-style hex string, e.g. `#FF6F61`.
    pub fn hex(&self) -> String {
        let [r, g, b] = self.rgb();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Get the display name for this color.
    pub fn name(&self) -> &'static str {
        match self {
            SliceColor::Coral => "coral",
            SliceColor::Zest => "zest",
            SliceColor::White => "white",
            SliceColor::Ocean => "ocean",
            SliceColor::Charcoal => "charcoal",
        }
    }

    /// Whether labels drawn on this color should be dark.
    pub fn is_light(&self) -> bool {
        matches!(
            self,
            SliceColor::Coral | SliceColor::Zest | SliceColor::White
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_strings() {
        assert_eq!(SliceColor::Coral.hex(), "#FF6F61");
        assert_eq!(SliceColor::Ocean.hex(), "#0F4C81");
        assert_eq!(SliceColor::Charcoal.hex(), "#333333");
    }

    #[test]
    fn test_light_colors() {
        let light: Vec<_> = PALETTE.iter().filter(|c| c.is_light()).collect();
        assert_eq!(light.len(), 3);
        assert!(!SliceColor::Ocean.is_light());
        assert!(!SliceColor::Charcoal.is_light());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&SliceColor::Zest).unwrap();
        assert_eq!(json, "\"zest\"");
    }
}
