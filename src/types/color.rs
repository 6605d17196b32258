//! Color representation for layer overrides

use std::fmt;

/// High byte marking a true color value inside a layer state file
const LAYER_STATE_TRUE_COLOR_FLAG: u32 = 0xC2;

/// Represents a color in AutoCAD
///
/// Colors can be represented in multiple ways:
/// - By index (0-256): AutoCAD Color Index (ACI)
/// - By RGB values: True color
/// - By layer: Use the layer's color
/// - By block: Use the block's color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Color by layer (index 256)
    #[default]
    ByLayer,
    /// Color by block (index 0)
    ByBlock,
    /// AutoCAD Color Index (1-255)
    Index(u8),
    /// True color with RGB values
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Create a color from an AutoCAD Color Index
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => Color::ByBlock,
            256 => Color::ByLayer,
            1..=255 => Color::Index(index as u8),
            _ if index < 0 => Color::Index((-(index as i32)).min(255) as u8), // Negative means layer is off
            _ => Color::Index(7),
        }
    }

    /// Create a true color from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create a true color from a packed `0x??RRGGBB` value.
    ///
    /// The high byte carries flags in some contexts and is ignored.
    pub fn from_true_color(value: i32) -> Self {
        let value = value as u32;
        Color::Rgb {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Packed `0x00RRGGBB` value (true colors only)
    pub fn to_true_color(&self) -> Option<i32> {
        self.rgb()
            .map(|(r, g, b)| ((r as i32) << 16) | ((g as i32) << 8) | (b as i32))
    }

    /// Packed value as stored by layer state files: `0xC2RRGGBB`
    pub fn to_true_color_for_layer_state(&self) -> Option<i32> {
        self.to_true_color()
            .map(|rgb| ((LAYER_STATE_TRUE_COLOR_FLAG << 24) | rgb as u32) as i32)
    }

    /// Check if this color was defined as a true color
    pub fn is_true_color(&self) -> bool {
        matches!(self, Color::Rgb { .. })
    }

    /// Get the color index (if applicable)
    pub fn index(&self) -> Option<u16> {
        match self {
            Color::ByBlock => Some(0),
            Color::Index(i) => Some(*i as u16),
            Color::ByLayer => Some(256),
            Color::Rgb { .. } => None,
        }
    }

    /// Get RGB values (if applicable)
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Rgb { r, g, b } => Some((*r, *g, *b)),
            _ => None,
        }
    }

    /// Common color constants
    pub const RED: Color = Color::Index(1);
    pub const YELLOW: Color = Color::Index(2);
    pub const GREEN: Color = Color::Index(3);
    pub const CYAN: Color = Color::Index(4);
    pub const BLUE: Color = Color::Index(5);
    pub const MAGENTA: Color = Color::Index(6);
    pub const WHITE: Color = Color::Index(7);

    /// Approximate a true color to the nearest ACI index
    pub fn approximate_index(&self) -> i16 {
        match self {
            Color::ByBlock => 0,
            Color::ByLayer => 256,
            Color::Index(i) => *i as i16,
            Color::Rgb { r, g, b } => {
                // Rough hue bucketing, not a palette lookup
                let brightness = ((*r as u16) + (*g as u16) + (*b as u16)) / 3;
                if brightness < 32 {
                    8
                } else if brightness > 224 {
                    7
                } else if *r > *g && *r > *b {
                    1
                } else if *g > *r && *g > *b {
                    3
                } else if *b > *r && *b > *g {
                    5
                } else if *r > 128 && *g > 128 {
                    2
                } else if *g > 128 && *b > 128 {
                    4
                } else if *r > 128 && *b > 128 {
                    6
                } else {
                    7
                }
            }
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::ByBlock => write!(f, "ByBlock"),
            Color::Index(i) => write!(f, "Index({})", i),
            Color::Rgb { r, g, b } => write!(f, "RGB({}, {}, {})", r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_index() {
        assert_eq!(Color::from_index(0), Color::ByBlock);
        assert_eq!(Color::from_index(256), Color::ByLayer);
        assert_eq!(Color::from_index(1), Color::Index(1));
        assert_eq!(Color::from_index(-3), Color::Index(3));
    }

    #[test]
    fn test_true_color_packing() {
        let color = Color::from_rgb(0x12, 0x34, 0x56);
        assert_eq!(color.to_true_color(), Some(0x123456));
        assert_eq!(Color::from_true_color(0x123456), color);
        assert!(color.is_true_color());
        assert!(!Color::RED.is_true_color());
        assert_eq!(Color::RED.to_true_color(), None);
    }

    #[test]
    fn test_layer_state_true_color() {
        let color = Color::from_rgb(255, 128, 64);
        let packed = color.to_true_color_for_layer_state().unwrap();
        assert_eq!(packed as u32, 0xC2FF8040);
        assert_eq!(Color::from_true_color(packed), color);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::ByLayer.to_string(), "ByLayer");
        assert_eq!(Color::from_rgb(255, 0, 0).to_string(), "RGB(255, 0, 0)");
    }

    #[test]
    fn test_approximate_index() {
        assert_eq!(Color::from_rgb(250, 10, 10).approximate_index(), 1);
        assert_eq!(Color::WHITE.approximate_index(), 7);
        assert_eq!(Color::ByLayer.approximate_index(), 256);
    }
}
