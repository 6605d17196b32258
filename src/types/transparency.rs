//! Transparency representation for layer overrides

use std::fmt;

/// Type byte of a packed alpha value that carries an explicit alpha
const ALPHA_TYPE_EXPLICIT: u32 = 0x02;

/// Represents transparency in AutoCAD
///
/// The stored amount runs from 0 (fully opaque) to 255 (fully transparent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Transparency(u8);

impl Transparency {
    /// Fully opaque (0% transparent)
    pub const OPAQUE: Transparency = Transparency(0);

    /// Fully transparent (100% transparent)
    pub const TRANSPARENT: Transparency = Transparency(255);

    /// Create a new transparency from an amount (0-255)
    pub const fn new(amount: u8) -> Self {
        Transparency(amount)
    }

    /// Create transparency from a fraction (0.0 = opaque, 1.0 = transparent)
    pub fn from_percent(percent: f64) -> Self {
        Transparency((percent.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Create transparency from a packed alpha value (group code 440).
    ///
    /// The high byte is the value type:
    /// - 0x02 = explicit alpha in the low byte (255 = opaque)
    /// - 0x01 = by block
    /// - anything else = by layer
    pub fn from_alpha_value(value: i32) -> Self {
        let value = value as u32;
        match value >> 24 {
            ALPHA_TYPE_EXPLICIT => Transparency(255 - (value & 0xFF) as u8),
            // by block and by layer both resolve to opaque here
            _ => Transparency::OPAQUE,
        }
    }

    /// Convert to a packed alpha value (group code 440).
    ///
    /// Opaque maps to 0, every other amount to an explicit alpha.
    pub fn to_alpha_value(&self) -> i32 {
        if self.0 == 0 {
            0
        } else {
            ((ALPHA_TYPE_EXPLICIT << 24) | (255 - self.0) as u32) as i32
        }
    }

    /// Get the raw amount (0-255)
    pub const fn amount(&self) -> u8 {
        self.0
    }

    /// Get transparency as a fraction (0.0 = opaque, 1.0 = transparent)
    pub fn as_percent(&self) -> f64 {
        self.0 as f64 / 255.0
    }

    /// Check if fully opaque
    pub const fn is_opaque(&self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for Transparency {
    fn from(amount: u8) -> Self {
        Transparency(amount)
    }
}

impl From<Transparency> for u8 {
    fn from(transparency: Transparency) -> Self {
        transparency.0
    }
}

impl fmt::Display for Transparency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.as_percent() * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_opaque_alpha_is_zero() {
        assert_eq!(Transparency::OPAQUE.to_alpha_value(), 0);
        assert_eq!(Transparency::from_alpha_value(0), Transparency::OPAQUE);
    }

    #[test]
    fn test_explicit_alpha() {
        // 0x020000FF is an opaque explicit alpha
        assert_eq!(Transparency::new(255).to_alpha_value(), 0x0200_0000);
        assert_eq!(Transparency::new(1).to_alpha_value(), 0x0200_00FE);
        assert_eq!(Transparency::from_alpha_value(0x0200_00FF), Transparency::OPAQUE);
        assert_eq!(Transparency::from_alpha_value(0x0200_0080), Transparency::new(127));
    }

    #[test]
    fn test_by_block_alpha() {
        assert_eq!(Transparency::from_alpha_value(0x0100_0000), Transparency::OPAQUE);
    }

    #[test]
    fn test_transparency_from_percent() {
        assert_eq!(Transparency::from_percent(0.0).amount(), 0);
        assert_eq!(Transparency::from_percent(1.0).amount(), 255);
        assert_eq!(Transparency::from_percent(0.5).amount(), 128);
        assert_eq!(Transparency::from_percent(7.0), Transparency::TRANSPARENT);
    }

    #[test]
    fn test_transparency_display() {
        assert_eq!(Transparency::OPAQUE.to_string(), "0.0%");
        assert_eq!(Transparency::TRANSPARENT.to_string(), "100.0%");
    }

    proptest! {
        #[test]
        fn alpha_value_round_trips(amount in any::<u8>()) {
            let t = Transparency::new(amount);
            prop_assert_eq!(Transparency::from_alpha_value(t.to_alpha_value()), t);
        }
    }
}
