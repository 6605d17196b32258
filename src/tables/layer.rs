//! Layer table entry

use super::linetype::CONTINUOUS;
use super::TableEntry;
use crate::types::{Color, LineWeight, Transparency};

/// Name of the layer every drawing contains
pub const DEFAULT_LAYER: &str = "0";

/// Layer flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerFlags {
    /// Layer is frozen
    pub frozen: bool,
    /// Layer is locked
    pub locked: bool,
    /// Layer is off (invisible)
    pub off: bool,
}

/// A layer table entry
#[derive(Debug, Clone)]
pub struct Layer {
    /// Layer name
    pub name: String,
    /// Layer flags
    pub flags: LayerFlags,
    /// Layer color
    pub color: Color,
    /// Line type name
    pub line_type: String,
    /// Line weight
    pub line_weight: LineWeight,
    /// Layer transparency
    pub transparency: Transparency,
    /// Is this layer plottable?
    pub is_plottable: bool,
}

impl Layer {
    /// Create a new layer with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            name: name.into(),
            flags: LayerFlags::default(),
            color: Color::WHITE,
            line_type: CONTINUOUS.to_string(),
            line_weight: LineWeight::Default,
            transparency: Transparency::OPAQUE,
            is_plottable: true,
        }
    }

    /// Create the standard "0" layer
    pub fn layer_0() -> Self {
        Self::new(DEFAULT_LAYER)
    }

    /// Create a layer with a specific color
    pub fn with_color(name: impl Into<String>, color: Color) -> Self {
        Layer {
            color,
            ..Self::new(name)
        }
    }

    /// Check if the layer is frozen
    pub fn is_frozen(&self) -> bool {
        self.flags.frozen
    }

    /// Check if the layer is locked
    pub fn is_locked(&self) -> bool {
        self.flags.locked
    }

    /// Check if the layer is visible (turned on)
    pub fn is_visible(&self) -> bool {
        !self.flags.off
    }
}

impl TableEntry for Layer {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_standard(&self) -> bool {
        self.name == DEFAULT_LAYER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_defaults() {
        let layer = Layer::new("Walls");
        assert_eq!(layer.color, Color::WHITE);
        assert_eq!(layer.line_type, "Continuous");
        assert!(layer.is_visible());
        assert!(layer.is_plottable);
        assert!(!layer.is_standard());
    }

    #[test]
    fn test_layer_0_is_standard() {
        assert!(Layer::layer_0().is_standard());
    }

    #[test]
    fn test_layer_flags() {
        let mut layer = Layer::with_color("Doors", Color::RED);
        layer.flags.off = true;
        layer.flags.frozen = true;
        assert!(!layer.is_visible());
        assert!(layer.is_frozen());
        assert!(!layer.is_locked());
    }
}
