//! Layer state objects
//!
//! A layer state is a named snapshot of per-layer overrides (visibility,
//! color, line type, line weight, transparency) that can be restored
//! independently of the layers' live settings.

use crate::error::{DxfError, Result};
use crate::io::las::{LasReader, LasWriter};
use crate::tables::layer::DEFAULT_LAYER;
use crate::tables::linetype::CONTINUOUS;
use crate::tables::{Layer, LayerRegistry, TableEntry};
use crate::types::{Color, LineWeight, Transparency};
use bitflags::bitflags;
use indexmap::IndexMap;
use std::io::{BufRead, Write};
use std::path::Path;

bitflags! {
    /// Visibility and plot flags stored per layer (group code 90).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LayerPropertiesFlags: i32 {
        /// Layer is turned off.
        const HIDDEN = 1;
        /// Layer is frozen.
        const FROZEN = 2;
        /// Layer is locked.
        const LOCKED = 4;
        /// Layer is plotted.
        const PLOT = 8;
        /// Layer is frozen in new viewports.
        const NEW_VP_FROZEN = 16;
    }
}

impl Default for LayerPropertiesFlags {
    fn default() -> Self {
        LayerPropertiesFlags::PLOT
    }
}

/// Overrides recorded for one layer
#[derive(Debug, Clone, PartialEq)]
pub struct LayerStateProperty {
    name: String,
    /// Visibility and plot flags
    pub flags: LayerPropertiesFlags,
    /// Layer color; a true color adds its own chunk when saved
    pub color: Color,
    /// Line weight
    pub line_weight: LineWeight,
    /// Line type name
    pub linetype_name: String,
    /// Transparency (opaque is written as alpha 0)
    pub transparency: Transparency,
}

impl LayerStateProperty {
    /// Default overrides for the layer `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: LayerPropertiesFlags::default(),
            color: Color::WHITE,
            line_weight: LineWeight::Default,
            linetype_name: CONTINUOUS.to_string(),
            transparency: Transparency::OPAQUE,
        }
    }

    /// Snapshot the current settings of a layer
    pub fn from_layer(layer: &Layer) -> Self {
        let mut flags = LayerPropertiesFlags::empty();
        flags.set(LayerPropertiesFlags::HIDDEN, !layer.is_visible());
        flags.set(LayerPropertiesFlags::FROZEN, layer.is_frozen());
        flags.set(LayerPropertiesFlags::LOCKED, layer.is_locked());
        flags.set(LayerPropertiesFlags::PLOT, layer.is_plottable);

        Self {
            name: layer.name.clone(),
            flags,
            color: layer.color,
            line_weight: layer.line_weight,
            linetype_name: layer.line_type.clone(),
            transparency: layer.transparency,
        }
    }

    /// Name of the layer these overrides apply to
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Gate deciding whether a property may enter a [`LayerStateProperties`]
pub type PropertyValidator<'a> = &'a dyn Fn(&LayerStateProperty) -> bool;

/// Ordered map of layer name to [`LayerStateProperty`]
///
/// Keys are exact layer names. An insert never replaces an existing entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerStateProperties {
    entries: IndexMap<String, LayerStateProperty>,
}

impl LayerStateProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property unless its layer is already present.
    ///
    /// Returns `true` if the property was added.
    pub fn insert(&mut self, property: LayerStateProperty) -> bool {
        self.insert_with(property, None)
    }

    /// Insert a property if `validator` (when given) accepts it and its
    /// layer is not already present.
    pub fn insert_with(
        &mut self,
        property: LayerStateProperty,
        validator: Option<PropertyValidator<'_>>,
    ) -> bool {
        if self.entries.contains_key(property.name()) {
            return false;
        }
        if let Some(validate) = validator {
            if !validate(&property) {
                tracing::debug!(layer = property.name(), "layer state property rejected by registry");
                return false;
            }
        }
        self.entries.insert(property.name.clone(), property);
        true
    }

    pub fn get(&self, name: &str) -> Option<&LayerStateProperty> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut LayerStateProperty> {
        self.entries.get_mut(name)
    }

    /// Remove a property, keeping the order of the rest
    pub fn remove(&mut self, name: &str) -> Option<LayerStateProperty> {
        self.entries.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &LayerStateProperty> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a LayerStateProperties {
    type Item = &'a LayerStateProperty;
    type IntoIter = indexmap::map::Values<'a, String, LayerStateProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

/// Accept a property only if its layer and line type exist in `registry`
pub fn registry_accepts(registry: &dyn LayerRegistry, property: &LayerStateProperty) -> bool {
    registry.contains_layer(property.name()) && registry.contains_linetype(&property.linetype_name)
}

/// A named snapshot of layer overrides
#[derive(Debug, Clone, PartialEq)]
pub struct LayerState {
    name: String,
    /// Free text description
    pub description: String,
    current_layer: String,
    /// Whether the state belongs to a paper space layout
    pub paper_space: bool,
    properties: LayerStateProperties,
}

impl LayerState {
    /// Create an empty layer state
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            current_layer: DEFAULT_LAYER.to_string(),
            paper_space: false,
            properties: LayerStateProperties::new(),
        }
    }

    /// Create a layer state with default overrides for each named layer
    pub fn with_layer_names<I, S>(name: impl Into<String>, layer_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self::new(name);
        for layer_name in layer_names {
            state.properties.insert(LayerStateProperty::new(layer_name));
        }
        state
    }

    /// Create a layer state recording the current settings of `layers`
    pub fn from_layers<'a>(name: impl Into<String>, layers: impl IntoIterator<Item = &'a Layer>) -> Self {
        let mut state = Self::new(name);
        for layer in layers {
            state.properties.insert(LayerStateProperty::from_layer(layer));
        }
        state
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the layer made current when the state is restored
    pub fn current_layer(&self) -> &str {
        &self.current_layer
    }

    /// Set the current layer; the name may not be empty
    pub fn set_current_layer(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(DxfError::InvalidName(name));
        }
        self.current_layer = name;
        Ok(())
    }

    pub fn properties(&self) -> &LayerStateProperties {
        &self.properties
    }

    /// Unvalidated access to the property map, for states not owned by a drawing
    pub fn properties_mut(&mut self) -> &mut LayerStateProperties {
        &mut self.properties
    }

    /// Add a property without registry checks
    pub fn add_property(&mut self, property: LayerStateProperty) -> bool {
        self.properties.insert(property)
    }

    /// Add a property if its layer and line type exist in `registry`
    pub fn add_property_checked(&mut self, property: LayerStateProperty, registry: &dyn LayerRegistry) -> bool {
        let validate = |p: &LayerStateProperty| registry_accepts(registry, p);
        self.properties.insert_with(property, Some(&validate))
    }

    /// Deep copy under a new name
    pub fn clone_named(&self, new_name: impl Into<String>) -> Self {
        Self {
            name: new_name.into(),
            ..self.clone()
        }
    }
}

/// Persistence.
///
/// `read_from`/`write_to` report the failure; `load*` and `save*` collapse
/// every failure to `None`/`false` after logging it.
impl LayerState {
    /// Read a layer state from a group-code stream
    pub fn read_from<R: BufRead>(reader: R) -> Result<LayerState> {
        LasReader::from_reader(reader).read()
    }

    /// Write this layer state as a group-code stream
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        LasWriter::new(self).write_to_writer(writer)
    }

    /// Load a layer state from a stream, or `None` if it cannot be read
    pub fn load_from<R: BufRead>(reader: R) -> Option<LayerState> {
        match Self::read_from(reader) {
            Ok(state) => Some(state),
            Err(err) => {
                tracing::warn!(kind = ?err.kind(), "layer state not loaded: {}", err);
                None
            }
        }
    }

    /// Save to a stream; `false` if anything failed
    pub fn save_to<W: Write>(&self, writer: W) -> bool {
        match self.write_to(writer) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(state = self.name(), kind = ?err.kind(), "layer state not saved: {}", err);
                false
            }
        }
    }

    /// Load a layer state file. The file is closed on every path.
    pub fn load<P: AsRef<Path>>(path: P) -> Option<LayerState> {
        let path = path.as_ref();
        match LasReader::from_file(path).and_then(LasReader::read) {
            Ok(state) => {
                tracing::info!(path = %path.display(), state = state.name(), "layer state loaded");
                Some(state)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), kind = ?err.kind(), "layer state not loaded: {}", err);
                None
            }
        }
    }

    /// Save to a file, creating or truncating it.
    ///
    /// A failed save may leave a partial file behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        match LasWriter::new(self).write_to_file(path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), state = self.name(), "layer state saved");
                true
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), kind = ?err.kind(), "layer state not saved: {}", err);
                false
            }
        }
    }
}

impl TableEntry for LayerState {
    fn name(&self) -> &str {
        &self.name
    }
}
