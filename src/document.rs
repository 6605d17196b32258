//! CAD document structure
//!
//! The document owns the layer and line type tables that layer states refer
//! to. States held by a document are only ever changed through checks against
//! those tables.

use crate::error::{DxfError, Result};
use crate::io::las::LasReader;
use crate::objects::{registry_accepts, LayerState, LayerStateManager, LayerStateProperty};
use crate::tables::*;
use std::path::Path;

/// A CAD document holding the tables layer states are validated against
#[derive(Debug, Clone)]
pub struct CadDocument {
    /// Layer table
    pub layers: Table<Layer>,

    /// Line type table
    pub line_types: Table<LineType>,

    /// Layer states, mutable only through [`LayerStateEditor`]
    layer_states: LayerStateManager,
}

impl CadDocument {
    /// Create a new document with layer "0" and the Continuous line type
    pub fn new() -> Self {
        let mut doc = CadDocument {
            layers: Table::new(),
            line_types: Table::new(),
            layer_states: LayerStateManager::new(),
        };
        doc.layers.add(Layer::layer_0()).ok();
        doc.line_types.add(LineType::continuous()).ok();
        doc
    }

    /// Lookups against this document's tables
    pub fn registry(&self) -> TableRegistry<'_> {
        TableRegistry {
            layers: &self.layers,
            line_types: &self.line_types,
        }
    }

    /// All layer states
    pub fn layer_states(&self) -> &LayerStateManager {
        &self.layer_states
    }

    pub fn layer_state(&self, name: &str) -> Option<&LayerState> {
        self.layer_states.get(name)
    }

    /// Attach a layer state.
    ///
    /// Properties naming a layer or line type this document does not have
    /// are dropped. Fails if a state with the same name already exists.
    pub fn add_layer_state(&mut self, mut state: LayerState) -> Result<()> {
        let registry = self.registry();
        let rejected: Vec<String> = state
            .properties()
            .iter()
            .filter(|p| !registry_accepts(&registry, p))
            .map(|p| p.name().to_string())
            .collect();
        for layer in &rejected {
            tracing::debug!(state = state.name(), layer = %layer, "property refers to unknown layer or line type");
            state.properties_mut().remove(layer);
        }
        self.layer_states.add(state)
    }

    /// Edit an attached layer state
    pub fn layer_state_mut(&mut self, name: &str) -> Option<LayerStateEditor<'_>> {
        let state = self.layer_states.get_mut(name)?;
        Some(LayerStateEditor {
            state,
            registry: TableRegistry {
                layers: &self.layers,
                line_types: &self.line_types,
            },
        })
    }

    /// Detach a layer state
    pub fn remove_layer_state(&mut self, name: &str) -> Option<LayerState> {
        self.layer_states.remove(name)
    }

    /// Read a layer state file and attach it. Returns the state's name.
    pub fn import_layer_state<P: AsRef<Path>>(&mut self, path: P) -> Result<String> {
        let state = LasReader::from_file(path)?.read()?;
        let name = state.name().to_string();
        self.add_layer_state(state)?;
        Ok(name)
    }

    /// Write an attached layer state to a file
    pub fn export_layer_state<P: AsRef<Path>>(&self, name: &str, path: P) -> Result<()> {
        self.layer_states.export(name, path)
    }
}

impl Default for CadDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerRegistry for CadDocument {
    fn contains_layer(&self, name: &str) -> bool {
        self.layers.contains(name)
    }

    fn contains_linetype(&self, name: &str) -> bool {
        self.line_types.contains(name)
    }
}

/// Borrowed view of a document's layer and line type tables
#[derive(Debug, Clone, Copy)]
pub struct TableRegistry<'a> {
    layers: &'a Table<Layer>,
    line_types: &'a Table<LineType>,
}

impl LayerRegistry for TableRegistry<'_> {
    fn contains_layer(&self, name: &str) -> bool {
        self.layers.contains(name)
    }

    fn contains_linetype(&self, name: &str) -> bool {
        self.line_types.contains(name)
    }
}

/// Mutable access to a layer state attached to a document
pub struct LayerStateEditor<'a> {
    state: &'a mut LayerState,
    registry: TableRegistry<'a>,
}

impl LayerStateEditor<'_> {
    pub fn state(&self) -> &LayerState {
        self.state
    }

    /// Add a property if the document has its layer and line type
    pub fn add_property(&mut self, property: LayerStateProperty) -> bool {
        self.state.add_property_checked(property, &self.registry)
    }

    /// Mutable access to an existing property's attributes
    pub fn property_mut(&mut self, layer: &str) -> Option<&mut LayerStateProperty> {
        self.state.properties_mut().get_mut(layer)
    }

    pub fn remove_property(&mut self, layer: &str) -> Option<LayerStateProperty> {
        self.state.properties_mut().remove(layer)
    }

    /// Set the current layer; it must exist in the document
    pub fn set_current_layer(&mut self, layer: &str) -> Result<()> {
        if !self.registry.contains_layer(layer) {
            return Err(DxfError::NotFound(layer.to_string()));
        }
        self.state.set_current_layer(layer)
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.state.description = description.into();
    }

    pub fn set_paper_space(&mut self, paper_space: bool) {
        self.state.paper_space = paper_space;
    }
}
