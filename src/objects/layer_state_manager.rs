//! Named collection of layer states

use super::LayerState;
use crate::error::{DxfError, Result};
use crate::io::las::{LasReader, LasWriter};
use crate::tables::Table;
use std::path::Path;

/// Layer states of a drawing, keyed case-insensitively by name
#[derive(Debug, Clone, Default)]
pub struct LayerStateManager {
    states: Table<LayerState>,
}

impl LayerStateManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer state; fails if the name is taken or invalid
    pub fn add(&mut self, state: LayerState) -> Result<()> {
        self.states.add(state)
    }

    pub fn get(&self, name: &str) -> Option<&LayerState> {
        self.states.get(name)
    }

    /// Mutable access to a state. Its name is fixed; rename by adding a
    /// [`LayerState::clone_named`] copy and removing the original.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut LayerState> {
        self.states.get_mut(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<LayerState> {
        self.states.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.states.contains(name)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.states.names()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayerState> {
        self.states.iter()
    }

    /// Read a layer state file and add it. Returns the state's name.
    pub fn import<P: AsRef<Path>>(&mut self, path: P) -> Result<String> {
        let state = LasReader::from_file(path)?.read()?;
        let name = state.name().to_string();
        self.add(state)?;
        Ok(name)
    }

    /// Write the named layer state to a file
    pub fn export<P: AsRef<Path>>(&self, name: &str, path: P) -> Result<()> {
        let state = self
            .get(name)
            .ok_or_else(|| DxfError::NotFound(name.to_string()))?;
        LasWriter::new(state).write_to_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup_case_insensitive() {
        let mut manager = LayerStateManager::new();
        manager.add(LayerState::new("Plan")).unwrap();
        assert!(manager.contains("PLAN"));
        assert_eq!(manager.get("plan").map(|s| s.name()), Some("Plan"));
        assert!(manager.add(LayerState::new("plan")).is_err());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_invalid_names_rejected() {
        let mut manager = LayerStateManager::new();
        assert!(matches!(manager.add(LayerState::new("")), Err(DxfError::InvalidName(_))));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_edit_keeps_lookup_key() {
        let mut manager = LayerStateManager::new();
        manager.add(LayerState::new("Plan")).unwrap();

        let state = manager.get_mut("plan").unwrap();
        state.description = "edited".to_string();
        state.set_current_layer("Walls").unwrap();

        assert_eq!(manager.get("PLAN").map(|s| s.description.as_str()), Some("edited"));
        assert_eq!(manager.names().collect::<Vec<_>>(), vec!["Plan"]);
    }

    #[test]
    fn test_rename_through_copy() {
        let mut manager = LayerStateManager::new();
        manager.add(LayerState::new("Plan")).unwrap();

        let renamed = manager.get("Plan").unwrap().clone_named("Section");
        manager.add(renamed).unwrap();
        manager.remove("Plan");

        assert!(!manager.contains("Plan"));
        assert_eq!(manager.get("section").map(|s| s.name()), Some("Section"));
    }

    #[test]
    fn test_remove() {
        let mut manager = LayerStateManager::new();
        manager.add(LayerState::new("A")).unwrap();
        manager.add(LayerState::new("B")).unwrap();
        assert!(manager.remove("a").is_some());
        assert_eq!(manager.names().collect::<Vec<_>>(), vec!["B"]);
    }

    #[test]
    fn test_export_unknown_state() {
        let manager = LayerStateManager::new();
        let err = manager.export("Missing", "unused.las").unwrap_err();
        assert!(matches!(err, DxfError::NotFound(_)));
    }
}
