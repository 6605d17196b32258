//! # dxf-records
//!
//! Reading and writing the group-code record streams used by DXF-family CAD
//! files, with two consumers built on the shared codec:
//!
//! - layer state files (`.las`): named snapshots of per-layer overrides
//! - hatch pattern extraction: a pattern definition read out of a drawing and
//!   re-emitted as `.pat` text
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dxf_records::{LayerState, PatFetcher};
//!
//! let mut state = LayerState::with_layer_names("Plan", ["0", "Walls"]);
//! state.description = "ground floor".to_string();
//! assert!(state.save("plan.las"));
//!
//! let loaded = LayerState::load("plan.las").expect("valid layer state file");
//! assert_eq!(loaded.properties().len(), 2);
//!
//! PatFetcher::new().fetch_pat_file("drawing.dxf", "brick.pat", "BRICK", "MYBRICK")?;
//! # Ok::<(), dxf_records::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`io::dxf`] - the code/value cursor and writer every consumer shares
//! - [`objects`] - `LayerState` and its property map
//! - [`io::las`] - layer state persistence
//! - [`io::pat`] - hatch pattern extraction
//! - [`document`] - the layer and line type tables attached states are
//!   validated against

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod io;
pub mod objects;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use error::{DxfError, ErrorKind, Result};
pub use types::{Color, LineWeight, Transparency, Vector2};

pub use entities::{HatchPattern, HatchPatternLine};
pub use objects::{
    LayerPropertiesFlags, LayerState, LayerStateManager, LayerStateProperties, LayerStateProperty,
};
pub use tables::{Layer, LayerRegistry, LineType, Table, TableEntry};

pub use document::{CadDocument, LayerStateEditor};

pub use io::{LasReader, LasWriter, PatFetchConfiguration, PatFetcher};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_document_attaches_layer_state() {
        let mut doc = CadDocument::new();
        doc.add_layer_state(LayerState::with_layer_names("Plan", ["0"]))
            .unwrap();
        assert!(doc.layer_states().contains("plan"));
    }
}
