//! Non-graphical objects
//!
//! Layer states are stored in the drawing's named object dictionary rather
//! than in a symbol table, so they live here next to their manager.

mod layer_state;
mod layer_state_manager;

pub use layer_state::{
    registry_accepts, LayerPropertiesFlags, LayerState, LayerStateProperties, LayerStateProperty,
    PropertyValidator,
};
pub use layer_state_manager::LayerStateManager;
