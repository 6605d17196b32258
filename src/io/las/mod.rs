//! Layer state files (`.las`)
//!
//! A layer state file is a group-code stream holding exactly one record:
//!
//! ```text
//!   0 LAYERSTATEDICTIONARY
//!   0 LAYERSTATE
//!   1 <name>           91 2047 (reserved)
//! 301 <description>   290 <paper space>   302 <current layer>
//!   8 <layer>  90 <flags>  62 <color>  370 <lineweight>
//!   6 <linetype>  440 <alpha>  [92 <true color>]
//!   ...
//! ```
//!
//! Each property sub-record starts at code 8 and runs until the next code 8,
//! a code 0, or the end of the stream.

mod reader;
mod writer;

pub use reader::LasReader;
pub use writer::LasWriter;

/// Record kind of the outer dictionary boundary
pub const LAYER_STATE_DICTIONARY: &str = "LAYERSTATEDICTIONARY";

/// Record kind of the layer state boundary
pub const LAYER_STATE: &str = "LAYERSTATE";

/// Value written for group code 91. Its meaning is unknown; readers skip it.
pub const RESERVED_FLAGS: i32 = 2047;
