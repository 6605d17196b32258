//! Drawing entities
//!
//! Only hatch pattern definitions are modelled; they are what the `.pat`
//! extractor reads out of a drawing.

pub mod hatch;

pub use hatch::{format_fixed, HatchPattern, HatchPatternLine};
