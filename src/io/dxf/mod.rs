//! Group-code record streams (the DXF tagged text encoding)
//!
//! Shared by the layer state files in [`crate::io::las`] and the hatch
//! pattern extractor in [`crate::io::pat`].

mod dxf_code;
mod group_code_value;
mod reader;
mod writer;

pub use dxf_code::DxfCode;
pub use group_code_value::DxfValue;
pub use reader::{CodeValueReader, DxfCodePair, DxfStreamReader, DxfTextReader};
pub use writer::{DxfStreamWriter, DxfStreamWriterExt, DxfTextWriter};
