//! DXF record stream writing

mod stream_writer;
mod text_writer;

pub use stream_writer::{DxfStreamWriter, DxfStreamWriterExt};
pub use text_writer::DxfTextWriter;
