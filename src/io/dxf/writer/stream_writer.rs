//! DXF stream writer trait

use crate::error::Result;
use crate::io::dxf::DxfValue;
use crate::types::Color;

/// Trait for writing DXF code/value pairs
pub trait DxfStreamWriter {
    /// Write a code/value pair with a string value
    fn write_string(&mut self, code: i32, value: &str) -> Result<()>;

    /// Write a code/value pair with an i16 value
    fn write_i16(&mut self, code: i32, value: i16) -> Result<()>;

    /// Write a code/value pair with an i32 value
    fn write_i32(&mut self, code: i32, value: i32) -> Result<()>;

    /// Write a code/value pair with an i64 value
    fn write_i64(&mut self, code: i32, value: i64) -> Result<()>;

    /// Write a code/value pair with a double value
    fn write_double(&mut self, code: i32, value: f64) -> Result<()>;

    /// Write a code/value pair with a boolean value
    fn write_bool(&mut self, code: i32, value: bool) -> Result<()>;

    /// Flush buffered pairs to the underlying sink
    fn flush(&mut self) -> Result<()>;

    /// Write any printable value
    fn write(&mut self, code: i32, value: impl Into<DxfValue>) -> Result<()>
    where
        Self: Sized,
    {
        match value.into() {
            DxfValue::Str(s) => self.write_string(code, &s),
            DxfValue::Bool(b) => self.write_bool(code, b),
            DxfValue::I16(v) => self.write_i16(code, v),
            DxfValue::I32(v) => self.write_i32(code, v),
            DxfValue::I64(v) => self.write_i64(code, v),
            DxfValue::Double(v) => self.write_double(code, v),
        }
    }
}

/// Extension trait for convenient writing operations
pub trait DxfStreamWriterExt: DxfStreamWriter {
    /// Write a color as its palette index; true colors use the nearest entry
    fn write_color_index(&mut self, code: i32, color: Color) -> Result<()> {
        self.write_i16(code, color.approximate_index())
    }

    /// Write the packed layer state value of a true color.
    ///
    /// Palette colors write nothing. Returns whether a pair was written.
    fn write_true_color(&mut self, code: i32, color: Color) -> Result<bool> {
        match color.to_true_color_for_layer_state() {
            Some(packed) => {
                self.write_i32(code, packed)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Write a record boundary
    fn write_boundary(&mut self, record_kind: &str) -> Result<()> {
        self.write_string(0, record_kind)
    }
}

// Auto-implement the extension trait for all stream writers
impl<T: DxfStreamWriter> DxfStreamWriterExt for T {}
