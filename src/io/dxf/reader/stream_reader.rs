//! DXF stream reader trait and common types

use crate::error::Result;
use crate::io::dxf::DxfCode;

/// A DXF code/value pair
#[derive(Debug, Clone, PartialEq)]
pub struct DxfCodePair {
    /// The DXF group code
    pub code: i32,

    /// The DXF code enum
    pub dxf_code: DxfCode,

    /// String representation of the value
    pub value_string: String,
}

impl DxfCodePair {
    /// Create a new code/value pair
    pub fn new(code: i32, value_string: impl Into<String>) -> Self {
        Self {
            code,
            dxf_code: DxfCode::from_i32(code),
            value_string: value_string.into(),
        }
    }

    /// Get value as string
    pub fn as_string(&self) -> &str {
        &self.value_string
    }

    /// Get value as i16
    pub fn as_i16(&self) -> Option<i16> {
        self.value_string.trim().parse::<i16>().ok()
    }

    /// Get value as i32
    pub fn as_i32(&self) -> Option<i32> {
        self.value_string.trim().parse::<i32>().ok()
    }

    /// Get value as double
    pub fn as_double(&self) -> Option<f64> {
        self.value_string.trim().parse::<f64>().ok()
    }

    /// Get value as boolean (any non-zero integer is true)
    pub fn as_bool(&self) -> Option<bool> {
        self.value_string.trim().parse::<i16>().ok().map(|v| v != 0)
    }
}

/// Trait for reading DXF code/value pairs from a stream
pub trait DxfStreamReader {
    /// Read the next code/value pair, `None` at end of stream
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>>;

    /// Peek at the next code without consuming it
    fn peek_code(&mut self) -> Result<Option<i32>>;

    /// Number of physical lines consumed so far
    fn line_number(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_typed_values() {
        let pair = DxfCodePair::new(62, " 7 ");
        assert_eq!(pair.dxf_code, DxfCode::Color);
        assert_eq!(pair.as_i16(), Some(7));
        assert_eq!(pair.as_i32(), Some(7));
        assert_eq!(pair.as_double(), Some(7.0));
    }

    #[test]
    fn test_pair_bool() {
        assert_eq!(DxfCodePair::new(290, "1").as_bool(), Some(true));
        assert_eq!(DxfCodePair::new(290, "0").as_bool(), Some(false));
        assert_eq!(DxfCodePair::new(290, "yes").as_bool(), None);
    }

    #[test]
    fn test_pair_out_of_range() {
        let pair = DxfCodePair::new(62, "70000");
        assert_eq!(pair.as_i16(), None);
        assert_eq!(pair.as_i32(), Some(70000));
    }
}
