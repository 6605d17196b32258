//! Typed values carried by a group code

/// A value that can be written after a group code
///
/// Writers render every variant deterministically: booleans as `1`/`0`,
/// integers in decimal and doubles with a `.` separator regardless of host
/// locale.
#[derive(Debug, Clone, PartialEq)]
pub enum DxfValue {
    Str(String),
    Bool(bool),
    I16(i16),
    I32(i32),
    I64(i64),
    Double(f64),
}

/// Shortest round-tripping decimal form, always with at least one decimal place
pub(crate) fn format_double(value: f64) -> String {
    if value.is_finite() && value == value.trunc() {
        format!("{:.1}", value)
    } else {
        // Display for f64 prints the shortest string that parses back exactly
        value.to_string()
    }
}

impl From<&str> for DxfValue {
    fn from(v: &str) -> Self {
        DxfValue::Str(v.to_string())
    }
}

impl From<String> for DxfValue {
    fn from(v: String) -> Self {
        DxfValue::Str(v)
    }
}

impl From<&String> for DxfValue {
    fn from(v: &String) -> Self {
        DxfValue::Str(v.clone())
    }
}

impl From<bool> for DxfValue {
    fn from(v: bool) -> Self {
        DxfValue::Bool(v)
    }
}

impl From<i16> for DxfValue {
    fn from(v: i16) -> Self {
        DxfValue::I16(v)
    }
}

impl From<i32> for DxfValue {
    fn from(v: i32) -> Self {
        DxfValue::I32(v)
    }
}

impl From<i64> for DxfValue {
    fn from(v: i64) -> Self {
        DxfValue::I64(v)
    }
}

impl From<f64> for DxfValue {
    fn from(v: f64) -> Self {
        DxfValue::Double(v)
    }
}
