//! DXF group codes
//!
//! Group codes define the meaning of the value that follows in a record
//! stream. Only the codes read or written by this crate are named; every
//! other code maps to [`DxfCode::Invalid`] and is skipped by readers.

/// DXF group codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum DxfCode {
    /// Any code without a named meaning here
    Invalid = -9999,

    // ===== 0-9: String values =====
    /// Record boundary; the value names the record kind
    Start = 0,
    /// Primary text value
    Text = 1,
    LinetypeName = 6,
    LayerName = 8,

    // ===== 40-59: Floating-point values =====
    Real43 = 43,
    Real44 = 44,
    Real45 = 45,
    Real46 = 46,
    Real49 = 49,
    Angle53 = 53,

    // ===== 60-79: 16-bit integer values =====
    Color = 62,
    Int78 = 78,
    Int79 = 79,

    // ===== 90-99: 32-bit integer values =====
    Int90 = 90,
    Int91 = 91,
    Int92 = 92,

    // ===== 290-299: Boolean values =====
    Bool290 = 290,

    // ===== 300-309: Arbitrary text strings =====
    Text301 = 301,
    Text302 = 302,

    // ===== 370-379: Lineweight =====
    Lineweight = 370,

    // ===== 440-449: Transparency =====
    Transparency = 440,
}

impl DxfCode {
    /// Convert i32 to DxfCode
    pub fn from_i32(code: i32) -> Self {
        match code {
            0 => DxfCode::Start,
            1 => DxfCode::Text,
            6 => DxfCode::LinetypeName,
            8 => DxfCode::LayerName,
            43 => DxfCode::Real43,
            44 => DxfCode::Real44,
            45 => DxfCode::Real45,
            46 => DxfCode::Real46,
            49 => DxfCode::Real49,
            53 => DxfCode::Angle53,
            62 => DxfCode::Color,
            78 => DxfCode::Int78,
            79 => DxfCode::Int79,
            90 => DxfCode::Int90,
            91 => DxfCode::Int91,
            92 => DxfCode::Int92,
            290 => DxfCode::Bool290,
            301 => DxfCode::Text301,
            302 => DxfCode::Text302,
            370 => DxfCode::Lineweight,
            440 => DxfCode::Transparency,
            _ => DxfCode::Invalid,
        }
    }

    /// Convert DxfCode to i32
    pub fn to_i32(self) -> i32 {
        self as i32
    }
}

impl From<DxfCode> for i32 {
    fn from(code: DxfCode) -> Self {
        code.to_i32()
    }
}
