//! Line type table entry

use super::TableEntry;

/// Name of the line type layers fall back to
pub const CONTINUOUS: &str = "Continuous";

/// A line type table entry
///
/// Layer states only refer to line types by name.
#[derive(Debug, Clone)]
pub struct LineType {
    /// Line type name
    pub name: String,
    /// Description
    pub description: String,
}

impl LineType {
    /// Create a new line type
    pub fn new(name: impl Into<String>) -> Self {
        LineType {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Create the standard "Continuous" line type
    pub fn continuous() -> Self {
        LineType {
            description: "Solid line".to_string(),
            ..Self::new(CONTINUOUS)
        }
    }

    /// Create a dashed line type
    pub fn dashed() -> Self {
        let mut lt = LineType::new("Dashed");
        lt.description = "__ __ __ __ __ __".to_string();
        lt
    }
}

impl TableEntry for LineType {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_standard(&self) -> bool {
        matches!(self.name.as_str(), CONTINUOUS | "ByLayer" | "ByBlock")
    }
}
