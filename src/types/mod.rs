//! Value types shared by the record model and the pattern extractor

pub mod color;
pub mod line_weight;
pub mod transparency;
pub mod vector;

pub use color::Color;
pub use line_weight::LineWeight;
pub use transparency::Transparency;
pub use vector::Vector2;
