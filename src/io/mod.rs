//! I/O for group-code streams: the shared codec, layer state files and
//! hatch pattern extraction

pub mod dxf;
pub mod las;
pub mod pat;

pub use las::{LasReader, LasWriter};
pub use pat::{PatFetchConfiguration, PatFetcher};
