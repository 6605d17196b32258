//! Layer state file reader

use super::{LAYER_STATE, LAYER_STATE_DICTIONARY};
use crate::error::{DxfError, Result};
use crate::io::dxf::{CodeValueReader, DxfCode, DxfTextReader};
use crate::objects::{LayerPropertiesFlags, LayerState, LayerStateProperty};
use crate::types::{Color, LineWeight, Transparency};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads one [`LayerState`] from a group-code stream
pub struct LasReader<R: BufRead> {
    chunks: CodeValueReader<DxfTextReader<R>>,
}

impl<R: BufRead> LasReader<R> {
    /// Create a reader over any buffered source
    pub fn from_reader(reader: R) -> Self {
        Self::from_text_reader(DxfTextReader::new(reader))
    }

    /// Create a reader over a configured text reader (e.g. a fallback encoding)
    pub fn from_text_reader(reader: DxfTextReader<R>) -> Self {
        Self {
            chunks: CodeValueReader::new(reader),
        }
    }

    /// Read the layer state record.
    ///
    /// Properties repeating an earlier layer name are dropped; the first
    /// occurrence wins. Properties without a layer name are skipped.
    pub fn read(mut self) -> Result<LayerState> {
        self.expect_boundary(LAYER_STATE_DICTIONARY)?;
        self.expect_boundary(LAYER_STATE)?;
        self.chunks.advance()?;

        let mut name = None;
        let mut description = String::new();
        let mut current_layer = None;
        let mut paper_space = false;
        let mut properties = Vec::new();

        while let Some(code) = self.chunks.code() {
            match DxfCode::from_i32(code) {
                DxfCode::Start => break,
                DxfCode::Text => name = Some(self.chunks.read_string()?),
                DxfCode::Text301 => description = self.chunks.read_string()?,
                DxfCode::Bool290 => paper_space = self.chunks.read_bool()?,
                DxfCode::Text302 => current_layer = Some(self.chunks.read_string()?),
                DxfCode::LayerName => {
                    properties.push(self.read_property()?);
                    // The property reader stops on the next sub-record boundary
                    continue;
                }
                // 91 is reserved; everything unknown is skipped as well
                _ => {}
            }
            self.chunks.advance()?;
        }

        let name = name.ok_or_else(|| DxfError::InvalidFormat("layer state has no name".to_string()))?;
        if name.is_empty() {
            return Err(DxfError::InvalidName(name));
        }

        let mut state = LayerState::new(name);
        state.description = description;
        state.paper_space = paper_space;
        if let Some(layer) = current_layer.filter(|l| !l.is_empty()) {
            state.set_current_layer(layer)?;
        }

        for property in properties {
            if property.name().is_empty() {
                tracing::debug!(state = state.name(), "skipping layer state property without a layer name");
                continue;
            }
            let layer = property.name().to_string();
            if !state.add_property(property) {
                tracing::debug!(state = state.name(), layer = %layer, "dropping duplicate layer state property");
            }
        }

        tracing::debug!(
            state = state.name(),
            properties = state.properties().len(),
            lines = self.chunks.line_number(),
            "layer state read"
        );
        Ok(state)
    }

    fn expect_boundary(&mut self, record_kind: &str) -> Result<()> {
        if !self.chunks.advance()? {
            return Err(DxfError::UnexpectedEof(format!("{} boundary expected", record_kind)));
        }
        let value = self.chunks.expect_code(DxfCode::Start.to_i32())?;
        if value.trim() != record_kind {
            return Err(DxfError::InvalidFormat(format!(
                "expected {} record, found {}",
                record_kind, value
            )));
        }
        Ok(())
    }

    /// Read a property sub-record. The cursor is on its code 8 pair and is
    /// left on the pair that ended it.
    fn read_property(&mut self) -> Result<LayerStateProperty> {
        let mut property = LayerStateProperty::new(self.chunks.read_string()?);
        let mut true_color = None;

        while self.chunks.advance()? {
            let Some(code) = self.chunks.code() else { break };
            match DxfCode::from_i32(code) {
                DxfCode::Start | DxfCode::LayerName => break,
                DxfCode::Int90 => {
                    property.flags = LayerPropertiesFlags::from_bits_retain(self.chunks.read_int()?);
                }
                DxfCode::Color => property.color = Color::from_index(self.chunks.read_short()?),
                DxfCode::Lineweight => {
                    property.line_weight = LineWeight::from_value(self.chunks.read_short()?);
                }
                DxfCode::LinetypeName => property.linetype_name = self.chunks.read_string()?,
                DxfCode::Transparency => {
                    property.transparency = Transparency::from_alpha_value(self.chunks.read_int()?);
                }
                DxfCode::Int92 => true_color = Some(Color::from_true_color(self.chunks.read_int()?)),
                // Plot style name (2) is not kept
                _ => {}
            }
        }

        if let Some(color) = true_color {
            property.color = color;
        }
        Ok(property)
    }
}

impl LasReader<BufReader<File>> {
    /// Create a reader over a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}
