//! Layer state file writer

use super::{LAYER_STATE, LAYER_STATE_DICTIONARY, RESERVED_FLAGS};
use crate::error::Result;
use crate::io::dxf::{DxfCode, DxfStreamWriter, DxfStreamWriterExt, DxfTextWriter};
use crate::objects::{LayerState, LayerStateProperty};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes one [`LayerState`] as a group-code stream
pub struct LasWriter<'a> {
    state: &'a LayerState,
}

impl<'a> LasWriter<'a> {
    /// Create a writer for a layer state
    pub fn new(state: &'a LayerState) -> Self {
        Self { state }
    }

    /// Write to a file, creating or truncating it
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to_writer(BufWriter::new(file))
    }

    /// Write to a byte buffer
    pub fn write_to_vec(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to_writer(&mut buffer)?;
        Ok(buffer)
    }

    /// Write to any writer. Everything is flushed before returning.
    pub fn write_to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = DxfTextWriter::new(writer);
        let state = self.state;

        writer.write_boundary(LAYER_STATE_DICTIONARY)?;
        writer.write_boundary(LAYER_STATE)?;
        writer.write(DxfCode::Text.to_i32(), state.name())?;
        writer.write(DxfCode::Int91.to_i32(), RESERVED_FLAGS)?;
        writer.write(DxfCode::Text301.to_i32(), &state.description)?;
        writer.write(DxfCode::Bool290.to_i32(), state.paper_space)?;
        writer.write(DxfCode::Text302.to_i32(), state.current_layer())?;

        for property in state.properties() {
            write_property(&mut writer, property)?;
        }

        writer.flush()?;
        tracing::debug!(
            state = state.name(),
            properties = state.properties().len(),
            "layer state written"
        );
        Ok(())
    }
}

fn write_property<W: DxfStreamWriter>(writer: &mut W, property: &LayerStateProperty) -> Result<()> {
    writer.write(DxfCode::LayerName.to_i32(), property.name())?;
    writer.write(DxfCode::Int90.to_i32(), property.flags.bits())?;
    writer.write_color_index(DxfCode::Color.to_i32(), property.color)?;
    writer.write(DxfCode::Lineweight.to_i32(), property.line_weight.value())?;
    writer.write(DxfCode::LinetypeName.to_i32(), property.linetype_name.as_str())?;
    writer.write(DxfCode::Transparency.to_i32(), property.transparency.to_alpha_value())?;
    writer.write_true_color(DxfCode::Int92.to_i32(), property.color)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::las::LasReader;
    use crate::types::{Color, Transparency};
    use std::io::Cursor;

    fn written(state: &LayerState) -> String {
        String::from_utf8(LasWriter::new(state).write_to_vec().unwrap()).unwrap()
    }

    #[test]
    fn test_write_header() {
        let mut state = LayerState::new("Plan");
        state.description = "ground floor".to_string();
        let output = written(&state);
        assert_eq!(
            output,
            "  0\nLAYERSTATEDICTIONARY\n  0\nLAYERSTATE\n  1\nPlan\n 91\n2047\n\
             301\nground floor\n290\n0\n302\n0\n"
        );
    }

    #[test]
    fn test_write_property_order() {
        let mut state = LayerState::with_layer_names("Plan", ["Walls"]);
        state.properties_mut().get_mut("Walls").unwrap().transparency = Transparency::new(64);
        let output = written(&state);
        assert!(output.ends_with("  8\nWalls\n 90\n8\n 62\n7\n370\n-3\n  6\nContinuous\n440\n33554623\n"));
    }

    #[test]
    fn test_true_color_chunk_only_for_true_colors() {
        let mut state = LayerState::with_layer_names("Plan", ["A", "B"]);
        state.properties_mut().get_mut("B").unwrap().color = Color::from_rgb(255, 0, 0);
        let output = written(&state);

        let packed = 0xC2FF_0000u32 as i32;
        assert_eq!(output.matches(" 92\n").count(), 1);
        assert!(output.ends_with(&format!("440\n0\n 92\n{}\n", packed)));
    }

    #[test]
    fn test_write_then_read() {
        let mut state = LayerState::with_layer_names("Plan", ["0", "Walls"]);
        state.paper_space = true;
        state.set_current_layer("Walls").unwrap();

        let bytes = LasWriter::new(&state).write_to_vec().unwrap();
        let read = LasReader::from_reader(Cursor::new(bytes)).read().unwrap();
        assert_eq!(read, state);
    }
}
