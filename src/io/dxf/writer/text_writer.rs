//! ASCII DXF writer

use super::stream_writer::DxfStreamWriter;
use crate::error::Result;
use crate::io::dxf::group_code_value::format_double;
use std::io::Write;

/// ASCII DXF stream writer
pub struct DxfTextWriter<W: Write> {
    writer: W,
}

impl<W: Write> DxfTextWriter<W> {
    /// Create a new ASCII DXF writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a DXF code with proper formatting (right-aligned in 3-character field)
    fn write_code(&mut self, code: i32) -> Result<()> {
        writeln!(self.writer, "{:>3}", code)?;
        Ok(())
    }

    fn write_line(&mut self, code: i32, value: &str) -> Result<()> {
        self.write_code(code)?;
        writeln!(self.writer, "{}", value)?;
        Ok(())
    }
}

/// Encode characters that would break the line structure as caret escapes
pub(crate) fn escape(value: &str) -> String {
    if !value.contains(|c| matches!(c, '^' | '\n' | '\r' | '\t')) {
        return value.to_string();
    }
    let mut out = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        match c {
            '^' => out.push_str("^ "),
            '\n' => out.push_str("^J"),
            '\r' => out.push_str("^M"),
            '\t' => out.push_str("^I"),
            c => out.push(c),
        }
    }
    out
}

impl<W: Write> DxfStreamWriter for DxfTextWriter<W> {
    fn write_string(&mut self, code: i32, value: &str) -> Result<()> {
        let escaped = escape(value);
        self.write_line(code, &escaped)
    }

    fn write_i16(&mut self, code: i32, value: i16) -> Result<()> {
        self.write_line(code, &value.to_string())
    }

    fn write_i32(&mut self, code: i32, value: i32) -> Result<()> {
        self.write_line(code, &value.to_string())
    }

    fn write_i64(&mut self, code: i32, value: i64) -> Result<()> {
        self.write_line(code, &value.to_string())
    }

    fn write_double(&mut self, code: i32, value: f64) -> Result<()> {
        self.write_line(code, &format_double(value))
    }

    fn write_bool(&mut self, code: i32, value: bool) -> Result<()> {
        self.write_line(code, if value { "1" } else { "0" })
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::stream_writer::DxfStreamWriterExt;
    use super::*;
    use crate::io::dxf::reader::unescape;
    use crate::types::Color;

    fn written(f: impl FnOnce(&mut DxfTextWriter<&mut Vec<u8>>)) -> String {
        let mut buf = Vec::new();
        {
            let mut writer = DxfTextWriter::new(&mut buf);
            f(&mut writer);
            writer.flush().unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_string() {
        let output = written(|w| w.write_string(0, "LAYERSTATE").unwrap());
        assert_eq!(output, "  0\nLAYERSTATE\n");
    }

    #[test]
    fn test_write_code_formatting() {
        let output = written(|w| {
            w.write_i16(8, 1).unwrap();
            w.write_i16(62, 7).unwrap();
            w.write_i16(370, -3).unwrap();
        });
        assert_eq!(output, "  8\n1\n 62\n7\n370\n-3\n");
    }

    #[test]
    fn test_write_generic_values() {
        let output = written(|w| {
            w.write(290, true).unwrap();
            w.write(91, 2047).unwrap();
            w.write(43, 2.0).unwrap();
            w.write(302, "0").unwrap();
        });
        assert_eq!(output, "290\n1\n 91\n2047\n 43\n2.0\n302\n0\n");
    }

    #[test]
    fn test_write_color() {
        let output = written(|w| {
            w.write_color_index(62, Color::RED).unwrap();
            assert!(!w.write_true_color(92, Color::RED).unwrap());
        });
        assert_eq!(output, " 62\n1\n");

        let blue = Color::from_rgb(0, 0, 255);
        let output = written(|w| {
            w.write_color_index(62, blue).unwrap();
            assert!(w.write_true_color(92, blue).unwrap());
        });
        assert_eq!(output, format!(" 62\n5\n 92\n{}\n", 0xC20000FFu32 as i32));
    }

    #[test]
    fn test_escape_round_trip() {
        let text = "first line\nsecond^line\tend";
        let escaped = escape(text);
        assert!(!escaped.contains('\n'));
        assert_eq!(unescape(&escaped), text);
    }
}
