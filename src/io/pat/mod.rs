//! Hatch pattern extraction into `.pat` text
//!
//! A hatch pattern definition is located in a drawing's group-code stream by
//! name, its line families are read field by field and re-emitted in the
//! simpler comma separated `.pat` format:
//!
//! ```text
//! *NAME, description
//! angle, base x, base y, shift, offset, dash...
//! ```

use crate::entities::{HatchPattern, HatchPatternLine};
use crate::error::{DxfError, Result};
use crate::io::dxf::{CodeValueReader, DxfCode, DxfStreamReader};
use crate::types::Vector2;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Output settings for [`PatFetcher`]
#[derive(Debug, Clone, PartialEq)]
pub struct PatFetchConfiguration {
    /// Text after the pattern name in the header line
    pub description: String,
    /// Decimal places of every numeric field
    pub precision: usize,
}

impl Default for PatFetchConfiguration {
    fn default() -> Self {
        Self {
            description: "description placeholder".to_string(),
            precision: 3,
        }
    }
}

/// Extracts a hatch pattern from a drawing stream
#[derive(Debug, Clone, Default)]
pub struct PatFetcher {
    config: PatFetchConfiguration,
}

impl PatFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output configuration.
    pub fn with_configuration(mut self, config: PatFetchConfiguration) -> Self {
        self.config = config;
        self
    }

    pub fn configuration(&self) -> &PatFetchConfiguration {
        &self.config
    }

    /// Read the hatch pattern named `dxf_name`.
    ///
    /// The first pair whose trimmed value equals `dxf_name` marks the
    /// definition; its line count is taken from the next code 78. Each line
    /// then has to be exactly 53, 43, 44, 45, 46, 79 and as many 49 pairs as
    /// the 79 value says.
    pub fn read_pattern<R: BufRead>(&self, reader: R, dxf_name: &str) -> Result<HatchPattern> {
        let mut chunks = CodeValueReader::from_text(reader);

        loop {
            if !chunks.advance()? {
                return Err(DxfError::PatternNotFound(dxf_name.to_string()));
            }
            if chunks.value()?.trim() == dxf_name {
                break;
            }
        }

        let line_count_code = DxfCode::Int78.to_i32();
        loop {
            if !chunks.advance()? {
                return Err(DxfError::UnexpectedEof(format!("{} expected", line_count_code)));
            }
            if chunks.code() == Some(line_count_code) {
                break;
            }
        }
        let line_count = read_count(&chunks)?;

        let mut pattern = HatchPattern::new(dxf_name);
        pattern.description = self.config.description.clone();
        for _ in 0..line_count {
            pattern.add_line(read_line(&mut chunks)?);
        }

        tracing::debug!(
            pattern = dxf_name,
            lines = pattern.lines.len(),
            "hatch pattern read"
        );
        Ok(pattern)
    }

    /// Extract `dxf_name` and return it as `.pat` text named `pat_name`.
    /// Every line, the header included, ends with a newline.
    pub fn fetch_pat<R: BufRead>(&self, reader: R, dxf_name: &str, pat_name: &str) -> Result<String> {
        let pattern = self.renamed(reader, dxf_name, pat_name)?;
        let mut text = String::new();
        for line in pattern.to_pat_lines(self.config.precision) {
            text.push_str(&line);
            text.push('\n');
        }
        Ok(text)
    }

    /// Extract `dxf_name` and write it as `.pat` text named `pat_name`.
    ///
    /// Nothing is written unless the whole pattern was read.
    pub fn write_pat<R: BufRead, W: Write>(
        &self,
        reader: R,
        mut writer: W,
        dxf_name: &str,
        pat_name: &str,
    ) -> Result<()> {
        let pattern = self.renamed(reader, dxf_name, pat_name)?;
        for line in pattern.to_pat_lines(self.config.precision) {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// File to file extraction. The output file is only created once the
    /// pattern has been read; both files are closed on every path.
    pub fn fetch_pat_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        dxf_path: P,
        pat_path: Q,
        dxf_name: &str,
        pat_name: &str,
    ) -> Result<()> {
        let dxf_path = dxf_path.as_ref();
        let pat_path = pat_path.as_ref();

        let source = BufReader::new(File::open(dxf_path)?);
        let pattern = self.renamed(source, dxf_name, pat_name)?;

        let mut writer = BufWriter::new(File::create(pat_path)?);
        for line in pattern.to_pat_lines(self.config.precision) {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;

        tracing::info!(
            source = %dxf_path.display(),
            target = %pat_path.display(),
            pattern = dxf_name,
            lines = pattern.lines.len(),
            "hatch pattern extracted"
        );
        Ok(())
    }

    fn renamed<R: BufRead>(&self, reader: R, dxf_name: &str, pat_name: &str) -> Result<HatchPattern> {
        let mut pattern = self.read_pattern(reader, dxf_name)?;
        pattern.name = pat_name.to_string();
        Ok(pattern)
    }
}

fn read_count<S: DxfStreamReader>(chunks: &CodeValueReader<S>) -> Result<usize> {
    let value = chunks.read_int()?;
    usize::try_from(value).map_err(|_| DxfError::InvalidValue {
        code: chunks.code().unwrap_or_default(),
        value: value.to_string(),
        expected: "non-negative count",
    })
}

/// Move to the next pair, require `code` and return its value as a count
fn next_count<S: DxfStreamReader>(chunks: &mut CodeValueReader<S>, code: DxfCode) -> Result<usize> {
    expect_next(chunks, code)?;
    read_count(chunks)
}

/// Move to the next pair, require `code` and return its value as a double
fn next_real<S: DxfStreamReader>(chunks: &mut CodeValueReader<S>, code: DxfCode) -> Result<f64> {
    expect_next(chunks, code)?;
    chunks.read_double()
}

fn expect_next<S: DxfStreamReader>(chunks: &mut CodeValueReader<S>, code: DxfCode) -> Result<()> {
    chunks.advance()?;
    chunks.expect_code(code.to_i32())?;
    Ok(())
}

fn read_line<S: DxfStreamReader>(chunks: &mut CodeValueReader<S>) -> Result<HatchPatternLine> {
    let angle = next_real(chunks, DxfCode::Angle53)?;
    let base_x = next_real(chunks, DxfCode::Real43)?;
    let base_y = next_real(chunks, DxfCode::Real44)?;
    let offset_x = next_real(chunks, DxfCode::Real45)?;
    let offset_y = next_real(chunks, DxfCode::Real46)?;

    let dash_count = next_count(chunks, DxfCode::Int79)?;
    let dash_lengths = (0..dash_count)
        .map(|_| next_real(chunks, DxfCode::Real49))
        .collect::<Result<Vec<_>>>()?;

    Ok(HatchPatternLine {
        angle,
        base_point: Vector2::new(base_x, base_y),
        offset: Vector2::new(offset_x, offset_y),
        dash_lengths,
    })
}
