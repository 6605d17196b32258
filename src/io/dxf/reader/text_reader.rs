//! DXF ASCII text reader

use super::stream_reader::{DxfCodePair, DxfStreamReader};
use crate::error::{DxfError, Result};
use encoding_rs::{Encoding, UTF_8};
use std::io::{BufRead, Cursor};

/// Where lines are pulled from: the caller's stream, or a UTF-8 copy of it
/// when a UTF-16 byte-order mark forced a full decode.
enum LineSource<R> {
    Raw(R),
    Decoded(Cursor<Vec<u8>>),
}

impl<R: BufRead> LineSource<R> {
    fn as_buf_read(&mut self) -> &mut dyn BufRead {
        match self {
            LineSource::Raw(r) => r,
            LineSource::Decoded(c) => c,
        }
    }
}

/// DXF ASCII text stream reader
///
/// Each pair spans two physical lines: the group code, then the value.
/// Code lines are trimmed, so right-aligned codes are accepted. Value lines
/// only lose their `\n` or `\r\n` terminator; surrounding spaces are data.
pub struct DxfTextReader<R: BufRead> {
    source: LineSource<R>,
    bom_checked: bool,
    line_number: usize,
    peeked_pair: Option<DxfCodePair>,
    /// Non-UTF8 fallback encoding.  `None` means use Latin-1 (byte-to-char).
    encoding: Option<&'static Encoding>,
}

impl<R: BufRead> DxfTextReader<R> {
    /// Create a new DXF text reader
    pub fn new(reader: R) -> Self {
        Self {
            source: LineSource::Raw(reader),
            bom_checked: false,
            line_number: 0,
            peeked_pair: None,
            encoding: None,
        }
    }

    /// Decode non-UTF8 lines with `encoding` instead of Latin-1
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Strip a byte-order mark; a UTF-16 stream is decoded up front.
    fn check_bom(&mut self) -> Result<()> {
        if self.bom_checked {
            return Ok(());
        }
        self.bom_checked = true;

        let LineSource::Raw(reader) = &mut self.source else {
            return Ok(());
        };
        let Some((encoding, bom_length)) = Encoding::for_bom(reader.fill_buf()?) else {
            return Ok(());
        };

        if encoding == UTF_8 {
            reader.consume(bom_length);
        } else {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes)?;
            let (decoded, _, had_errors) = encoding.decode(&bytes);
            if had_errors {
                tracing::warn!("malformed {} sequences replaced while decoding", encoding.name());
            }
            self.source = LineSource::Decoded(Cursor::new(decoded.into_owned().into_bytes()));
        }
        Ok(())
    }

    /// Read a single line without its terminator, handling non-UTF8 bytes
    /// gracefully. Uses the configured encoding for fallback, or Latin-1 if none set.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.check_bom()?;

        let mut bytes = Vec::new();
        if self.source.as_buf_read().read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }

        let line = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(err) => {
                let bytes = err.into_bytes();
                match self.encoding {
                    Some(enc) => enc.decode(&bytes).0.into_owned(),
                    // Latin-1 is a 1:1 mapping of bytes 0-255 to Unicode code points
                    None => bytes.iter().map(|&b| b as char).collect(),
                }
            }
        };

        Ok(Some(line))
    }

    /// Read a code/value pair from the stream
    fn read_pair_internal(&mut self) -> Result<Option<DxfCodePair>> {
        let code_line = match self.read_line()? {
            Some(line) => line.trim().to_string(),
            None => return Ok(None),
        };

        // Blank lines are only tolerated as trailing padding
        if code_line.is_empty() {
            let blank_at = self.line_number;
            loop {
                match self.read_line()? {
                    None => return Ok(None),
                    Some(line) if line.trim().is_empty() => continue,
                    Some(line) => {
                        return Err(DxfError::Parse(format!(
                            "Empty DXF code at line {} followed by '{}'",
                            blank_at,
                            line.trim()
                        )))
                    }
                }
            }
        }

        let code = code_line.parse::<i32>().map_err(|_| {
            DxfError::Parse(format!(
                "Invalid DXF code at line {}: '{}'",
                self.line_number, code_line
            ))
        })?;

        let value_line = match self.read_line()? {
            Some(line) => line,
            None => {
                return Err(DxfError::UnexpectedEof(format!(
                    "value of code {} after line {}",
                    code, self.line_number
                )))
            }
        };

        Ok(Some(DxfCodePair::new(code, unescape(&value_line))))
    }
}

/// Decode caret escapes in string values
pub(crate) fn unescape(value: &str) -> String {
    if !value.contains('^') {
        return value.to_string();
    }
    value
        .replace("^J", "\n")
        .replace("^M", "\r")
        .replace("^I", "\t")
        .replace("^ ", "^")
}

impl<R: BufRead> DxfStreamReader for DxfTextReader<R> {
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>> {
        if let Some(pair) = self.peeked_pair.take() {
            return Ok(Some(pair));
        }

        self.read_pair_internal()
    }

    fn peek_code(&mut self) -> Result<Option<i32>> {
        if let Some(ref pair) = self.peeked_pair {
            return Ok(Some(pair.code));
        }

        if let Some(pair) = self.read_pair_internal()? {
            let code = pair.code;
            self.peeked_pair = Some(pair);
            Ok(Some(code))
        } else {
            Ok(None)
        }
    }

    fn line_number(&self) -> usize {
        self.line_number
    }
}
