//! DXF record stream reading
//!
//! [`DxfTextReader`] splits text into code/value pairs; [`CodeValueReader`]
//! is the cursor consumers drive: it holds one current pair and only moves
//! when asked to.

mod stream_reader;
mod text_reader;

pub use stream_reader::{DxfCodePair, DxfStreamReader};
pub use text_reader::DxfTextReader;
#[cfg(test)]
pub(crate) use text_reader::unescape;

use crate::error::{DxfError, Result};
use std::io::BufRead;

/// Cursor over a code/value pair stream
///
/// Starts positioned before the first pair; call [`advance`](Self::advance)
/// to load it. Accessors read the current pair without moving. Once the
/// stream is exhausted there is no current pair and typed readers return
/// [`DxfError::UnexpectedEof`].
pub struct CodeValueReader<S: DxfStreamReader> {
    stream: S,
    current: Option<DxfCodePair>,
}

impl<R: BufRead> CodeValueReader<DxfTextReader<R>> {
    /// Create a cursor over an ASCII record stream
    pub fn from_text(reader: R) -> Self {
        Self::new(DxfTextReader::new(reader))
    }
}

impl<S: DxfStreamReader> CodeValueReader<S> {
    /// Wrap a pair stream
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            current: None,
        }
    }

    /// Move to the next pair. Returns `false` once the stream is exhausted.
    pub fn advance(&mut self) -> Result<bool> {
        self.current = self.stream.read_pair()?;
        Ok(self.current.is_some())
    }

    /// Check whether the stream is exhausted
    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// Code of the current pair
    pub fn code(&self) -> Option<i32> {
        self.current.as_ref().map(|p| p.code)
    }

    /// The current pair
    pub fn current(&self) -> Option<&DxfCodePair> {
        self.current.as_ref()
    }

    /// Peek at the code after the current pair without moving
    pub fn peek_code(&mut self) -> Result<Option<i32>> {
        self.stream.peek_code()
    }

    /// Number of physical lines consumed so far
    pub fn line_number(&self) -> usize {
        self.stream.line_number()
    }

    fn pair(&self) -> Result<&DxfCodePair> {
        self.current.as_ref().ok_or_else(|| {
            DxfError::UnexpectedEof(format!("value expected after line {}", self.line_number()))
        })
    }

    /// Raw value of the current pair
    pub fn value(&self) -> Result<&str> {
        Ok(self.pair()?.as_string())
    }

    /// Current value as a string
    pub fn read_string(&self) -> Result<String> {
        self.value().map(str::to_string)
    }

    /// Current value as a boolean
    pub fn read_bool(&self) -> Result<bool> {
        let pair = self.pair()?;
        pair.as_bool().ok_or_else(|| invalid(pair, "bool"))
    }

    /// Current value as a 32-bit integer
    pub fn read_int(&self) -> Result<i32> {
        let pair = self.pair()?;
        pair.as_i32().ok_or_else(|| invalid(pair, "i32"))
    }

    /// Current value as a 16-bit integer
    pub fn read_short(&self) -> Result<i16> {
        let pair = self.pair()?;
        pair.as_i16().ok_or_else(|| invalid(pair, "i16"))
    }

    /// Current value as a double
    pub fn read_double(&self) -> Result<f64> {
        let pair = self.pair()?;
        pair.as_double().ok_or_else(|| invalid(pair, "double"))
    }

    /// Require the current pair to carry `code` and return its value.
    ///
    /// End of stream is reported as [`DxfError::UnexpectedEof`], any other
    /// code as [`DxfError::MissingMarker`].
    pub fn expect_code(&self, code: i32) -> Result<&str> {
        match self.current.as_ref() {
            Some(pair) if pair.code == code => Ok(pair.as_string()),
            Some(pair) => Err(DxfError::MissingMarker {
                expected: code,
                found: Some(pair.code),
            }),
            None => Err(DxfError::UnexpectedEof(format!("{} expected", code))),
        }
    }
}

fn invalid(pair: &DxfCodePair, expected: &'static str) -> DxfError {
    DxfError::InvalidValue {
        code: pair.code,
        value: pair.value_string.clone(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn cursor(data: &str) -> CodeValueReader<DxfTextReader<Cursor<Vec<u8>>>> {
        CodeValueReader::from_text(Cursor::new(data.as_bytes().to_vec()))
    }

    #[test]
    fn test_starts_before_first_pair() {
        let mut chunk = cursor("0\nLAYERSTATE\n");
        assert!(chunk.is_eof());
        assert_eq!(chunk.code(), None);

        assert!(chunk.advance().unwrap());
        assert_eq!(chunk.code(), Some(0));
        assert_eq!(chunk.read_string().unwrap(), "LAYERSTATE");

        assert!(!chunk.advance().unwrap());
        assert!(chunk.is_eof());
    }

    #[test]
    fn test_typed_readers() {
        let mut chunk = cursor("290\n1\n90\n-7\n62\n12\n43\n0.5\n");
        chunk.advance().unwrap();
        assert!(chunk.read_bool().unwrap());
        chunk.advance().unwrap();
        assert_eq!(chunk.read_int().unwrap(), -7);
        chunk.advance().unwrap();
        assert_eq!(chunk.read_short().unwrap(), 12);
        chunk.advance().unwrap();
        assert_eq!(chunk.read_double().unwrap(), 0.5);
    }

    #[test]
    fn test_accessors_do_not_advance() {
        let mut chunk = cursor("62\n3\n8\nWALLS\n");
        chunk.advance().unwrap();
        assert_eq!(chunk.read_short().unwrap(), 3);
        assert_eq!(chunk.read_int().unwrap(), 3);
        assert_eq!(chunk.code(), Some(62));
        assert_eq!(chunk.peek_code().unwrap(), Some(8));
        assert_eq!(chunk.code(), Some(62));
    }

    #[test]
    fn test_conversion_failure_is_format_error() {
        let mut chunk = cursor("62\nred\n");
        chunk.advance().unwrap();
        let err = chunk.read_short().unwrap_err();
        assert!(matches!(err, DxfError::InvalidValue { code: 62, .. }));
        assert!(err.is_format_error());
    }

    #[test]
    fn test_read_past_end() {
        let mut chunk = cursor("");
        assert!(!chunk.advance().unwrap());
        assert!(matches!(chunk.read_string(), Err(DxfError::UnexpectedEof(_))));
    }

    #[test]
    fn test_expect_code() {
        let mut chunk = cursor("53\n90\n");
        chunk.advance().unwrap();
        assert_eq!(chunk.expect_code(53).unwrap(), "90");
        assert!(matches!(
            chunk.expect_code(43),
            Err(DxfError::MissingMarker { expected: 43, found: Some(53) })
        ));
        chunk.advance().unwrap();
        assert!(matches!(chunk.expect_code(43), Err(DxfError::UnexpectedEof(_))));
    }
}
